//! Rule allowing at most one scope per method or concrete type.

use inject_lint_core::{Diagnostic, Element, ElementKind, Rule, RuleContext, Severity};

/// Rule code for scope-cardinality.
pub const CODE: &str = "MoreThanOneScopeAnnotation";

/// Rule name for scope-cardinality.
pub const NAME: &str = "scope-cardinality";

/// Forbids more than one scope marker on a method or concrete type.
///
/// Scopes on abstract types and on other element kinds are misplaced rather
/// than counted; see [`ScopeOnAbstractType`](crate::ScopeOnAbstractType) and
/// [`ScopeKindRestriction`](crate::ScopeKindRestriction).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeCardinality;

impl ScopeCardinality {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ScopeCardinality {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Allows at most one scoping annotation per element"
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        matches!(kind, ElementKind::Type | ElementKind::Method)
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        if element.kind == ElementKind::Type && element.is_abstract() {
            return Vec::new();
        }
        let count = ctx.classification(element.id).scope_count();
        if count <= 1 {
            return Vec::new();
        }

        vec![ctx
            .diagnostic(
                self,
                Severity::Error,
                element.id,
                format!(
                    "Only one scoping annotation is allowed per element: {}",
                    ctx.tree.display_name(element.id)
                ),
            )
            .with_help(format!("Found {count} scoping annotations; keep one"))]
    }
}
