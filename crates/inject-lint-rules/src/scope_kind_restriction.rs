//! Rule restricting scopes to types and methods.

use inject_lint_core::{
    Diagnostic, Element, ElementKind, MarkerKind, Rule, RuleContext, Severity,
};

/// Rule code for scope-kind-restriction.
pub const CODE: &str = "ScopeOnInvalidElement";

/// Rule name for scope-kind-restriction.
pub const NAME: &str = "scope-kind-restriction";

/// Forbids scope markers on fields, constructors and parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeKindRestriction;

impl ScopeKindRestriction {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ScopeKindRestriction {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Allows scoping annotations only on concrete types and methods"
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        matches!(
            kind,
            ElementKind::Field | ElementKind::Constructor | ElementKind::Parameter
        )
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        let name = ctx.tree.display_name(element.id);
        element
            .markers_of(MarkerKind::Scope)
            .map(|marker| {
                ctx.diagnostic(
                    self,
                    Severity::Error,
                    element.id,
                    format!(
                        "Scoping annotations are only allowed on concrete types and methods: \
                         {name}"
                    ),
                )
                .with_help(format!("Remove {marker} from this {}", element.kind))
            })
            .collect()
    }
}
