//! Rule forbidding scopes on abstract types and interfaces.

use inject_lint_core::{
    Diagnostic, Element, ElementKind, MarkerKind, Rule, RuleContext, Severity,
};

/// Rule code for scope-on-abstract-type.
pub const CODE: &str = "ScopeOnAbstractType";

/// Rule name for scope-on-abstract-type.
pub const NAME: &str = "scope-on-abstract-type";

/// Forbids scope markers on abstract types and interfaces, one error per
/// marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeOnAbstractType;

impl ScopeOnAbstractType {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ScopeOnAbstractType {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids scoping annotations on abstract types and interfaces"
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        kind == ElementKind::Type
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        if !element.is_abstract() {
            return Vec::new();
        }
        let name = ctx.tree.display_name(element.id);

        element
            .markers_of(MarkerKind::Scope)
            .map(|marker| {
                ctx.diagnostic(
                    self,
                    Severity::Error,
                    element.id,
                    format!(
                        "Scoping annotations cannot be placed on abstract types or \
                         interfaces: {name}"
                    ),
                )
                .with_help(format!("Move {marker} to the concrete implementation"))
            })
            .collect()
    }
}
