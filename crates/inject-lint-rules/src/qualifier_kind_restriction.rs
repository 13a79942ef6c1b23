//! Rule restricting qualifiers to fields, methods and parameters.

use inject_lint_core::{
    Diagnostic, Element, ElementKind, MarkerKind, Rule, RuleContext, Severity,
};

/// Rule code for qualifier-kind-restriction.
pub const CODE: &str = "QualifierOnInvalidElement";

/// Rule name for qualifier-kind-restriction.
pub const NAME: &str = "qualifier-kind-restriction";

/// Forbids qualifier markers on types and constructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifierKindRestriction;

impl QualifierKindRestriction {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for QualifierKindRestriction {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Allows qualifier annotations only on fields, methods, and parameters"
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        matches!(kind, ElementKind::Type | ElementKind::Constructor)
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        let name = ctx.tree.display_name(element.id);
        element
            .markers_of(MarkerKind::Qualifier)
            .map(|marker| {
                ctx.diagnostic(
                    self,
                    Severity::Error,
                    element.id,
                    format!(
                        "Qualifier annotations are only allowed on fields, methods, and \
                         parameters: {name}"
                    ),
                )
                .with_help(format!("Remove {marker} from this {}", element.kind))
            })
            .collect()
    }
}
