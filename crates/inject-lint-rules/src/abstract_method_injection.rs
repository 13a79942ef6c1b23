//! Rule forbidding primary injection markers on abstract methods.

use inject_lint_core::{
    Diagnostic, Element, ElementKind, MarkerKind, Rule, RuleContext, Severity, Vocabulary,
};

/// Rule code for abstract-method-injection.
pub const CODE: &str = "InjectOnAbstractMethod";

/// Legacy suppression key, still honored.
pub const LEGACY_CODE: &str = "JavaxInjectOnAbstractMethod";

/// Rule name for abstract-method-injection.
pub const NAME: &str = "abstract-method-injection";

/// Forbids primary-vocabulary injection on abstract methods.
///
/// The alternate vocabulary tolerates this placement, so only the primary
/// injection marker is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbstractMethodInjection;

impl AbstractMethodInjection {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AbstractMethodInjection {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn suppression_aliases(&self) -> &'static [&'static str] {
        &[LEGACY_CODE]
    }

    fn description(&self) -> &'static str {
        "Forbids primary injection markers on abstract methods"
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        kind == ElementKind::Method
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        if !element.is_abstract() {
            return Vec::new();
        }
        let Some(marker) = element.marker(MarkerKind::Injection, Vocabulary::Primary) else {
            return Vec::new();
        };

        vec![ctx
            .diagnostic(
                self,
                Severity::Error,
                element.id,
                format!(
                    "{marker} cannot be placed on an abstract method: {}",
                    ctx.tree.display_name(element.id)
                ),
            )
            .with_help("Inject through a concrete method or the constructor")]
    }
}
