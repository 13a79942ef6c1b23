//! Rule requiring provider methods to live in module containers.

use inject_lint_core::{
    Diagnostic, Element, ElementKind, MarkerKind, Rule, RuleContext, Severity,
};

/// Rule code for provides-must-be-in-module.
pub const CODE: &str = "ProvidesNotInModule";

/// Legacy suppression key, still honored.
pub const LEGACY_CODE: &str = "GuiceProvidesNotInModule";

/// Rule name for provides-must-be-in-module.
pub const NAME: &str = "provides-must-be-in-module";

/// Requires provider methods to be declared in a module container.
///
/// Whether the enclosing type is a module is decided by the
/// [`TypeOracle`](inject_lint_core::TypeOracle). A provider method without
/// an enclosing type is reported as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvidesMustBeInModule;

impl ProvidesMustBeInModule {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ProvidesMustBeInModule {
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
        "Requires provider methods to be declared in modules"
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        kind == ElementKind::Method
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        let Some(marker) = element.markers_of(MarkerKind::Provides).next() else {
            return Vec::new();
        };
        let in_module = ctx
            .tree
            .enclosing(element.id)
            .is_some_and(|outer| ctx.oracle.is_module_container(outer));
        if in_module {
            return Vec::new();
        }

        vec![ctx
            .diagnostic(
                self,
                Severity::Error,
                element.id,
                format!(
                    "{marker} methods must be declared in modules: {}",
                    ctx.tree.display_name(element.id)
                ),
            )
            .with_help("Move the method into a module or mark the enclosing type as a module")]
    }
}
