//! Rule warning about a type mixing injection and assisted-injection
//! constructors.
//!
//! A type with one `@Inject` constructor and a separate `@AssistedInject`
//! constructor is legal but confusing. The warning is dropped when one of the
//! type's constructors already reports
//! [`AssistedInjectAndInjectOnSameConstructor`](crate::conflicting_constructor_markers::CODE),
//! since that error covers the same mistake.

use crate::conflicting_constructor_markers;
use inject_lint_core::{Diagnostic, Element, ElementKind, Rule, RuleContext, Severity};

/// Rule code for mixed-constructor-styles.
pub const CODE: &str = "AssistedInjectAndInjectOnConstructors";

/// Rule name for mixed-constructor-styles.
pub const NAME: &str = "mixed-constructor-styles";

/// Warns when a type has both injection and assisted-injection constructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct MixedConstructorStyles;

impl MixedConstructorStyles {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MixedConstructorStyles {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Warns when a type has both an injection and an assisted-injection constructor"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        kind == ElementKind::Type
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        let mut has_inject = false;
        let mut has_assisted = false;
        let mut conflict_reported = false;

        for ctor in ctx.tree.constructors(element.id) {
            let c = ctx.classification(ctor.id);
            has_inject |= c.has_injection();
            has_assisted |= c.has_assisted_injection();
            if c.has_injection()
                && c.has_assisted_injection()
                && ctx.is_rule_active(conflicting_constructor_markers::CODE, ctor.id)
            {
                conflict_reported = true;
            }
        }

        if !has_inject || !has_assisted || conflict_reported {
            return Vec::new();
        }

        vec![ctx
            .diagnostic(
                self,
                Severity::Warning,
                element.id,
                format!(
                    "Class has both an @Inject constructor and an @AssistedInject constructor. \
                     This leads to confusing code: {}",
                    ctx.tree.display_name(element.id)
                ),
            )
            .with_help("Use a single construction style per type")]
    }
}
