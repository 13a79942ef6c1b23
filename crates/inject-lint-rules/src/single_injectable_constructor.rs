//! Rule forbidding more than one injectable constructor per type.
//!
//! # Rationale
//!
//! The injector must pick exactly one constructor. With two candidates the
//! choice is ambiguous and the framework rejects the type at runtime.
//!
//! # Detected Patterns
//!
//! - Two or more constructors of the same type carrying an injection marker
//!   of either vocabulary

use inject_lint_core::{Diagnostic, Element, ElementKind, Rule, RuleContext, Severity};

/// Rule code for single-injectable-constructor.
pub const CODE: &str = "MoreThanOneInjectableConstructor";

/// Rule name for single-injectable-constructor.
pub const NAME: &str = "single-injectable-constructor";

/// Forbids more than one injectable constructor on a type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleInjectableConstructor;

impl SingleInjectableConstructor {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SingleInjectableConstructor {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids more than one injectable constructor per type"
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        kind == ElementKind::Type
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        let injectable = ctx
            .tree
            .constructors(element.id)
            .filter(|ctor| ctx.classification(ctor.id).has_injection())
            .count();

        if injectable <= 1 {
            return Vec::new();
        }

        vec![ctx
            .diagnostic(
                self,
                Severity::Error,
                element.id,
                format!(
                    "Class has more than one injectable constructor: {}",
                    ctx.tree.display_name(element.id)
                ),
            )
            .with_help(format!(
                "Keep the injection marker on one of the {injectable} constructors"
            ))]
    }
}
