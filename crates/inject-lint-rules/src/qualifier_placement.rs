//! Rule warning about qualifiers the injector will never read.
//!
//! # Detected Patterns
//!
//! - Qualifier on a field without an injection marker
//! - Qualifier on a method that is neither an injection method nor a
//!   provider method
//! - Qualifier on a parameter whose declaring method or constructor is
//!   neither an injection point nor a provider method
//!
//! One warning is reported per qualifier marker.

use inject_lint_core::{
    Diagnostic, Element, ElementKind, MarkerKind, Rule, RuleContext, Severity,
};

/// Rule code for qualifier-placement.
pub const CODE: &str = "QualifierIgnored";

/// Rule name for qualifier-placement.
pub const NAME: &str = "qualifier-placement";

/// Warns about qualifiers placed where they have no effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifierPlacement;

impl QualifierPlacement {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the reason the qualifiers are ignored, or `None` if they are
    /// read.
    fn ignored_because(ctx: &RuleContext<'_>, element: &Element) -> Option<&'static str> {
        let c = ctx.classification(element.id);
        match element.kind {
            ElementKind::Field if !c.has_injection() => {
                Some("fields that are not annotated with @Inject")
            }
            ElementKind::Method if !c.has_injection() && !c.has_provides() => {
                Some("methods that are not annotated with @Inject or @Provides")
            }
            ElementKind::Parameter => {
                let read = ctx.tree.owner(element.id).is_some_and(|owner| {
                    let o = ctx.classification(owner.id);
                    o.is_injection_point() || o.has_provides()
                });
                (!read).then_some(
                    "parameters of methods that are not injection points or provider methods",
                )
            }
            _ => None,
        }
    }
}

impl Rule for QualifierPlacement {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Warns about qualifier annotations that are ignored at runtime"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        matches!(
            kind,
            ElementKind::Field | ElementKind::Method | ElementKind::Parameter
        )
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        let Some(reason) = Self::ignored_because(ctx, element) else {
            return Vec::new();
        };
        let name = ctx.tree.display_name(element.id);

        element
            .markers_of(MarkerKind::Qualifier)
            .map(|marker| {
                ctx.diagnostic(
                    self,
                    Severity::Warning,
                    element.id,
                    format!("Qualifier annotations are ignored at runtime on {reason}: {name}"),
                )
                .with_help(format!("Remove {marker} or make the element an injection point"))
            })
            .collect()
    }
}
