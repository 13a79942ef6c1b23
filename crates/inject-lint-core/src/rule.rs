//! Rule trait for defining validation rules.

use crate::context::RuleContext;
use crate::model::{Element, ElementKind};
use crate::types::{Diagnostic, Severity};

/// A validation rule applied to one element at a time.
///
/// Rules are pure: they read the element tree, classifications and the type
/// oracle through [`RuleContext`] and return diagnostics. The engine skips a
/// rule for elements whose suppression marker names the rule's [`code`] or
/// one of its [`suppression_aliases`].
///
/// [`code`]: Rule::code
/// [`suppression_aliases`]: Rule::suppression_aliases
///
/// # Example
///
/// ```ignore
/// use inject_lint_core::{Element, ElementKind, Diagnostic, Rule, RuleContext, Severity};
///
/// pub struct NoStaticInjection;
///
/// impl Rule for NoStaticInjection {
///     fn name(&self) -> &'static str { "no-static-injection" }
///     fn code(&self) -> &'static str { "InjectOnStaticField" }
///
///     fn applies_to(&self, kind: ElementKind) -> bool {
///         kind == ElementKind::Field
///     }
///
///     fn check(&self, ctx: &RuleContext, element: &Element) -> Vec<Diagnostic> {
///         // ...
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "qualifier-cardinality").
    fn name(&self) -> &'static str;

    /// Returns the rule code, which is also its suppression key
    /// (e.g., "MoreThanOneQualifier").
    fn code(&self) -> &'static str;

    /// Additional suppression keys that silence this rule, e.g. the legacy
    /// vocabulary-prefixed codes existing sources already suppress.
    fn suppression_aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the severity of diagnostics from this rule.
    ///
    /// Rules whose severity depends on the marker vocabulary report the
    /// stronger of the two here.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether the rule inspects elements of this kind.
    fn applies_to(&self, kind: ElementKind) -> bool;

    /// Checks a single element and returns any diagnostics found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The collected model and host services
    /// * `element` - Element under inspection; `applies_to(element.kind)` holds
    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
