//! Context provided to rules during validation.

use crate::classifier::Classification;
use crate::model::{Element, ElementId, ElementTree};
use crate::oracle::TypeOracle;
use crate::rule::Rule;
use crate::types::{Diagnostic, Severity};
use std::collections::BTreeSet;

/// Read-only view of one validation run.
///
/// Contains the collected tree, the parameter owner map (through the tree),
/// the host's [`TypeOracle`] and the codes of the rules taking part in the
/// run.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    /// The collected model.
    pub tree: &'a ElementTree,
    /// Host type queries.
    pub oracle: &'a dyn TypeOracle,
    enabled: Option<&'a BTreeSet<String>>,
}

impl std::fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleContext")
            .field("elements", &self.tree.len())
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl<'a> RuleContext<'a> {
    /// Creates a context with every rule enabled.
    #[must_use]
    pub fn new(tree: &'a ElementTree, oracle: &'a dyn TypeOracle) -> Self {
        Self {
            tree,
            oracle,
            enabled: None,
        }
    }

    /// Restricts the run to the given rule codes.
    #[must_use]
    pub fn with_enabled(mut self, enabled: &'a BTreeSet<String>) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Returns the element with the given id.
    #[must_use]
    pub fn element(&self, id: ElementId) -> &'a Element {
        self.tree.element(id)
    }

    /// Returns the classification of an element.
    #[must_use]
    pub fn classification(&self, id: ElementId) -> &'a Classification {
        self.tree.classification(id)
    }

    /// Whether the rule with this code takes part in the run.
    #[must_use]
    pub fn is_rule_enabled(&self, code: &str) -> bool {
        self.enabled.map_or(true, |e| e.contains(code))
    }

    /// Whether the rule with this code runs on the element: enabled, and
    /// not suppressed by the element's own suppression marker.
    #[must_use]
    pub fn is_rule_active(&self, code: &str, id: ElementId) -> bool {
        self.is_rule_enabled(code) && !self.classification(id).is_suppressed(code)
    }

    /// Builds a diagnostic for `rule` against an element, carrying the
    /// element's source location.
    #[must_use]
    pub fn diagnostic<R: Rule + ?Sized>(
        &self,
        rule: &R,
        severity: Severity,
        id: ElementId,
        message: impl Into<String>,
    ) -> Diagnostic {
        Diagnostic::new(rule.code(), rule.name(), severity, id, message)
            .with_location(self.element(id).location.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::MarkerClassifier;
    use crate::collector::collect;
    use crate::declaration::{Declaration, MarkerDecl};
    use crate::model::{ElementKind, MarkerValue};
    use crate::oracle::DeclaredTypeOracle;

    #[test]
    fn rule_activity_honors_config_and_suppression() {
        let roots = vec![Declaration::new(ElementKind::Type, "T").marker(
            MarkerDecl::named("SuppressWarnings")
                .value(MarkerValue::Text("MoreThanOneScopeAnnotation".into())),
        )];
        let tree = collect(&roots, &MarkerClassifier::default());
        let oracle = DeclaredTypeOracle::default();
        let enabled: BTreeSet<String> = [
            "MoreThanOneScopeAnnotation".to_string(),
            "ProvidesNotInModule".to_string(),
        ]
        .into();
        let ctx = RuleContext::new(&tree, &oracle).with_enabled(&enabled);
        let id = tree.roots()[0];

        assert!(!ctx.is_rule_enabled("MoreThanOneQualifier"));
        assert!(!ctx.is_rule_active("MoreThanOneQualifier", id));
        assert!(ctx.is_rule_enabled("MoreThanOneScopeAnnotation"));
        assert!(!ctx.is_rule_active("MoreThanOneScopeAnnotation", id));
        assert!(ctx.is_rule_active("ProvidesNotInModule", id));
        assert!(RuleContext::new(&tree, &oracle).is_rule_enabled("MoreThanOneQualifier"));
    }
}
