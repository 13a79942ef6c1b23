//! Validation engine: collect everything, then run every rule.

use crate::classifier::MarkerClassifier;
use crate::collector::collect;
use crate::config::Config;
use crate::context::RuleContext;
use crate::declaration::{Declaration, DeclarationSet, InputError};
use crate::model::ElementTree;
use crate::oracle::TypeOracle;
use crate::reporter::{DiagnosticSink, Reporter};
use crate::rule::{Rule, RuleBox};
use crate::types::{Diagnostic, Report};

use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Builder for configuring a [`Validator`].
#[derive(Default)]
pub struct ValidatorBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
    oracle: Option<Box<dyn TypeOracle>>,
    classifier: Option<MarkerClassifier>,
}

impl ValidatorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule. Rules run in the order they are added.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the host type oracle (default: built from configuration).
    #[must_use]
    pub fn oracle<O: TypeOracle + 'static>(mut self, oracle: O) -> Self {
        self.oracle = Some(Box::new(oracle));
        self
    }

    /// Sets the marker classifier (default: built from configuration).
    #[must_use]
    pub fn classifier(mut self, classifier: MarkerClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Builds the validator.
    #[must_use]
    pub fn build(self) -> Validator {
        let config = self.config.unwrap_or_default();

        let enabled: BTreeSet<String> = self
            .rules
            .iter()
            .filter(|rule| {
                let on = config.is_rule_enabled(rule.code(), rule.name());
                if !on {
                    debug!("Rule disabled by configuration: {}", rule.code());
                }
                on
            })
            .map(|rule| rule.code().to_string())
            .collect();

        for key in config.rules.keys() {
            let known = self
                .rules
                .iter()
                .any(|r| r.code() == key.as_str() || r.name() == key.as_str());
            if !known {
                warn!("Configuration names unknown rule: {}", key);
            }
        }

        let classifier = self
            .classifier
            .unwrap_or_else(|| MarkerClassifier::new(config.marker_catalog()));
        let oracle = self
            .oracle
            .unwrap_or_else(|| Box::new(config.type_oracle()) as Box<dyn TypeOracle>);

        Validator {
            rules: self.rules,
            enabled,
            classifier,
            oracle,
        }
    }
}

/// Runs the element collector, the rules and the reporter.
///
/// Use [`Validator::builder()`] to construct an instance. A validator holds
/// no per-run state and can be reused for any number of trees.
pub struct Validator {
    rules: Vec<RuleBox>,
    enabled: BTreeSet<String>,
    classifier: MarkerClassifier,
    oracle: Box<dyn TypeOracle>,
}

impl Validator {
    /// Creates a new builder for configuring a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Iterates the registered rules in run order.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }

    /// Codes of the rules that take part in a run.
    #[must_use]
    pub fn enabled_codes(&self) -> &BTreeSet<String> {
        &self.enabled
    }

    /// Phase one: flattens declarations into the model.
    #[must_use]
    pub fn collect(&self, roots: &[Declaration]) -> ElementTree {
        collect(roots, &self.classifier)
    }

    /// Phase two: runs every enabled rule over every element.
    ///
    /// Diagnostics come out in element order, then rule order. A rule is
    /// skipped for an element whose suppression marker names the rule's code
    /// or one of its aliases.
    #[must_use]
    pub fn check(&self, tree: &ElementTree) -> Vec<Diagnostic> {
        let ctx = RuleContext::new(tree, self.oracle.as_ref()).with_enabled(&self.enabled);
        let mut diagnostics = Vec::new();

        for element in tree.iter() {
            let classification = tree.classification(element.id);
            for rule in &self.rules {
                if !rule.applies_to(element.kind) || !self.enabled.contains(rule.code()) {
                    continue;
                }
                let suppressed = std::iter::once(rule.code())
                    .chain(rule.suppression_aliases().iter().copied())
                    .any(|key| classification.is_suppressed(key));
                if suppressed {
                    debug!(
                        "Skipping {} on suppressed element {}",
                        rule.code(),
                        tree.display_name(element.id)
                    );
                    continue;
                }
                diagnostics.extend(rule.check(&ctx, element));
            }
        }

        diagnostics
    }

    /// Validates a declaration tree and reports to `sink`.
    pub fn validate(&self, roots: &[Declaration], sink: &mut dyn DiagnosticSink) -> Report {
        info!(
            "Validating {} root declaration(s) with {} rule(s)",
            roots.len(),
            self.enabled.len()
        );

        let tree = self.collect(roots);
        let diagnostics = self.check(&tree);
        let report = Reporter::new(&tree).report(diagnostics, sink);

        info!(
            "Validation complete: {} error(s), {} warning(s) in {} element(s)",
            report.errors, report.warnings, report.elements_checked
        );
        report
    }

    /// Validates a parsed declaration file.
    pub fn validate_set(&self, set: &DeclarationSet, sink: &mut dyn DiagnosticSink) -> Report {
        self.validate(&set.declarations, sink)
    }

    /// Loads and validates a declaration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. Rule findings
    /// are never errors here; they go to `sink`.
    pub fn validate_file(
        &self,
        path: &Path,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Report, InputError> {
        debug!("Loading declarations: {}", path.display());
        let set = DeclarationSet::from_file(path)?;
        Ok(self.validate_set(&set, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::MarkerDecl;
    use crate::model::{Element, ElementKind, MarkerKind};
    use crate::types::Severity;

    /// Flags every type carrying a scope marker.
    struct ScopedType;

    impl Rule for ScopedType {
        fn name(&self) -> &'static str {
            "scoped-type"
        }
        fn code(&self) -> &'static str {
            "ScopedType"
        }
        fn applies_to(&self, kind: ElementKind) -> bool {
            kind == ElementKind::Type
        }
        fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
            element
                .markers_of(MarkerKind::Scope)
                .map(|m| ctx.diagnostic(self, Severity::Warning, element.id, m.to_string()))
                .collect()
        }
    }

    /// Same check, also silenced by a legacy key.
    struct AliasedScopedType;

    impl Rule for AliasedScopedType {
        fn name(&self) -> &'static str {
            "aliased-scoped-type"
        }
        fn code(&self) -> &'static str {
            "ScopedType"
        }
        fn suppression_aliases(&self) -> &'static [&'static str] {
            &["LegacyScopedType"]
        }
        fn applies_to(&self, kind: ElementKind) -> bool {
            ScopedType.applies_to(kind)
        }
        fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
            ScopedType.check(ctx, element)
        }
    }

    fn roots() -> Vec<Declaration> {
        vec![
            Declaration::new(ElementKind::Type, "A")
                .marker(MarkerDecl::named("javax.inject.Singleton")),
            Declaration::new(ElementKind::Type, "B")
                .marker(MarkerDecl::named("javax.inject.Singleton"))
                .marker(
                    MarkerDecl::named("SuppressWarnings")
                        .value(crate::model::MarkerValue::Text("ScopedType".into())),
                ),
        ]
    }

    #[test]
    fn test_builder() {
        let validator = Validator::builder()
            .rule(ScopedType)
            .rule_box(Box::new(ScopedType))
            .build();
        assert_eq!(validator.rule_count(), 2);
        assert!(validator.rules().all(|r| r.name() == "scoped-type"));
        assert!(validator.enabled_codes().contains("ScopedType"));
    }

    #[test]
    fn skips_suppressed_elements() {
        let validator = Validator::builder().rule(ScopedType).build();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let report = validator.validate(&roots(), &mut sink);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].message, "@javax.inject.Singleton");
        assert_eq!(report.warnings, 1);
        assert!(!report.has_errors());
    }

    #[test]
    fn config_disables_rule() {
        let config = Config::parse("[rules.scoped-type]\nenabled = false\n").unwrap();
        let validator = Validator::builder().rule(ScopedType).config(config).build();
        let mut sink: Vec<Diagnostic> = Vec::new();
        validator.validate(&roots(), &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn validation_is_idempotent() {
        let validator = Validator::builder().rule(ScopedType).build();
        let tree = validator.collect(&roots());
        assert_eq!(validator.check(&tree), validator.check(&tree));
    }

    #[test]
    fn skips_elements_suppressing_an_alias() {
        let roots = vec![
            Declaration::new(ElementKind::Type, "A")
                .marker(MarkerDecl::named("javax.inject.Singleton"))
                .marker(
                    MarkerDecl::named("SuppressWarnings")
                        .value(crate::model::MarkerValue::Text("LegacyScopedType".into())),
                ),
        ];
        let mut sink: Vec<Diagnostic> = Vec::new();
        Validator::builder()
            .rule(AliasedScopedType)
            .build()
            .validate(&roots, &mut sink);
        assert!(sink.is_empty());

        Validator::builder()
            .rule(ScopedType)
            .build()
            .validate(&roots, &mut sink);
        assert_eq!(sink.len(), 1);
    }
}
