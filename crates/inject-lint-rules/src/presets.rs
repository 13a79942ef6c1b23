//! Rule presets and lookup by code or name.

use crate::{
    AbstractMethodInjection, AssistedParameterDisambiguation, ConflictingConstructorMarkers,
    FinalFieldInjection, MixedConstructorStyles, ProvidesMustBeInModule, QualifierCardinality,
    QualifierKindRestriction, QualifierPlacement, ScopeCardinality, ScopeKindRestriction,
    ScopeOnAbstractType, ScopeOnNonProvidesMethod, SingleInjectableConstructor,
};
use inject_lint_core::{RuleBox, Severity};
use tracing::{debug, warn};

/// Preset configurations for inject-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every built-in rule.
    All,
    /// Only the rules that report errors, for gating code generation.
    ErrorsOnly,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::All => all_rules(),
            Self::ErrorsOnly => all_rules()
                .into_iter()
                .filter(|rule| rule.default_severity() == Severity::Error)
                .collect(),
        }
    }
}

/// Returns all available rules in declaration order.
///
/// Diagnostics for one element come out in this order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(SingleInjectableConstructor::new()),
        Box::new(ConflictingConstructorMarkers::new()),
        Box::new(MixedConstructorStyles::new()),
        Box::new(FinalFieldInjection::new()),
        Box::new(AbstractMethodInjection::new()),
        Box::new(AssistedParameterDisambiguation::new()),
        Box::new(ProvidesMustBeInModule::new()),
        Box::new(QualifierCardinality::new()),
        Box::new(QualifierPlacement::new()),
        Box::new(QualifierKindRestriction::new()),
        Box::new(ScopeCardinality::new()),
        Box::new(ScopeOnNonProvidesMethod::new()),
        Box::new(ScopeOnAbstractType::new()),
        Box::new(ScopeKindRestriction::new()),
    ]
}

/// Finds a built-in rule by its code or its kebab-case name.
#[must_use]
pub fn rule_by_key(key: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|rule| rule.code() == key || rule.name() == key)
}

/// Keeps the rules whose code or name appears in `keys`, preserving
/// declaration order. Unknown keys are logged and ignored.
#[must_use]
pub fn filter_rules(rules: Vec<RuleBox>, keys: &[String]) -> Vec<RuleBox> {
    for key in keys {
        if !rules.iter().any(|r| key == r.code() || key == r.name()) {
            warn!("Unknown rule: {}", key);
        }
    }

    let kept: Vec<RuleBox> = rules
        .into_iter()
        .filter(|rule| keys.iter().any(|k| k == rule.code() || k == rule.name()))
        .collect();
    debug!("Selected {} rule(s) from {} key(s)", kept.len(), keys.len());
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_all_rules_have_unique_codes_and_names() {
        let rules = all_rules();
        assert_eq!(rules.len(), 14);
        let codes: BTreeSet<&str> = rules.iter().map(|r| r.code()).collect();
        let names: BTreeSet<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(codes.len(), 14);
        assert_eq!(names.len(), 14);
        assert!(rules.iter().all(|r| !r.description().is_empty()));
    }

    #[test]
    fn test_errors_only_preset() {
        let rules = Preset::ErrorsOnly.rules();
        assert!(rules
            .iter()
            .all(|r| r.default_severity() == Severity::Error));
        assert!(!rules.iter().any(|r| r.code() == "QualifierIgnored"));
        assert!(rules.iter().any(|r| r.code() == "InjectOnFinalField"));
        assert_eq!(Preset::All.rules().len(), 14);
    }

    #[test]
    fn test_rule_by_code_or_name() {
        let by_code = rule_by_key("MoreThanOneQualifier").unwrap();
        let by_name = rule_by_key("qualifier-cardinality").unwrap();
        assert_eq!(by_code.code(), by_name.code());
        assert!(rule_by_key("no-such-rule").is_none());
    }

    #[test]
    fn test_filter_rules_keeps_order() {
        let keys = vec![
            "ScopeOnAbstractType".to_string(),
            "single-injectable-constructor".to_string(),
        ];
        let kept: Vec<&str> = filter_rules(all_rules(), &keys)
            .iter()
            .map(|r| r.code())
            .collect();
        assert_eq!(
            kept,
            vec!["MoreThanOneInjectableConstructor", "ScopeOnAbstractType"]
        );
    }

    #[test]
    fn test_filter_rules_drops_unknown_keys() {
        let keys = vec!["no-such-rule".to_string(), "MoreThanOneQualifier".to_string()];
        let kept: Vec<&str> = filter_rules(all_rules(), &keys)
            .iter()
            .map(|r| r.code())
            .collect();
        assert_eq!(kept, vec!["MoreThanOneQualifier"]);
        assert!(filter_rules(all_rules(), &["bogus".to_string()]).is_empty());
    }
}
