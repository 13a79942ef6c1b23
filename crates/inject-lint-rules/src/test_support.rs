//! Helpers shared by the rule unit tests.

use inject_lint_core::{DeclarationSet, Diagnostic, Rule, Validator};

/// Runs a single rule over a JSON declaration list.
pub(crate) fn check_json<R: Rule + 'static>(rule: R, json: &str) -> Vec<Diagnostic> {
    let set = DeclarationSet::from_json(json).expect("Failed to parse declarations");
    let validator = Validator::builder().rule(rule).build();
    let mut sink: Vec<Diagnostic> = Vec::new();
    validator.validate_set(&set, &mut sink);
    sink
}
