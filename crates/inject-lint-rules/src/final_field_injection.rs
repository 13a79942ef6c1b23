//! Rule forbidding injection into final fields.
//!
//! # Rationale
//!
//! A final field cannot be assigned after construction. The primary
//! vocabulary rejects it outright; the alternate one writes it reflectively,
//! which works but is discouraged.
//!
//! # Detected Patterns
//!
//! - `final` field with a primary injection marker (error)
//! - `final` field with an alternate injection marker (warning)
//!
//! # Suppression
//!
//! [`CODE`] silences both findings. [`PRIMARY_CODE`] and [`ALTERNATE_CODE`]
//! silence only the finding for their vocabulary.

use inject_lint_core::{
    Diagnostic, Element, ElementKind, Marker, MarkerKind, Rule, RuleContext, Severity, Vocabulary,
};

/// Rule code for final-field-injection.
pub const CODE: &str = "InjectOnFinalField";

/// Suppression key for the primary-vocabulary finding only.
pub const PRIMARY_CODE: &str = "JavaxInjectOnFinalField";

/// Suppression key for the alternate-vocabulary finding only.
pub const ALTERNATE_CODE: &str = "GuiceInjectOnFinalField";

/// Rule name for final-field-injection.
pub const NAME: &str = "final-field-injection";

/// Forbids injection markers on final fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalFieldInjection;

impl FinalFieldInjection {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn report(
        &self,
        ctx: &RuleContext<'_>,
        element: &Element,
        marker: &Marker,
    ) -> Option<Diagnostic> {
        let name = ctx.tree.display_name(element.id);
        let (key, severity, message) = match marker.vocabulary {
            Vocabulary::Primary => (
                PRIMARY_CODE,
                Severity::Error,
                format!("A final field cannot be annotated with {marker}: {name}"),
            ),
            Vocabulary::Alternate => (
                ALTERNATE_CODE,
                Severity::Warning,
                format!("Injecting a final field with {marker} is discouraged: {name}"),
            ),
        };
        if ctx.classification(element.id).is_suppressed(key) {
            return None;
        }
        Some(
            ctx.diagnostic(self, severity, element.id, message)
                .with_help("Remove the final modifier or inject through the constructor"),
        )
    }
}

impl Rule for FinalFieldInjection {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids injection markers on final fields"
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        kind == ElementKind::Field
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        if !element.is_final() {
            return Vec::new();
        }

        [Vocabulary::Primary, Vocabulary::Alternate]
            .into_iter()
            .filter_map(|vocabulary| element.marker(MarkerKind::Injection, vocabulary))
            .filter_map(|marker| self.report(ctx, element, marker))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::check_json;

    fn field(markers: &str, modifiers: &str) -> String {
        format!(
            r#"[{{
                "kind": "type", "name": "Foo",
                "enclosed": [{{"kind": "field", "name": "bar", "type": "String",
                              "modifiers": [{modifiers}], "markers": [{markers}]}}]
            }}]"#
        )
    }

    #[test]
    fn test_primary_is_error() {
        let diagnostics = check_json(
            FinalFieldInjection::new(),
            &field(r#"{"name": "javax.inject.Inject"}"#, r#""final""#),
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert_eq!(
            diagnostics[0].message,
            "A final field cannot be annotated with @javax.inject.Inject: Foo.bar"
        );
    }

    #[test]
    fn test_alternate_is_warning() {
        let diagnostics = check_json(
            FinalFieldInjection::new(),
            &field(r#"{"name": "com.google.inject.Inject"}"#, r#""final""#),
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(
            diagnostics[0].message,
            "Injecting a final field with @com.google.inject.Inject is discouraged: Foo.bar"
        );
    }

    #[test]
    fn test_both_vocabularies_report_twice() {
        let diagnostics = check_json(
            FinalFieldInjection::new(),
            &field(
                r#"{"name": "javax.inject.Inject"}, {"name": "com.google.inject.Inject"}"#,
                r#""final""#,
            ),
        );
        let severities: Vec<Severity> = diagnostics.iter().map(|d| d.severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Warning]);
    }

    #[test]
    fn test_ignores_non_final_field() {
        let diagnostics = check_json(
            FinalFieldInjection::new(),
            &field(r#"{"name": "javax.inject.Inject"}"#, r#""private""#),
        );
        assert!(diagnostics.is_empty());
    }

    fn both_vocabularies_suppressing(key: &str) -> Vec<Severity> {
        let markers = format!(
            r#"{{"name": "javax.inject.Inject"}}, {{"name": "com.google.inject.Inject"}},
               {{"name": "SuppressWarnings", "value": "{key}"}}"#
        );
        check_json(FinalFieldInjection::new(), &field(&markers, r#""final""#))
            .iter()
            .map(|d| d.severity)
            .collect()
    }

    #[test]
    fn test_vocabulary_keys_suppress_one_finding() {
        assert_eq!(
            both_vocabularies_suppressing(ALTERNATE_CODE),
            vec![Severity::Error]
        );
        assert_eq!(
            both_vocabularies_suppressing(PRIMARY_CODE),
            vec![Severity::Warning]
        );
    }

    #[test]
    fn test_rule_code_suppresses_both_findings() {
        assert!(both_vocabularies_suppressing(CODE).is_empty());
    }
}
