//! Rule forbidding injection and assisted injection on the same constructor.

use inject_lint_core::{
    Diagnostic, Element, ElementKind, MarkerKind, Rule, RuleContext, Severity,
};

/// Rule code for conflicting-constructor-markers.
pub const CODE: &str = "AssistedInjectAndInjectOnSameConstructor";

/// Rule name for conflicting-constructor-markers.
pub const NAME: &str = "conflicting-constructor-markers";

/// Forbids a constructor marked for both injection and assisted injection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictingConstructorMarkers;

impl ConflictingConstructorMarkers {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ConflictingConstructorMarkers {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids injection and assisted-injection markers on the same constructor"
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        kind == ElementKind::Constructor
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        let (Some(inject), Some(assisted)) = (
            element.markers_of(MarkerKind::Injection).next(),
            element.markers_of(MarkerKind::AssistedInjection).next(),
        ) else {
            return Vec::new();
        };

        vec![ctx
            .diagnostic(
                self,
                Severity::Error,
                element.id,
                format!(
                    "A constructor cannot be annotated with both {inject} and {assisted}: {}",
                    ctx.tree.display_name(element.id)
                ),
            )
            .with_help(format!("Remove either {inject} or {assisted}"))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::check_json;

    #[test]
    fn test_detects_both_markers() {
        let diagnostics = check_json(
            ConflictingConstructorMarkers::new(),
            r#"[{
                "kind": "type", "name": "Foo",
                "enclosed": [{"kind": "constructor", "name": "Foo", "markers": [
                    {"name": "com.google.inject.Inject"},
                    {"name": "com.google.inject.assistedinject.AssistedInject"}
                ]}]
            }]"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, CODE);
        assert_eq!(
            diagnostics[0].message,
            "A constructor cannot be annotated with both @com.google.inject.Inject and \
             @com.google.inject.assistedinject.AssistedInject: Foo.Foo"
        );
    }

    #[test]
    fn test_allows_single_marker() {
        let diagnostics = check_json(
            ConflictingConstructorMarkers::new(),
            r#"[{
                "kind": "type", "name": "Foo",
                "enclosed": [
                    {"kind": "constructor", "name": "Foo",
                     "markers": [{"name": "javax.inject.Inject"}]},
                    {"kind": "constructor", "name": "Foo",
                     "markers": [{"name": "com.google.inject.assistedinject.AssistedInject"}]}
                ]
            }]"#,
        );
        assert!(diagnostics.is_empty());
    }
}
