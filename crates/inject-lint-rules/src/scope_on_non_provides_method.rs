//! Rule warning about scopes on methods that provide nothing.

use inject_lint_core::{
    Diagnostic, Element, ElementKind, MarkerKind, Rule, RuleContext, Severity,
};

/// Rule code for scope-on-non-provides-method.
pub const CODE: &str = "ScopeOnNonProvidesMethod";

/// Rule name for scope-on-non-provides-method.
pub const NAME: &str = "scope-on-non-provides-method";

/// Warns about scope markers on methods without a provides marker.
///
/// Only provider methods create bindings, so a scope anywhere else is
/// ignored at runtime. One warning per scope marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeOnNonProvidesMethod;

impl ScopeOnNonProvidesMethod {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ScopeOnNonProvidesMethod {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Warns about scoping annotations on methods that are not provider methods"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        kind == ElementKind::Method
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        if ctx.classification(element.id).has_provides() {
            return Vec::new();
        }
        let name = ctx.tree.display_name(element.id);

        element
            .markers_of(MarkerKind::Scope)
            .map(|marker| {
                ctx.diagnostic(
                    self,
                    Severity::Warning,
                    element.id,
                    format!(
                        "Scoping annotations are ignored at runtime on methods that are not \
                         annotated with @Provides: {name}"
                    ),
                )
                .with_help(format!("Remove {marker} or make the method a provider method"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::check_json;

    #[test]
    fn test_warns_per_scope_marker() {
        let diagnostics = check_json(
            ScopeOnNonProvidesMethod::new(),
            r#"[{
                "kind": "type", "name": "Foo",
                "enclosed": [{"kind": "method", "name": "get", "markers": [
                    {"name": "javax.inject.Singleton"},
                    {"name": "com.google.inject.Singleton"}
                ]}]
            }]"#,
        );
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
        assert_eq!(
            diagnostics[1].help.as_deref(),
            Some("Remove @com.google.inject.Singleton or make the method a provider method")
        );
    }

    #[test]
    fn test_allows_provider_method() {
        let diagnostics = check_json(
            ScopeOnNonProvidesMethod::new(),
            r#"[{
                "kind": "type", "name": "Foo",
                "enclosed": [{"kind": "method", "name": "provide", "markers": [
                    {"name": "com.google.inject.Provides"},
                    {"name": "javax.inject.Singleton"}
                ]}]
            }]"#,
        );
        assert!(diagnostics.is_empty());
    }
}
