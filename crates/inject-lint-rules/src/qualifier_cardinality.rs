//! Rule allowing at most one qualifier per element.

use inject_lint_core::{Diagnostic, Element, ElementKind, Rule, RuleContext, Severity};

/// Rule code for qualifier-cardinality.
pub const CODE: &str = "MoreThanOneQualifier";

/// Rule name for qualifier-cardinality.
pub const NAME: &str = "qualifier-cardinality";

/// Forbids more than one qualifier marker on an element.
///
/// Qualifiers of both vocabularies count toward the same limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifierCardinality;

impl QualifierCardinality {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for QualifierCardinality {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Allows at most one qualifier annotation per element"
    }

    fn applies_to(&self, _kind: ElementKind) -> bool {
        true
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        let count = ctx.classification(element.id).qualifier_count();
        if count <= 1 {
            return Vec::new();
        }

        vec![ctx
            .diagnostic(
                self,
                Severity::Error,
                element.id,
                format!(
                    "Only one qualifier annotation is allowed per element: {}",
                    ctx.tree.display_name(element.id)
                ),
            )
            .with_help(format!("Found {count} qualifiers; keep one"))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::check_json;

    #[test]
    fn test_counts_across_vocabularies() {
        let diagnostics = check_json(
            QualifierCardinality::new(),
            r#"[{
                "kind": "type", "name": "TestClass",
                "enclosed": [{"kind": "field", "name": "thing", "type": "String", "markers": [
                    {"name": "test.Foo1", "meta": ["javax.inject.Qualifier"]},
                    {"name": "test.Bar1", "meta": ["com.google.inject.BindingAnnotation"]}
                ]}]
            }]"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Only one qualifier annotation is allowed per element: TestClass.thing"
        );
    }

    #[test]
    fn test_allows_single_qualifier() {
        let diagnostics = check_json(
            QualifierCardinality::new(),
            r#"[{"kind": "parameter", "name": "p", "type": "String",
                 "markers": [{"name": "javax.inject.Named", "value": "a"}]}]"#,
        );
        assert!(diagnostics.is_empty());
    }
}
