//! Rule requiring assisted parameters of the same type to be disambiguated.
//!
//! # Rationale
//!
//! The generated factory matches caller arguments to assisted parameters by
//! type and tag. Two parameters of one type with equal tags cannot be told
//! apart.
//!
//! # Matching
//!
//! Every assisted parameter `p` of an injectable constructor is compared
//! with every parameter `q`, itself included. `q` matches when the type
//! oracle reports the same type, `q` is assisted, and the tags are equal:
//! both untagged, or both tagged with identical values. A tagged parameter
//! never matches an untagged one. More than one match (self plus another)
//! reports `p`.
//!
//! ```text
//! Foo(@Assisted String x, @Assisted String y)             // both reported
//! Foo(@Assisted("fg") Color fg, @Assisted("bg") Color bg) // fine
//! ```

use inject_lint_core::{Diagnostic, Element, ElementKind, Rule, RuleContext, Severity};

/// Rule code for assisted-parameter-disambiguation.
pub const CODE: &str = "AmbiguousAssistedParameters";

/// Rule name for assisted-parameter-disambiguation.
pub const NAME: &str = "assisted-parameter-disambiguation";

/// Requires assisted parameters of equal type to carry distinct tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssistedParameterDisambiguation;

impl AssistedParameterDisambiguation {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn matches(ctx: &RuleContext<'_>, p: &Element, q: &Element) -> bool {
        let tag = ctx.classification(p.id).assisted_parameter();
        tag.is_some()
            && ctx.oracle.is_same_type(p, q)
            && ctx.classification(q.id).assisted_parameter() == tag
    }
}

impl Rule for AssistedParameterDisambiguation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires assisted parameters of the same type to have different values"
    }

    fn applies_to(&self, kind: ElementKind) -> bool {
        kind == ElementKind::Constructor
    }

    fn check(&self, ctx: &RuleContext<'_>, element: &Element) -> Vec<Diagnostic> {
        if !ctx.classification(element.id).is_injection_point() {
            return Vec::new();
        }

        let parameters: Vec<&Element> = ctx.tree.parameters(element.id).collect();
        parameters
            .iter()
            .filter(|p| ctx.classification(p.id).assisted_parameter().is_some())
            .filter(|p| {
                parameters
                    .iter()
                    .filter(|q| Self::matches(ctx, p, q))
                    .count()
                    > 1
            })
            .map(|p| {
                ctx.diagnostic(
                    self,
                    Severity::Error,
                    p.id,
                    format!(
                        "@Assisted parameters must not be the same type unless the annotations \
                         have different values (e.g @Assisted(\"fg\") Color fg, \
                         @Assisted(\"bg\") Color bg): {}",
                        ctx.tree.display_name(p.id)
                    ),
                )
                .with_help(format!(
                    "Give each assisted parameter of this type a distinct value in {}",
                    ctx.tree.display_name(element.id)
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::check_json;

    fn ctor(ctor_marker: &str, x_value: &str, y_value: &str) -> String {
        format!(
            r#"[{{
                "kind": "type", "name": "Foo",
                "enclosed": [{{
                    "kind": "constructor", "name": "Foo",
                    "markers": [{{"name": "{ctor_marker}"}}],
                    "parameters": [
                        {{"kind": "parameter", "name": "n", "type": "int"}},
                        {{"kind": "parameter", "name": "x", "type": "String",
                         "markers": [{{"name": "com.google.inject.assistedinject.Assisted"{x_value}}}]}},
                        {{"kind": "parameter", "name": "y", "type": "String",
                         "markers": [{{"name": "com.google.inject.assistedinject.Assisted"{y_value}}}]}},
                        {{"kind": "parameter", "name": "z", "type": "int"}}
                    ]
                }}]
            }}]"#
        )
    }

    #[test]
    fn test_unnamed_same_type_collide() {
        let diagnostics = check_json(
            AssistedParameterDisambiguation::new(),
            &ctor("com.google.inject.assistedinject.AssistedInject", "", ""),
        );
        let names: Vec<&str> = diagnostics
            .iter()
            .map(|d| d.message.rsplit(": ").next().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["x", "y"]);
        assert!(diagnostics.iter().all(|d| d.code == CODE));
    }

    #[test]
    fn test_distinct_values_are_fine() {
        let diagnostics = check_json(
            AssistedParameterDisambiguation::new(),
            &ctor(
                "javax.inject.Inject",
                r#", "value": "fg""#,
                r#", "value": "bg""#,
            ),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_equal_values_collide() {
        let diagnostics = check_json(
            AssistedParameterDisambiguation::new(),
            &ctor(
                "javax.inject.Inject",
                r#", "value": "fg""#,
                r#", "value": "fg""#,
            ),
        );
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_named_never_matches_unnamed() {
        let diagnostics = check_json(
            AssistedParameterDisambiguation::new(),
            &ctor("javax.inject.Inject", r#", "value": "fg""#, ""),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_ignores_non_injectable_constructor() {
        let diagnostics = check_json(
            AssistedParameterDisambiguation::new(),
            &ctor("java.lang.Deprecated", "", ""),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_text_and_single_item_list_collide() {
        let diagnostics = check_json(
            AssistedParameterDisambiguation::new(),
            &ctor(
                "javax.inject.Inject",
                r#", "value": "fg""#,
                r#", "value": ["fg"]"#,
            ),
        );
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_suppressed_on_constructor() {
        let diagnostics = check_json(
            AssistedParameterDisambiguation::new(),
            r#"[{
                "kind": "type", "name": "Foo",
                "enclosed": [{
                    "kind": "constructor", "name": "Foo",
                    "markers": [
                        {"name": "com.google.inject.assistedinject.AssistedInject"},
                        {"name": "SuppressWarnings", "value": "AmbiguousAssistedParameters"}
                    ],
                    "parameters": [
                        {"kind": "parameter", "name": "x", "type": "String",
                         "markers": [{"name": "com.google.inject.assistedinject.Assisted"}]},
                        {"kind": "parameter", "name": "y", "type": "String",
                         "markers": [{"name": "com.google.inject.assistedinject.Assisted"}]}
                    ]
                }]
            }]"#,
        );
        assert!(diagnostics.is_empty());
    }
}
