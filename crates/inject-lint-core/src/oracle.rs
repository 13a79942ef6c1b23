//! Host type queries used by the rules.

use crate::model::{Element, ElementKind, MarkerKind};
use std::collections::BTreeSet;

/// Type questions the validator cannot answer from declarations alone.
///
/// Injected into the [`Validator`](crate::Validator) at construction so rules
/// depend on this capability instead of a global compiler service.
pub trait TypeOracle: Send + Sync {
    /// Whether two fields or parameters have the same declared type.
    fn is_same_type(&self, a: &Element, b: &Element) -> bool;

    /// Whether a type may hold provider methods.
    fn is_module_container(&self, ty: &Element) -> bool;
}

/// Default supertypes that make a type a module container.
pub const DEFAULT_MODULE_SUPERTYPES: &[&str] = &[
    "com.google.inject.Module",
    "com.google.gwt.inject.client.GinModule",
];

/// Oracle answering from the declarations themselves.
///
/// Types are compared by their declared type string; an element without a
/// declared type matches nothing. A type is a module container when the host
/// flagged it, it carries a module marker, or one of its supertypes is a
/// configured module supertype.
#[derive(Debug, Clone)]
pub struct DeclaredTypeOracle {
    module_supertypes: BTreeSet<String>,
}

impl Default for DeclaredTypeOracle {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE_SUPERTYPES.iter().copied())
    }
}

impl DeclaredTypeOracle {
    /// Creates an oracle with the given module supertypes.
    #[must_use]
    pub fn new<I, S>(module_supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            module_supertypes: module_supertypes.into_iter().map(Into::into).collect(),
        }
    }

    /// Module supertypes in use.
    #[must_use]
    pub fn module_supertypes(&self) -> &BTreeSet<String> {
        &self.module_supertypes
    }
}

impl TypeOracle for DeclaredTypeOracle {
    fn is_same_type(&self, a: &Element, b: &Element) -> bool {
        match (&a.declared_type, &b.declared_type) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    fn is_module_container(&self, ty: &Element) -> bool {
        if ty.kind != ElementKind::Type {
            return false;
        }
        ty.module
            || ty.markers_of(MarkerKind::Module).next().is_some()
            || ty
                .supertypes
                .iter()
                .any(|s| self.module_supertypes.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementId, Marker, Vocabulary};

    fn element(kind: ElementKind, declared_type: Option<&str>) -> Element {
        Element {
            id: ElementId::new(0),
            kind,
            name: "e".into(),
            modifiers: BTreeSet::new(),
            enclosing: None,
            enclosed: Vec::new(),
            parameters: Vec::new(),
            markers: Vec::new(),
            declared_type: declared_type.map(String::from),
            supertypes: Vec::new(),
            module: false,
            location: None,
        }
    }

    #[test]
    fn same_type_requires_both_types() {
        let oracle = DeclaredTypeOracle::default();
        let a = element(ElementKind::Parameter, Some("String"));
        let b = element(ElementKind::Parameter, Some("String"));
        let c = element(ElementKind::Parameter, Some("int"));
        let unknown = element(ElementKind::Parameter, None);
        assert!(oracle.is_same_type(&a, &b));
        assert!(!oracle.is_same_type(&a, &c));
        assert!(!oracle.is_same_type(&unknown, &unknown.clone()));
    }

    #[test]
    fn module_by_supertype_flag_or_marker() {
        let oracle = DeclaredTypeOracle::default();

        let mut by_supertype = element(ElementKind::Type, None);
        by_supertype.supertypes = vec![
            "com.google.inject.AbstractModule".into(),
            "com.google.inject.Module".into(),
        ];
        assert!(oracle.is_module_container(&by_supertype));

        let mut by_flag = element(ElementKind::Type, None);
        by_flag.module = true;
        assert!(oracle.is_module_container(&by_flag));

        let mut by_marker = element(ElementKind::Type, None);
        by_marker.markers = vec![Marker::new(
            MarkerKind::Module,
            Vocabulary::Primary,
            "dagger.Module",
        )];
        assert!(oracle.is_module_container(&by_marker));

        let mut plain = element(ElementKind::Type, None);
        plain.supertypes = vec!["java.io.Serializable".into()];
        assert!(!oracle.is_module_container(&plain));
    }

    #[test]
    fn custom_module_supertypes() {
        let oracle = DeclaredTypeOracle::new(["app.BaseModule"]);
        let mut ty = element(ElementKind::Type, None);
        ty.supertypes = vec!["com.google.inject.Module".into()];
        assert!(!oracle.is_module_container(&ty));
        ty.supertypes.push("app.BaseModule".into());
        assert!(oracle.is_module_container(&ty));
    }
}
