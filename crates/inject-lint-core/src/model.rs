//! Element and marker data model.
//!
//! The collector turns the host's nested declarations into an [`ElementTree`]:
//! a flat arena of [`Element`]s addressed by [`ElementId`], plus the
//! [`ParameterOwnerMap`]. Back-references (`enclosing`, parameter owners) are
//! plain indices, so the tree owns every element exactly once.

use crate::classifier::Classification;
use crate::types::Location;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Index of an element in its [`ElementTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(usize);

impl ElementId {
    /// Creates an id from a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a declared program element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A class or interface.
    Type,
    /// A field of a type.
    Field,
    /// A method of a type.
    Method,
    /// A constructor of a type.
    Constructor,
    /// A parameter of a method or constructor.
    Parameter,
}

impl ElementKind {
    /// Returns true for methods and constructors.
    #[must_use]
    pub fn is_executable(self) -> bool {
        matches!(self, Self::Method | Self::Constructor)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Type => "type",
            Self::Field => "field",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Parameter => "parameter",
        };
        f.write_str(s)
    }
}

/// Declaration modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// `abstract`.
    Abstract,
    /// `final`.
    Final,
    /// `static`.
    Static,
    /// The type is an interface (implicitly abstract).
    Interface,
    /// `public`.
    Public,
    /// `protected`.
    Protected,
    /// `private`.
    Private,
}

/// Which of the two equivalent marker ecosystems a marker belongs to.
///
/// Rules treat both alike except where message text or severity depends on
/// the vocabulary (final-field and abstract-method injection).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    /// The strict, standardized marker set (e.g. `javax.inject`).
    #[default]
    Primary,
    /// The richer, extended marker set (e.g. `com.google.inject`).
    Alternate,
}

impl std::fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Alternate => write!(f, "alternate"),
        }
    }
}

/// Semantic kind of a classified marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKind {
    /// Target populated by the DI system.
    Injection,
    /// Constructor taking some arguments from the caller.
    AssistedInjection,
    /// Caller-supplied constructor parameter.
    AssistedParameter,
    /// Binding qualifier.
    Qualifier,
    /// Instance scope.
    Scope,
    /// Provider method.
    Provides,
    /// Module container designation.
    Module,
    /// Disables named rule codes on the annotated element.
    Suppression,
}

/// Value attached to a marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerValue {
    /// A single string, e.g. `@Assisted("fg")`.
    Text(String),
    /// A list of strings, e.g. `@SuppressWarnings({"a", "b"})`.
    List(Vec<String>),
}

impl MarkerValue {
    /// Iterates the contained strings.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Text(s) => std::slice::from_ref(s),
            Self::List(items) => items,
        };
        slice.iter().map(String::as_str)
    }
}

/// A classified marker attached to an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Semantic kind.
    pub kind: MarkerKind,
    /// Vocabulary the marker comes from.
    pub vocabulary: Vocabulary,
    /// Marker name as written by the host, used in messages.
    pub name: String,
    /// Disambiguation tag or suppressed rule codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<MarkerValue>,
}

impl Marker {
    /// Creates a marker without a value.
    #[must_use]
    pub fn new(kind: MarkerKind, vocabulary: Vocabulary, name: impl Into<String>) -> Self {
        Self {
            kind,
            vocabulary,
            name: name.into(),
            value: None,
        }
    }

    /// Sets the marker value.
    #[must_use]
    pub fn with_value(mut self, value: MarkerValue) -> Self {
        self.value = Some(value);
        self
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.name)
    }
}

/// A declared program element under validation.
#[derive(Debug, Clone)]
pub struct Element {
    /// This element's id in the tree.
    pub id: ElementId,
    /// Declaration kind.
    pub kind: ElementKind,
    /// Simple name.
    pub name: String,
    /// Modifiers.
    pub modifiers: BTreeSet<Modifier>,
    /// Enclosing element, if any.
    pub enclosing: Option<ElementId>,
    /// Enclosed types, fields, methods and constructors, in declaration order.
    pub enclosed: Vec<ElementId>,
    /// Parameters of a method or constructor, in declaration order.
    pub parameters: Vec<ElementId>,
    /// Classified markers.
    pub markers: Vec<Marker>,
    /// Declared type of a field or parameter.
    pub declared_type: Option<String>,
    /// All supertypes of a type, as reported by the host.
    pub supertypes: Vec<String>,
    /// Host-asserted module container flag.
    pub module: bool,
    /// Source location.
    pub location: Option<Location>,
}

impl Element {
    /// Returns true if the element carries the modifier.
    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Abstract types, interfaces and abstract methods.
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.has_modifier(Modifier::Abstract) || self.has_modifier(Modifier::Interface)
    }

    /// Returns true if the element is `final`.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.has_modifier(Modifier::Final)
    }

    /// Iterates markers of one semantic kind.
    pub fn markers_of(&self, kind: MarkerKind) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(move |m| m.kind == kind)
    }

    /// First marker of the given kind and vocabulary.
    #[must_use]
    pub fn marker(&self, kind: MarkerKind, vocabulary: Vocabulary) -> Option<&Marker> {
        self.markers_of(kind).find(|m| m.vocabulary == vocabulary)
    }
}

/// Maps each parameter to its declaring method or constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterOwnerMap(BTreeMap<ElementId, ElementId>);

impl ParameterOwnerMap {
    /// Records the owner of a parameter.
    pub(crate) fn insert(&mut self, parameter: ElementId, owner: ElementId) {
        self.0.insert(parameter, owner);
    }

    /// Returns the declaring executable of a parameter.
    #[must_use]
    pub fn owner(&self, parameter: ElementId) -> Option<ElementId> {
        self.0.get(&parameter).copied()
    }

    /// Number of owned parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no parameter was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(parameter, owner)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, ElementId)> + '_ {
        self.0.iter().map(|(p, o)| (*p, *o))
    }
}

/// The flattened model built once per validation run.
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    pub(crate) elements: Vec<Element>,
    pub(crate) order: Vec<ElementId>,
    pub(crate) classifications: Vec<Classification>,
    pub(crate) owners: ParameterOwnerMap,
    pub(crate) roots: Vec<ElementId>,
}

impl ElementTree {
    /// Returns the element with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this tree.
    #[must_use]
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    /// Returns the element with the given id, if it exists.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// Returns the classification of an element's markers.
    #[must_use]
    pub fn classification(&self, id: ElementId) -> &Classification {
        &self.classifications[id.index()]
    }

    /// Element ids in traversal (declaration) order.
    #[must_use]
    pub fn order(&self) -> &[ElementId] {
        &self.order
    }

    /// Elements in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().map(|id| self.element(*id))
    }

    /// Top-level element ids.
    #[must_use]
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Number of collected elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The parameter → executable map.
    #[must_use]
    pub fn owners(&self) -> &ParameterOwnerMap {
        &self.owners
    }

    /// Declaring method or constructor of a parameter.
    #[must_use]
    pub fn owner(&self, parameter: ElementId) -> Option<&Element> {
        self.owners.owner(parameter).map(|id| self.element(id))
    }

    /// The immediately enclosing element.
    #[must_use]
    pub fn enclosing(&self, id: ElementId) -> Option<&Element> {
        self.element(id).enclosing.map(|e| self.element(e))
    }

    /// Constructors declared directly in a type.
    pub fn constructors(&self, ty: ElementId) -> impl Iterator<Item = &Element> {
        self.element(ty)
            .enclosed
            .iter()
            .map(|id| self.element(*id))
            .filter(|e| e.kind == ElementKind::Constructor)
    }

    /// Parameters of a method or constructor.
    pub fn parameters(&self, executable: ElementId) -> impl Iterator<Item = &Element> {
        self.element(executable)
            .parameters
            .iter()
            .map(|id| self.element(*id))
    }

    /// Renders an element for messages.
    ///
    /// Fields, methods and constructors are qualified by their enclosing
    /// element (`Outer.member`); everything else uses its own name.
    #[must_use]
    pub fn display_name(&self, id: ElementId) -> String {
        let element = self.element(id);
        match element.kind {
            ElementKind::Field | ElementKind::Method | ElementKind::Constructor => {
                match self.enclosing(id) {
                    Some(outer) => format!("{}.{}", outer.name, element.name),
                    None => element.name.clone(),
                }
            }
            ElementKind::Type | ElementKind::Parameter => element.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_value_texts() {
        let single = MarkerValue::Text("fg".into());
        assert_eq!(single.texts().collect::<Vec<_>>(), vec!["fg"]);

        let list = MarkerValue::List(vec!["a".into(), "b".into()]);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn marker_value_deserializes_untagged() {
        let text: MarkerValue = serde_json::from_str("\"fg\"").unwrap();
        assert_eq!(text, MarkerValue::Text("fg".into()));
        let list: MarkerValue = serde_json::from_str("[\"a\"]").unwrap();
        assert_eq!(list, MarkerValue::List(vec!["a".into()]));
    }

    #[test]
    fn marker_kind_uses_kebab_case() {
        let kind: MarkerKind = serde_json::from_str("\"assisted-parameter\"").unwrap();
        assert_eq!(kind, MarkerKind::AssistedParameter);
    }

    #[test]
    fn executable_kinds() {
        assert!(ElementKind::Method.is_executable());
        assert!(ElementKind::Constructor.is_executable());
        assert!(!ElementKind::Parameter.is_executable());
    }
}
