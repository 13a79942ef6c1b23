//! Marker classification.
//!
//! Host markers are resolved to a semantic [`MarkerKind`] and a
//! [`Vocabulary`] in three steps: an explicit kind from the host, an exact
//! catalog lookup by name, then a lookup of the marker's meta-markers
//! (a marker defined with `@javax.inject.Qualifier` is a qualifier).
//! Markers that resolve to nothing are dropped.

use crate::declaration::MarkerDecl;
use crate::model::{Element, Marker, MarkerKind, MarkerValue, Vocabulary};
use std::collections::{BTreeMap, BTreeSet};

/// Known marker names and meta-markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerCatalog {
    markers: BTreeMap<String, (MarkerKind, Vocabulary)>,
    meta_markers: BTreeMap<String, (MarkerKind, Vocabulary)>,
}

impl Default for MarkerCatalog {
    fn default() -> Self {
        use MarkerKind::{
            AssistedInjection, AssistedParameter, Injection, Module, Provides, Qualifier, Scope,
            Suppression,
        };
        use Vocabulary::{Alternate, Primary};

        let markers = [
            ("javax.inject.Inject", Injection, Primary),
            ("com.google.inject.Inject", Injection, Alternate),
            (
                "com.google.inject.assistedinject.AssistedInject",
                AssistedInjection,
                Alternate,
            ),
            (
                "com.google.inject.assistedinject.Assisted",
                AssistedParameter,
                Alternate,
            ),
            ("javax.inject.Named", Qualifier, Primary),
            ("com.google.inject.name.Named", Qualifier, Alternate),
            ("javax.inject.Singleton", Scope, Primary),
            ("com.google.inject.Singleton", Scope, Alternate),
            ("dagger.Provides", Provides, Primary),
            ("com.google.inject.Provides", Provides, Alternate),
            ("dagger.Module", Module, Primary),
            ("java.lang.SuppressWarnings", Suppression, Primary),
            ("SuppressWarnings", Suppression, Primary),
        ];
        let meta_markers = [
            ("javax.inject.Qualifier", Qualifier, Primary),
            ("com.google.inject.BindingAnnotation", Qualifier, Alternate),
            ("javax.inject.Scope", Scope, Primary),
            ("com.google.inject.ScopeAnnotation", Scope, Alternate),
        ];

        Self {
            markers: markers
                .into_iter()
                .map(|(name, kind, vocab)| (name.to_string(), (kind, vocab)))
                .collect(),
            meta_markers: meta_markers
                .into_iter()
                .map(|(name, kind, vocab)| (name.to_string(), (kind, vocab)))
                .collect(),
        }
    }
}

impl MarkerCatalog {
    /// An empty catalog: only host-classified markers are recognized.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            markers: BTreeMap::new(),
            meta_markers: BTreeMap::new(),
        }
    }

    /// Registers a marker name.
    #[must_use]
    pub fn with_marker(
        mut self,
        name: impl Into<String>,
        kind: MarkerKind,
        vocabulary: Vocabulary,
    ) -> Self {
        self.markers.insert(name.into(), (kind, vocabulary));
        self
    }

    /// Registers a meta-marker name.
    #[must_use]
    pub fn with_meta_marker(
        mut self,
        name: impl Into<String>,
        kind: MarkerKind,
        vocabulary: Vocabulary,
    ) -> Self {
        self.meta_markers.insert(name.into(), (kind, vocabulary));
        self
    }

    /// Looks up a marker name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<(MarkerKind, Vocabulary)> {
        self.markers.get(name).copied()
    }

    /// Looks up a meta-marker name.
    #[must_use]
    pub fn lookup_meta(&self, name: &str) -> Option<(MarkerKind, Vocabulary)> {
        self.meta_markers.get(name).copied()
    }
}

/// Resolves host markers against a [`MarkerCatalog`].
#[derive(Debug, Clone, Default)]
pub struct MarkerClassifier {
    catalog: MarkerCatalog,
}

impl MarkerClassifier {
    /// Creates a classifier over the given catalog.
    #[must_use]
    pub fn new(catalog: MarkerCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &MarkerCatalog {
        &self.catalog
    }

    /// Classifies one marker, or returns `None` if it has no DI meaning.
    #[must_use]
    pub fn classify(&self, decl: &MarkerDecl) -> Option<Marker> {
        let (kind, vocabulary) = match decl.kind {
            Some(kind) => (kind, decl.vocabulary.unwrap_or_default()),
            None => self.resolve(decl)?,
        };
        Some(Marker {
            kind,
            vocabulary,
            name: decl.name.clone(),
            value: decl.value.clone(),
        })
    }

    fn resolve(&self, decl: &MarkerDecl) -> Option<(MarkerKind, Vocabulary)> {
        let (kind, vocabulary) = self
            .catalog
            .lookup(&decl.name)
            .or_else(|| decl.meta.iter().find_map(|m| self.catalog.lookup_meta(m)))?;
        Some((kind, decl.vocabulary.unwrap_or(vocabulary)))
    }

    /// Classifies a marker list, preserving order and dropping unknowns.
    #[must_use]
    pub fn classify_all(&self, decls: &[MarkerDecl]) -> Vec<Marker> {
        decls.iter().filter_map(|d| self.classify(d)).collect()
    }
}

/// Per-element summary of classified markers, answering the rule queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    primary_injection: bool,
    alternate_injection: bool,
    assisted_injection: bool,
    assisted_parameter: Option<AssistedTag>,
    qualifiers: usize,
    scopes: usize,
    provides: bool,
    module: bool,
    suppressed: BTreeSet<String>,
}

/// Disambiguation tag of an assisted parameter.
///
/// Two tags are equal when both carry no value, or both carry the same
/// strings. A single string and a one-element list are the same tag. A valued
/// tag never equals an unvalued one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistedTag(Option<Vec<String>>);

impl AssistedTag {
    /// Builds a tag from an assisted-parameter marker value.
    #[must_use]
    pub fn new(value: Option<&MarkerValue>) -> Self {
        Self(value.map(|v| v.texts().map(String::from).collect()))
    }

    /// The disambiguation strings, if any.
    #[must_use]
    pub fn texts(&self) -> Option<&[String]> {
        self.0.as_deref()
    }
}

impl Classification {
    /// Summarizes an element's classified markers.
    #[must_use]
    pub fn of(element: &Element) -> Self {
        let mut c = Self::default();
        for marker in &element.markers {
            match marker.kind {
                MarkerKind::Injection => match marker.vocabulary {
                    Vocabulary::Primary => c.primary_injection = true,
                    Vocabulary::Alternate => c.alternate_injection = true,
                },
                MarkerKind::AssistedInjection => c.assisted_injection = true,
                MarkerKind::AssistedParameter => {
                    if c.assisted_parameter.is_none() {
                        c.assisted_parameter = Some(AssistedTag::new(marker.value.as_ref()));
                    }
                }
                MarkerKind::Qualifier => c.qualifiers += 1,
                MarkerKind::Scope => c.scopes += 1,
                MarkerKind::Provides => c.provides = true,
                MarkerKind::Module => c.module = true,
                MarkerKind::Suppression => {
                    if let Some(value) = &marker.value {
                        c.suppressed.extend(value.texts().map(String::from));
                    }
                }
            }
        }
        c
    }

    /// Has an injection marker of either vocabulary.
    #[must_use]
    pub fn has_injection(&self) -> bool {
        self.primary_injection || self.alternate_injection
    }

    /// Has an injection marker of the given vocabulary.
    #[must_use]
    pub fn has_injection_of(&self, vocabulary: Vocabulary) -> bool {
        match vocabulary {
            Vocabulary::Primary => self.primary_injection,
            Vocabulary::Alternate => self.alternate_injection,
        }
    }

    /// Has an assisted-injection marker.
    #[must_use]
    pub fn has_assisted_injection(&self) -> bool {
        self.assisted_injection
    }

    /// Injection or assisted injection: the element is an injection point.
    #[must_use]
    pub fn is_injection_point(&self) -> bool {
        self.has_injection() || self.assisted_injection
    }

    /// The assisted-parameter tag, if the element has one.
    #[must_use]
    pub fn assisted_parameter(&self) -> Option<&AssistedTag> {
        self.assisted_parameter.as_ref()
    }

    /// Has at least one qualifier marker.
    #[must_use]
    pub fn has_qualifier(&self) -> bool {
        self.qualifiers > 0
    }

    /// Number of qualifier markers, across both vocabularies.
    #[must_use]
    pub fn qualifier_count(&self) -> usize {
        self.qualifiers
    }

    /// Has at least one scope marker.
    #[must_use]
    pub fn has_scope(&self) -> bool {
        self.scopes > 0
    }

    /// Number of scope markers, across both vocabularies.
    #[must_use]
    pub fn scope_count(&self) -> usize {
        self.scopes
    }

    /// Has a provides marker.
    #[must_use]
    pub fn has_provides(&self) -> bool {
        self.provides
    }

    /// Has a module marker.
    #[must_use]
    pub fn has_module(&self) -> bool {
        self.module
    }

    /// Whether the element's own suppression marker names `code`.
    ///
    /// Exact, case-sensitive match; no wildcards.
    #[must_use]
    pub fn is_suppressed(&self, code: &str) -> bool {
        self.suppressed.contains(code)
    }

    /// All rule codes suppressed on this element.
    #[must_use]
    pub fn suppressed_codes(&self) -> &BTreeSet<String> {
        &self.suppressed
    }
}
