//! Host-supplied declaration trees (input DTO layer).
//!
//! These types exist for serde deserialization of what a host compiler or
//! parser hands over. The collector converts them into the [`ElementTree`]
//! model.
//!
//! [`ElementTree`]: crate::ElementTree

use crate::model::{ElementKind, MarkerKind, MarkerValue, Modifier, Vocabulary};
use crate::types::Location;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// One declared element and everything it encloses.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Declaration {
    /// Element kind.
    pub kind: ElementKind,
    /// Simple name.
    pub name: String,
    /// Modifiers.
    #[serde(default)]
    pub modifiers: BTreeSet<Modifier>,
    /// Attached markers, unclassified.
    #[serde(default)]
    pub markers: Vec<MarkerDecl>,
    /// Declared type of a field or parameter (e.g. `java.util.List<String>`).
    #[serde(default, rename = "type")]
    pub declared_type: Option<String>,
    /// Source location.
    #[serde(default)]
    pub location: Option<Location>,
    /// All supertypes of a type, transitively.
    #[serde(default)]
    pub supertypes: Vec<String>,
    /// Host-asserted module container flag.
    #[serde(default)]
    pub module: bool,
    /// Nested types, fields, methods and constructors.
    #[serde(default)]
    pub enclosed: Vec<Declaration>,
    /// Parameters of a method or constructor.
    #[serde(default)]
    pub parameters: Vec<Declaration>,
}

impl Declaration {
    /// Creates a bare declaration.
    #[must_use]
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: BTreeSet::new(),
            markers: Vec::new(),
            declared_type: None,
            location: None,
            supertypes: Vec::new(),
            module: false,
            enclosed: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Adds a modifier.
    #[must_use]
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Adds a marker.
    #[must_use]
    pub fn marker(mut self, marker: MarkerDecl) -> Self {
        self.markers.push(marker);
        self
    }

    /// Sets the declared type.
    #[must_use]
    pub fn declared_type(mut self, ty: impl Into<String>) -> Self {
        self.declared_type = Some(ty.into());
        self
    }

    /// Adds an enclosed declaration.
    #[must_use]
    pub fn enclose(mut self, child: Declaration) -> Self {
        self.enclosed.push(child);
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: Declaration) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A marker as attached by the host, before classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerDecl {
    /// Marker name, usually fully qualified (e.g. `javax.inject.Inject`).
    pub name: String,
    /// Semantic kind, when the host already knows it.
    #[serde(default)]
    pub kind: Option<MarkerKind>,
    /// Vocabulary, when the host already knows it.
    #[serde(default)]
    pub vocabulary: Option<Vocabulary>,
    /// Markers placed on this marker's own definition
    /// (e.g. `javax.inject.Qualifier`).
    #[serde(default)]
    pub meta: Vec<String>,
    /// Marker value.
    #[serde(default)]
    pub value: Option<MarkerValue>,
}

impl MarkerDecl {
    /// A marker identified only by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            vocabulary: None,
            meta: Vec::new(),
            value: None,
        }
    }

    /// A marker whose kind and vocabulary the host resolved itself.
    #[must_use]
    pub fn classified(name: impl Into<String>, kind: MarkerKind, vocabulary: Vocabulary) -> Self {
        Self {
            kind: Some(kind),
            vocabulary: Some(vocabulary),
            ..Self::named(name)
        }
    }

    /// Adds a meta-marker.
    #[must_use]
    pub fn meta(mut self, meta: impl Into<String>) -> Self {
        self.meta.push(meta.into());
        self
    }

    /// Sets the marker value.
    #[must_use]
    pub fn value(mut self, value: MarkerValue) -> Self {
        self.value = Some(value);
        self
    }
}

/// A file of root declarations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclarationSet {
    /// Top-level declarations.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl DeclarationSet {
    /// Parses declarations from JSON: either a bare array or
    /// `{"declarations": [...]}`.
    ///
    /// The shape is chosen by the first non-whitespace character, so parse
    /// errors name the offending field and position.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(content: &str) -> Result<Self, InputError> {
        let is_bare = content.trim_start().starts_with('[');
        let parsed = if is_bare {
            serde_json::from_str(content).map(|declarations| Self { declarations })
        } else {
            serde_json::from_str(content)
        };
        parsed.map_err(|e| InputError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses declarations from TOML (`[[declarations]]` tables).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(content: &str) -> Result<Self, InputError> {
        toml::from_str(content).map_err(|e| InputError::Parse {
            message: e.to_string(),
        })
    }

    /// Loads declarations from a file, choosing the format by extension
    /// (`.toml`, anything else is read as JSON).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path).map_err(|e| InputError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let is_toml = path.extension().is_some_and(|ext| ext == "toml");
        let parsed = if is_toml {
            Self::from_toml(&content)
        } else {
            Self::from_json(&content)
        };
        parsed.map_err(|e| match e {
            InputError::Parse { message } => InputError::ParseFile {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }
}

/// Errors reading declaration input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error reading the input file.
    #[error("Failed to read declarations from {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Malformed declaration input.
    #[error("Failed to parse declarations: {message}")]
    Parse {
        /// Parser message.
        message: String,
    },

    /// Malformed declaration file.
    #[error("Failed to parse declarations in {path}: {message}")]
    ParseFile {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json_array() {
        let set = DeclarationSet::from_json(
            r#"[{"kind": "type", "name": "Foo", "modifiers": ["abstract"]}]"#,
        )
        .unwrap();
        assert_eq!(set.declarations.len(), 1);
        assert!(set.declarations[0].modifiers.contains(&Modifier::Abstract));
    }

    #[test]
    fn parses_wrapped_json_with_markers() {
        let set = DeclarationSet::from_json(
            r#"{"declarations": [{
                "kind": "type", "name": "Foo",
                "enclosed": [{
                    "kind": "constructor", "name": "Foo",
                    "markers": [{"name": "javax.inject.Inject"}],
                    "parameters": [{
                        "kind": "parameter", "name": "color", "type": "Color",
                        "markers": [{"name": "com.google.inject.assistedinject.Assisted", "value": "fg"}]
                    }]
                }]
            }]}"#,
        )
        .unwrap();
        let ctor = &set.declarations[0].enclosed[0];
        assert_eq!(ctor.kind, ElementKind::Constructor);
        let param = &ctor.parameters[0];
        assert_eq!(param.declared_type.as_deref(), Some("Color"));
        assert_eq!(param.markers[0].value, Some(MarkerValue::Text("fg".into())));
    }

    #[test]
    fn parses_toml() {
        let set = DeclarationSet::from_toml(
            r#"
[[declarations]]
kind = "type"
name = "PumpModule"
module = true

[[declarations.enclosed]]
kind = "method"
name = "providePump"
markers = [{ name = "dagger.Provides" }]
"#,
        )
        .unwrap();
        assert!(set.declarations[0].module);
        assert_eq!(set.declarations[0].enclosed[0].name, "providePump");
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = DeclarationSet::from_json(r#"[{"kind": "package", "name": "p"}]"#).unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }));
    }

    #[test]
    fn unknown_field_is_named_with_position() {
        let err = DeclarationSet::from_json(r#"[{"kind":"type","nmae":"Foo"}]"#).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown field `nmae`"), "{message}");
        assert!(message.contains("line 1"), "{message}");

        let err = DeclarationSet::from_json(r#"{"declarations": [], "extra": 1}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field `extra`"));
    }
}
