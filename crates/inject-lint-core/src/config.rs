//! Configuration types for inject-lint.

use crate::classifier::MarkerCatalog;
use crate::model::{MarkerKind, Vocabulary};
use crate::oracle::{DeclaredTypeOracle, DEFAULT_MODULE_SUPERTYPES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration (`inject-lint.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Module container detection.
    #[serde(default)]
    pub modules: ModulesConfig,

    /// Additional marker names, keyed by marker name.
    #[serde(default)]
    pub markers: BTreeMap<String, MarkerEntry>,

    /// Additional meta-markers, keyed by meta-marker name.
    #[serde(default)]
    pub meta_markers: BTreeMap<String, MarkerEntry>,

    /// Per-rule configurations, keyed by rule code or rule name.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled. The rule may be configured under its
    /// code or its name; a disabled entry under either wins.
    #[must_use]
    pub fn is_rule_enabled(&self, code: &str, name: &str) -> bool {
        [code, name]
            .iter()
            .filter_map(|key| self.rules.get(*key))
            .all(|c| c.enabled.unwrap_or(true))
    }

    /// Builds the marker catalog: defaults plus configured entries.
    #[must_use]
    pub fn marker_catalog(&self) -> MarkerCatalog {
        let catalog = self
            .markers
            .iter()
            .fold(MarkerCatalog::default(), |catalog, (name, entry)| {
                catalog.with_marker(name.clone(), entry.kind, entry.vocabulary)
            });
        self.meta_markers
            .iter()
            .fold(catalog, |catalog, (name, entry)| {
                catalog.with_meta_marker(name.clone(), entry.kind, entry.vocabulary)
            })
    }

    /// Builds the default type oracle for the configured module supertypes.
    #[must_use]
    pub fn type_oracle(&self) -> DeclaredTypeOracle {
        DeclaredTypeOracle::new(self.modules.supertypes.iter().cloned())
    }
}

/// Module container configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesConfig {
    /// Supertypes that make a type a module container.
    #[serde(default = "default_module_supertypes")]
    pub supertypes: Vec<String>,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            supertypes: default_module_supertypes(),
        }
    }
}

fn default_module_supertypes() -> Vec<String> {
    DEFAULT_MODULE_SUPERTYPES
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// A configured marker classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerEntry {
    /// Semantic kind.
    pub kind: MarkerKind,
    /// Vocabulary (default: primary).
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

/// Per-rule configuration.
///
/// Severity is fixed per rule and cannot be overridden here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
