//! Configuration file resolution with global fallback.
//!
//! Resolves the configuration for one declaration file, in order:
//!
//! 1. `--config` flag or `$INJECT_LINT_CONFIG` (explicit path)
//! 2. `inject-lint.toml` or `.inject-lint.toml` in the declaration file's
//!    directory
//! 3. `$INJECT_LINT_CONFIG_DIR/config.toml`, else `~/.inject-lint/config.toml`
//! 4. No config found → defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line or in the environment.
    Explicit(PathBuf),
    /// Found next to the declaration file.
    Project(PathBuf),
    /// Loaded from the global config directory.
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Config file names looked up beside the declarations, in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["inject-lint.toml", ".inject-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration for `declarations`.
#[must_use]
pub fn resolve(declarations: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(declarations, explicit, global_config_dir())
}

/// Directory searched for project config: the file's parent, or `.` for a
/// bare file name.
fn declaration_dir(declarations: &Path) -> &Path {
    declarations
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn resolve_inner(
    declarations: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let dir = declaration_dir(declarations);
    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match global_dir.map(|d| d.join(GLOBAL_CONFIG_NAME)) {
        Some(candidate) if candidate.is_file() => {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        }
        _ => ConfigSource::Default,
    }
}

/// Returns the global config directory: `$INJECT_LINT_CONFIG_DIR`, else
/// `~/.inject-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("INJECT_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".inject-lint"))
}
