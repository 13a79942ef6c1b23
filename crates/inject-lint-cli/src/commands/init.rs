//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# inject-lint configuration

# Types whose subtypes may declare provider methods.
[modules]
supertypes = [
    "com.google.inject.Module",
    "com.google.gwt.inject.client.GinModule",
]

# Extra marker names, classified by kind:
# injection, assisted-injection, assisted-parameter, qualifier, scope,
# provides, module, suppression
# [markers."com.example.Inject"]
# kind = "injection"
# vocabulary = "alternate"

# Markers whose own definition carries one of these are classified too.
# [meta_markers."com.example.ScopeMarker"]
# kind = "scope"

# Rules can be disabled by code or name. Severities are fixed.
# [rules.InjectOnFinalField]
# enabled = false

# [rules.qualifier-placement]
# enabled = false
"#;

/// File name written by `init`.
const CONFIG_FILE: &str = "inject-lint.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules and markers");
    println!("  2. Run: inject-lint check <declarations.json>");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}
