//! Check command implementation.

use anyhow::{Context, Result};
use inject_lint_core::{Config, Diagnostic, RuleBox, Validator};
use inject_lint_rules::{all_rules, filter_rules};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Loads the resolved configuration, or defaults when none was found.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

/// Selects the rules to run from a comma-separated `--rules` filter.
pub fn select_rules(rules_filter: Option<&str>) -> Vec<RuleBox> {
    let Some(filter) = rules_filter else {
        return all_rules();
    };
    let keys: Vec<String> = filter
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect();

    filter_rules(all_rules(), &keys)
}

/// Runs the check command. Returns whether any error was reported.
pub fn run(
    file: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    source: &ConfigSource,
) -> Result<bool> {
    let config = load_config(source)?;

    let validator = Validator::builder()
        .config(config)
        .rules(select_rules(rules_filter.as_deref()))
        .build();

    tracing::info!(
        "Checking {} with {} rules",
        file.display(),
        validator.enabled_codes().len()
    );

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let report = validator
        .validate_file(file, &mut diagnostics)
        .context("Validation failed")?;

    super::output::print(&diagnostics, &report, format)?;

    Ok(report.has_errors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn select_all_rules_by_default() {
        assert_eq!(select_rules(None).len(), 14);
    }

    #[test]
    fn select_rules_by_code_and_name() {
        let rules = select_rules(Some("ScopeOnAbstractType, qualifier-cardinality,,bogus"));
        let codes: Vec<&str> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec!["MoreThanOneQualifier", "ScopeOnAbstractType"]);
    }

    #[test]
    fn run_reports_errors() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("decls.json");
        fs::write(
            &file,
            r#"[{"kind": "type", "name": "Svc", "modifiers": ["interface"],
                 "markers": [{"name": "javax.inject.Singleton"}]}]"#,
        )
        .unwrap();

        let has_errors = run(&file, OutputFormat::Compact, None, &ConfigSource::Default).unwrap();
        assert!(has_errors);
    }

    #[test]
    fn run_honors_disabled_rule() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("decls.json");
        fs::write(
            &file,
            r#"[{"kind": "type", "name": "Svc", "modifiers": ["interface"],
                 "markers": [{"name": "javax.inject.Singleton"}]}]"#,
        )
        .unwrap();
        let config = tmp.path().join("inject-lint.toml");
        fs::write(&config, "[rules.scope-on-abstract-type]\nenabled = false\n").unwrap();

        let has_errors =
            run(&file, OutputFormat::Compact, None, &ConfigSource::Project(config)).unwrap();
        assert!(!has_errors);
    }

    #[test]
    fn run_fails_on_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = run(
            &tmp.path().join("missing.json"),
            OutputFormat::Text,
            None,
            &ConfigSource::Default,
        );
        assert!(result.is_err());
    }

    #[test]
    fn load_config_reports_bad_toml() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("inject-lint.toml");
        fs::write(&config, "[rules\n").unwrap();
        assert!(load_config(&ConfigSource::Explicit(config)).is_err());
    }
}
