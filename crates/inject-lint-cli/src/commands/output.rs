//! Shared output formatting for validation results.

use anyhow::Result;
use inject_lint_core::{Diagnostic, DiagnosticReport, Report, Severity};
use miette::GraphicalReportHandler;
use serde::Serialize;

use crate::OutputFormat;

/// JSON document emitted by `--format json`.
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    diagnostics: &'a [Diagnostic],
    report: &'a Report,
}

/// Print diagnostics in the specified format.
pub fn print(diagnostics: &[Diagnostic], report: &Report, format: OutputFormat) -> Result<()> {
    print!("{}", render(diagnostics, report, format)?);
    Ok(())
}

/// Render diagnostics in the specified format.
pub fn render(diagnostics: &[Diagnostic], report: &Report, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(diagnostics, report),
        OutputFormat::Json => render_json(diagnostics, report)?,
        OutputFormat::Compact => render_compact(diagnostics),
        OutputFormat::Pretty => render_pretty(diagnostics, report)?,
    })
}

fn render_text(diagnostics: &[Diagnostic], report: &Report) -> String {
    let mut out = String::new();

    for diagnostic in diagnostics {
        let severity_indicator = match diagnostic.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
        };
        let at = diagnostic
            .location
            .as_ref()
            .map_or_else(|| format!("element #{}", diagnostic.element), ToString::to_string);

        out.push_str(&format!("{} {} at {}\n", diagnostic.code, diagnostic.rule, at));
        out.push_str(&format!("  {}: {}\n", severity_indicator, diagnostic.message));
        if let Some(help) = &diagnostic.help {
            out.push_str(&format!("  = help: {help}\n"));
        }
        out.push('\n');
    }

    out.push_str(&summary(report, true));
    out
}

fn summary(report: &Report, color: bool) -> String {
    let text = format!(
        "Found {} error(s), {} warning(s) in {} element(s)",
        report.errors, report.warnings, report.elements_checked
    );
    if !color {
        return format!("{text}\n");
    }
    let summary_color = if report.errors > 0 {
        "\x1b[31m"
    } else if report.warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    format!("{summary_color}{text}\x1b[0m\n")
}

fn render_json(diagnostics: &[Diagnostic], report: &Report) -> Result<String> {
    let json = serde_json::to_string_pretty(&JsonOutput {
        diagnostics,
        report,
    })?;
    Ok(format!("{json}\n"))
}

fn render_compact(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{d}\n"))
        .collect()
}

fn render_pretty(diagnostics: &[Diagnostic], report: &Report) -> Result<String> {
    let handler = GraphicalReportHandler::new();
    let mut out = String::new();
    for diagnostic in diagnostics {
        handler.render_report(&mut out, &DiagnosticReport::from(diagnostic))?;
        out.push('\n');
    }
    out.push_str(&summary(report, false));
    Ok(out)
}
