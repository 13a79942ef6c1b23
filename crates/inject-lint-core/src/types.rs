//! Core types for validation diagnostics and reports.

use crate::model::ElementId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for diagnostics.
///
/// Fixed per rule: the engine and the reporter never escalate or demote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Legal, but likely to behave unexpectedly at runtime.
    Warning,
    /// Invalid under the DI model; code generation should not proceed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => f.pad("warning"),
            Self::Error => f.pad("error"),
        }
    }
}

/// Source location reported by the host for a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Source file path.
    pub file: PathBuf,
    /// Line number (1-indexed).
    #[serde(default)]
    pub line: usize,
    /// Column number (1-indexed).
    #[serde(default)]
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A finding produced by a rule for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule code, also the suppression key (e.g., `MoreThanOneQualifier`).
    pub code: String,
    /// Rule name (e.g., `qualifier-cardinality`).
    pub rule: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Element the diagnostic is reported against.
    pub element: ElementId,
    /// Host location of the element, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Human-readable message.
    pub message: String,
    /// Optional hint for fixing the declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        element: ElementId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            element,
            location: None,
            message: message.into(),
            help: None,
        }
    }

    /// Attaches the element's source location.
    #[must_use]
    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }

    /// Adds a fix hint to this diagnostic.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Returns true for error-severity diagnostics.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Formats the diagnostic for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = match &self.location {
            Some(location) => format!("{} {} at {}\n", self.code, self.rule, location),
            None => format!("{} {} at element #{}\n", self.code, self.rule, self.element),
        };
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(help) = &self.help {
            let _ = writeln!(output, "  = help: {help}");
        }
        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{} [{}] {}", self.severity, self.code, self.message)
    }
}

/// Adapts a [`Diagnostic`] to a miette report for rich terminal rendering.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    code: String,
    severity: Severity,
    help: Option<String>,
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(d: &Diagnostic) -> Self {
        let message = match &d.location {
            Some(location) => format!("{} ({location})", d.message),
            None => d.message.clone(),
        };
        Self {
            message,
            code: d.code.clone(),
            severity: d.severity,
            help: d.help.clone(),
        }
    }
}

impl miette::Diagnostic for DiagnosticReport {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Warning => miette::Severity::Warning,
            Severity::Error => miette::Severity::Error,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }
}

/// Summary of one validation run, returned by the reporter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Number of error diagnostics forwarded to the sink.
    pub errors: usize,
    /// Number of warning diagnostics forwarded to the sink.
    pub warnings: usize,
    /// Number of diagnostics dropped by element suppression.
    pub suppressed: usize,
    /// Number of elements collected.
    pub elements_checked: usize,
}

impl Report {
    /// Returns true if any error was reported.
    ///
    /// Hosts use this to decide whether to halt code generation.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Returns true if any warning or error was reported.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.warnings > 0 || self.errors > 0
    }

    /// Total number of diagnostics forwarded to the sink.
    #[must_use]
    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }

    /// Records one forwarded diagnostic.
    pub(crate) fn count(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
    }
}
