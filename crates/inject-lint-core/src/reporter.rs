//! Forwarding diagnostics to a sink.

use crate::model::ElementTree;
use crate::types::{Diagnostic, Report};
use tracing::debug;

/// Consumer of reported diagnostics, e.g. a host compiler's messager.
pub trait DiagnosticSink {
    /// Receives one diagnostic.
    fn accept(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn accept(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Applies per-element suppression and forwards the rest unchanged.
///
/// A diagnostic is dropped when its target element carries a suppression
/// marker naming the diagnostic's code. Nothing is escalated, merged or
/// deduplicated; order is preserved.
#[derive(Debug, Clone, Copy)]
pub struct Reporter<'a> {
    tree: &'a ElementTree,
}

impl<'a> Reporter<'a> {
    /// Creates a reporter for diagnostics about `tree`.
    #[must_use]
    pub fn new(tree: &'a ElementTree) -> Self {
        Self { tree }
    }

    /// Filters and forwards `diagnostics` to `sink`.
    pub fn report<I>(&self, diagnostics: I, sink: &mut dyn DiagnosticSink) -> Report
    where
        I: IntoIterator<Item = Diagnostic>,
    {
        let mut report = Report {
            elements_checked: self.tree.len(),
            ..Report::default()
        };

        for diagnostic in diagnostics {
            let suppressed = self
                .tree
                .get(diagnostic.element)
                .is_some_and(|e| self.tree.classification(e.id).is_suppressed(&diagnostic.code));
            if suppressed {
                debug!(
                    "Suppressed {} on element #{}",
                    diagnostic.code, diagnostic.element
                );
                report.suppressed += 1;
                continue;
            }
            report.count(diagnostic.severity);
            sink.accept(diagnostic);
        }

        report
    }
}
