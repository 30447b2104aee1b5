//! Accumulating error report.
//!
//! Semantic passes push errors and warnings into an [`ErrorReport`] while
//! they run; the driver inspects counts afterwards and stops at a
//! checkpoint if anything went wrong. Diagnostics are kept sorted and
//! deduplicated (see the `Ord` impl on [`Diagnostic`]).

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::position::SrcLocation;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Report configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportOptions {
    /// Drop warnings instead of recording them.
    pub no_warn: bool,
}

/// Returned by [`ErrorReport::check`] when at least one error was recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportFailure {
    pub errors: usize,
}

impl fmt::Display for ReportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors generated, evaluation aborted", self.errors)
    }
}

impl std::error::Error for ReportFailure {}

#[derive(Clone, Debug, Default)]
pub struct ErrorReport {
    diagnostics: BTreeSet<Diagnostic>,
    options: ReportOptions,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReportOptions) -> Self {
        Self {
            diagnostics: BTreeSet::new(),
            options,
        }
    }

    pub fn options(&self) -> ReportOptions {
        self.options
    }

    pub fn num_errors(&self) -> usize {
        self.count(DiagnosticKind::Error)
    }

    pub fn num_warnings(&self) -> usize {
        self.count(DiagnosticKind::Warning)
    }

    pub fn num_issues(&self) -> usize {
        self.diagnostics.len()
    }

    fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// Adds an error with the given message and optional location.
    pub fn add_error(&mut self, message: impl Into<String>, location: impl Into<Option<SrcLocation>>) {
        self.diagnostics.insert(Diagnostic::error(message, location));
    }

    /// Adds a warning with the given message and optional location.
    ///
    /// Ignored when the report was configured with `no_warn`.
    pub fn add_warning(
        &mut self,
        message: impl Into<String>,
        location: impl Into<Option<SrcLocation>>,
    ) {
        if !self.options.no_warn {
            self.diagnostics.insert(Diagnostic::warning(message, location));
        }
    }

    /// Adds a prebuilt diagnostic.
    ///
    /// Warnings are dropped under `no_warn` here as well, so the option
    /// holds for every way of adding one.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        if diagnostic.kind == DiagnosticKind::Warning && self.options.no_warn {
            return;
        }
        self.diagnostics.insert(diagnostic);
    }

    /// Diagnostics in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Fail-if-errors checkpoint.
    pub fn check(&self) -> Result<(), ReportFailure> {
        match self.num_errors() {
            0 => Ok(()),
            errors => Err(ReportFailure { errors }),
        }
    }

    /// Print the report to stderr and terminate the process if any error
    /// was recorded. Meant for drivers only; library code uses [`check`](Self::check).
    #[allow(clippy::print_stderr)]
    pub fn exit_if_errors(&self) {
        if let Err(failure) = self.check() {
            eprint!("{self}");
            eprintln!("{}", failure.to_string().bright_red());
            std::process::exit(1);
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ErrorReport {
    type Item = &'a Diagnostic;
    type IntoIter = std::collections::btree_set::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
#[path = "../tests/report_tests.rs"]
mod tests;
