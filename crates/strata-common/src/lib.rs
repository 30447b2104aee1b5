//! Common types and utilities for the strata compiler front end.
//!
//! This crate provides the pieces shared between the type engine and the
//! passes that drive it:
//! - Source positions and locations (`Position`, `SrcLocation`)
//! - Diagnostics (`Diagnostic`, `DiagnosticMessage`, `DiagnosticKind`)
//! - The accumulating error report (`ErrorReport`, `ReportOptions`)

// Line/column source locations
pub mod position;
pub use position::{Position, SrcLocation};

// Diagnostic values and their ordering
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticMessage};

// Error/warning accumulation with a fail-if-errors checkpoint
pub mod report;
pub use report::{ErrorReport, ReportFailure, ReportOptions};
