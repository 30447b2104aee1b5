//! Diagnostic values produced by semantic passes.
//!
//! Diagnostics are plain data. Ordering is part of the contract: an
//! [`ErrorReport`](crate::ErrorReport) stores them in a sorted set, so the
//! `Ord` impl on [`Diagnostic`] decides both iteration order and which
//! duplicates collapse.

use crate::position::SrcLocation;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic severity. Errors sort before warnings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticKind {
    Error,
    Warning,
}

impl DiagnosticKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// A message with an optional source location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticMessage {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<SrcLocation>,
}

impl DiagnosticMessage {
    pub fn new(message: impl Into<String>, location: impl Into<Option<SrcLocation>>) -> Self {
        Self {
            message: message.into(),
            location: location.into(),
        }
    }

    /// A message that is not tied to any source position.
    pub fn without_location(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }

    /// The source location of this message.
    ///
    /// # Panics
    ///
    /// Panics if the message was created without a location; check
    /// [`has_location`](Self::has_location) first.
    pub fn location(&self) -> &SrcLocation {
        match &self.location {
            Some(location) => location,
            None => panic!("diagnostic message `{}` has no source location", self.message),
        }
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(location) = &self.location {
            write!(f, " in {}", location.extloc())?;
        }
        writeln!(f)
    }
}

/// An error or warning with a primary message and optional follow-up notes.
#[derive(Clone, Debug, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub primary: DiagnosticMessage,
    /// Notes attached below the primary message (e.g. "previous declaration here").
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<DiagnosticMessage>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind, primary: DiagnosticMessage) -> Self {
        Self {
            kind,
            primary,
            additional: Vec::new(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>, location: impl Into<Option<SrcLocation>>) -> Self {
        Self::new(DiagnosticKind::Error, DiagnosticMessage::new(message, location))
    }

    #[must_use]
    pub fn warning(message: impl Into<String>, location: impl Into<Option<SrcLocation>>) -> Self {
        Self::new(DiagnosticKind::Warning, DiagnosticMessage::new(message, location))
    }

    /// Add a follow-up note to this diagnostic.
    #[must_use]
    pub fn with_note(mut self, note: DiagnosticMessage) -> Self {
        self.additional.push(note);
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == DiagnosticKind::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.primary)?;
        for note in &self.additional {
            write!(f, "{note}")?;
        }
        Ok(())
    }
}

// Located diagnostics come first, then source order, then errors before
// warnings, then message text. Notes do not take part, so two diagnostics
// differing only in their notes are the same entry of a report.
impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_location = match (&self.primary.location, &other.primary.location) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_location
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.primary.message.cmp(&other.primary.message))
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Diagnostic {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Diagnostic {}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
