//! Recoverable errors of the declaration API.
//!
//! The panicking constructors on [`TypeEnvironment`](crate::TypeEnvironment)
//! treat these conditions as contract violations. Passes that bind user
//! declarations use the `try_*` forms instead and turn the error into a
//! diagnostic.

use crate::types::TypeId;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnvironmentError {
    /// A type with this qualified name is already registered.
    DuplicateTypeName(String),
    /// No type with this qualified name is registered.
    UnknownTypeName(String),
    /// The handle was issued by a different environment.
    ForeignType(TypeId),
}

impl fmt::Display for EnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTypeName(name) => write!(f, "type `{name}` is already registered"),
            Self::UnknownTypeName(name) => write!(f, "type `{name}` is not registered"),
            Self::ForeignType(id) => write!(
                f,
                "type #{} belongs to a different type environment",
                id.index()
            ),
        }
    }
}

impl std::error::Error for EnvironmentError {}
