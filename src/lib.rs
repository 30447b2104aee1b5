//! Strata type lattice engine.
//!
//! Facade over the workspace crates:
//! - [`solver`]: the type environment and the lattice queries
//!   (`is_subtype_of`, least common supertypes, greatest common subtypes)
//! - [`common`]: source locations, diagnostics and the error report
//! - [`tracing_config`]: opt-in logging for drivers
//!
//! The most used items are re-exported at the crate root.

pub mod tracing_config;

pub use strata_common as common;
pub use strata_solver as solver;

pub use strata_common::{Diagnostic, DiagnosticKind, ErrorReport, ReportOptions, SrcLocation};
pub use strata_solver::{
    ConstantKind, EnvironmentError, TypeEnvironment, TypeId, TypeSet, greatest_common_subtypes,
    is_subtype_of, least_common_supertypes, type_qualifier,
};
