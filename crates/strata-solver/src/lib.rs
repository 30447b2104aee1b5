//! Type Lattice Engine
//!
//! This crate models the type hierarchy of a Datalog-style language and
//! answers the relational queries type inference needs. It provides:
//!
//! - **Arena environment**: every type lives in a `TypeEnvironment` and is
//!   referred to by a copyable `TypeId` handle
//! - **Subtyping**: root reachability plus union membership, with a
//!   conservative cutoff for recursive types
//! - **Bounds**: least common supertypes and greatest common subtypes over
//!   pairs, sets, and set pairs
//!
//! Key properties:
//! - Type equality is handle identity, never structure
//! - Cyclic unions and records are ordinary data; every traversal is
//!   visit-once and terminates
//! - Queries borrow the environment immutably and own their memo tables
pub mod classify;
pub mod environment;
pub mod error;
mod format;
pub mod lattice;
pub mod qualifier;
pub mod recursion;
pub mod relations;
pub mod type_set;
pub mod types;
pub mod visitor;

pub use classify::{
    has_float_type, has_signed_type, has_unsigned_type, is_float_type, is_float_type_set,
    is_number_type, is_number_type_set, is_record_type, is_record_type_set, is_symbol_type,
    is_symbol_type_set, is_unsigned_type, is_unsigned_type_set, type_attribute,
};
pub use environment::TypeEnvironment;
pub use error::EnvironmentError;
pub use format::{TypeDisplay, TypeSetDisplay};
pub use lattice::{
    greatest_common_subtypes, greatest_common_subtypes_of_set, greatest_common_subtypes_pairwise,
    least_common_supertypes, least_common_supertypes_of_set, least_common_supertypes_pairwise,
};
pub use qualifier::type_qualifier;
pub use recursion::{is_recursive_type, is_recursive_type_set};
pub use relations::{are_subtypes_of, is_of_root_type, is_subtype_of};
pub use type_set::TypeSet;
pub use types::{ConstantKind, EnvId, Field, TypeAttribute, TypeData, TypeDecl, TypeId};
