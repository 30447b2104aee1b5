//! Kind predicates over types and type sets.
//!
//! A type is of a kind when it reduces to that kind's constant root (see
//! [`is_of_root_type`]). The four kinds are disjoint for subsets; a union
//! whose members span several kinds, or that is empty, has none of them.

use crate::environment::TypeEnvironment;
use crate::relations::is_of_root_type;
use crate::type_set::TypeSet;
use crate::types::{ConstantKind, TypeAttribute, TypeId};

fn is_of_kind(env: &TypeEnvironment, ty: TypeId, kind: ConstantKind) -> bool {
    is_of_root_type(env, ty, env.constant_type(kind))
}

/// `true` for a finite non-empty set whose members all satisfy `pred`.
fn all_members(types: &TypeSet, mut pred: impl FnMut(TypeId) -> bool) -> bool {
    match types.as_finite() {
        Some(types) if !types.is_empty() => types.iter().all(|&ty| pred(ty)),
        _ => false,
    }
}

/// `true` for the universal set, or when any member satisfies `pred`.
fn any_member(types: &TypeSet, mut pred: impl FnMut(TypeId) -> bool) -> bool {
    match types.as_finite() {
        Some(types) => types.iter().any(|&ty| pred(ty)),
        None => true,
    }
}

pub fn is_number_type(env: &TypeEnvironment, ty: TypeId) -> bool {
    is_of_kind(env, ty, ConstantKind::Signed)
}

pub fn is_unsigned_type(env: &TypeEnvironment, ty: TypeId) -> bool {
    is_of_kind(env, ty, ConstantKind::Unsigned)
}

pub fn is_float_type(env: &TypeEnvironment, ty: TypeId) -> bool {
    is_of_kind(env, ty, ConstantKind::Float)
}

pub fn is_symbol_type(env: &TypeEnvironment, ty: TypeId) -> bool {
    is_of_kind(env, ty, ConstantKind::Symbol)
}

pub fn is_record_type(env: &TypeEnvironment, ty: TypeId) -> bool {
    env.data(ty).is_record()
}

pub fn is_number_type_set(env: &TypeEnvironment, types: &TypeSet) -> bool {
    all_members(types, |ty| is_number_type(env, ty))
}

pub fn is_unsigned_type_set(env: &TypeEnvironment, types: &TypeSet) -> bool {
    all_members(types, |ty| is_unsigned_type(env, ty))
}

pub fn is_float_type_set(env: &TypeEnvironment, types: &TypeSet) -> bool {
    all_members(types, |ty| is_float_type(env, ty))
}

pub fn is_symbol_type_set(env: &TypeEnvironment, types: &TypeSet) -> bool {
    all_members(types, |ty| is_symbol_type(env, ty))
}

pub fn is_record_type_set(env: &TypeEnvironment, types: &TypeSet) -> bool {
    all_members(types, |ty| is_record_type(env, ty))
}

/// Whether the set may contain a signed number: it is universal or has a
/// signed member.
pub fn has_signed_type(env: &TypeEnvironment, types: &TypeSet) -> bool {
    any_member(types, |ty| is_number_type(env, ty))
}

pub fn has_unsigned_type(env: &TypeEnvironment, types: &TypeSet) -> bool {
    any_member(types, |ty| is_unsigned_type(env, ty))
}

pub fn has_float_type(env: &TypeEnvironment, types: &TypeSet) -> bool {
    any_member(types, |ty| is_float_type(env, ty))
}

/// The kind `ty` reduces to, or [`TypeAttribute::Record`] for records and
/// for types that reduce to no single root.
pub fn type_attribute(env: &TypeEnvironment, ty: TypeId) -> TypeAttribute {
    ConstantKind::ALL
        .into_iter()
        .find(|&kind| is_of_kind(env, ty, kind))
        .map_or(TypeAttribute::Record, TypeAttribute::from)
}

#[cfg(test)]
#[path = "../tests/classify_tests.rs"]
mod tests;
