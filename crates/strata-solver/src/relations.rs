//! Root reachability and the subtype relation.

use crate::environment::TypeEnvironment;
use crate::recursion::is_recursive_type;
use crate::type_set::TypeSet;
use crate::types::{ConstantKind, TypeData, TypeId};
use crate::visitor::{TypeVisitor, VisitMemo, VisitOnce};
use tracing::{Level, span, trace};

/// Remaining stack below which deep subtype recursion grows a new segment.
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_GROW_SIZE: usize = 1024 * 1024;

struct RootReachability<'env> {
    env: &'env TypeEnvironment,
    root: TypeId,
    memo: VisitMemo<bool>,
}

impl<'env> TypeVisitor<'env> for RootReachability<'env> {
    type Output = bool;

    fn env(&self) -> &'env TypeEnvironment {
        self.env
    }

    fn visit_constant(&mut self, ty: TypeId, _kind: ConstantKind) -> bool {
        ty == self.root
    }

    fn visit_subset(&mut self, ty: TypeId, base: TypeId) -> bool {
        ty == self.root || self.visit_once(base)
    }

    fn visit_union(&mut self, _ty: TypeId, members: &'env [TypeId]) -> bool {
        !members.is_empty() && members.iter().all(|&member| self.visit_once(member))
    }
}

impl<'env> VisitOnce<'env> for RootReachability<'env> {
    fn memo(&mut self) -> &mut VisitMemo<bool> {
        &mut self.memo
    }
}

/// Whether `ty` reduces to `root` through subset bases and union members.
///
/// A union reduces to `root` only if it is non-empty and every member does.
/// Records never reduce to a root.
pub fn is_of_root_type(env: &TypeEnvironment, ty: TypeId, root: TypeId) -> bool {
    RootReachability {
        env,
        root,
        memo: VisitMemo::default(),
    }
    .visit_once(ty)
}

/// `a <: b`.
///
/// Any involvement of a recursive type beyond identity and root reachability
/// yields `false`.
///
/// # Panics
///
/// Panics if either type does not belong to `env`.
pub fn is_subtype_of(env: &TypeEnvironment, a: TypeId, b: TypeId) -> bool {
    assert!(env.is_type(a), "subtype query on a type of a different environment");
    assert!(env.is_type(b), "subtype query on a type of a different environment");
    let _span = span!(Level::TRACE, "is_subtype_of", a = env.name(a), b = env.name(b)).entered();
    let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
        check_subtype(env, a, b)
    });
    trace!(result, "subtype check finished");
    result
}

fn check_subtype(env: &TypeEnvironment, a: TypeId, b: TypeId) -> bool {
    if a == b || is_of_root_type(env, a, b) {
        return true;
    }
    if is_recursive_type(env, a) || is_recursive_type(env, b) {
        trace!("recursive type involved, no subtype relation");
        return false;
    }
    let TypeData::Union(b_members) = env.data(b) else {
        return false;
    };
    match env.data(a) {
        TypeData::Union(a_members) => a_members
            .iter()
            .all(|&member| is_subtype_of(env, member, b)),
        _ => b_members
            .iter()
            .any(|&member| is_subtype_of(env, a, member)),
    }
}

/// Whether every type of `types` is a subtype of `b`.
///
/// # Panics
///
/// Panics on the universal set.
pub fn are_subtypes_of(env: &TypeEnvironment, types: &TypeSet, b: TypeId) -> bool {
    types.iter().all(|&ty| is_subtype_of(env, ty, b))
}

#[cfg(test)]
#[path = "../tests/relations_tests.rs"]
mod tests;
