//! Least common supertypes and greatest common subtypes.
//!
//! The hierarchy is not a lattice in general: two types may have no common
//! bound, or several incomparable ones. Every operation therefore returns a
//! [`TypeSet`] holding an antichain of bounds. An empty result means "no
//! common bound".
//!
//! Three shapes are provided for each direction:
//! - pair: `least_common_supertypes(env, a, b)`
//! - set fold: `least_common_supertypes_of_set(env, {a, b, c, ...})`
//! - pairwise: `least_common_supertypes_pairwise(env, as, bs)`, where `All`
//!   is the identity and the empty set is absorbing.

use crate::environment::TypeEnvironment;
use crate::relations::is_subtype_of;
use crate::type_set::TypeSet;
use crate::types::TypeId;
use crate::visitor::{TypeVisitor, VisitMemo, VisitOnce};
use tracing::{Level, span, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bound {
    /// Keep the smallest candidates (common supertypes).
    Least,
    /// Keep the largest candidates (common subtypes).
    Greatest,
}

/// Reduce `candidates` to its extreme elements in the given direction.
///
/// An element is dropped only if some other candidate is strictly better, so
/// mutually equivalent types (`U <: V` and `V <: U`) all survive.
fn antichain(env: &TypeEnvironment, candidates: &[TypeId], bound: Bound) -> TypeSet {
    let strictly_below = |x: TypeId, y: TypeId| {
        x != y && is_subtype_of(env, x, y) && !is_subtype_of(env, y, x)
    };
    candidates
        .iter()
        .copied()
        .filter(|&t| {
            !candidates.iter().any(|&other| match bound {
                Bound::Least => strictly_below(other, t),
                Bound::Greatest => strictly_below(t, other),
            })
        })
        .collect()
}

fn assert_same_environment(env: &TypeEnvironment, a: TypeId, b: TypeId) {
    assert!(
        env.is_type(a) && env.is_type(b),
        "bound query on a type of a different environment"
    );
}

fn distinct(types: impl IntoIterator<Item = TypeId>) -> Vec<TypeId> {
    let mut out: Vec<TypeId> = types.into_iter().collect();
    out.sort_unstable();
    out.dedup();
    out
}

// =============================================================================
// Pair forms
// =============================================================================

/// The minimal types that both `a` and `b` are subtypes of.
///
/// # Panics
///
/// Panics if either type does not belong to `env`.
pub fn least_common_supertypes(env: &TypeEnvironment, a: TypeId, b: TypeId) -> TypeSet {
    assert_same_environment(env, a, b);
    let _span = span!(
        Level::TRACE,
        "least_common_supertypes",
        a = env.name(a),
        b = env.name(b)
    )
    .entered();

    if a == b {
        return TypeSet::singleton(a);
    }
    if is_subtype_of(env, a, b) {
        return TypeSet::singleton(b);
    }
    if is_subtype_of(env, b, a) {
        return TypeSet::singleton(a);
    }

    let candidates: Vec<TypeId> = env
        .iter()
        .map(|(ty, _, _)| ty)
        .filter(|&ty| is_subtype_of(env, a, ty) && is_subtype_of(env, b, ty))
        .collect();
    trace!(candidates = candidates.len(), "collected common supertypes");
    antichain(env, &candidates, Bound::Least)
}

/// Collects the members of a union (nested unions included) that are
/// subtypes of `bound`. A member that qualifies is not descended into.
struct SubtypeMemberCollector<'env> {
    env: &'env TypeEnvironment,
    bound: TypeId,
    found: Vec<TypeId>,
    memo: VisitMemo<()>,
}

impl SubtypeMemberCollector<'_> {
    fn collect(&mut self, member: TypeId) {
        if is_subtype_of(self.env, member, self.bound) {
            self.found.push(member);
        } else {
            self.visit_once(member);
        }
    }
}

impl<'env> TypeVisitor<'env> for SubtypeMemberCollector<'env> {
    type Output = ();

    fn env(&self) -> &'env TypeEnvironment {
        self.env
    }

    fn visit_union(&mut self, _ty: TypeId, members: &'env [TypeId]) {
        for &member in members {
            self.collect(member);
        }
    }
}

impl<'env> VisitOnce<'env> for SubtypeMemberCollector<'env> {
    fn memo(&mut self) -> &mut VisitMemo<()> {
        &mut self.memo
    }
}

/// The maximal types that are subtypes of both `a` and `b`.
///
/// Beyond the cases where one argument is a subtype of the other, common
/// subtypes are only found between two unions.
///
/// # Panics
///
/// Panics if either type does not belong to `env`.
pub fn greatest_common_subtypes(env: &TypeEnvironment, a: TypeId, b: TypeId) -> TypeSet {
    assert_same_environment(env, a, b);
    let _span = span!(
        Level::TRACE,
        "greatest_common_subtypes",
        a = env.name(a),
        b = env.name(b)
    )
    .entered();

    if a == b {
        return TypeSet::singleton(a);
    }
    if is_subtype_of(env, a, b) {
        return TypeSet::singleton(a);
    }
    if is_subtype_of(env, b, a) {
        return TypeSet::singleton(b);
    }
    if !(env.data(a).is_union() && env.data(b).is_union()) {
        return TypeSet::empty();
    }

    let mut collector = SubtypeMemberCollector {
        env,
        bound: b,
        found: Vec::new(),
        memo: VisitMemo::default(),
    };
    collector.visit_once(a);
    let found = distinct(collector.found);
    trace!(candidates = found.len(), "collected common subtypes");
    antichain(env, &found, Bound::Greatest)
}

// =============================================================================
// Set and pairwise forms
// =============================================================================

type PairOp = fn(&TypeEnvironment, TypeId, TypeId) -> TypeSet;

fn fold_set(env: &TypeEnvironment, types: &TypeSet, op: PairOp, bound: Bound) -> TypeSet {
    let Some(types) = types.as_finite() else {
        return TypeSet::empty();
    };
    let mut remaining = types.iter().copied();
    let Some(first) = remaining.next() else {
        return TypeSet::empty();
    };

    let mut running = vec![first];
    for next in remaining {
        let mut combined = Vec::new();
        for &current in &running {
            combined.extend(op(env, current, next).iter().copied());
        }
        running = antichain(env, &distinct(combined), bound).iter().copied().collect();
        if running.is_empty() {
            break;
        }
    }
    running.into_iter().collect()
}

fn combine_pairwise(
    env: &TypeEnvironment,
    left: &TypeSet,
    right: &TypeSet,
    op: PairOp,
    bound: Bound,
) -> TypeSet {
    if left.is_empty() || right.is_empty() {
        return TypeSet::empty();
    }
    if left.is_all() {
        return right.clone();
    }
    if right.is_all() {
        return left.clone();
    }

    let mut combined = Vec::new();
    for &l in left {
        for &r in right {
            combined.extend(op(env, l, r).iter().copied());
        }
    }
    antichain(env, &distinct(combined), bound)
}

/// Least common supertypes of all types in `types`.
///
/// The empty set and the universal set have no common supertypes.
pub fn least_common_supertypes_of_set(env: &TypeEnvironment, types: &TypeSet) -> TypeSet {
    fold_set(env, types, least_common_supertypes, Bound::Least)
}

/// Greatest common subtypes of all types in `types`.
pub fn greatest_common_subtypes_of_set(env: &TypeEnvironment, types: &TypeSet) -> TypeSet {
    fold_set(env, types, greatest_common_subtypes, Bound::Greatest)
}

/// Least common supertypes of every pair drawn from `left` and `right`.
pub fn least_common_supertypes_pairwise(
    env: &TypeEnvironment,
    left: &TypeSet,
    right: &TypeSet,
) -> TypeSet {
    combine_pairwise(env, left, right, least_common_supertypes, Bound::Least)
}

/// Greatest common subtypes of every pair drawn from `left` and `right`.
pub fn greatest_common_subtypes_pairwise(
    env: &TypeEnvironment,
    left: &TypeSet,
    right: &TypeSet,
) -> TypeSet {
    combine_pairwise(env, left, right, greatest_common_subtypes, Bound::Greatest)
}

#[cfg(test)]
#[path = "../tests/lattice_tests.rs"]
mod tests;
