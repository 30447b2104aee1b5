//! Detection of self-referential types.
//!
//! A record is recursive when one of its fields leads back to it, following
//! union members and record fields. A union is recursive only when it
//! contains itself through union members alone; containing a recursive
//! record does not make a union recursive.

use crate::environment::TypeEnvironment;
use crate::type_set::TypeSet;
use crate::types::{Field, TypeData, TypeId};
use crate::visitor::{TypeVisitor, VisitMemo, VisitOnce, walk_type};

struct CycleFinder<'env> {
    env: &'env TypeEnvironment,
    target: TypeId,
    follow_records: bool,
    memo: VisitMemo<bool>,
}

impl CycleFinder<'_> {
    fn reaches(&mut self, ty: TypeId) -> bool {
        ty == self.target || self.visit_once(ty)
    }
}

impl<'env> TypeVisitor<'env> for CycleFinder<'env> {
    type Output = bool;

    fn env(&self) -> &'env TypeEnvironment {
        self.env
    }

    fn visit_union(&mut self, _ty: TypeId, members: &'env [TypeId]) -> bool {
        members.iter().any(|&member| self.reaches(member))
    }

    fn visit_record(&mut self, _ty: TypeId, fields: &'env [Field]) -> bool {
        self.follow_records && fields.iter().any(|field| self.reaches(field.ty))
    }
}

impl<'env> VisitOnce<'env> for CycleFinder<'env> {
    fn memo(&mut self) -> &mut VisitMemo<bool> {
        &mut self.memo
    }
}

/// Whether `ty` refers to itself.
pub fn is_recursive_type(env: &TypeEnvironment, ty: TypeId) -> bool {
    let follow_records = match env.data(ty) {
        TypeData::Record(_) => true,
        TypeData::Union(_) => false,
        TypeData::Constant(_) | TypeData::Subset { .. } => return false,
    };
    let mut finder = CycleFinder {
        env,
        target: ty,
        follow_records,
        memo: VisitMemo::default(),
    };
    // The origin itself is not memoized, so reaching it again is reported by
    // `reaches` instead of being cut off as an already visited type.
    walk_type(&mut finder, ty)
}

/// Whether `types` is finite, non-empty and consists of recursive types only.
pub fn is_recursive_type_set(env: &TypeEnvironment, types: &TypeSet) -> bool {
    match types.as_finite() {
        Some(types) if !types.is_empty() => types.iter().all(|&ty| is_recursive_type(env, ty)),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../tests/recursion_tests.rs"]
mod tests;
