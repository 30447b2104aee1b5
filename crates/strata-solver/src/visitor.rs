//! Structural visitor over the type graph.
//!
//! [`TypeVisitor`] dispatches on [`TypeData`] so algorithms only override the
//! variants they care about. Every per-variant hook defaults to
//! [`TypeVisitor::visit_type`], which defaults to `Output::default()`.
//!
//! Type graphs may be cyclic (`U = A | U`, `List = (head: A, tail: List)`),
//! so recursive algorithms go through [`VisitOnce::visit_once`]: the first
//! visit of a type records a provisional default result before descending,
//! which is what a self-referential visit observes. The final result then
//! replaces the provisional one.

use crate::environment::TypeEnvironment;
use crate::types::{ConstantKind, Field, TypeData, TypeId};
use rustc_hash::FxHashMap;

pub trait TypeVisitor<'env> {
    type Output: Default;

    fn env(&self) -> &'env TypeEnvironment;

    fn visit_type(&mut self, _ty: TypeId) -> Self::Output {
        Self::Output::default()
    }

    fn visit_constant(&mut self, ty: TypeId, _kind: ConstantKind) -> Self::Output {
        self.visit_type(ty)
    }

    fn visit_subset(&mut self, ty: TypeId, _base: TypeId) -> Self::Output {
        self.visit_type(ty)
    }

    fn visit_union(&mut self, ty: TypeId, _members: &'env [TypeId]) -> Self::Output {
        self.visit_type(ty)
    }

    fn visit_record(&mut self, ty: TypeId, _fields: &'env [Field]) -> Self::Output {
        self.visit_type(ty)
    }
}

/// Dispatch `ty` to the matching hook of `visitor`.
pub fn walk_type<'env, V>(visitor: &mut V, ty: TypeId) -> V::Output
where
    V: TypeVisitor<'env> + ?Sized,
{
    match visitor.env().data(ty) {
        TypeData::Constant(kind) => visitor.visit_constant(ty, *kind),
        TypeData::Subset { base, .. } => visitor.visit_subset(ty, *base),
        TypeData::Union(members) => visitor.visit_union(ty, members),
        TypeData::Record(fields) => visitor.visit_record(ty, fields),
    }
}

/// Results of one traversal, keyed by visited type.
#[derive(Debug)]
pub struct VisitMemo<R> {
    results: FxHashMap<TypeId, R>,
}

impl<R> Default for VisitMemo<R> {
    fn default() -> Self {
        Self {
            results: FxHashMap::default(),
        }
    }
}

impl<R> VisitMemo<R> {
    pub fn get(&self, ty: TypeId) -> Option<&R> {
        self.results.get(&ty)
    }

    /// Record (or overwrite) the result for `ty`.
    pub fn record(&mut self, ty: TypeId, result: R) {
        self.results.insert(ty, result);
    }

    pub fn contains(&self, ty: TypeId) -> bool {
        self.results.contains_key(&ty)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Visitors that memoize per type and tolerate cycles.
pub trait VisitOnce<'env>: TypeVisitor<'env, Output: Clone> {
    fn memo(&mut self) -> &mut VisitMemo<Self::Output>;

    /// Visit `ty` unless it was already seen in this traversal, in which case
    /// the recorded (possibly provisional) result is returned.
    fn visit_once(&mut self, ty: TypeId) -> Self::Output {
        if let Some(seen) = self.memo().get(ty) {
            return seen.clone();
        }
        self.memo().record(ty, Self::Output::default());
        let result = walk_type(self, ty);
        self.memo().record(ty, result.clone());
        result
    }
}

#[cfg(test)]
#[path = "../tests/visitor_tests.rs"]
mod tests;
