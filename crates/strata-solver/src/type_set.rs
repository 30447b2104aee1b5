//! Sets of types with an explicit universal element.
//!
//! `TypeSet::All` stands for "every type" and is distinct from any finite
//! set, however large. Lattice operations use it as the identity element of
//! their pairwise forms, so a caller can pass an unconstrained position
//! without special-casing it.

use crate::types::TypeId;
use std::collections::BTreeSet;
use std::collections::btree_set;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeSet {
    /// The universal set.
    All,
    /// A finite set of types; duplicates collapse.
    Finite(BTreeSet<TypeId>),
}

impl Default for TypeSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl TypeSet {
    pub fn empty() -> Self {
        Self::Finite(BTreeSet::new())
    }

    pub fn all() -> Self {
        Self::All
    }

    pub fn singleton(ty: TypeId) -> Self {
        Self::Finite(BTreeSet::from([ty]))
    }

    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// `true` only for the empty finite set. The universal set is not empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::All => false,
            Self::Finite(types) => types.is_empty(),
        }
    }

    /// Number of elements, or `None` for the universal set.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::All => None,
            Self::Finite(types) => Some(types.len()),
        }
    }

    pub fn contains(&self, ty: TypeId) -> bool {
        match self {
            Self::All => true,
            Self::Finite(types) => types.contains(&ty),
        }
    }

    /// Adds a type. Inserting into the universal set changes nothing.
    pub fn insert(&mut self, ty: TypeId) {
        if let Self::Finite(types) = self {
            types.insert(ty);
        }
    }

    /// Set union in place. Absorbing `All` makes this set `All`.
    pub fn insert_all(&mut self, other: &TypeSet) {
        match other {
            Self::All => *self = Self::All,
            Self::Finite(more) => self.extend(more.iter().copied()),
        }
    }

    /// The elements of a finite set.
    pub fn as_finite(&self) -> Option<&BTreeSet<TypeId>> {
        match self {
            Self::All => None,
            Self::Finite(types) => Some(types),
        }
    }

    /// Iterate the elements of a finite set in handle order.
    ///
    /// # Panics
    ///
    /// Panics on the universal set, which cannot be enumerated.
    pub fn iter(&self) -> btree_set::Iter<'_, TypeId> {
        match self {
            Self::All => panic!("unable to enumerate the universal type set"),
            Self::Finite(types) => types.iter(),
        }
    }
}

impl FromIterator<TypeId> for TypeSet {
    fn from_iter<I: IntoIterator<Item = TypeId>>(iter: I) -> Self {
        Self::Finite(iter.into_iter().collect())
    }
}

impl Extend<TypeId> for TypeSet {
    fn extend<I: IntoIterator<Item = TypeId>>(&mut self, iter: I) {
        if let Self::Finite(types) = self {
            types.extend(iter);
        }
    }
}

impl From<TypeId> for TypeSet {
    fn from(ty: TypeId) -> Self {
        Self::singleton(ty)
    }
}

impl<'a> IntoIterator for &'a TypeSet {
    type Item = &'a TypeId;
    type IntoIter = btree_set::Iter<'a, TypeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../tests/type_set_tests.rs"]
mod tests;
