//! The type environment: arena and name registry for all types of a program.
//!
//! A `TypeEnvironment` exclusively owns every type it creates. Types are
//! stored in registration order in an index-stable map keyed by qualified
//! name, so a [`TypeId`] is simply the arena position plus the environment's
//! own [`EnvId`].
//!
//! ## Lifecycle
//!
//! 1. `TypeEnvironment::new()` bootstraps the four constant roots
//!    (`numberConstant`, `floatConstant`, `symbolConstant`,
//!    `unsignedConstant`) and the four primitives on top of them
//!    (`number`, `float`, `symbol`, `unsigned`).
//! 2. The declaration-binding phase registers user types and attaches union
//!    members and record fields (`&mut self`).
//! 3. Inference queries the environment read-only (`&self`); nothing can be
//!    removed or renamed.
//!
//! Every handle stored inside a type (subset base, union member, record
//! field) must come from the same environment. That is checked on insertion
//! and a violation panics.

use crate::error::EnvironmentError;
use crate::type_set::TypeSet;
use crate::types::{ConstantKind, EnvId, Field, TypeData, TypeDecl, TypeId, TypeIdVec};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, trace};

/// Global counter for assigning a unique id to every environment instance.
static NEXT_ENV_ID: AtomicU32 = AtomicU32::new(1);

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

#[derive(Debug)]
pub struct TypeEnvironment {
    id: EnvId,
    types: FxIndexMap<String, TypeData>,
}

fn next_env_id() -> EnvId {
    EnvId(NEXT_ENV_ID.fetch_add(1, Ordering::Relaxed))
}

/// A clone is a separate environment: it gets a fresh id and every stored
/// handle is rebound to it, so handles never cross between the two.
impl Clone for TypeEnvironment {
    fn clone(&self) -> Self {
        let id = next_env_id();
        let types = self
            .types
            .iter()
            .map(|(name, data)| {
                (
                    name.clone(),
                    data.map_handles(|ty| TypeId::new(id, ty.index())),
                )
            })
            .collect();
        Self { id, types }
    }
}

impl Default for TypeEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeEnvironment {
    /// Create an environment holding only the built-in types.
    pub fn new() -> Self {
        let mut env = Self {
            id: next_env_id(),
            types: FxIndexMap::default(),
        };
        env.initialize_constant_types();
        env.initialize_primitive_types();
        env
    }

    fn initialize_constant_types(&mut self) {
        for kind in ConstantKind::ALL {
            expect_ok(self.register(kind.constant_name().to_string(), TypeData::Constant(kind)));
        }
    }

    fn initialize_primitive_types(&mut self) {
        for kind in ConstantKind::ALL {
            let base = self.constant_type(kind);
            expect_ok(self.register(
                kind.primitive_name().to_string(),
                TypeData::Subset {
                    base,
                    primitive: true,
                },
            ));
        }
    }

    /// The identity of this environment.
    pub fn id(&self) -> EnvId {
        self.id
    }

    fn register(&mut self, name: String, data: TypeData) -> Result<TypeId, EnvironmentError> {
        if self.types.contains_key(&name) {
            return Err(EnvironmentError::DuplicateTypeName(name));
        }
        debug!(name = %name, kind = data.kind_name(), "registered type");
        let (index, _) = self.types.insert_full(name, data);
        Ok(TypeId::new(self.id, index as u32))
    }

    fn check_member(&self, ty: TypeId) -> Result<(), EnvironmentError> {
        if self.is_type(ty) {
            Ok(())
        } else {
            Err(EnvironmentError::ForeignType(ty))
        }
    }

    // =========================================================================
    // Declaration
    // =========================================================================

    /// Register a new type, reporting name clashes and foreign bases as errors.
    pub fn try_declare(
        &mut self,
        name: impl Into<String>,
        decl: TypeDecl,
    ) -> Result<TypeId, EnvironmentError> {
        let data = match decl {
            TypeDecl::Subset(base) => {
                self.check_member(base)?;
                TypeData::Subset {
                    base,
                    primitive: false,
                }
            }
            TypeDecl::Union => TypeData::Union(TypeIdVec::new()),
            TypeDecl::Record => TypeData::Record(Vec::new()),
        };
        self.register(name.into(), data)
    }

    /// Declare `name <: base`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered or `base` belongs to another
    /// environment.
    pub fn create_subset_type(&mut self, name: impl Into<String>, base: TypeId) -> TypeId {
        expect_ok(self.try_declare(name, TypeDecl::Subset(base)))
    }

    /// Declare a subset of the primitive type of the given kind, e.g.
    /// `create_subset_type_of("Age", ConstantKind::Signed)` yields `Age <: number`.
    pub fn create_subset_type_of(&mut self, name: impl Into<String>, kind: ConstantKind) -> TypeId {
        let base = self.primitive_type(kind);
        self.create_subset_type(name, base)
    }

    /// Declare an empty union; members are attached with [`add_union_member`](Self::add_union_member).
    pub fn create_union_type(&mut self, name: impl Into<String>) -> TypeId {
        expect_ok(self.try_declare(name, TypeDecl::Union))
    }

    /// Declare an empty record; fields are attached with [`add_record_field`](Self::add_record_field).
    pub fn create_record_type(&mut self, name: impl Into<String>) -> TypeId {
        expect_ok(self.try_declare(name, TypeDecl::Record))
    }

    /// Append `member` to the members of `union`.
    ///
    /// A union may contain itself, directly or through other unions.
    ///
    /// # Panics
    ///
    /// Panics if either handle is foreign or `union` is not a union type.
    pub fn add_union_member(&mut self, union: TypeId, member: TypeId) {
        expect_ok(self.check_member(union));
        expect_ok(self.check_member(member));
        match self.slot_mut(union) {
            TypeData::Union(members) => members.push(member),
            other => panic!("cannot add a union member to a {} type", other.kind_name()),
        }
        debug!(union = union.index(), member = member.index(), "added union member");
    }

    /// Append the field `name : ty` to `record`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is foreign or `record` is not a record type.
    pub fn add_record_field(&mut self, record: TypeId, name: impl Into<String>, ty: TypeId) {
        expect_ok(self.check_member(record));
        expect_ok(self.check_member(ty));
        let name = name.into();
        trace!(record = record.index(), field = %name, "adding record field");
        match self.slot_mut(record) {
            TypeData::Record(fields) => fields.push(Field { name, ty }),
            other => panic!("cannot add a record field to a {} type", other.kind_name()),
        }
        debug!(record = record.index(), "added record field");
    }

    fn slot_mut(&mut self, ty: TypeId) -> &mut TypeData {
        let index = ty.index() as usize;
        match self.types.get_index_mut(index) {
            Some((_, data)) => data,
            None => panic!("type #{index} is not registered"),
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Whether a type with this qualified name is registered.
    pub fn is_type_name(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Whether `ty` was issued by this environment and names a registered type.
    pub fn is_type(&self, ty: TypeId) -> bool {
        ty.env() == self.id && (ty.index() as usize) < self.types.len()
    }

    pub fn find_type(&self, name: &str) -> Option<TypeId> {
        self.types
            .get_index_of(name)
            .map(|index| TypeId::new(self.id, index as u32))
    }

    pub fn try_get_type(&self, name: &str) -> Result<TypeId, EnvironmentError> {
        self.find_type(name)
            .ok_or_else(|| EnvironmentError::UnknownTypeName(name.to_string()))
    }

    /// Look up a type by qualified name.
    ///
    /// # Panics
    ///
    /// Panics if no such type is registered.
    pub fn get_type(&self, name: &str) -> TypeId {
        expect_ok(self.try_get_type(name))
    }

    /// Snapshot of every registered type.
    pub fn all_types(&self) -> TypeSet {
        (0..self.types.len() as u32)
            .map(|index| TypeId::new(self.id, index))
            .collect()
    }

    /// The constant root of the given kind.
    pub fn constant_type(&self, kind: ConstantKind) -> TypeId {
        TypeId::new(self.id, bootstrap_slot(kind))
    }

    /// The built-in primitive of the given kind (`number`, `float`, ...).
    pub fn primitive_type(&self, kind: ConstantKind) -> TypeId {
        TypeId::new(self.id, ConstantKind::ALL.len() as u32 + bootstrap_slot(kind))
    }

    /// Qualified name of `ty`.
    pub fn name(&self, ty: TypeId) -> &str {
        self.entry(ty).0
    }

    /// Structure of `ty`.
    pub fn data(&self, ty: TypeId) -> &TypeData {
        self.entry(ty).1
    }

    /// Members of a union; empty for every other variant.
    pub fn union_members(&self, ty: TypeId) -> &[TypeId] {
        match self.data(ty) {
            TypeData::Union(members) => members.as_slice(),
            _ => &[],
        }
    }

    /// Fields of a record; empty for every other variant.
    pub fn record_fields(&self, ty: TypeId) -> &[Field] {
        match self.data(ty) {
            TypeData::Record(fields) => fields.as_slice(),
            _ => &[],
        }
    }

    fn entry(&self, ty: TypeId) -> (&str, &TypeData) {
        assert!(
            ty.env() == self.id,
            "type #{} belongs to a different type environment",
            ty.index()
        );
        match self.types.get_index(ty.index() as usize) {
            Some((name, data)) => (name.as_str(), data),
            None => panic!("type #{} is not registered", ty.index()),
        }
    }

    /// Number of registered types, built-ins included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always `false`: the built-in types are registered on construction.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &str, &TypeData)> + '_ {
        self.types
            .iter()
            .enumerate()
            .map(|(index, (name, data))| (TypeId::new(self.id, index as u32), name.as_str(), data))
    }
}

fn bootstrap_slot(kind: ConstantKind) -> u32 {
    match kind {
        ConstantKind::Signed => 0,
        ConstantKind::Float => 1,
        ConstantKind::Symbol => 2,
        ConstantKind::Unsigned => 3,
    }
}

fn expect_ok<T>(result: Result<T, EnvironmentError>) -> T {
    result.unwrap_or_else(|err| panic!("{err}"))
}

#[cfg(test)]
#[path = "../tests/environment_tests.rs"]
mod tests;
