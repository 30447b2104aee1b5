//! Type representation for the lattice engine.
//!
//! Types live in a [`TypeEnvironment`](crate::TypeEnvironment) arena and are
//! referred to by [`TypeId`] handles. Union members, record fields and subset
//! bases store handles, never owned types, so cyclic declarations such as
//! `List = (head: number, tail: List)` are plain data.

use smallvec::SmallVec;
use std::fmt;

/// Identity of a [`TypeEnvironment`](crate::TypeEnvironment) instance.
///
/// Every environment draws a fresh id from a global counter, which lets a
/// [`TypeId`] remember which universe it belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnvId(pub(crate) u32);

/// Handle to a type registered in a [`TypeEnvironment`](crate::TypeEnvironment).
///
/// Handles compare by identity: two handles are equal iff they name the same
/// registered type of the same environment. Structure is never compared.
/// Ordering follows registration order within an environment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId {
    env: EnvId,
    index: u32,
}

impl TypeId {
    pub(crate) const fn new(env: EnvId, index: u32) -> Self {
        Self { env, index }
    }

    /// The environment this handle was issued by.
    #[inline]
    pub const fn env(self) -> EnvId {
        self.env
    }

    /// Position of the type in its environment's arena.
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }
}

/// Kind of a constant root of the hierarchy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstantKind {
    Signed,
    Unsigned,
    Float,
    Symbol,
}

impl ConstantKind {
    /// Bootstrap order of the constant roots and of their primitives.
    pub const ALL: [ConstantKind; 4] = [Self::Signed, Self::Float, Self::Symbol, Self::Unsigned];

    /// Name of the constant root type.
    pub const fn constant_name(self) -> &'static str {
        match self {
            Self::Signed => "numberConstant",
            Self::Unsigned => "unsignedConstant",
            Self::Float => "floatConstant",
            Self::Symbol => "symbolConstant",
        }
    }

    /// Name of the built-in primitive declared on top of the root.
    pub const fn primitive_name(self) -> &'static str {
        match self {
            Self::Signed => "number",
            Self::Unsigned => "unsigned",
            Self::Float => "float",
            Self::Symbol => "symbol",
        }
    }
}

/// Classification tag of a type.
///
/// The first four mirror [`ConstantKind`]; `Record` tags record types and
/// any type that does not reduce to a single constant root.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeAttribute {
    Signed,
    Unsigned,
    Float,
    Symbol,
    Record,
}

impl TypeAttribute {
    /// One-letter tag used in type qualifiers.
    pub const fn tag(self) -> char {
        match self {
            Self::Signed => 'i',
            Self::Unsigned => 'u',
            Self::Float => 'f',
            Self::Symbol => 's',
            Self::Record => 'r',
        }
    }
}

impl From<ConstantKind> for TypeAttribute {
    fn from(kind: ConstantKind) -> Self {
        match kind {
            ConstantKind::Signed => Self::Signed,
            ConstantKind::Unsigned => Self::Unsigned,
            ConstantKind::Float => Self::Float,
            ConstantKind::Symbol => Self::Symbol,
        }
    }
}

impl fmt::Display for TypeAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Signed => "signed",
            Self::Unsigned => "unsigned",
            Self::Float => "float",
            Self::Symbol => "symbol",
            Self::Record => "record",
        };
        f.write_str(name)
    }
}

/// Union members - inline up to 4, which covers most declarations.
pub type TypeIdVec = SmallVec<[TypeId; 4]>;

/// A named record field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: String,
    pub ty: TypeId,
}

/// Structure of a registered type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeData {
    /// One of the four roots.
    Constant(ConstantKind),
    /// A named type with a single base. `primitive` marks the built-ins
    /// (`number`, `float`, `symbol`, `unsigned`).
    Subset { base: TypeId, primitive: bool },
    /// Members in declaration order.
    Union(TypeIdVec),
    /// Fields in declaration order.
    Record(Vec<Field>),
}

impl TypeData {
    pub fn is_union(&self) -> bool {
        matches!(self, Self::Union(_))
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Copy of this structure with every stored handle passed through `f`.
    pub(crate) fn map_handles(&self, f: impl Fn(TypeId) -> TypeId) -> Self {
        match self {
            Self::Constant(kind) => Self::Constant(*kind),
            Self::Subset { base, primitive } => Self::Subset {
                base: f(*base),
                primitive: *primitive,
            },
            Self::Union(members) => Self::Union(members.iter().map(|&m| f(m)).collect()),
            Self::Record(fields) => Self::Record(
                fields
                    .iter()
                    .map(|field| Field {
                        name: field.name.clone(),
                        ty: f(field.ty),
                    })
                    .collect(),
            ),
        }
    }

    /// Variant name used in contract-violation messages.
    pub(crate) const fn kind_name(&self) -> &'static str {
        match self {
            Self::Constant(_) => "constant",
            Self::Subset { primitive: true, .. } => "primitive",
            Self::Subset { .. } => "subset",
            Self::Union(_) => "union",
            Self::Record(_) => "record",
        }
    }
}

/// Declaration accepted by [`TypeEnvironment::try_declare`](crate::TypeEnvironment::try_declare).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeDecl {
    Subset(TypeId),
    Union,
    Record,
}
