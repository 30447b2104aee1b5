//! Textual rendering of types, type sets and environments.
//!
//! Handles do not know their environment, so rendering goes through small
//! display adapters borrowed from the [`TypeEnvironment`]:
//!
//! ```text
//! numberConstant
//! A <: number
//! U = A | B
//! R = ( a : A , b : B )
//! {A,B}
//! ```

use crate::environment::TypeEnvironment;
use crate::type_set::TypeSet;
use crate::types::{TypeData, TypeId};
use std::fmt;

/// Renders the declaration of a single type.
pub struct TypeDisplay<'env> {
    env: &'env TypeEnvironment,
    ty: TypeId,
}

/// Renders a type set as `{A,B}` with names sorted.
pub struct TypeSetDisplay<'a> {
    env: &'a TypeEnvironment,
    types: &'a TypeSet,
}

impl TypeEnvironment {
    pub fn display_type(&self, ty: TypeId) -> TypeDisplay<'_> {
        TypeDisplay { env: self, ty }
    }

    pub fn display_set<'a>(&'a self, types: &'a TypeSet) -> TypeSetDisplay<'a> {
        TypeSetDisplay { env: self, types }
    }
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let env = self.env;
        let name = env.name(self.ty);
        match env.data(self.ty) {
            TypeData::Constant(_) => f.write_str(name),
            TypeData::Subset { base, .. } => write!(f, "{name} <: {}", env.name(*base)),
            TypeData::Union(members) => {
                write!(f, "{name} = ")?;
                for (i, &member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    f.write_str(env.name(member))?;
                }
                Ok(())
            }
            TypeData::Record(fields) if fields.is_empty() => write!(f, "{name} = ()"),
            TypeData::Record(fields) => {
                write!(f, "{name} = ( ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" , ")?;
                    }
                    write!(f, "{} : {}", field.name, env.name(field.ty))?;
                }
                f.write_str(" )")
            }
        }
    }
}

impl fmt::Display for TypeSetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(types) = self.types.as_finite() else {
            return f.write_str("{ - all types - }");
        };
        let mut names: Vec<&str> = types.iter().map(|&ty| self.env.name(ty)).collect();
        names.sort_unstable();
        write!(f, "{{{}}}", names.join(","))
    }
}

impl fmt::Display for TypeEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<(&str, TypeId)> = self.iter().map(|(ty, name, _)| (name, ty)).collect();
        types.sort_unstable_by(|a, b| a.0.cmp(b.0));
        writeln!(f, "Types:")?;
        for (_, ty) in types {
            writeln!(f, "\t{}", self.display_type(ty))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
