//! Structural fingerprints of types.
//!
//! A qualifier identifies a type together with its structure, e.g.
//! `i:U[i:A,i:B]` for `U = A | B` with `A`, `B` subsets of `number`. Code
//! generation uses it to tell apart types that share a name across
//! components.

use crate::classify::type_attribute;
use crate::environment::TypeEnvironment;
use crate::types::{Field, TypeId};
use crate::visitor::{TypeVisitor, VisitMemo, VisitOnce};

struct QualifierBuilder<'env> {
    env: &'env TypeEnvironment,
    memo: VisitMemo<String>,
}

impl<'env> TypeVisitor<'env> for QualifierBuilder<'env> {
    type Output = String;

    fn env(&self) -> &'env TypeEnvironment {
        self.env
    }

    fn visit_type(&mut self, ty: TypeId) -> String {
        let head = format!("{}:{}", type_attribute(self.env, ty).tag(), self.env.name(ty));
        // Self references resolve to the head only.
        self.memo.record(ty, head.clone());
        head
    }

    fn visit_union(&mut self, ty: TypeId, members: &'env [TypeId]) -> String {
        let mut out = self.visit_type(ty);
        let members: Vec<String> = members.iter().map(|&m| self.visit_once(m)).collect();
        out.push('[');
        out.push_str(&members.join(","));
        out.push(']');
        out
    }

    fn visit_record(&mut self, ty: TypeId, fields: &'env [Field]) -> String {
        let mut out = self.visit_type(ty);
        let fields: Vec<String> = fields
            .iter()
            .map(|field| format!("{}#{}", field.name, self.visit_once(field.ty)))
            .collect();
        out.push('{');
        out.push_str(&fields.join(","));
        out.push('}');
        out
    }
}

impl<'env> VisitOnce<'env> for QualifierBuilder<'env> {
    fn memo(&mut self) -> &mut VisitMemo<String> {
        &mut self.memo
    }
}

/// The qualifier string of `ty`.
pub fn type_qualifier(env: &TypeEnvironment, ty: TypeId) -> String {
    QualifierBuilder {
        env,
        memo: VisitMemo::default(),
    }
    .visit_once(ty)
}

#[cfg(test)]
#[path = "../tests/qualifier_tests.rs"]
mod tests;
