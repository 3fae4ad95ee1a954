//! Boxing, unboxing and primitive widening.

use super::RelationChecker;
use crate::context::InferSide;
use crate::types::{PrimitiveKind, TypeData, TypeId};

impl RelationChecker<'_, '_> {
    /// `to` is a primitive.
    ///
    /// A wrapper class unboxes and is checked again; a primitive source goes
    /// through the widening lattice. Nothing else converts.
    pub(super) fn assign_to_primitive(
        &mut self,
        to: PrimitiveKind,
        from_data: &TypeData,
        side: InferSide,
    ) -> bool {
        match from_data {
            TypeData::Class(_) | TypeData::Parameterized(_) => match self.unboxed_kind(from_data) {
                Some(kind) => self.is_assignable_to(to.type_id(), kind.type_id(), side),
                None => false,
            },
            TypeData::Primitive(kind) => to.is_assignable_from(*kind),
            _ => false,
        }
    }

    /// `from` is a primitive and `to` a class: box and check again.
    pub(super) fn assign_boxed(
        &mut self,
        to: TypeId,
        from: PrimitiveKind,
        side: InferSide,
    ) -> bool {
        match self.store.box_primitive(from) {
            Some(boxed) => self.is_assignable_to(to, boxed, side),
            None => false,
        }
    }

    /// The primitive a wrapper class holds (`java.lang.Integer` -> `int`).
    pub(crate) fn unboxed_kind(&self, data: &TypeData) -> Option<PrimitiveKind> {
        let name = self.name_of(data)?;
        PrimitiveKind::from_boxed_name(self.store.name(name))
    }
}
