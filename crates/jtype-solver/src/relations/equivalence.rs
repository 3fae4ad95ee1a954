//! Structural sameness: `is_of_type(to, from)`.
//!
//! No coercion crosses categories: a raw class never equals its
//! parameterization, a primitive never equals its wrapper, and array
//! elements that are primitive must be the very same type.

use super::RelationChecker;
use crate::context::{InferSide, RelationKey, RelationOp};
use crate::queries::canonical_separator;
use crate::types::{TypeData, TypeId};
use smallvec::SmallVec;

impl<'a> RelationChecker<'a, '_> {
    pub(crate) fn is_of_type(&mut self, to: TypeId, from: TypeId, side: InferSide) -> bool {
        let to = self.normalize(to);
        let from = self.normalize(from);
        if to.is_unknown() || from.is_unknown() {
            return false;
        }
        if to == from {
            return true;
        }

        let key = RelationKey::new(RelationOp::Equivalent, side, to, from);
        self.guarded(key, |this| this.check_of_type(to, from, side))
    }

    fn check_of_type(&mut self, to: TypeId, from: TypeId, side: InferSide) -> bool {
        let to_data = self.data(to);
        let from_data = self.data(from);

        // An open type variable on the inferred side only has to accept the
        // other operand.
        if self.infer {
            if side == InferSide::To && matches!(&*to_data, TypeData::GenericTypeVariable(_)) {
                return self.is_assignable_to(to, from, side);
            }
            if side == InferSide::From
                && matches!(&*from_data, TypeData::GenericTypeVariable(_))
            {
                return self.is_assignable_to(from, to, side.flip());
            }
        }

        match (&*to_data, &*from_data) {
            (TypeData::GenericTypeVariable(t), TypeData::GenericTypeVariable(f)) => {
                t.name == f.name
                    && t.variance == f.variance
                    && t.bounds.len() == f.bounds.len()
                    && t.bounds
                        .iter()
                        .zip(&f.bounds)
                        .all(|(&tb, &fb)| self.is_of_type(tb, fb, side))
            }
            (TypeData::Class(t), TypeData::Class(f)) => {
                self.names_match(t.fully_qualified_name, f.fully_qualified_name)
            }
            (TypeData::Parameterized(t), TypeData::Parameterized(f)) => {
                let (Some(t_name), Some(f_name)) =
                    (self.name_of(&to_data), self.name_of(&from_data))
                else {
                    return false;
                };
                self.names_match(t_name, f_name)
                    && t.arguments.len() == f.arguments.len()
                    && t.arguments
                        .iter()
                        .zip(&f.arguments)
                        .all(|(&ta, &fa)| self.is_of_type(ta, fa, side))
            }
            (TypeData::Primitive(t), TypeData::Primitive(f)) => t == f,
            (TypeData::Array(t), TypeData::Array(f)) => {
                if self.data(t.element).is_primitive() || self.data(f.element).is_primitive() {
                    return t.element == f.element;
                }
                self.is_of_type(t.element, f.element, side)
            }
            (TypeData::Intersection(t), TypeData::Intersection(f)) => {
                self.bound_sets_equal(&t.bounds, &f.bounds, side)
            }
            (TypeData::MultiCatch(t), TypeData::MultiCatch(f)) => {
                self.bound_sets_equal(&t.throwable_types, &f.throwable_types, side)
            }
            _ => false,
        }
    }

    /// Order-independent pairwise equality of two bound lists.
    ///
    /// Only defined when every bound is fully qualified.
    fn bound_sets_equal(&mut self, to: &[TypeId], from: &[TypeId], side: InferSide) -> bool {
        if to.len() != from.len() {
            return false;
        }
        let (Some(to_sorted), Some(from_sorted)) =
            (self.sorted_by_name(to), self.sorted_by_name(from))
        else {
            return false;
        };
        to_sorted
            .iter()
            .zip(&from_sorted)
            .all(|(&(_, t), &(_, f))| self.is_of_type(t, f, side))
    }

    fn sorted_by_name(&self, bounds: &[TypeId]) -> Option<SmallVec<[(&'a str, TypeId); 4]>> {
        let store = self.store;
        let mut named = SmallVec::<[(&'a str, TypeId); 4]>::with_capacity(bounds.len());
        for &bound in bounds {
            let name = self.name_of(&self.data(bound))?;
            named.push((store.name(name), bound));
        }
        named.sort_by(|(a, _), (b, _)| {
            a.chars()
                .map(canonical_separator)
                .cmp(b.chars().map(canonical_separator))
        });
        Some(named)
    }
}
