//! One-directional compatibility: `is_assignable_to(to, from)`.
//!
//! "Can a value of type `from` be used where `to` is required?"
//!
//! ## Dispatch order
//! 1. Unknown on either side fails, `null` fits any reference type,
//!    identity and `Object` targets succeed.
//! 2. Type variables (`variables`).
//! 3. Composite types. A source multi-catch is split first and needs every
//!    alternative. A target intersection needs every bound and a target
//!    multi-catch needs one alternative. Last, a source intersection needs
//!    one bound.
//! 4. Arrays, primitives (`primitives`), then classes.

use super::RelationChecker;
use crate::context::{InferSide, RelationKey, RelationOp};
use crate::types::{ParameterizedType, TypeData, TypeId};

impl RelationChecker<'_, '_> {
    pub(crate) fn is_assignable_to(&mut self, to: TypeId, from: TypeId, side: InferSide) -> bool {
        let to = self.normalize(to);
        let from = self.normalize(from);
        if to.is_unknown() || from.is_unknown() {
            return false;
        }
        if from == TypeId::NULL {
            return !self.data(to).is_primitive();
        }
        if to == from || self.is_object(to) {
            return true;
        }

        let key = RelationKey::new(RelationOp::Assignable, side, to, from);
        self.guarded(key, |this| this.check_assignable(to, from, side))
    }

    fn check_assignable(&mut self, to: TypeId, from: TypeId, side: InferSide) -> bool {
        let to_data = self.data(to);
        let from_data = self.data(from);
        if to_data.is_unknown() || from_data.is_unknown() {
            return false;
        }

        if let TypeData::GenericTypeVariable(to_var) = &*to_data {
            return self.assign_to_variable(to, to_var, from, &from_data, side);
        }
        if let TypeData::GenericTypeVariable(from_var) = &*from_data {
            return self.assign_from_variable(to, from, from_var, side);
        }

        if let TypeData::MultiCatch(f) = &*from_data {
            return f
                .throwable_types
                .iter()
                .all(|&alternative| self.is_assignable_to(to, alternative, side));
        }
        match &*to_data {
            TypeData::Intersection(t) => {
                return t
                    .bounds
                    .iter()
                    .all(|&bound| self.is_assignable_to(bound, from, side));
            }
            TypeData::MultiCatch(t) => {
                return t
                    .throwable_types
                    .iter()
                    .any(|&alternative| self.is_assignable_to(alternative, from, side));
            }
            _ => {}
        }
        if let TypeData::Intersection(f) = &*from_data {
            return f
                .bounds
                .iter()
                .any(|&bound| self.is_assignable_to(to, bound, side));
        }

        match &*to_data {
            TypeData::Array(t) => {
                let TypeData::Array(f) = &*from_data else {
                    return false;
                };
                if self.data(t.element).is_primitive() || self.data(f.element).is_primitive() {
                    return t.element == f.element;
                }
                self.is_assignable_to(t.element, f.element, side)
            }
            TypeData::Primitive(kind) => self.assign_to_primitive(*kind, &from_data, side),
            TypeData::Class(_) | TypeData::Parameterized(_) => {
                self.assign_to_class(to, &to_data, from, &from_data, side)
            }
            _ => false,
        }
    }

    /// `to` is a raw or parameterized class.
    fn assign_to_class(
        &mut self,
        to: TypeId,
        to_data: &TypeData,
        from: TypeId,
        from_data: &TypeData,
        side: InferSide,
    ) -> bool {
        match from_data {
            TypeData::Array(_) => {
                let well_known = self.store.well_known();
                to == well_known.serializable
                    || to == well_known.cloneable
                    || self.name_of(to_data).is_some_and(|name| {
                        matches!(
                            self.store.name(name),
                            "java.io.Serializable" | "java.lang.Cloneable"
                        )
                    })
            }
            TypeData::Primitive(kind) => self.assign_boxed(to, *kind, side),
            TypeData::Class(_) | TypeData::Parameterized(_) => {
                let (Some(to_name), Some(from_name)) =
                    (self.name_of(to_data), self.name_of(from_data))
                else {
                    return false;
                };
                if !self.names_match(to_name, from_name) {
                    return self.assign_from_supertypes(to, from, from_data, side);
                }
                match (to_data, from_data) {
                    (TypeData::Class(_), _) => true,
                    (TypeData::Parameterized(t), TypeData::Class(_)) => self.accepts_raw(t),
                    (TypeData::Parameterized(t), TypeData::Parameterized(f)) => {
                        self.type_arguments_assignable(t, f, side)
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// A raw source only fits a parameterization made of unbounded wildcards
    /// (`List` into `List<?>`, never into `List<String>`).
    fn accepts_raw(&self, to: &ParameterizedType) -> bool {
        to.arguments.iter().all(|&argument| {
            matches!(
                &*self.data(argument),
                TypeData::GenericTypeVariable(var)
                    if self.store.is_wildcard(var) && var.bounds.is_empty()
            )
        })
    }

    /// Generics are invariant except where the target argument is a
    /// wildcard.
    fn type_arguments_assignable(
        &mut self,
        to: &ParameterizedType,
        from: &ParameterizedType,
        side: InferSide,
    ) -> bool {
        if to.arguments.len() != from.arguments.len() {
            return false;
        }
        to.arguments
            .iter()
            .zip(&from.arguments)
            .all(|(&to_arg, &from_arg)| {
                let to_is_wildcard = matches!(
                    &*self.data(to_arg),
                    TypeData::GenericTypeVariable(var) if self.store.is_wildcard(var)
                );
                if to_is_wildcard {
                    self.is_assignable_to(to_arg, from_arg, side)
                } else {
                    self.is_of_type(to_arg, from_arg, side)
                }
            })
    }

    /// Walk `from`'s supertype, then its interfaces, each seen through
    /// `from`'s own type arguments.
    fn assign_from_supertypes(
        &mut self,
        to: TypeId,
        from: TypeId,
        from_data: &TypeData,
        side: InferSide,
    ) -> bool {
        let store = self.store;
        let Some(class) = store.fully_qualified_of(from_data).and_then(|fq| fq.class()) else {
            return false;
        };
        if let Some(supertype) = class.supertype {
            let candidate = self.substitute_supertype(from, supertype);
            if self.is_assignable_to(to, candidate, side) {
                return true;
            }
        }
        class.interfaces.iter().any(|&interface| {
            let candidate = self.substitute_supertype(from, interface);
            self.is_assignable_to(to, candidate, side)
        })
    }
}
