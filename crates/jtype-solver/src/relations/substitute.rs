//! Type-argument substitution for supertype walks.
//!
//! `ArrayList<String>` reaches `List<E>` through its declaration
//! `class ArrayList<E> implements List<E>`; the candidate only means
//! `List<String>` once `E` is replaced by the argument `ArrayList` was
//! applied to. Rewritten types are allocated in the context-local arena and
//! cached per `(from, candidate)` pair, so walking the same edge twice yields
//! the same id and the cycle guard keeps recognizing it.

use super::RelationChecker;
use crate::recursion::{DepthCounter, RecursionProfile};
use crate::types::{
    ArrayType, GenericTypeVariable, IntersectionType, ParameterizedType, TypeData, TypeId,
};
use jtype_common::Atom;
use smallvec::SmallVec;
use tracing::debug;

type Bindings = SmallVec<[(Atom, TypeId); 4]>;

impl RelationChecker<'_, '_> {
    /// `candidate` (a supertype or interface of `from`'s class) with
    /// `from`'s type arguments applied.
    pub(crate) fn substitute_supertype(&mut self, from: TypeId, candidate: TypeId) -> TypeId {
        if let Some(cached) = self.ctx.cached_substitution(from, candidate) {
            return cached;
        }

        let bindings = self.bindings_of(from);
        let result = if bindings.is_empty() {
            candidate
        } else {
            let mut depth = DepthCounter::with_profile(RecursionProfile::Substitution);
            let result = self.substitute(candidate, &bindings, &mut depth);
            if depth.is_exceeded() {
                debug!(
                    from = from.0,
                    candidate = candidate.0,
                    "substitution depth exceeded, keeping nested types unsubstituted"
                );
            }
            result
        };

        self.ctx.cache_substitution(from, candidate, result);
        result
    }

    /// Type parameter name -> argument, for a parameterized `from`.
    fn bindings_of(&self, from: TypeId) -> Bindings {
        let store = self.store;
        let data = self.data(from);
        let TypeData::Parameterized(parameterized) = &*data else {
            return Bindings::new();
        };
        let TypeData::Class(class) = store.get(parameterized.class) else {
            return Bindings::new();
        };
        class
            .type_parameters
            .iter()
            .zip(&parameterized.arguments)
            .filter_map(|(&parameter, &argument)| {
                let var = store.get(parameter).as_generic_type_variable()?;
                Some((var.name, argument))
            })
            .collect()
    }

    fn substitute(&mut self, id: TypeId, bindings: &Bindings, depth: &mut DepthCounter) -> TypeId {
        if !depth.enter() {
            return id;
        }
        let data = self.data(id);
        let result = match &*data {
            TypeData::GenericTypeVariable(var) if !self.store.is_wildcard(var) => bindings
                .iter()
                .find(|(name, _)| *name == var.name)
                .map_or(id, |&(_, argument)| argument),
            TypeData::GenericTypeVariable(var) => {
                match self.substitute_all(&var.bounds, bindings, depth) {
                    Some(bounds) => self.ctx.alloc_local(TypeData::GenericTypeVariable(
                        GenericTypeVariable {
                            name: var.name,
                            variance: var.variance,
                            bounds,
                        },
                    )),
                    None => id,
                }
            }
            TypeData::Parameterized(p) => match self.substitute_all(&p.arguments, bindings, depth) {
                Some(arguments) => self.ctx.alloc_local(TypeData::Parameterized(ParameterizedType {
                    class: p.class,
                    arguments,
                })),
                None => id,
            },
            TypeData::Array(array) => {
                let element = self.substitute(array.element, bindings, depth);
                if element == array.element {
                    id
                } else {
                    self.ctx.alloc_local(TypeData::Array(ArrayType { element }))
                }
            }
            TypeData::Intersection(intersection) => {
                match self.substitute_all(&intersection.bounds, bindings, depth) {
                    Some(bounds) => {
                        self.ctx.alloc_local(TypeData::Intersection(IntersectionType { bounds }))
                    }
                    None => id,
                }
            }
            _ => id,
        };
        depth.leave();
        result
    }

    /// `None` when nothing in `ids` changed.
    fn substitute_all(
        &mut self,
        ids: &[TypeId],
        bindings: &Bindings,
        depth: &mut DepthCounter,
    ) -> Option<Vec<TypeId>> {
        let substituted: Vec<TypeId> = ids
            .iter()
            .map(|&id| self.substitute(id, bindings, depth))
            .collect();
        (substituted.as_slice() != ids).then_some(substituted)
    }
}
