//! Type variable and wildcard assignability, plus the bounds cache.
//!
//! ## Rules
//! - `?` accepts everything.
//! - Two plain variables: same name means equivalence; otherwise one of the
//!   source's bounds must be assignable to the target variable.
//! - Otherwise the target collapses to its bound (a single bound, the cached
//!   intersection of several, or `Object`) and the source collapses to its
//!   own bound when it is a wildcard. Then the target's variance decides the
//!   direction: `? extends B` needs `source <: B`, `? super B` needs
//!   `B <: source` with the inference side reversed.
//! - A variable on the source side is replaced by its bound.

use super::RelationChecker;
use crate::context::InferSide;
use crate::types::{GenericTypeVariable, IntersectionType, TypeData, TypeId, Variance};
use tracing::trace;

impl RelationChecker<'_, '_> {
    /// `to` is a type variable or wildcard.
    pub(super) fn assign_to_variable(
        &mut self,
        to: TypeId,
        to_var: &GenericTypeVariable,
        from: TypeId,
        from_data: &TypeData,
        side: InferSide,
    ) -> bool {
        let to_is_wildcard = self.store.is_wildcard(to_var);
        if to_is_wildcard && to_var.bounds.is_empty() {
            return true;
        }

        let from_var = from_data.as_generic_type_variable();
        if let Some(from_var) = from_var
            && !to_is_wildcard
            && !self.store.is_wildcard(from_var)
        {
            if to_var.name == from_var.name {
                return self.is_of_type(to, from, side);
            }
            return from_var
                .bounds
                .iter()
                .any(|&bound| self.is_assignable_to(to, bound, side));
        }

        let target = self.variable_bound(to, to_var);

        let source = match from_var {
            Some(from_var) if self.store.is_wildcard(from_var) => {
                if from_var.bounds.is_empty() {
                    if !to_var.bounds.is_empty() {
                        return false;
                    }
                } else if from_var.variance != to_var.variance {
                    return false;
                }
                self.variable_bound(from, from_var)
            }
            _ => from,
        };

        match to_var.variance {
            // A bare declared variable binds like `? extends` its bound.
            Variance::Covariant | Variance::Invariant => {
                self.is_assignable_to(target, source, side)
            }
            Variance::Contravariant => self.is_assignable_to(source, target, side.flip()),
        }
    }

    /// `from` is a type variable or wildcard and `to` is not.
    pub(super) fn assign_from_variable(
        &mut self,
        to: TypeId,
        from: TypeId,
        from_var: &GenericTypeVariable,
        side: InferSide,
    ) -> bool {
        let bound = self.variable_bound(from, from_var);
        match from_var.variance {
            Variance::Contravariant => self.is_assignable_to(bound, to, side.flip()),
            Variance::Covariant | Variance::Invariant => self.is_assignable_to(to, bound, side),
        }
    }

    /// The single type standing in for a variable's bounds: `Object` when
    /// there are none, the bound itself when there is one, and a cached
    /// context-local intersection otherwise.
    pub(crate) fn variable_bound(&mut self, var: TypeId, data: &GenericTypeVariable) -> TypeId {
        match data.bounds.as_slice() {
            [] => self.store.well_known().object,
            [single] => *single,
            bounds => {
                if let Some(cached) = self.ctx.cached_bounds(var) {
                    return cached;
                }
                let intersection = self.ctx.alloc_local(TypeData::Intersection(IntersectionType {
                    bounds: bounds.to_vec(),
                }));
                trace!(
                    var = var.0,
                    intersection = intersection.0,
                    bounds = bounds.len(),
                    "bounds cache miss"
                );
                self.ctx.cache_bounds(var, intersection);
                intersection
            }
        }
    }
}
