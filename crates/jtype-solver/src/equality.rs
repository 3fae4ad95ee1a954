//! Model equality: the partial, declaration-based equality of the type
//! graph itself.
//!
//! This is deliberately weaker than structural sameness:
//! - `Class` compares by fully-qualified name only (no leniency)
//! - `Method` compares by declaring type, name and *generic* signature; the
//!   resolved signature of one call site does not matter
//! - `Variable` compares by owner and name; its type may still be unresolved
//!
//! Everything else compares component-wise. Bounds can be cyclic, so pairs
//! already being compared are assumed equal.

use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::store::TypeStore;
use crate::types::{Signature, TypeData, TypeId};
use tracing::debug;

impl TypeStore {
    /// Model equality of two types of this store.
    pub fn type_equals(&self, a: TypeId, b: TypeId) -> bool {
        let mut guard = RecursionGuard::with_profile(RecursionProfile::Equality);
        ModelEquality {
            store: self,
            guard: &mut guard,
        }
        .equals(a, b)
    }
}

struct ModelEquality<'a, 'g> {
    store: &'a TypeStore,
    guard: &'g mut RecursionGuard<(TypeId, TypeId)>,
}

impl ModelEquality<'_, '_> {
    fn equals(&mut self, a: TypeId, b: TypeId) -> bool {
        if a == b {
            return true;
        }
        match self.guard.enter((a, b)) {
            RecursionResult::Entered => {
                let result = self.equals_inner(a, b);
                self.guard.leave((a, b));
                result
            }
            RecursionResult::Cycle => true,
            RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => {
                debug!(a = a.0, b = b.0, "type_equals: limit exceeded");
                false
            }
        }
    }

    fn equals_inner(&mut self, a: TypeId, b: TypeId) -> bool {
        let store = self.store;
        match (store.get(a), store.get(b)) {
            (TypeData::Primitive(x), TypeData::Primitive(y)) => x == y,
            (TypeData::Class(x), TypeData::Class(y)) => {
                x.fully_qualified_name == y.fully_qualified_name
            }
            (TypeData::Parameterized(x), TypeData::Parameterized(y)) => {
                self.equals(x.class, y.class) && self.all_equal(&x.arguments, &y.arguments)
            }
            (TypeData::GenericTypeVariable(x), TypeData::GenericTypeVariable(y)) => {
                x.name == y.name && x.variance == y.variance && self.all_equal(&x.bounds, &y.bounds)
            }
            (TypeData::Array(x), TypeData::Array(y)) => self.equals(x.element, y.element),
            (TypeData::Intersection(x), TypeData::Intersection(y)) => {
                self.all_equal(&x.bounds, &y.bounds)
            }
            (TypeData::MultiCatch(x), TypeData::MultiCatch(y)) => {
                self.all_equal(&x.throwable_types, &y.throwable_types)
            }
            (TypeData::Method(x), TypeData::Method(y)) => {
                x.name == y.name
                    && self.equals(x.declaring_type, y.declaring_type)
                    && self.signatures_equal(&x.generic_signature, &y.generic_signature)
            }
            (TypeData::Variable(x), TypeData::Variable(y)) => {
                x.name == y.name
                    && match (x.owner, y.owner) {
                        (Some(x_owner), Some(y_owner)) => self.equals(x_owner, y_owner),
                        (None, None) => true,
                        _ => false,
                    }
            }
            _ => false,
        }
    }

    fn all_equal(&mut self, a: &[TypeId], b: &[TypeId]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.equals(x, y))
    }

    fn signatures_equal(&mut self, a: &Signature, b: &Signature) -> bool {
        self.equals(a.return_type, b.return_type)
            && self.all_equal(&a.parameter_types, &b.parameter_types)
    }
}
