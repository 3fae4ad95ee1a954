//! Recursive cores of the two relation checks.
//!
//! `RelationChecker` is a short-lived view pairing the shared store with one
//! engine's [`CompatContext`]. The rule families live in sibling modules as
//! separate `impl RelationChecker` blocks:
//!
//! - `equivalence`: `is_of_type`
//! - `assignability`: `is_assignable_to` dispatch and class rules
//! - `variables`: type variable and wildcard rules, bounds cache
//! - `primitives`: boxing, unboxing and widening
//! - `substitute`: type arguments applied to supertype candidates

mod assignability;
mod equivalence;
mod primitives;
mod substitute;
mod variables;

use crate::context::{CompatContext, RelationKey};
use crate::queries::fully_qualified_names_are_equal;
use crate::recursion::RecursionResult;
use crate::store::TypeStore;
use crate::types::{TypeData, TypeId};
use jtype_common::Atom;
use std::borrow::Cow;
use tracing::{debug, trace};

pub(crate) struct RelationChecker<'a, 'c> {
    pub(crate) store: &'a TypeStore,
    pub(crate) ctx: &'c mut CompatContext,
    pub(crate) infer: bool,
}

impl<'a, 'c> RelationChecker<'a, 'c> {
    pub(crate) fn new(store: &'a TypeStore, ctx: &'c mut CompatContext, infer: bool) -> Self {
        Self { store, ctx, infer }
    }

    /// Data for a store or context-local id.
    ///
    /// Local types are cloned out so the rules can keep recursing with
    /// `&mut self` while holding them.
    pub(crate) fn data(&self, id: TypeId) -> Cow<'a, TypeData> {
        if id.is_context_local() {
            return Cow::Owned(self.ctx.local(id).cloned().unwrap_or(TypeData::Unknown));
        }
        Cow::Borrowed(self.store.get(id))
    }

    #[inline]
    pub(crate) fn normalize(&self, id: TypeId) -> TypeId {
        self.store.normalize(id)
    }

    /// Fully-qualified name of a Class, Parameterized or type variable.
    pub(crate) fn name_of(&self, data: &TypeData) -> Option<Atom> {
        self.store.fully_qualified_of(data).map(|fq| fq.name())
    }

    /// Name equality with `$` and `.` accepted as the same nested-class
    /// separator.
    pub(crate) fn names_match(&self, a: Atom, b: Atom) -> bool {
        a == b || fully_qualified_names_are_equal(self.store.name(a), self.store.name(b))
    }

    /// Whether a normalized type is the class `java.lang.Object` (raw or
    /// parameterized never applies: `Object` has no type parameters).
    pub(crate) fn is_object(&self, id: TypeId) -> bool {
        let object = self.store.well_known().object;
        if id == object {
            return true;
        }
        match &*self.data(id) {
            TypeData::Class(class) => {
                self.store.name(class.fully_qualified_name) == "java.lang.Object"
            }
            _ => false,
        }
    }

    /// Run `check` inside the cycle guard.
    ///
    /// A key already on the current path answers `true` (an ancestor frame is
    /// validating the same obligation); an exhausted depth or iteration
    /// budget answers `false`.
    pub(crate) fn guarded(
        &mut self,
        key: RelationKey,
        check: impl FnOnce(&mut Self) -> bool,
    ) -> bool {
        match self.ctx.guard.enter(key) {
            RecursionResult::Entered => {
                let result = check(self);
                self.ctx.guard.leave(key);
                result
            }
            RecursionResult::Cycle => {
                trace!(
                    op = key.op.name(),
                    to = key.to.0,
                    from = key.from.0,
                    "relation cycle, assuming related"
                );
                true
            }
            RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => {
                debug!(
                    op = key.op.name(),
                    to = key.to.0,
                    from = key.from.0,
                    depth = self.ctx.guard.depth(),
                    iterations = self.ctx.guard.iterations(),
                    "relation limit exceeded, answering false"
                );
                false
            }
        }
    }
}
