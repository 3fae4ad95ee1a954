//! Per-engine mutable state threaded through the relation checks.
//!
//! Everything a check writes lives here, never in the shared
//! [`TypeStore`](crate::TypeStore): the cycle guard, the bounds cache, the
//! substitution cache and the arena of context-local types those caches
//! point into.

use crate::recursion::{RecursionGuard, RecursionProfile};
use crate::types::{TypeData, TypeId};
use rustc_hash::FxHashMap;
use tracing::trace;

/// Which relation a guard entry belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RelationOp {
    /// `is_of_type`
    Equivalent,
    /// `is_assignable_to`
    Assignable,
}

impl RelationOp {
    pub const fn name(self) -> &'static str {
        match self {
            RelationOp::Equivalent => "is_of_type",
            RelationOp::Assignable => "is_assignable_to",
        }
    }
}

/// Which operand may currently be treated as an open type variable.
///
/// Only meaningful in infer mode; plain engines always use `None`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InferSide {
    #[default]
    None,
    To,
    From,
}

impl InferSide {
    /// The side after the operands of a check have been swapped.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            InferSide::None => InferSide::None,
            InferSide::To => InferSide::From,
            InferSide::From => InferSide::To,
        }
    }
}

/// Cycle-guard key: identity of both operands plus the relation and side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelationKey {
    pub op: RelationOp,
    pub side: InferSide,
    pub to: TypeId,
    pub from: TypeId,
}

impl RelationKey {
    pub const fn new(op: RelationOp, side: InferSide, to: TypeId, from: TypeId) -> Self {
        Self { op, side, to, from }
    }
}

/// Mutable state of one [`TypeCompat`](crate::TypeCompat) engine.
pub struct CompatContext {
    pub(crate) guard: RecursionGuard<RelationKey>,
    locals: Vec<TypeData>,
    /// Multi-bound type variable -> local `Intersection` of its bounds.
    bounds: FxHashMap<TypeId, TypeId>,
    /// (from, supertype candidate) -> candidate with `from`'s bindings applied.
    substitutions: FxHashMap<(TypeId, TypeId), TypeId>,
}

impl std::fmt::Debug for CompatContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompatContext")
            .field("guard", &self.guard)
            .field("locals", &self.locals.len())
            .field("bounds", &self.bounds.len())
            .field("substitutions", &self.substitutions.len())
            .finish()
    }
}

impl CompatContext {
    pub fn new(profile: RecursionProfile) -> Self {
        Self {
            guard: RecursionGuard::with_profile(profile),
            locals: Vec::new(),
            bounds: FxHashMap::default(),
            substitutions: FxHashMap::default(),
        }
    }

    /// Forget the guard state of the previous query. Caches survive.
    pub(crate) fn begin_query(&mut self) {
        self.guard.reset();
    }

    /// Whether the last query hit the depth or iteration ceiling.
    pub fn limit_hit(&self) -> bool {
        self.guard.is_exceeded()
    }

    pub(crate) fn alloc_local(&mut self, data: TypeData) -> TypeId {
        let id = TypeId::new_context_local(self.locals.len() as u32);
        trace!(type_id = id.0, category = data.category(), "CompatContext::alloc_local");
        self.locals.push(data);
        id
    }

    /// Data of a context-local type; `None` for store ids or stale locals.
    pub fn local(&self, id: TypeId) -> Option<&TypeData> {
        self.locals.get(id.context_local_index()?)
    }

    pub fn local_count(&self) -> usize {
        self.locals.len()
    }

    pub(crate) fn cached_bounds(&self, var: TypeId) -> Option<TypeId> {
        self.bounds.get(&var).copied()
    }

    pub(crate) fn cache_bounds(&mut self, var: TypeId, intersection: TypeId) {
        self.bounds.insert(var, intersection);
    }

    pub(crate) fn cached_substitution(&self, from: TypeId, candidate: TypeId) -> Option<TypeId> {
        self.substitutions.get(&(from, candidate)).copied()
    }

    pub(crate) fn cache_substitution(&mut self, from: TypeId, candidate: TypeId, result: TypeId) {
        self.substitutions.insert((from, candidate), result);
    }

    /// Drop every cache and context-local type.
    ///
    /// Ids previously returned by [`TypeCompat::normalize`](crate::TypeCompat::normalize)
    /// for local types become stale.
    pub fn clear(&mut self) {
        self.guard.reset();
        self.locals.clear();
        self.bounds.clear();
        self.substitutions.clear();
    }
}

impl Default for CompatContext {
    fn default() -> Self {
        Self::new(RecursionProfile::default())
    }
}
