//! Public entry points of the type-compatibility checks.
//!
//! ```
//! use jtype_solver::{TypeCompat, TypeId, TypeStore};
//!
//! let store = TypeStore::new();
//! let number = store.well_known().number;
//! let integer = store.well_known().integer;
//!
//! let mut compat = TypeCompat::new(&store, false);
//! assert!(compat.is_assignable_to(number, integer));
//! assert!(!compat.is_assignable_to(integer, number));
//! assert!(compat.is_assignable_to(TypeId::LONG, TypeId::INT));
//! ```

use crate::context::{CompatContext, InferSide, RelationOp};
use crate::query_trace;
use crate::recursion::RecursionProfile;
use crate::relations::RelationChecker;
use crate::store::TypeStore;
use crate::types::TypeId;

/// Engine configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompatOptions {
    /// Let an open type variable on the inferred side accept the other
    /// operand instead of requiring exact structure.
    pub infer: bool,
    /// Depth and iteration limits of the cycle guard.
    pub profile: RecursionProfile,
}

impl CompatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_infer(mut self, infer: bool) -> Self {
        self.infer = infer;
        self
    }

    pub fn with_profile(mut self, profile: RecursionProfile) -> Self {
        self.profile = profile;
        self
    }
}

/// A type-compatibility engine over one store.
///
/// The engine owns its [`CompatContext`] (cycle guard and caches), so the
/// predicates take `&mut self`: use one engine per thread. The store itself
/// is only borrowed and may be shared by any number of engines.
pub struct TypeCompat<'a> {
    store: &'a TypeStore,
    options: CompatOptions,
    ctx: CompatContext,
}

impl<'a> TypeCompat<'a> {
    pub fn new(store: &'a TypeStore, infer: bool) -> Self {
        Self::with_options(store, CompatOptions::new().with_infer(infer))
    }

    pub fn with_options(store: &'a TypeStore, options: CompatOptions) -> Self {
        Self {
            store,
            options,
            ctx: CompatContext::new(options.profile),
        }
    }

    pub fn store(&self) -> &'a TypeStore {
        self.store
    }

    pub fn options(&self) -> CompatOptions {
        self.options
    }

    pub fn context(&self) -> &CompatContext {
        &self.ctx
    }

    /// Structural sameness. `None` on either side is `false`.
    pub fn is_of_type(
        &mut self,
        to: impl Into<Option<TypeId>>,
        from: impl Into<Option<TypeId>>,
    ) -> bool {
        self.run(RelationOp::Equivalent, to.into(), from.into())
    }

    /// Whether a value of type `from` may be used where `to` is required.
    /// `None` on either side is `false`.
    pub fn is_assignable_to(
        &mut self,
        to: impl Into<Option<TypeId>>,
        from: impl Into<Option<TypeId>>,
    ) -> bool {
        self.run(RelationOp::Assignable, to.into(), from.into())
    }

    /// Whether `from` is, or inherits from, the class named
    /// `fully_qualified_name`, ignoring type arguments. Primitives are boxed
    /// and type variables stand for their bounds.
    pub fn is_assignable_to_name(
        &mut self,
        fully_qualified_name: &str,
        from: impl Into<Option<TypeId>>,
    ) -> bool {
        let Some(from) = from.into() else {
            return false;
        };
        RelationChecker::new(self.store, &mut self.ctx, self.options.infer)
            .inherits_from_name(fully_qualified_name, from)
    }

    /// Collapse methods, variables and the `String` primitive.
    pub fn normalize(&self, id: TypeId) -> TypeId {
        self.store.normalize(id)
    }

    /// Drop the bounds and substitution caches and every context-local type.
    pub fn clear_caches(&mut self) {
        self.ctx.clear();
    }

    fn run(&mut self, op: RelationOp, to: Option<TypeId>, from: Option<TypeId>) -> bool {
        let (Some(to), Some(from)) = (to, from) else {
            return false;
        };
        let infer = self.options.infer;
        let trace_enabled = query_trace::enabled();
        let query_id = if trace_enabled {
            let query_id = query_trace::next_query_id();
            query_trace::relation_start(query_id, op.name(), to, from, infer);
            query_id
        } else {
            0
        };

        self.ctx.begin_query();
        let side = if infer { InferSide::To } else { InferSide::None };
        let mut checker = RelationChecker::new(self.store, &mut self.ctx, infer);
        let result = match op {
            RelationOp::Equivalent => checker.is_of_type(to, from, side),
            RelationOp::Assignable => checker.is_assignable_to(to, from, side),
        };

        if trace_enabled {
            query_trace::relation_end(query_id, op.name(), result, self.ctx.limit_hit());
        }
        result
    }
}

/// One-shot `is_of_type` on a fresh non-infer engine.
pub fn is_of_type(store: &TypeStore, to: TypeId, from: TypeId) -> bool {
    TypeCompat::new(store, false).is_of_type(to, from)
}

/// One-shot `is_assignable_to` on a fresh non-infer engine.
pub fn is_assignable_to(store: &TypeStore, to: TypeId, from: TypeId) -> bool {
    TypeCompat::new(store, false).is_assignable_to(to, from)
}
