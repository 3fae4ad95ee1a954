//! Java Type-Compatibility Core
//!
//! Decides, over an already-resolved Java type graph, whether two types are
//! the *same* (`is_of_type`) or whether one is *assignable* to the other
//! (`is_assignable_to`), covering:
//!
//! - **Generics**: invariant type arguments, `? extends` / `? super`
//!   wildcards, raw types, type-argument substitution along supertype walks
//! - **Conversions**: boxing, unboxing and primitive widening
//! - **Composites**: array covariance, intersection (ALL) and multi-catch
//!   (ANY) bound sets
//! - **Cycles**: coinductive answers on self-referential declarations
//!   (`T extends Comparable<T>`) with a depth ceiling for adversarial graphs
//!
//! The graph lives in a [`TypeStore`] built by a producer with a two-phase
//! API; checks run through a [`TypeCompat`] engine that owns all mutable
//! state.
mod compat;
pub mod context;
mod equality;
mod format;
mod normalize;
mod queries;
mod query_trace;
pub mod recursion;
mod relations;
pub mod store;
pub mod types;

pub use compat::{CompatOptions, TypeCompat, is_assignable_to, is_of_type};
pub use context::{CompatContext, InferSide, RelationKey, RelationOp};
pub use format::{TypeDisplay, TypeFormatter};
pub use queries::fully_qualified_names_are_equal;
pub use recursion::{RecursionGuard, RecursionProfile, RecursionResult};
pub use store::{ClassDetails, GraphError, MethodDetails, TypeStore, WellKnownTypes};
pub use types::*;

#[cfg(test)]
#[path = "../tests/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "../tests/equivalence_tests.rs"]
mod equivalence_tests;

#[cfg(test)]
#[path = "../tests/assignability_tests.rs"]
mod assignability_tests;

#[cfg(test)]
#[path = "../tests/primitive_tests.rs"]
mod primitive_tests;

#[cfg(test)]
#[path = "../tests/generics_tests.rs"]
mod generics_tests;

#[cfg(test)]
#[path = "../tests/cycle_tests.rs"]
mod cycle_tests;

#[cfg(test)]
#[path = "../tests/equality_tests.rs"]
mod equality_tests;

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod format_tests;

#[cfg(test)]
#[path = "../tests/queries_tests.rs"]
mod queries_tests;
