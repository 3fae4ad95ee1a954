//! Centralized limits and thresholds for the jtype crates.
//!
//! Recursion limits for the relation checks themselves (cycle guard depth and
//! iteration budget) live in `jtype_solver::recursion::RecursionProfile`.
//! The constants here bound the helper walks those checks perform.

/// Maximum depth for type-argument substitution.
///
/// When the assignability check walks from a parameterized type to its
/// supertypes it rewrites each candidate with the caller's type arguments
/// (`ArrayList<String>` viewed through `List<E>` becomes `List<String>`).
/// Substitution recurses through nested arguments, wildcard bounds and array
/// elements; past this depth the candidate is used unsubstituted.
///
/// # Java example
///
/// ```java
/// // Each level of nesting is one substitution frame:
/// class Deep<T> implements Supplier<List<Map<String, Optional<T>>>> {}
/// ```
pub const MAX_SUBSTITUTION_DEPTH: u32 = 50;

/// Maximum number of wrapper layers the normalizer collapses.
///
/// `Method` collapses to its return type and `Variable` to its declared type.
/// A well-formed graph needs at most two steps (a variable whose type is a
/// method is already malformed); the cap keeps a producer bug from looping.
pub const MAX_NORMALIZE_STEPS: u32 = 8;

/// Maximum nesting printed for wildcard bounds by the type formatter.
pub const MAX_FORMAT_DEPTH: u32 = 8;
