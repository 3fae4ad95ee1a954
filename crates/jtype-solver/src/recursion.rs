//! Recursion guard for cycle detection, depth limiting and iteration
//! bounding in recursive type computations.
//!
//! Type graphs are cyclic (`T extends Comparable<T>`), so every recursive
//! walk over them needs a "currently visiting" set. `RecursionGuard` pairs
//! that set with a depth ceiling (acyclic but adversarially deep graphs) and
//! an iteration budget (wide graphs that revisit the same pairs through many
//! paths).
//!
//! Cycle hits are reported, not answered: the relation checks treat a cycle
//! as provisionally true (coinductive), model equality does the same.
//!
//! # Profiles
//!
//! [`RecursionProfile`] names the limit presets so call sites say which
//! walk they guard instead of repeating magic numbers:
//!
//! ```ignore
//! let guard = RecursionGuard::with_profile(RecursionProfile::RelationCheck);
//! ```
//!
//! # Safety
//!
//! - **Debug leak detection**: dropping a guard with active entries panics
//!   in debug builds, catching a forgotten `leave()`.
//! - **Debug double-leave detection**: leaving a key that is not being
//!   visited panics in debug builds.
//! - **Overflow protection**: iteration counting saturates.

use jtype_common::limits;
use rustc_hash::FxHashSet;
use std::hash::Hash;

// ---------------------------------------------------------------------------
// RecursionProfile
// ---------------------------------------------------------------------------

/// Named recursion limit presets, each a `(max_depth, max_iterations)` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecursionProfile {
    /// `is_of_type` / `is_assignable_to`.
    ///
    /// Deepest limit: a supertype walk plus nested type arguments can
    /// legitimately nest far before a cycle closes.
    ///
    /// depth = 100, iterations = 100,000
    #[default]
    RelationCheck,

    /// Model equality (`TypeStore::type_equals`).
    ///
    /// depth = 100, iterations = 100,000
    Equality,

    /// Type-argument substitution during supertype walks.
    ///
    /// depth = `MAX_SUBSTITUTION_DEPTH`, iterations = 100,000
    Substitution,

    /// Custom limits for one-off or test scenarios.
    Custom { max_depth: u32, max_iterations: u32 },
}

impl RecursionProfile {
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::RelationCheck => 100,
            Self::Equality => 100,
            Self::Substitution => limits::MAX_SUBSTITUTION_DEPTH,
            Self::Custom { max_depth, .. } => max_depth,
        }
    }

    pub const fn max_iterations(self) -> u32 {
        match self {
            Self::RelationCheck => 100_000,
            Self::Equality => 100_000,
            Self::Substitution => 100_000,
            Self::Custom { max_iterations, .. } => max_iterations,
        }
    }
}

// ---------------------------------------------------------------------------
// RecursionResult
// ---------------------------------------------------------------------------

/// Result of attempting to enter a recursive computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionResult {
    /// Proceed with the computation.
    Entered,
    /// This key is already on the current path.
    Cycle,
    /// Maximum recursion depth exceeded.
    DepthExceeded,
    /// Maximum iteration count exceeded.
    IterationExceeded,
}

// ---------------------------------------------------------------------------
// RecursionGuard
// ---------------------------------------------------------------------------

/// Tracks the keys on the current recursion path.
///
/// # Usage
///
/// ```ignore
/// match guard.enter(key) {
///     RecursionResult::Entered => {
///         let result = do_work();
///         guard.leave(key);
///         result
///     }
///     RecursionResult::Cycle => true,
///     RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => false,
/// }
/// ```
pub struct RecursionGuard<K: Hash + Eq + Copy> {
    visiting: FxHashSet<K>,
    depth: u32,
    iterations: u32,
    max_depth: u32,
    max_iterations: u32,
    exceeded: bool,
}

impl<K: Hash + Eq + Copy> std::fmt::Debug for RecursionGuard<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecursionGuard")
            .field("depth", &self.depth)
            .field("iterations", &self.iterations)
            .field("max_depth", &self.max_depth)
            .field("max_iterations", &self.max_iterations)
            .field("exceeded", &self.exceeded)
            .finish()
    }
}

impl<K: Hash + Eq + Copy> RecursionGuard<K> {
    /// Create a guard with explicit limits.
    ///
    /// Prefer [`with_profile`](Self::with_profile).
    pub fn new(max_depth: u32, max_iterations: u32) -> Self {
        Self {
            visiting: FxHashSet::default(),
            depth: 0,
            iterations: 0,
            max_depth,
            max_iterations,
            exceeded: false,
        }
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self::new(profile.max_depth(), profile.max_iterations())
    }

    /// Try to enter a recursive computation for `key`.
    ///
    /// On [`RecursionResult::Entered`] the caller **must** call
    /// [`leave`](Self::leave) with the same key when done. Any other result
    /// means nothing was recorded.
    pub fn enter(&mut self, key: K) -> RecursionResult {
        self.iterations = self.iterations.saturating_add(1);

        if self.iterations > self.max_iterations {
            self.exceeded = true;
            return RecursionResult::IterationExceeded;
        }
        if self.visiting.contains(&key) {
            return RecursionResult::Cycle;
        }
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return RecursionResult::DepthExceeded;
        }

        self.visiting.insert(key);
        self.depth += 1;
        RecursionResult::Entered
    }

    /// Leave a recursive computation for `key`.
    ///
    /// # Debug panics
    ///
    /// Panics in debug builds if `key` is not being visited.
    pub fn leave(&mut self, key: K) {
        let was_present = self.visiting.remove(&key);

        debug_assert!(
            was_present,
            "RecursionGuard::leave() called with a key that is not in the visiting set"
        );

        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Sticky: stays `true` until [`reset`](Self::reset).
    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }

    /// Reset all state while preserving configured limits.
    pub fn reset(&mut self) {
        self.visiting.clear();
        self.depth = 0;
        self.iterations = 0;
        self.exceeded = false;
    }
}

#[cfg(debug_assertions)]
impl<K: Hash + Eq + Copy> Drop for RecursionGuard<K> {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.visiting.is_empty() {
            panic!(
                "RecursionGuard dropped with {} active entries still in the visiting set",
                self.visiting.len(),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// DepthCounter
// ---------------------------------------------------------------------------

/// Depth-only guard for walks that legitimately revisit the same node
/// (substitution rewrites the same variable in many positions).
pub struct DepthCounter {
    depth: u32,
    max_depth: u32,
    exceeded: bool,
}

impl DepthCounter {
    pub fn new(max_depth: u32) -> Self {
        Self {
            depth: 0,
            max_depth,
            exceeded: false,
        }
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self::new(profile.max_depth())
    }

    /// Returns `false` (and records the overflow) when the ceiling is
    /// reached; do **not** call `leave()` in that case.
    #[inline]
    pub fn enter(&mut self) -> bool {
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return false;
        }
        self.depth += 1;
        true
    }

    #[inline]
    pub fn leave(&mut self) {
        debug_assert!(self.depth > 0, "DepthCounter::leave() called at depth 0");
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }
}

#[cfg(debug_assertions)]
impl Drop for DepthCounter {
    fn drop(&mut self) {
        if !std::thread::panicking() && self.depth > 0 {
            panic!("DepthCounter dropped with depth {}", self.depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_limits() {
        assert_eq!(RecursionProfile::RelationCheck.max_depth(), 100);
        assert_eq!(RecursionProfile::RelationCheck.max_iterations(), 100_000);
        assert_eq!(
            RecursionProfile::Substitution.max_depth(),
            limits::MAX_SUBSTITUTION_DEPTH
        );
        let custom = RecursionProfile::Custom {
            max_depth: 7,
            max_iterations: 42,
        };
        assert_eq!(custom.max_depth(), 7);
        assert_eq!(custom.max_iterations(), 42);
    }

    #[test]
    fn enter_leave_tracks_depth() {
        let mut guard = RecursionGuard::new(10, 100);
        assert_eq!(guard.enter(1u32), RecursionResult::Entered);
        assert_eq!(guard.enter(2u32), RecursionResult::Entered);
        assert_eq!(guard.depth(), 2);
        assert_eq!(guard.enter(1u32), RecursionResult::Cycle);

        guard.leave(2);
        guard.leave(1);
        assert_eq!(guard.depth(), 0);
        assert_eq!(guard.enter(1u32), RecursionResult::Entered);
        guard.leave(1);
        assert_eq!(guard.iterations(), 4);
    }

    #[test]
    fn cycle_detected_on_same_key() {
        let mut guard = RecursionGuard::new(10, 100);
        assert_eq!(guard.enter((1u32, 2u32)), RecursionResult::Entered);
        assert_eq!(guard.enter((2u32, 1u32)), RecursionResult::Entered);
        assert_eq!(guard.enter((1u32, 2u32)), RecursionResult::Cycle);
        assert!(!guard.is_exceeded());
        assert_eq!(guard.depth(), 2);

        guard.leave((2, 1));
        guard.leave((1, 2));
    }

    #[test]
    fn cycle_wins_over_depth_limit() {
        let mut guard = RecursionGuard::new(1, 100);
        assert_eq!(guard.enter(1u32), RecursionResult::Entered);
        assert_eq!(guard.enter(1u32), RecursionResult::Cycle);
        assert_eq!(guard.enter(2u32), RecursionResult::DepthExceeded);
        assert!(guard.is_exceeded());
        guard.leave(1);
    }

    #[test]
    fn iteration_budget_is_sticky_until_reset() {
        let mut guard = RecursionGuard::new(10, 2);
        for key in [1u32, 2] {
            assert_eq!(guard.enter(key), RecursionResult::Entered);
            guard.leave(key);
        }
        assert_eq!(guard.enter(3u32), RecursionResult::IterationExceeded);
        assert!(guard.is_exceeded());
        assert_eq!(guard.depth(), 0);

        guard.reset();
        assert!(!guard.is_exceeded());
        assert_eq!(guard.iterations(), 0);
        assert_eq!(guard.enter(3u32), RecursionResult::Entered);
        guard.leave(3);
    }

    #[test]
    fn depth_counter_stops_at_ceiling() {
        let mut counter = DepthCounter::new(2);
        assert!(counter.enter());
        assert!(counter.enter());
        assert!(!counter.enter());
        assert!(counter.is_exceeded());
        counter.leave();
        assert!(counter.enter());
        counter.leave();
        counter.leave();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "RecursionGuard dropped")]
    fn leaked_entry_panics_on_drop() {
        let mut guard = RecursionGuard::new(10, 100);
        guard.enter(1u32);
    }
}
