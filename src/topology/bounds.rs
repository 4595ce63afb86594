//! Common bound aliases used across topology and numbering code.
//!
//! Both traits have blanket impls, so any type satisfying the underlying
//! bounds implements them automatically. They exist only to keep `where`
//! clauses short and uniform.

/// Canonical bound set for point identifiers.
///
/// - `Copy` for cheap pass-by-value in traversal loops
/// - `Eq + Hash` for `HashMap`-backed adjacencies and seen-sets
/// - `Ord` for deterministic ordering (sorted strata, sorted charts)
/// - `Debug` for diagnostics and invariant checks
pub trait PointLike: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> PointLike for T where T: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}

/// Minimal bound for per-arrow payloads in in-memory backends. Kept small on
/// purpose; numbering never inspects payloads.
pub trait PayloadLike: Clone {}
impl<T: Clone> PayloadLike for T {}
