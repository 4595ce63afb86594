//! Cache invalidation for derived topology data.

/// Anything that caches derived topology (strata, charts, ...) should
/// implement this so mutation can drop stale results.
pub trait InvalidateCache {
    /// Invalidate all internal caches so future queries recompute correctly.
    fn invalidate_cache(&mut self);
}
