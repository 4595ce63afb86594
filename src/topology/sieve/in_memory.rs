//! In-memory implementation of the [`Sieve`] trait.
//!
//! [`InMemorySieve`] stores both adjacency directions in hash maps and keeps
//! the derived strata in a `OnceCell` that every mutation invalidates.

use super::sieve_trait::Sieve;
use super::strata::{StrataCache, compute_strata};
use crate::mesh_error::MeshNumberingError;
use crate::topology::bounds::{PayloadLike, PointLike};
use crate::topology::cache::InvalidateCache;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// An in-memory sieve using hash maps for adjacency storage.
///
/// # Type Parameters
/// - `P`: point type, see [`PointLike`].
/// - `T`: per-arrow payload, defaults to `()`.
#[derive(Clone, Debug)]
pub struct InMemorySieve<P, T = ()>
where
    P: PointLike,
{
    /// Outgoing adjacency: point -> (destination, payload) pairs.
    pub adjacency_out: HashMap<P, Vec<(P, T)>>,
    /// Incoming adjacency: point -> (source, payload) pairs.
    pub adjacency_in: HashMap<P, Vec<(P, T)>>,
    /// Cached strata information, rebuilt lazily after mutation.
    strata: OnceCell<StrataCache<P>>,
}

impl<P: PointLike, T> Default for InMemorySieve<P, T> {
    fn default() -> Self {
        Self {
            adjacency_out: HashMap::new(),
            adjacency_in: HashMap::new(),
            strata: OnceCell::new(),
        }
    }
}

impl<P: PointLike, T: PayloadLike> InMemorySieve<P, T> {
    /// Creates a new, empty `InMemorySieve`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an `InMemorySieve` from an iterator of arrows.
    ///
    /// # Example
    /// ```rust
    /// use mesh_numbering::topology::sieve::{InMemorySieve, Sieve};
    /// let arrows = vec![(1u32, 2u32, ()), (1, 3, ())];
    /// let sieve = InMemorySieve::from_arrows(arrows);
    /// assert_eq!(sieve.cone(1).count(), 2);
    /// ```
    pub fn from_arrows<I: IntoIterator<Item = (P, P, T)>>(arrows: I) -> Self {
        let mut sieve = Self::default();
        for (src, dst, payload) in arrows {
            sieve.add_arrow(src, dst, payload);
        }
        sieve
    }

    /// Strata information for the current topology, computed once and cached
    /// until the next mutation.
    #[inline]
    pub fn strata_cache(&self) -> Result<&StrataCache<P>, MeshNumberingError> {
        self.strata.get_or_try_init(|| compute_strata(self))
    }

    /// Sort adjacency lists in-place for deterministic neighbor order.
    /// Mirrors remain consistent as edges are untouched.
    pub fn sort_adjacency(&mut self) {
        for outs in self.adjacency_out.values_mut() {
            outs.sort_unstable_by_key(|(dst, _)| *dst);
        }
        for ins in self.adjacency_in.values_mut() {
            ins.sort_unstable_by_key(|(src, _)| *src);
        }
    }

    #[inline]
    pub fn has_arrow(&self, src: P, dst: P) -> bool {
        self.adjacency_out
            .get(&src)
            .is_some_and(|v| v.iter().any(|(d, _)| *d == dst))
    }

    #[cfg(debug_assertions)]
    pub fn debug_assert_consistent(&self) {
        for (src, outs) in &self.adjacency_out {
            for (dst, _) in outs {
                let ok = self
                    .adjacency_in
                    .get(dst)
                    .is_some_and(|ins| ins.iter().any(|(s, _)| s == src));
                debug_assert!(
                    ok,
                    "Missing mirror in[{dst:?}] for out edge ({src:?} -> {dst:?})"
                );
            }
        }
        for (dst, ins) in &self.adjacency_in {
            for (src, _) in ins {
                let ok = self
                    .adjacency_out
                    .get(src)
                    .is_some_and(|outs| outs.iter().any(|(d, _)| d == dst));
                debug_assert!(
                    ok,
                    "Missing mirror out[{src:?}] for in edge ({src:?} -> {dst:?})"
                );
            }
        }
    }
}

impl<P: PointLike, T> InvalidateCache for InMemorySieve<P, T> {
    #[inline]
    fn invalidate_cache(&mut self) {
        self.strata.take();
    }
}

type ConeMapIter<'a, P, T> = std::iter::Map<std::slice::Iter<'a, (P, T)>, fn(&'a (P, T)) -> (P, T)>;

impl<P: PointLike, T: PayloadLike> Sieve for InMemorySieve<P, T> {
    type Point = P;
    type Payload = T;
    type ConeIter<'a>
        = ConeMapIter<'a, P, T>
    where
        Self: 'a;
    type SupportIter<'a>
        = ConeMapIter<'a, P, T>
    where
        Self: 'a;

    fn cone<'a>(&'a self, p: P) -> Self::ConeIter<'a> {
        fn map_fn<P: Copy, T: Clone>((dst, pay): &(P, T)) -> (P, T) {
            (*dst, pay.clone())
        }
        let f: fn(&(P, T)) -> (P, T) = map_fn::<P, T>;
        self.adjacency_out
            .get(&p)
            .map(|v| v.iter().map(f))
            .unwrap_or_else(|| [].iter().map(f))
    }

    fn support<'a>(&'a self, p: P) -> Self::SupportIter<'a> {
        fn map_fn<P: Copy, T: Clone>((src, pay): &(P, T)) -> (P, T) {
            (*src, pay.clone())
        }
        let f: fn(&(P, T)) -> (P, T) = map_fn::<P, T>;
        self.adjacency_in
            .get(&p)
            .map(|v| v.iter().map(f))
            .unwrap_or_else(|| [].iter().map(f))
    }

    /// Adds an arrow `src -> dst`, upserting the payload if the arrow exists.
    fn add_arrow(&mut self, src: P, dst: P, payload: T) {
        let outs = self.adjacency_out.entry(src).or_default();
        if let Some(slot) = outs.iter_mut().find(|(d, _)| *d == dst) {
            slot.1 = payload.clone();
        } else {
            outs.push((dst, payload.clone()));
        }

        let ins = self.adjacency_in.entry(dst).or_default();
        if let Some(slot) = ins.iter_mut().find(|(s, _)| *s == src) {
            slot.1 = payload;
        } else {
            ins.push((src, payload));
        }

        self.invalidate_cache();

        #[cfg(debug_assertions)]
        self.debug_assert_consistent();
    }

    fn remove_arrow(&mut self, src: P, dst: P) -> Option<T> {
        let mut removed = None;
        if let Some(v) = self.adjacency_out.get_mut(&src) {
            if let Some(pos) = v.iter().position(|(d, _)| *d == dst) {
                removed = Some(v.remove(pos).1);
            }
        }
        if let Some(v) = self.adjacency_in.get_mut(&dst) {
            if let Some(pos) = v.iter().position(|(s, _)| *s == src) {
                v.remove(pos);
            }
        }
        self.invalidate_cache();
        #[cfg(debug_assertions)]
        self.debug_assert_consistent();
        removed
    }

    fn add_point(&mut self, p: P) {
        self.adjacency_out.entry(p).or_default();
        self.adjacency_in.entry(p).or_default();
        self.invalidate_cache();
    }

    fn base_points<'a>(&'a self) -> Box<dyn Iterator<Item = P> + 'a> {
        Box::new(self.adjacency_out.keys().copied())
    }

    fn cap_points<'a>(&'a self) -> Box<dyn Iterator<Item = P> + 'a> {
        Box::new(self.adjacency_in.keys().copied())
    }
}
