//! Core trait for sieve data structures in mesh topology.
//!
//! This module defines the [`Sieve`] trait, a bidirectional incidence API for
//! mesh topologies stored as DAGs of points. Arrows run downward in dimension
//! (cell -> face -> edge -> vertex), so `cone` walks towards vertices and
//! `support` towards cells.

use crate::topology::bounds::{PayloadLike, PointLike};
use crate::topology::cache::InvalidateCache;

/// Bidirectional incidence API over mesh points.
///
/// # Associated Types
/// - `Point`: point identifier (see [`PointLike`]).
/// - `Payload`: per-arrow payload; numbering code uses `()` throughout.
/// - `ConeIter` / `SupportIter`: iterators over outgoing/incoming arrows.
///
/// # Determinism
/// The traversal defaults ([`Sieve::closure`], [`Sieve::star`]) visit points
/// in a fixed depth-first order driven by adjacency insertion order, so two
/// identically built sieves traverse identically. The numbering layer relies
/// on this for reproducible permutations.
pub trait Sieve: InvalidateCache {
    type Point: PointLike;
    type Payload: PayloadLike;

    type ConeIter<'a>: Iterator<Item = (Self::Point, Self::Payload)>
    where
        Self: 'a;
    type SupportIter<'a>: Iterator<Item = (Self::Point, Self::Payload)>
    where
        Self: 'a;

    /// Outgoing arrows from `p` (towards lower dimension).
    fn cone<'a>(&'a self, p: Self::Point) -> Self::ConeIter<'a>;
    /// Incoming arrows to `p` (towards higher dimension).
    fn support<'a>(&'a self, p: Self::Point) -> Self::SupportIter<'a>;

    /// Insert arrow `src -> dst`.
    fn add_arrow(&mut self, src: Self::Point, dst: Self::Point, payload: Self::Payload);
    /// Remove arrow `src -> dst`, returning its payload.
    fn remove_arrow(&mut self, src: Self::Point, dst: Self::Point) -> Option<Self::Payload>;
    /// Insert a point with no arrows yet (so it appears in the chart).
    fn add_point(&mut self, p: Self::Point);

    /// All points with outgoing arrows.
    fn base_points<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Point> + 'a>;
    /// All points with incoming arrows.
    fn cap_points<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Point> + 'a>;

    /// All points appearing as a source or destination of any arrow.
    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Point> + 'a> {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        for p in self.base_points() {
            set.insert(p);
        }
        for p in self.cap_points() {
            set.insert(p);
        }
        Box::new(set.into_iter())
    }

    /// Cone destinations only, payloads dropped.
    fn cone_points<'a>(&'a self, p: Self::Point) -> impl Iterator<Item = Self::Point> + 'a {
        self.cone(p).map(|(q, _)| q)
    }

    /// Support sources only, payloads dropped.
    fn support_points<'a>(&'a self, p: Self::Point) -> impl Iterator<Item = Self::Point> + 'a {
        self.support(p).map(|(q, _)| q)
    }

    /// Transitive closure of `seeds` along cone arrows, seeds included.
    ///
    /// Depth-first: a point is emitted once, the first time it is reached.
    fn closure<'s, I>(&'s self, seeds: I) -> Box<dyn Iterator<Item = Self::Point> + 's>
    where
        I: IntoIterator<Item = Self::Point>,
    {
        use std::collections::HashSet;
        let mut stack: Vec<_> = seeds.into_iter().collect();
        let mut seen: HashSet<Self::Point> = stack.iter().copied().collect();
        Box::new(std::iter::from_fn(move || {
            if let Some(p) = stack.pop() {
                for (q, _) in self.cone(p) {
                    if seen.insert(q) {
                        stack.push(q);
                    }
                }
                Some(p)
            } else {
                None
            }
        }))
    }

    /// Transitive star of `seeds` along support arrows, seeds included.
    fn star<'s, I>(&'s self, seeds: I) -> Box<dyn Iterator<Item = Self::Point> + 's>
    where
        I: IntoIterator<Item = Self::Point>,
    {
        use std::collections::HashSet;
        let mut stack: Vec<_> = seeds.into_iter().collect();
        let mut seen: HashSet<Self::Point> = stack.iter().copied().collect();
        Box::new(std::iter::from_fn(move || {
            if let Some(p) = stack.pop() {
                for (q, _) in self.support(p) {
                    if seen.insert(q) {
                        stack.push(q);
                    }
                }
                Some(p)
            } else {
                None
            }
        }))
    }
}
