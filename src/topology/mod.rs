//! Top-level module for mesh topology abstractions.
//!
//! Core types and traits for representing a mesh as a Sieve: opaque point
//! identifiers, the bidirectional incidence trait with an in-memory
//! implementation, and the strata cache that answers depth/height queries.
//!
//! Most users interact with [`point::PointId`], the [`sieve::Sieve`] trait,
//! [`sieve::InMemorySieve`], and [`sieve::StrataCache`].

pub mod bounds;
pub mod cache;
pub mod point;
pub mod sieve;

pub use cache::InvalidateCache;
pub use point::PointId;
pub use sieve::{InMemorySieve, Sieve, StrataCache, compute_strata};
