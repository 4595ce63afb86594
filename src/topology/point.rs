//! `PointId`: a strong, zero-cost handle for mesh entities
//!
//! Every entity of a mesh topology (cell, face, edge, vertex) is an opaque
//! point drawn from a contiguous chart. `PointId` wraps a nonzero `u64` so
//! that 0 stays reserved as an invalid/sentinel value and `Option<PointId>`
//! costs nothing extra.
//!
//! This module provides:
//! - A transparent `PointId` newtype around `NonZeroU64` with layout
//!   guarantees checked by `static_assertions`.
//! - A fallible constructor; zero is rejected with a typed error instead of
//!   a panic.
//! - Common trait implementations (`Debug`, `Display`, ordering, hashing,
//!   serde) so `PointId` works in maps, sets, sorted strata, and snapshots.

use crate::mesh_error::MeshNumberingError;
use std::{fmt, num::NonZeroU64};

/// Opaque identifier for a mesh entity.
///
/// # Memory layout
/// This type is `repr(transparent)`: same ABI and alignment as its single
/// `NonZeroU64` field, and `Option<PointId>` occupies 8 bytes thanks to the
/// niche.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct PointId(NonZeroU64);

impl PointId {
    /// Creates a new `PointId` from a raw `u64` value.
    ///
    /// # Errors
    /// Returns [`MeshNumberingError::InvalidPointId`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use mesh_numbering::topology::point::PointId;
    /// let p = PointId::new(1).unwrap();
    /// assert_eq!(p.get(), 1);
    /// assert!(PointId::new(0).is_err());
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, MeshNumberingError> {
        NonZeroU64::new(raw)
            .map(PointId)
            .ok_or(MeshNumberingError::InvalidPointId)
    }

    /// Returns the inner `u64` value of this `PointId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// Displays as `PointId(raw_value)`.
impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointId").field(&self.get()).finish()
    }
}

/// Prints the numeric ID without any wrapper text.
impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
