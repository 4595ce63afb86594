//! Class-ordered entity selection at a fixed depth.
//!
//! Downstream layout code asks for "all edges, grouped by class" and similar
//! queries. [`entities_by_class`] answers them by concatenating the `core`,
//! `non_core`, and `exec_halo` strata at one depth and reporting where each
//! class ends. The boundary array keeps its historical four slots: the last
//! two are always equal because no fourth class exists; consumers written
//! against the four-slot shape keep working, and no semantics are invented
//! for the unused slot.

use crate::numbering::classify::{EntityClass, EntityClassification};
use crate::topology::point::PointId;

/// Entities at one depth, concatenated in class order with boundary offsets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassOrderedEntities {
    /// `core` points, then `non_core`, then `exec_halo`.
    pub points: Vec<PointId>,
    /// Running totals after each class: `[core_end, non_core_end, halo_end,
    /// halo_end]`. Non-decreasing, and `boundaries[3] == points.len()`.
    pub boundaries: [usize; 4],
}

impl ClassOrderedEntities {
    /// The `core` segment.
    #[inline]
    pub fn core(&self) -> &[PointId] {
        &self.points[..self.boundaries[0]]
    }

    /// The `non_core` segment.
    #[inline]
    pub fn non_core(&self) -> &[PointId] {
        &self.points[self.boundaries[0]..self.boundaries[1]]
    }

    /// The `exec_halo` segment.
    #[inline]
    pub fn exec_halo(&self) -> &[PointId] {
        &self.points[self.boundaries[1]..self.boundaries[2]]
    }

    /// The owned prefix (`core` plus `non_core`).
    #[inline]
    pub fn owned(&self) -> &[PointId] {
        &self.points[..self.boundaries[1]]
    }

    /// Total number of selected entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no entity was selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// All entities at `depth` in class order `core`, `non_core`, `exec_halo`.
///
/// A class with no points at `depth` contributes zero entities; its boundary
/// repeats the previous one.
pub fn entities_by_class(classes: &EntityClassification, depth: u32) -> ClassOrderedEntities {
    entities_by_class_where(classes, depth, |_| true)
}

/// Like [`entities_by_class`], keeping only entities satisfying `predicate`.
///
/// Boundaries count the entities that survive the filter, so they stay
/// consistent with the returned sequence.
pub fn entities_by_class_where<F>(
    classes: &EntityClassification,
    depth: u32,
    mut predicate: F,
) -> ClassOrderedEntities
where
    F: FnMut(PointId) -> bool,
{
    let mut points = Vec::new();
    let mut boundaries = [0usize; 4];
    for (slot, class) in EntityClass::ALL.into_iter().enumerate() {
        points.extend(
            classes
                .stratum(class, depth)
                .iter()
                .copied()
                .filter(|&p| predicate(p)),
        );
        boundaries[slot] = points.len();
    }
    // No fourth class is ever populated; the final slot mirrors the halo end.
    boundaries[3] = boundaries[2];
    ClassOrderedEntities { points, boundaries }
}
