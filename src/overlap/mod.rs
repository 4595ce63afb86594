//! Overlap: which local points are shared with which remote processes.
//!
//! After a mesh is partitioned and distributed, every process knows the
//! points it stores that also live on a neighbor. [`Overlap`] records those
//! links as `local point -> (rank, remote point)` pairs. It is read-only
//! input to the numbering layer: an empty overlap marks a single-process
//! run, and the local side of every link seeds the exec-halo class.

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshNumberingError;
use crate::topology::point::PointId;
use std::collections::BTreeMap;

/// Metadata that identifies a remote copy of a local point.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Remote {
    /// Rank of the process holding the copy.
    pub rank: usize,
    /// The point's identifier on that process.
    pub point: PointId,
}

/// Sharing links for the local partition, keyed by local point.
///
/// Points iterate in ascending order (`BTreeMap`), so every derived
/// quantity (exec-halo seeds, neighbor lists) is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overlap {
    links: BTreeMap<PointId, Vec<Remote>>,
}

impl Overlap {
    /// Creates an empty overlap (the single-process case).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `local` is shared with `rank`, where it is known as
    /// `point`.
    ///
    /// Re-adding an identical link is a no-op. A second link for the same
    /// `(local, rank)` pair with a different remote point is rejected:
    /// a point has exactly one identity per neighbor.
    pub fn add_link(
        &mut self,
        local: PointId,
        rank: usize,
        point: PointId,
    ) -> Result<(), MeshNumberingError> {
        let entry = self.links.entry(local).or_default();
        if let Some(existing) = entry.iter().find(|r| r.rank == rank) {
            if existing.point == point {
                return Ok(());
            }
            return Err(MeshNumberingError::ConflictingOverlapLink {
                local,
                rank,
                existing: existing.point,
                offered: point,
            });
        }
        entry.push(Remote { rank, point });
        Ok(())
    }

    /// Build an overlap from `(local, rank, remote point)` triples.
    pub fn from_links<I>(iter: I) -> Result<Self, MeshNumberingError>
    where
        I: IntoIterator<Item = (PointId, usize, PointId)>,
    {
        let mut ovlp = Self::new();
        for (local, rank, point) in iter {
            ovlp.add_link(local, rank, point)?;
        }
        Ok(ovlp)
    }

    /// Remote copies of `p`; empty when `p` is not shared.
    #[inline]
    pub fn links(&self, p: PointId) -> &[Remote] {
        self.links.get(&p).map_or(&[], Vec::as_slice)
    }

    /// Whether `p` is shared with any neighbor.
    #[inline]
    pub fn is_shared(&self, p: PointId) -> bool {
        self.links.contains_key(&p)
    }

    /// Local points shared with at least one neighbor, ascending.
    pub fn shared_points(&self) -> impl Iterator<Item = PointId> + '_ {
        self.links.keys().copied()
    }

    /// All `(local point, links)` pairs, ascending by point.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &[Remote])> {
        self.links.iter().map(|(&p, v)| (p, v.as_slice()))
    }

    /// Ranks this partition shares points with, sorted and deduplicated.
    pub fn neighbor_ranks(&self) -> Vec<usize> {
        let mut ranks: Vec<usize> = self
            .links
            .values()
            .flat_map(|v| v.iter().map(|r| r.rank))
            .collect();
        ranks.sort_unstable();
        ranks.dedup();
        ranks
    }

    /// Number of shared local points.
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True when nothing is shared; numbering treats this as a serial run.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl DebugInvariants for Overlap {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Overlap");
    }

    fn validate_invariants(&self) -> Result<(), MeshNumberingError> {
        for (&local, remotes) in &self.links {
            for (i, a) in remotes.iter().enumerate() {
                for b in &remotes[i + 1..] {
                    if a.rank == b.rank && a.point != b.point {
                        return Err(MeshNumberingError::ConflictingOverlapLink {
                            local,
                            rank: a.rank,
                            existing: a.point,
                            offered: b.point,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
