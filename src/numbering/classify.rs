//! Ownership/communication classes for the points of a distributed mesh.
//!
//! After distribution, every local point falls into exactly one of three
//! classes that drive degree-of-freedom layout and ghost exchange:
//!
//! - [`EntityClass::Core`]: owned and not needed by any neighbor,
//! - [`EntityClass::NonCore`]: owned but required by at least one neighbor
//!   (the send set),
//! - [`EntityClass::ExecHalo`]: not owned locally but required to execute a
//!   computation touching an owned cell (the receive set).
//!
//! [`classify_points`] derives the classes from the topology and the overlap
//! alone, without communication: two processes seeing the same shared entity
//! make the same decision because they see the same overlap links. The result
//! is a caller-owned [`EntityClassification`] rather than labels written back
//! into the topology, so classification has no hidden state and re-running it
//! on unchanged inputs yields an equal value.

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshNumberingError;
use crate::overlap::Overlap;
use crate::topology::point::PointId;
use crate::topology::sieve::{Sieve, StrataCache};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Ownership/communication class of a mesh point.
///
/// The discriminant order is the layout order: every numbering that groups
/// points by class emits `Core`, then `NonCore`, then `ExecHalo`.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum EntityClass {
    /// Owned, not in any neighbor's receive set.
    Core,
    /// Owned, in at least one neighbor's receive set.
    NonCore,
    /// Owned elsewhere, replicated here to complete local computation.
    ExecHalo,
}

impl EntityClass {
    /// All classes in layout order.
    pub const ALL: [EntityClass; 3] = [
        EntityClass::Core,
        EntityClass::NonCore,
        EntityClass::ExecHalo,
    ];

    /// Dense index of the class, following layout order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityClass::Core => "core",
            EntityClass::NonCore => "non_core",
            EntityClass::ExecHalo => "exec_halo",
        };
        write!(f, "{name}")
    }
}

/// The classification of every chart point, with per-class per-depth strata
/// materialized eagerly.
///
/// Classes partition the chart: each point carries exactly one class, and in
/// the single-process case every point is [`EntityClass::Core`]. Strata are
/// sorted ascending, so per-class cell enumeration (and everything derived
/// from it) is reproducible across runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityClassification {
    class_of: HashMap<PointId, EntityClass>,
    /// `strata[class][depth]`, each level sorted ascending.
    strata: [Vec<Vec<PointId>>; 3],
    dimension: u32,
}

impl EntityClassification {
    /// Assemble a classification from a complete point-to-class map.
    ///
    /// # Errors
    /// * [`MeshNumberingError::ClassCountMismatch`]: the map does not cover
    ///   exactly the chart.
    /// * [`MeshNumberingError::UnclassifiedPoint`]: a chart point is missing
    ///   from the map.
    pub fn from_class_map(
        class_of: HashMap<PointId, EntityClass>,
        strata: &StrataCache<PointId>,
    ) -> Result<Self, MeshNumberingError> {
        if class_of.len() != strata.len() {
            return Err(MeshNumberingError::ClassCountMismatch {
                classified: class_of.len(),
                chart: strata.len(),
            });
        }
        let dimension = strata.diameter;
        let levels = dimension as usize + 1;
        let mut by_class: [Vec<Vec<PointId>>; 3] = [
            vec![Vec::new(); levels],
            vec![Vec::new(); levels],
            vec![Vec::new(); levels],
        ];
        for &p in &strata.chart_points {
            let class = class_of
                .get(&p)
                .copied()
                .ok_or(MeshNumberingError::UnclassifiedPoint(p))?;
            let depth = strata
                .depth_of(p)
                .ok_or(MeshNumberingError::PointNotInChart(p))?;
            by_class[class.index()][depth as usize].push(p);
        }
        for levels in &mut by_class {
            for level in levels {
                level.sort_unstable();
            }
        }
        Ok(Self {
            class_of,
            strata: by_class,
            dimension,
        })
    }

    /// The class of `p`, if `p` was part of the classified chart.
    #[inline]
    pub fn class_of(&self, p: PointId) -> Option<EntityClass> {
        self.class_of.get(&p).copied()
    }

    /// Sorted points of `class` at `depth`; empty when no point qualifies.
    #[inline]
    pub fn stratum(&self, class: EntityClass, depth: u32) -> &[PointId] {
        self.strata[class.index()]
            .get(depth as usize)
            .map_or(&[], Vec::as_slice)
    }

    /// Number of points of `class` at `depth`.
    #[inline]
    pub fn stratum_size(&self, class: EntityClass, depth: u32) -> usize {
        self.stratum(class, depth).len()
    }

    /// Sorted cells (points at the cell depth) of `class`.
    #[inline]
    pub fn cells(&self, class: EntityClass) -> &[PointId] {
        self.stratum(class, self.dimension)
    }

    /// Topological dimension of the classified mesh (the cell depth).
    #[inline]
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Total number of classified points.
    #[inline]
    pub fn len(&self) -> usize {
        self.class_of.len()
    }

    /// Whether the classification is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.class_of.is_empty()
    }

    /// All `(point, class)` pairs, grouped by class in layout order and
    /// ascending within each class and depth.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, EntityClass)> + '_ {
        EntityClass::ALL.into_iter().flat_map(move |class| {
            self.strata[class.index()]
                .iter()
                .flatten()
                .map(move |&p| (p, class))
        })
    }
}

impl DebugInvariants for EntityClassification {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "EntityClassification");
    }

    /// Partition property: the strata cover every classified point exactly
    /// once, each level sorted strictly ascending, and every stratum point
    /// maps back to its own class.
    fn validate_invariants(&self) -> Result<(), MeshNumberingError> {
        let mut covered = 0usize;
        for class in EntityClass::ALL {
            for (depth, level) in self.strata[class.index()].iter().enumerate() {
                if level.windows(2).any(|w| w[0] >= w[1]) {
                    return Err(MeshNumberingError::UnsortedClassStratum {
                        class: class.to_string(),
                        depth: depth as u32,
                    });
                }
                for &p in level {
                    if self.class_of(p) != Some(class) {
                        return Err(MeshNumberingError::UnclassifiedPoint(p));
                    }
                }
                covered += level.len();
            }
        }
        if covered != self.class_of.len() {
            return Err(MeshNumberingError::ClassCountMismatch {
                classified: self.class_of.len(),
                chart: covered,
            });
        }
        Ok(())
    }
}

/// Classify every chart point into `core`, `non_core`, or `exec_halo`.
///
/// With an empty overlap (a single-process run) every point is `core` and the
/// function returns immediately. Otherwise three passes run:
///
/// 1. every local point of an overlap link is seeded `exec_halo`;
/// 2. every cell whose closure touches an `exec_halo` point is a halo cell;
///    for each vertex in a halo cell's closure, every cell in that vertex's
///    star that is not itself `exec_halo` is adjacent, and every point of an
///    adjacent cell's closure not already `exec_halo` becomes `non_core`
///    (an owned cell bordering the halo must send its data to the neighbor);
/// 3. every remaining chart point is `core`.
///
/// An overlap link naming a point outside the chart is tolerated: it is
/// skipped with a warning, since a neighbor's stale link must not poison an
/// otherwise valid classification.
///
/// # Errors
/// * [`MeshNumberingError::ClassCountMismatch`] /
///   [`MeshNumberingError::UnclassifiedPoint`]: the passes failed to cover
///   the chart, which indicates a topology whose strata and incidence
///   disagree.
pub fn classify_points<S>(
    sieve: &S,
    strata: &StrataCache<PointId>,
    overlap: &Overlap,
) -> Result<EntityClassification, MeshNumberingError>
where
    S: Sieve<Point = PointId>,
{
    let mut class_of: HashMap<PointId, EntityClass> = HashMap::with_capacity(strata.len());

    if overlap.is_empty() {
        for &p in &strata.chart_points {
            class_of.insert(p, EntityClass::Core);
        }
        let classes = EntityClassification::from_class_map(class_of, strata)?;
        classes.debug_assert_invariants();
        return Ok(classes);
    }

    // Pass 1: the local side of every overlap link is exec-halo.
    for p in overlap.shared_points() {
        if strata.depth_of(p).is_none() {
            log::warn!("overlap names point {p} outside the chart; link ignored");
            continue;
        }
        class_of.insert(p, EntityClass::ExecHalo);
    }

    // Pass 2: cells touching the halo, then their vertex-star neighbors.
    let mut adjacent_cells: BTreeSet<PointId> = BTreeSet::new();
    for &cell in strata.cells() {
        let touches_halo = sieve
            .closure([cell])
            .any(|p| class_of.get(&p) == Some(&EntityClass::ExecHalo));
        if !touches_halo {
            continue;
        }
        for p in sieve.closure([cell]) {
            if strata.depth_of(p) != Some(0) {
                continue;
            }
            for q in sieve.star([p]) {
                if strata.height_of(q) == Some(0)
                    && class_of.get(&q) != Some(&EntityClass::ExecHalo)
                {
                    adjacent_cells.insert(q);
                }
            }
        }
    }
    for &cell in &adjacent_cells {
        for p in sieve.closure([cell]) {
            class_of.entry(p).or_insert(EntityClass::NonCore);
        }
    }

    // Pass 3: everything unmarked is core.
    for &p in &strata.chart_points {
        class_of.entry(p).or_insert(EntityClass::Core);
    }

    let classes = EntityClassification::from_class_map(class_of, strata)?;
    classes.debug_assert_invariants();
    Ok(classes)
}
