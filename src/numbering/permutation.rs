//! Class-ordered global permutation of all chart points.
//!
//! Degree-of-freedom layout wants every `core` point before every `non_core`
//! point before every `exec_halo` point, with a deterministic order inside
//! each block. [`class_ordered_permutation`] derives that order from a
//! depth-first walk of cell closures, one class at a time, without
//! re-sorting anything the topology already fixes.

use crate::mesh_error::MeshNumberingError;
use crate::numbering::classify::{EntityClass, EntityClassification};
use crate::topology::point::PointId;
use crate::topology::sieve::{Sieve, StrataCache};
use std::collections::HashSet;

/// Permutation of the chart ordered by entity class.
///
/// For each class in order `core`, `non_core`, `exec_halo`, the walk visits
/// that class's cells ascending and traverses each cell's transitive closure
/// in topology-native order. A point is emitted the first time it is reached
/// while its own class is being processed; earlier encounters during another
/// class's walk leave it untouched, so no point can jump ahead of a class
/// that has not been flushed yet.
///
/// The result is a bijection onto the chart: `result.len()` equals the chart
/// size and every chart point appears exactly once. Positions are a pure
/// function of the topology and the classification, so two runs (or two
/// processes with identical local topology) agree.
///
/// # Errors
/// * [`MeshNumberingError::IncompletePermutation`]: some chart point was
///   never reached from any cell of its class, which indicates a chart with
///   points outside every cell closure or a classification not produced from
///   this topology.
/// * [`MeshNumberingError::ClassCountMismatch`]: the classification covers a
///   different point set than the chart.
pub fn class_ordered_permutation<S>(
    sieve: &S,
    strata: &StrataCache<PointId>,
    classes: &EntityClassification,
) -> Result<Vec<PointId>, MeshNumberingError>
where
    S: Sieve<Point = PointId>,
{
    let chart = strata.len();
    let mut perm = Vec::with_capacity(chart);
    let mut seen: HashSet<PointId> = HashSet::with_capacity(chart);

    for class in EntityClass::ALL {
        for &cell in classes.cells(class) {
            for p in sieve.closure([cell]) {
                if seen.contains(&p) {
                    continue;
                }
                if classes.class_of(p) == Some(class) {
                    seen.insert(p);
                    perm.push(p);
                }
            }
        }
    }

    if perm.len() != chart {
        let missing = strata
            .chart_points
            .iter()
            .copied()
            .find(|p| !seen.contains(p));
        return Err(match missing {
            Some(example) => MeshNumberingError::IncompletePermutation {
                placed: perm.len(),
                chart,
                example,
            },
            // Every chart point was placed yet the totals disagree: the
            // classification must cover points outside this chart.
            None => MeshNumberingError::ClassCountMismatch {
                classified: classes.len(),
                chart,
            },
        });
    }
    Ok(perm)
}
