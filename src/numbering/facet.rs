//! Local facet indices within the cells bordering a facet.
//!
//! Boundary-condition application and flux assembly address a facet by its
//! local number inside each incident cell. For simplicial cells that number
//! is determined by the one cell vertex the facet does not touch: its
//! position in the cell's canonical (global-index-sorted) vertex order is
//! the facet's local index. Because the canonical order depends only on the
//! universal vertex numbering, two processes sharing the facet derive the
//! same indices independently.

use crate::mesh_error::MeshNumberingError;
use crate::numbering::closure::cell_vertex_order;
use crate::numbering::global_vertex::GlobalVertexNumbering;
use crate::topology::point::PointId;
use crate::topology::sieve::{Sieve, StrataCache};
use std::collections::HashSet;

/// The local index of `facet` within each of its supporting cells.
///
/// One entry per cell in the facet's support, in support order. Per cell,
/// the entry is the position of the unique non-incident vertex in the
/// cell's vertex order sorted ascending by corrected global index (the
/// 1-D closure reversal does not apply here).
///
/// Only simplicial cells qualify: a facet of a simplex excludes exactly one
/// cell vertex.
///
/// # Errors
/// * [`MeshNumberingError::NonSimplicialFacet`]: a supporting cell has a
///   number of non-incident vertices other than one.
/// * [`MeshNumberingError::MissingVertexNumber`]: a cell vertex has no
///   universal number.
/// * [`MeshNumberingError::PointNotInChart`]: the facet or a closure point
///   is unknown to the strata.
pub fn facet_numbering<S>(
    sieve: &S,
    strata: &StrataCache<PointId>,
    numbering: &GlobalVertexNumbering,
    facet: PointId,
) -> Result<Vec<usize>, MeshNumberingError>
where
    S: Sieve<Point = PointId>,
{
    if strata.depth_of(facet).is_none() {
        return Err(MeshNumberingError::PointNotInChart(facet));
    }
    let incident: HashSet<PointId> = sieve
        .closure([facet])
        .filter(|&q| strata.depth_of(q) == Some(0))
        .collect();

    let cells: Vec<PointId> = sieve.support_points(facet).collect();
    let mut local = Vec::with_capacity(cells.len());
    for cell in cells {
        let vertex_order = cell_vertex_order(sieve, strata, numbering, cell)?;
        let non_incident: Vec<usize> = vertex_order
            .iter()
            .enumerate()
            .filter(|(_, v)| !incident.contains(v))
            .map(|(position, _)| position)
            .collect();
        match non_incident.as_slice() {
            &[position] => local.push(position),
            other => {
                return Err(MeshNumberingError::NonSimplicialFacet {
                    facet,
                    cell,
                    non_incident: other.len(),
                });
            }
        }
    }
    Ok(local)
}
