//! Canonical local ordering of one cell's transitive closure.
//!
//! Two processes that both hold the full closure of a cell (true at shared
//! facets by construction of the halo) must lay out its degrees of freedom
//! identically without talking to each other. [`cell_closure_numbering`]
//! achieves that by ordering every sub-entity from the universal vertex
//! numbering alone: local point identifiers never influence a position.
//!
//! The order is:
//! 1. vertices, ascending by corrected global index (reversed in the 1-D
//!    edge-as-cell case to keep the conventional edge orientation),
//! 2. each intermediate depth ascending, its entities sorted by the
//!    lexicographic list of local indices of their non-incident vertices;
//!    skipped entirely for depths carrying no degrees of freedom,
//! 3. the cell itself.

use crate::mesh_error::MeshNumberingError;
use crate::numbering::global_vertex::GlobalVertexNumbering;
use crate::topology::point::PointId;
use crate::topology::sieve::{Sieve, StrataCache};
use std::collections::HashSet;

/// Sorted `(corrected global index, vertex)` pairs for the vertices of one
/// closure. Stable on the global index, so ties (which a well-formed
/// numbering never produces) keep closure order.
fn vertices_by_global_index(
    strata: &StrataCache<PointId>,
    numbering: &GlobalVertexNumbering,
    closure: impl IntoIterator<Item = PointId>,
) -> Result<Vec<(u64, PointId)>, MeshNumberingError> {
    let mut vertices = Vec::new();
    for p in closure {
        match strata.depth_of(p) {
            Some(0) => vertices.push((numbering.global_index(p)?, p)),
            Some(_) => {}
            None => return Err(MeshNumberingError::PointNotInChart(p)),
        }
    }
    vertices.sort_by_key(|&(global, _)| global);
    Ok(vertices)
}

/// Canonically order the points of one cell's transitive closure.
///
/// `closure` must be exactly one cell's transitive closure (the cell plus
/// every entity incident to it, transitively); `dofs_per_depth[d]` is the
/// number of degrees of freedom attached to each entity at depth `d` and
/// must cover every depth below the cell. The output has the same length
/// and membership as `closure`, reordered canonically.
///
/// Entities at a depth with zero dofs keep their closure-supplied order:
/// with nothing attached to them, their relative order is immaterial and
/// the non-incident-vertex sort is skipped.
///
/// # Errors
/// * [`MeshNumberingError::DofsLengthMismatch`]: `dofs_per_depth` is shorter
///   than the mesh dimension.
/// * [`MeshNumberingError::MissingVertexNumber`]: a closure vertex has no
///   universal number.
/// * [`MeshNumberingError::PointNotInChart`]: a closure point is unknown to
///   the strata.
pub fn cell_closure_numbering<S>(
    sieve: &S,
    strata: &StrataCache<PointId>,
    numbering: &GlobalVertexNumbering,
    closure: &[PointId],
    dofs_per_depth: &[usize],
) -> Result<Vec<PointId>, MeshNumberingError>
where
    S: Sieve<Point = PointId>,
{
    let dim = strata.diameter;
    if dofs_per_depth.len() < dim as usize {
        return Err(MeshNumberingError::DofsLengthMismatch {
            needed: dim as usize,
            got: dofs_per_depth.len(),
        });
    }

    // Step 1: vertices ascending by corrected global index. The 1-D case
    // reverses the pair to preserve the conventional edge orientation.
    let mut vertices = vertices_by_global_index(strata, numbering, closure.iter().copied())?;
    if dim == 1 {
        vertices.reverse();
    }
    let vertex_order: Vec<PointId> = vertices.into_iter().map(|(_, p)| p).collect();

    let mut ordered = Vec::with_capacity(closure.len());
    ordered.extend_from_slice(&vertex_order);

    // Step 2: intermediate depths ascending. Each entity's sort key is the
    // ascending list of local indices (positions in step 1's order) of the
    // cell vertices *not* in that entity's own closure.
    for depth in 1..dim {
        let at_depth: Vec<PointId> = closure
            .iter()
            .copied()
            .filter(|&p| strata.depth_of(p) == Some(depth))
            .collect();
        if at_depth.is_empty() {
            continue;
        }
        if dofs_per_depth[depth as usize] == 0 {
            ordered.extend_from_slice(&at_depth);
            continue;
        }

        let mut keyed: Vec<(Vec<usize>, PointId)> = Vec::with_capacity(at_depth.len());
        for p in at_depth {
            let incident: HashSet<PointId> = sieve
                .closure([p])
                .filter(|&q| strata.depth_of(q) == Some(0))
                .collect();
            let key: Vec<usize> = vertex_order
                .iter()
                .enumerate()
                .filter(|(_, v)| !incident.contains(v))
                .map(|(local, _)| local)
                .collect();
            keyed.push((key, p));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        ordered.extend(keyed.into_iter().map(|(_, p)| p));
    }

    // Step 3: the cell itself comes last, in closure-supplied order.
    ordered.extend(
        closure
            .iter()
            .copied()
            .filter(|&p| strata.height_of(p) == Some(0)),
    );

    Ok(ordered)
}

/// The canonical vertex order of a cell, by corrected global index.
///
/// Shared with facet numbering, which needs [`cell_closure_numbering`]
/// step 1 exactly, and deliberately without the 1-D reversal.
pub(crate) fn cell_vertex_order<S>(
    sieve: &S,
    strata: &StrataCache<PointId>,
    numbering: &GlobalVertexNumbering,
    cell: PointId,
) -> Result<Vec<PointId>, MeshNumberingError>
where
    S: Sieve<Point = PointId>,
{
    let vertices = vertices_by_global_index(strata, numbering, sieve.closure([cell]))?;
    Ok(vertices.into_iter().map(|(_, p)| p).collect())
}
