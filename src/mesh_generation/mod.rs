//! Simplicial mesh construction from cell-vertex lists.
//!
//! [`from_cell_list`] turns raw connectivity (each cell given as the indices
//! of its corner vertices) into a fully interpolated sieve, inserting the
//! intermediate entities a cell-vertex list leaves implicit:
//!
//! - `dim == 1`: `cell → vertex`
//! - `dim == 2`: `cell → edge → vertex`
//! - `dim == 3`: `cell → face → edge → vertex`
//!
//! Point identifiers are assigned deterministically: cells first in input
//! order, then vertices in ascending index order, then interpolated entities
//! in the order they are first encountered. Shared edges and faces are
//! deduplicated through canonical sorted-vertex keys, so the same input
//! always produces the same topology.
//!
//! # Example
//! ```rust
//! # fn try_main() -> Result<(), mesh_numbering::mesh_error::MeshNumberingError> {
//! use mesh_numbering::mesh_generation::from_cell_list;
//!
//! // Two triangles sharing the edge (1,2).
//! let mesh = from_cell_list(2, &[vec![0, 1, 2], vec![1, 2, 3]])?;
//! let cache = mesh.sieve.strata_cache()?;
//! assert_eq!(cache.diameter, 2);
//! assert_eq!(cache.len(), 11); // 2 cells + 5 edges + 4 vertices
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::mesh_error::MeshNumberingError;
use crate::topology::point::PointId;
use crate::topology::sieve::{InMemorySieve, Sieve};

/// A fully interpolated simplicial mesh produced by [`from_cell_list`].
#[derive(Clone, Debug)]
pub struct SimplicialComplex {
    /// Incidence structure running from cells down to vertices.
    pub sieve: InMemorySieve<PointId, ()>,
    /// Cell points in input order.
    pub cell_points: Vec<PointId>,
    /// Vertex index → vertex point, ascending by index.
    pub vertex_points: BTreeMap<usize, PointId>,
    /// Topological dimension of the cells.
    pub dimension: u32,
}

impl SimplicialComplex {
    /// Point assigned to the `i`-th input cell.
    pub fn cell_point(&self, i: usize) -> Option<PointId> {
        self.cell_points.get(i).copied()
    }

    /// Point assigned to the input vertex index `v`.
    pub fn vertex_point(&self, v: usize) -> Option<PointId> {
        self.vertex_points.get(&v).copied()
    }
}

/// Builds an interpolated simplicial mesh from a cell-vertex list.
///
/// Each cell must list exactly `dim + 1` distinct vertex indices. Vertex
/// indices need not be contiguous; gaps are tolerated and unreferenced
/// indices are simply absent from the result.
///
/// # Errors
/// - [`MeshNumberingError::UnsupportedDimension`] unless `1 <= dim <= 3`.
/// - [`MeshNumberingError::EmptyCellList`] if `cells` is empty.
/// - [`MeshNumberingError::InvalidCellArity`] if a cell has the wrong number
///   of vertices.
/// - [`MeshNumberingError::DegenerateCell`] if a cell repeats a vertex.
pub fn from_cell_list(
    dim: u32,
    cells: &[Vec<usize>],
) -> Result<SimplicialComplex, MeshNumberingError> {
    if !(1..=3).contains(&dim) {
        return Err(MeshNumberingError::UnsupportedDimension(dim));
    }
    if cells.is_empty() {
        return Err(MeshNumberingError::EmptyCellList);
    }
    let arity = dim as usize + 1;
    for (idx, cell) in cells.iter().enumerate() {
        if cell.len() != arity {
            return Err(MeshNumberingError::InvalidCellArity {
                cell: idx,
                dim,
                expected: arity,
                got: cell.len(),
            });
        }
        let mut seen = BTreeSet::new();
        for &v in cell {
            if !seen.insert(v) {
                return Err(MeshNumberingError::DegenerateCell { cell: idx, vertex: v });
            }
        }
    }

    let mut next_id = 1u64;
    let mut cell_points = Vec::with_capacity(cells.len());
    for _ in cells {
        cell_points.push(alloc_point(&mut next_id)?);
    }

    let referenced: BTreeSet<usize> = cells.iter().flatten().copied().collect();
    let mut vertex_points = BTreeMap::new();
    for &v in &referenced {
        vertex_points.insert(v, alloc_point(&mut next_id)?);
    }

    let mut sieve = InMemorySieve::<PointId, ()>::new();
    match dim {
        1 => {
            for (idx, cell) in cells.iter().enumerate() {
                for &v in cell {
                    sieve.add_arrow(cell_points[idx], vertex_points[&v], ());
                }
            }
        }
        2 => {
            let mut edge_points = BTreeMap::new();
            for (idx, cell) in cells.iter().enumerate() {
                let v = corner_points(cell, &vertex_points);
                for [a, b] in [[v[0], v[1]], [v[1], v[2]], [v[2], v[0]]] {
                    let edge = edge_point(&mut edge_points, &mut next_id, &mut sieve, a, b)?;
                    sieve.add_arrow(cell_points[idx], edge, ());
                }
            }
        }
        _ => {
            let mut edge_points = BTreeMap::new();
            let mut face_points = BTreeMap::new();
            for (idx, cell) in cells.iter().enumerate() {
                let v = corner_points(cell, &vertex_points);
                let faces = [
                    [v[0], v[1], v[2]],
                    [v[0], v[1], v[3]],
                    [v[1], v[2], v[3]],
                    [v[0], v[2], v[3]],
                ];
                for corners in faces {
                    let face = face_point(&mut face_points, &mut next_id, corners)?;
                    for i in 0..3 {
                        let edge = edge_point(
                            &mut edge_points,
                            &mut next_id,
                            &mut sieve,
                            corners[i],
                            corners[(i + 1) % 3],
                        )?;
                        sieve.add_arrow(face, edge, ());
                    }
                    sieve.add_arrow(cell_points[idx], face, ());
                }
            }
        }
    }
    sieve.sort_adjacency();

    Ok(SimplicialComplex {
        sieve,
        cell_points,
        vertex_points,
        dimension: dim,
    })
}

fn corner_points(cell: &[usize], vertex_points: &BTreeMap<usize, PointId>) -> Vec<PointId> {
    cell.iter().map(|v| vertex_points[v]).collect()
}

fn edge_point(
    edges: &mut BTreeMap<(PointId, PointId), PointId>,
    next_id: &mut u64,
    sieve: &mut InMemorySieve<PointId, ()>,
    a: PointId,
    b: PointId,
) -> Result<PointId, MeshNumberingError> {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(p) = edges.get(&key) {
        return Ok(*p);
    }
    let edge = alloc_point(next_id)?;
    edges.insert(key, edge);
    sieve.add_arrow(edge, a, ());
    sieve.add_arrow(edge, b, ());
    Ok(edge)
}

fn face_point(
    faces: &mut BTreeMap<[PointId; 3], PointId>,
    next_id: &mut u64,
    corners: [PointId; 3],
) -> Result<PointId, MeshNumberingError> {
    let mut key = corners;
    key.sort();
    if let Some(p) = faces.get(&key) {
        return Ok(*p);
    }
    let face = alloc_point(next_id)?;
    faces.insert(key, face);
    Ok(face)
}

fn alloc_point(next_id: &mut u64) -> Result<PointId, MeshNumberingError> {
    let id = PointId::new(*next_id)?;
    *next_id = next_id
        .checked_add(1)
        .ok_or(MeshNumberingError::InvalidPointId)?;
    Ok(id)
}
