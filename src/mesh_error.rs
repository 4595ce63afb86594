//! MeshNumberingError: Unified error type for mesh-numbering public APIs
//!
//! Every fallible operation in this crate reports through this enum so that
//! callers get non-panicking, typed error handling across the whole surface.

use crate::topology::point::PointId;
use thiserror::Error;

/// Unified error type for mesh-numbering operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshNumberingError {
    /// Attempted to construct a PointId with a zero value (invalid).
    #[error("PointId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidPointId,
    /// A point appeared in a cone but wasn't in the declared point set.
    #[error("Topology error: point `{0}` found in cone but not in point set")]
    MissingPointInCone(String),
    /// The mesh topology contains a cycle; expected a DAG.
    #[error("Topology error: cycle detected in mesh (expected DAG)")]
    CycleDetected,
    /// Two overlap links for the same (local point, rank) disagree on the
    /// remote point.
    #[error(
        "conflicting overlap link for local point {local} towards rank {rank}: \
         already {existing}, offered {offered}"
    )]
    ConflictingOverlapLink {
        local: PointId,
        rank: usize,
        existing: PointId,
        offered: PointId,
    },
    /// A vertex has no entry in the global vertex numbering.
    #[error("no global vertex number recorded for point {0}")]
    MissingVertexNumber(PointId),
    /// A point was handed to a numbering operation but is not part of the
    /// topology chart.
    #[error("point {0} is not in the mesh chart")]
    PointNotInChart(PointId),
    /// A chart point carries no entity class.
    #[error("point {0} was never assigned an entity class")]
    UnclassifiedPoint(PointId),
    /// Classification totals disagree with the chart.
    #[error("classification covers {classified} points but the chart has {chart}")]
    ClassCountMismatch { classified: usize, chart: usize },
    /// A classification stratum lost its sorted order.
    #[error("points of class {class} at depth {depth} are not sorted strictly ascending")]
    UnsortedClassStratum { class: String, depth: u32 },
    /// The class-ordered walk failed to place every chart point.
    #[error(
        "class-ordered permutation placed {placed} of {chart} chart points \
         (first missing: {example})"
    )]
    IncompletePermutation {
        placed: usize,
        chart: usize,
        example: PointId,
    },
    /// The per-depth dof table is too short for the mesh dimension.
    #[error("dof table has {got} entries but depths 0..{needed} are required")]
    DofsLengthMismatch { needed: usize, got: usize },
    /// A facet does not exclude exactly one vertex of a supporting cell.
    #[error(
        "facet {facet} excludes {non_incident} vertices of cell {cell}; \
         expected exactly one (simplicial cells only)"
    )]
    NonSimplicialFacet {
        facet: PointId,
        cell: PointId,
        non_incident: usize,
    },
    /// A cell in a cell-vertex list has the wrong number of vertices.
    #[error("cell {cell} lists {got} vertices; dimension {dim} requires {expected}")]
    InvalidCellArity {
        cell: usize,
        dim: u32,
        expected: usize,
        got: usize,
    },
    /// A cell in a cell-vertex list repeats a vertex.
    #[error("cell {cell} lists vertex {vertex} more than once")]
    DegenerateCell { cell: usize, vertex: usize },
    /// Cell-list interpolation only covers intervals, triangles, tetrahedra.
    #[error("cell-list interpolation supports dimensions 1 through 3, got {0}")]
    UnsupportedDimension(u32),
    /// A complex cannot be built from an empty cell list.
    #[error("cannot build a simplicial complex from an empty cell list")]
    EmptyCellList,
}
