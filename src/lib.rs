#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-numbering
//!
//! mesh-numbering derives canonical local and global numberings for
//! distributed unstructured meshes. Each process holds a sieve of the
//! entities it owns plus a halo received from its neighbors; the routines
//! here classify entities by ownership, order them class by class, and
//! number the degrees of freedom inside each cell closure so that every
//! process arrives at the same answer without communicating.
//!
//! ## Features
//! - Sieve topology with cached strata (height, depth, diameter)
//! - Ownership classification of the chart into core, non-core, and
//!   exec-halo entities driven by an overlap description
//! - Class-ordered entity selection and whole-chart permutations
//! - Canonical cell-closure numbering from global vertex indices
//! - Local facet numbering that agrees across the processes sharing a facet
//! - Cell-list mesh construction with edge/face interpolation
//!
//! ## Determinism
//!
//! Every routine is deterministic: identical topology, overlap, and global
//! vertex numbers produce identical output, which is what lets neighboring
//! processes agree on shared entities without exchanging messages. Tests
//! that randomize inputs fix `SmallRng` seeds explicitly.

// Re-export our major subsystems:
pub mod debug_invariants;
pub mod mesh_error;
pub mod mesh_generation;
pub mod numbering;
pub mod overlap;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh_error::MeshNumberingError;
    pub use crate::mesh_generation::{SimplicialComplex, from_cell_list};
    pub use crate::numbering::{
        ClassOrderedEntities, EntityClass, EntityClassification, GlobalVertexNumbering,
        cell_closure_numbering, class_ordered_permutation, classify_points, entities_by_class,
        entities_by_class_where, facet_numbering,
    };
    pub use crate::overlap::{Overlap, Remote};
    pub use crate::topology::bounds::{PayloadLike, PointLike};
    pub use crate::topology::point::PointId;
    pub use crate::topology::sieve::{InMemorySieve, Sieve, StrataCache, compute_strata};
}
