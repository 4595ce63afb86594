//! Canonical numbering schemes for distributed mesh entities.
//!
//! This is the crate's core: given a local mesh topology, the overlap links
//! to neighboring processes, and the universal vertex numbering, it derives
//!
//! - an ownership/communication class per point ([`classify_points`]),
//! - class-grouped entity selections per depth ([`entities_by_class`]),
//! - a class-ordered global permutation of the chart
//!   ([`class_ordered_permutation`]),
//! - a canonical local order for a cell's closure
//!   ([`cell_closure_numbering`]),
//! - local facet indices within incident cells ([`facet_numbering`]).
//!
//! None of these operations communicates. Processes agree on shared
//! orderings because every decision is a pure function of data that is
//! already consistent across them: the overlap graph for classification and
//! the universal vertex numbering for the local orderings.

pub mod classify;
pub mod closure;
pub mod facet;
pub mod global_vertex;
pub mod permutation;
pub mod select;

pub use classify::{EntityClass, EntityClassification, classify_points};
pub use closure::cell_closure_numbering;
pub use facet::facet_numbering;
pub use global_vertex::GlobalVertexNumbering;
pub use permutation::class_ordered_permutation;
pub use select::{ClassOrderedEntities, entities_by_class, entities_by_class_where};
