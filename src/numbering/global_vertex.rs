//! Universal vertex numbering with sign-encoded ownership.
//!
//! Every vertex of the distributed mesh carries one signed index agreed
//! across all processes. A non-negative value means this process owns the
//! vertex and the value is its global index; a negative value `v` marks a
//! vertex owned elsewhere, with global index `-(v + 1)`. The numbering is
//! fixed before any numbering operation runs and is the only cross-process
//! data the canonical closure and facet orderings depend on.

use crate::mesh_error::MeshNumberingError;
use crate::topology::point::PointId;
use std::collections::HashMap;

/// Per-vertex signed universal index, read-only input to the numbering layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalVertexNumbering {
    offsets: HashMap<PointId, i64>,
}

impl GlobalVertexNumbering {
    /// Creates an empty numbering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a numbering from `(vertex, signed offset)` pairs as handed over
    /// by the distribution layer. Later pairs overwrite earlier ones.
    pub fn from_offsets<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (PointId, i64)>,
    {
        Self {
            offsets: iter.into_iter().collect(),
        }
    }

    /// Record that this process owns `vertex` with global index `index`.
    pub fn insert_owned(&mut self, vertex: PointId, index: u64) {
        self.offsets.insert(vertex, index as i64);
    }

    /// Record that another process owns `vertex` with global index
    /// `owner_index`; stored sign-encoded as `-(owner_index) - 1`.
    pub fn insert_ghost(&mut self, vertex: PointId, owner_index: u64) {
        self.offsets.insert(vertex, -(owner_index as i64) - 1);
    }

    /// The stored signed offset for `vertex`.
    ///
    /// # Errors
    /// [`MeshNumberingError::MissingVertexNumber`] if `vertex` has no entry.
    #[inline]
    pub fn raw(&self, vertex: PointId) -> Result<i64, MeshNumberingError> {
        self.offsets
            .get(&vertex)
            .copied()
            .ok_or(MeshNumberingError::MissingVertexNumber(vertex))
    }

    /// The corrected global index for `vertex`: non-negative offsets are used
    /// directly, negative offsets decode as `-(offset + 1)`.
    ///
    /// # Errors
    /// [`MeshNumberingError::MissingVertexNumber`] if `vertex` has no entry.
    #[inline]
    pub fn global_index(&self, vertex: PointId) -> Result<u64, MeshNumberingError> {
        let raw = self.raw(vertex)?;
        Ok(if raw >= 0 { raw } else { -(raw + 1) } as u64)
    }

    /// Whether this process owns `vertex` (its stored offset is non-negative).
    ///
    /// # Errors
    /// [`MeshNumberingError::MissingVertexNumber`] if `vertex` has no entry.
    #[inline]
    pub fn is_owned(&self, vertex: PointId) -> Result<bool, MeshNumberingError> {
        Ok(self.raw(vertex)? >= 0)
    }

    /// Number of numbered vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether no vertex is numbered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
