//! Serializable mesh records for the persistent layout.
//!
//! A snapshot flattens a discretization's full geometry and topology into
//! plain arrays: vertex labels and xyz coordinates, cell labels and kinds,
//! and CSR connectivity. Its [`content_hash`](MeshSnapshot::content_hash)
//! is the deduplication key of the persistent layout: structurally
//! identical discretizations hash identically and are stored once.

use serde::{Deserialize, Serialize};

use crate::mesh::cell_kind::CellKind;
use crate::mesh::stable_hash::{FNV1A_OFFSET_BASIS_64, mix_f64, mix_u64};

/// Flattened geometry/topology of a discretization.
///
/// Connectivity is CSR-shaped: cell `i` references the vertex indices
/// `cell_vertices[cell_offsets[i]..cell_offsets[i + 1]]`, and
/// `cell_offsets` has one trailing entry equal to `cell_vertices.len()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshSnapshot {
    /// Stable label per vertex, in vertex numbering order.
    pub vertex_labels: Vec<u64>,
    /// xyz triples, `3 * vertex_labels.len()` entries.
    pub coordinates: Vec<f64>,
    /// Stable label per cell, in cell numbering order.
    pub cell_labels: Vec<u64>,
    /// Shape of each cell.
    pub cell_kinds: Vec<CellKind>,
    /// CSR offsets into `cell_vertices`, `cell_labels.len() + 1` entries.
    pub cell_offsets: Vec<usize>,
    /// Flat vertex indices for all cells.
    pub cell_vertices: Vec<usize>,
}

impl MeshSnapshot {
    /// Number of vertices described.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_labels.len()
    }

    /// Number of cells described.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cell_labels.len()
    }

    /// Coordinates of vertex `index` as an xyz triple.
    pub fn position(&self, index: usize) -> Option<[f64; 3]> {
        let start = index.checked_mul(3)?;
        let slice = self.coordinates.get(start..start + 3)?;
        Some([slice[0], slice[1], slice[2]])
    }

    /// Vertex indices of cell `index`.
    pub fn cell(&self, index: usize) -> Option<&[usize]> {
        let start = *self.cell_offsets.get(index)?;
        let end = *self.cell_offsets.get(index + 1)?;
        self.cell_vertices.get(start..end)
    }

    /// Deterministic hash over the full geometry and topology.
    ///
    /// Stable across runs and platforms; every constituent array
    /// contributes in order, coordinates through their IEEE-754 bit
    /// patterns.
    pub fn content_hash(&self) -> u64 {
        let mut hash = FNV1A_OFFSET_BASIS_64;
        hash = mix_u64(hash, self.vertex_labels.len() as u64);
        for &label in &self.vertex_labels {
            hash = mix_u64(hash, label);
        }
        for &coordinate in &self.coordinates {
            hash = mix_f64(hash, coordinate);
        }
        hash = mix_u64(hash, self.cell_labels.len() as u64);
        for &label in &self.cell_labels {
            hash = mix_u64(hash, label);
        }
        for &kind in &self.cell_kinds {
            hash = mix_u64(hash, kind as u64);
        }
        for &offset in &self.cell_offsets {
            hash = mix_u64(hash, offset as u64);
        }
        for &vertex in &self.cell_vertices {
            hash = mix_u64(hash, vertex as u64);
        }
        hash
    }
}
