//! The narrow interface a field consumes from its spatial discretization.

use std::collections::HashMap;

use crate::field_error::FieldError;
use crate::mesh::bbox::{BoundingBox, Position};
use crate::mesh::label::EntityLabel;
use crate::mesh::snapshot::MeshSnapshot;

/// Outcome of a point-in-cell test.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Containment {
    /// The position lies inside the cell, boundary included.
    Inside,
    /// The position lies outside the cell.
    Outside,
    /// The cell has zero measure and the test is undecidable. Callers
    /// recover locally by skipping the cell.
    Degenerate,
}

/// Union discretization produced by [`Discretization::merge_with`],
/// together with the label→index maps needed to scatter entity data onto
/// the union numbering.
#[derive(Debug)]
pub struct MeshUnion<M> {
    /// The combined discretization. Entities deduplicated by label.
    pub mesh: M,
    /// Union vertex index for every vertex label of both inputs.
    pub vertex_index: HashMap<EntityLabel, usize>,
    /// Union cell index for every cell label of both inputs.
    pub cell_index: HashMap<EntityLabel, usize>,
}

/// Spatial discretization as seen by a field.
///
/// Implementations own vertex/cell storage, the spatial localizer, and the
/// element geometry; fields only ever call through this trait.
pub trait Discretization {
    /// Number of vertices, which is also the value count of vertex-based
    /// fields over this discretization.
    fn vertex_count(&self) -> usize;

    /// Number of cells, which is also the value count of cell-based fields
    /// over this discretization.
    fn cell_count(&self) -> usize;

    /// Vertex indices of `cell`, in the cell's interpolation order.
    fn vertices_of_cell(&self, cell: usize) -> Result<Vec<usize>, FieldError>;

    /// Spatial-localizer query: indices of all cells whose bounding box
    /// intersects `bbox`.
    ///
    /// The emission order is observable: vertex-based evaluation commits
    /// to the first containing candidate in this order.
    fn cells_near(&self, bbox: &BoundingBox) -> Vec<usize>;

    /// Point-in-cell test for `position`.
    fn cell_contains(&self, cell: usize, position: Position) -> Result<Containment, FieldError>;

    /// Interpolation weights for `position` inside `cell`, one per vertex,
    /// aligned with [`vertices_of_cell`](Self::vertices_of_cell).
    fn interpolation_weights(
        &self,
        cell: usize,
        position: Position,
    ) -> Result<Vec<f64>, FieldError>;

    /// Stable label of vertex `vertex`.
    fn vertex_label(&self, vertex: usize) -> Result<EntityLabel, FieldError>;

    /// Stable label of cell `cell`.
    fn cell_label(&self, cell: usize) -> Result<EntityLabel, FieldError>;

    /// Build the union of `self` and `other`, deduplicating entities by
    /// label. Neither input is modified.
    fn merge_with(&self, other: &Self) -> Result<MeshUnion<Self>, FieldError>
    where
        Self: Sized;

    /// Flattened geometry/topology for persistence.
    fn snapshot(&self) -> MeshSnapshot;

    /// Deterministic deduplication key.
    ///
    /// Derived from the snapshot by default; implementations that cache
    /// their hash can override.
    fn content_hash(&self) -> u64 {
        self.snapshot().content_hash()
    }
}
