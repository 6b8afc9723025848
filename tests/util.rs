#![allow(dead_code)]
//! Shared test fixtures: a small planar triangle mesh implementing
//! `Discretization`, plus a recording diagnostic sink.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use mesh_field::diagnostics::DiagnosticSink;
use mesh_field::field_error::FieldError;
use mesh_field::mesh::{
    BoundingBox, CellKind, Containment, Discretization, EntityLabel, MeshSnapshot, MeshUnion,
    Position,
};

/// Zero-area threshold for the barycentric solve.
const DEGENERACY_EPS: f64 = 1e-12;
/// Slack on barycentric coordinates so boundary points count as inside.
const CONTAINMENT_EPS: f64 = 1e-9;

/// Planar triangle mesh in the z = 0 plane with stable vertex/cell labels.
#[derive(Clone, Debug)]
pub struct TriMesh {
    vertex_labels: Vec<u64>,
    coords: Vec<Position>,
    cell_labels: Vec<u64>,
    cells: Vec<[usize; 3]>,
}

impl TriMesh {
    pub fn new(vertices: &[(u64, [f64; 2])], cells: &[(u64, [usize; 3])]) -> Self {
        TriMesh {
            vertex_labels: vertices.iter().map(|&(label, _)| label).collect(),
            coords: vertices
                .iter()
                .map(|&(_, [x, y])| [x, y, 0.0])
                .collect(),
            cell_labels: cells.iter().map(|&(label, _)| label).collect(),
            cells: cells.iter().map(|&(_, cell)| cell).collect(),
        }
    }

    /// Unit square split along the diagonal (0,0)-(1,1).
    ///
    /// Vertices 1..=4 at (0,0), (1,0), (1,1), (0,1); cell 1 below the
    /// diagonal, cell 2 above.
    pub fn unit_square() -> Self {
        TriMesh::new(
            &[
                (1, [0.0, 0.0]),
                (2, [1.0, 0.0]),
                (3, [1.0, 1.0]),
                (4, [0.0, 1.0]),
            ],
            &[(1, [0, 1, 2]), (2, [0, 2, 3])],
        )
    }

    /// Unit square whose localizer emits a zero-area cell first.
    ///
    /// The degenerate cell spans the whole square's bounding box (its
    /// vertices are colinear on the diagonal), so every interior probe
    /// sees it as the first candidate.
    pub fn unit_square_with_degenerate_first() -> Self {
        TriMesh::new(
            &[
                (1, [0.0, 0.0]),
                (2, [1.0, 0.0]),
                (3, [1.0, 1.0]),
                (4, [0.0, 1.0]),
                (5, [0.5, 0.5]),
            ],
            &[(9, [0, 2, 4]), (1, [0, 1, 2]), (2, [0, 2, 3])],
        )
    }

    /// Rebuild a mesh from a stored snapshot.
    pub fn from_snapshot(snapshot: &MeshSnapshot) -> Result<Self, FieldError> {
        let mut cells = Vec::with_capacity(snapshot.cell_count());
        for cell in 0..snapshot.cell_count() {
            let vertices = snapshot.cell(cell).ok_or(FieldError::IndexOutOfRange {
                index: cell,
                count: snapshot.cell_count(),
            })?;
            assert_eq!(snapshot.cell_kinds[cell], CellKind::Triangle);
            cells.push([vertices[0], vertices[1], vertices[2]]);
        }
        let coords = (0..snapshot.vertex_count())
            .map(|vertex| snapshot.position(vertex).unwrap())
            .collect();
        Ok(TriMesh {
            vertex_labels: snapshot.vertex_labels.clone(),
            coords,
            cell_labels: snapshot.cell_labels.clone(),
            cells,
        })
    }

    fn cell_bbox(&self, cell: usize) -> BoundingBox {
        BoundingBox::enclosing(self.cells[cell].iter().map(|&vertex| self.coords[vertex]))
            .expect("triangle has vertices")
    }

    /// Barycentric coordinates of `position` in `cell`; `None` for a
    /// zero-area cell.
    fn barycentric(&self, cell: usize, position: Position) -> Option<[f64; 3]> {
        let [a, b, c] = self.cells[cell].map(|vertex| self.coords[vertex]);
        let det = (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]);
        if det.abs() < DEGENERACY_EPS {
            return None;
        }
        let lb = ((position[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (position[1] - a[1]))
            / det;
        let lc = ((b[0] - a[0]) * (position[1] - a[1]) - (position[0] - a[0]) * (b[1] - a[1]))
            / det;
        Some([1.0 - lb - lc, lb, lc])
    }
}

impl Discretization for TriMesh {
    fn vertex_count(&self) -> usize {
        self.vertex_labels.len()
    }

    fn cell_count(&self) -> usize {
        self.cell_labels.len()
    }

    fn vertices_of_cell(&self, cell: usize) -> Result<Vec<usize>, FieldError> {
        self.cells
            .get(cell)
            .map(|vertices| vertices.to_vec())
            .ok_or(FieldError::IndexOutOfRange {
                index: cell,
                count: self.cells.len(),
            })
    }

    fn cells_near(&self, bbox: &BoundingBox) -> Vec<usize> {
        (0..self.cells.len())
            .filter(|&cell| self.cell_bbox(cell).intersects(bbox))
            .collect()
    }

    fn cell_contains(&self, cell: usize, position: Position) -> Result<Containment, FieldError> {
        if cell >= self.cells.len() {
            return Err(FieldError::IndexOutOfRange {
                index: cell,
                count: self.cells.len(),
            });
        }
        match self.barycentric(cell, position) {
            None => Ok(Containment::Degenerate),
            Some(weights) => {
                if weights.iter().all(|&weight| weight >= -CONTAINMENT_EPS) {
                    Ok(Containment::Inside)
                } else {
                    Ok(Containment::Outside)
                }
            }
        }
    }

    fn interpolation_weights(
        &self,
        cell: usize,
        position: Position,
    ) -> Result<Vec<f64>, FieldError> {
        if cell >= self.cells.len() {
            return Err(FieldError::IndexOutOfRange {
                index: cell,
                count: self.cells.len(),
            });
        }
        let weights = self
            .barycentric(cell, position)
            .ok_or(FieldError::NoContainingCell { position })?;
        Ok(weights.to_vec())
    }

    fn vertex_label(&self, vertex: usize) -> Result<EntityLabel, FieldError> {
        let raw = *self
            .vertex_labels
            .get(vertex)
            .ok_or(FieldError::IndexOutOfRange {
                index: vertex,
                count: self.vertex_labels.len(),
            })?;
        EntityLabel::new(raw)
    }

    fn cell_label(&self, cell: usize) -> Result<EntityLabel, FieldError> {
        let raw = *self
            .cell_labels
            .get(cell)
            .ok_or(FieldError::IndexOutOfRange {
                index: cell,
                count: self.cell_labels.len(),
            })?;
        EntityLabel::new(raw)
    }

    fn merge_with(&self, other: &Self) -> Result<MeshUnion<Self>, FieldError> {
        let mut mesh = self.clone();
        let mut vertex_index = HashMap::new();
        for (index, &raw) in self.vertex_labels.iter().enumerate() {
            vertex_index.insert(EntityLabel::new(raw)?, index);
        }
        let mut cell_index = HashMap::new();
        for (index, &raw) in self.cell_labels.iter().enumerate() {
            cell_index.insert(EntityLabel::new(raw)?, index);
        }

        for (from, &raw) in other.vertex_labels.iter().enumerate() {
            let label = EntityLabel::new(raw)?;
            if !vertex_index.contains_key(&label) {
                vertex_index.insert(label, mesh.vertex_labels.len());
                mesh.vertex_labels.push(raw);
                mesh.coords.push(other.coords[from]);
            }
        }
        for (from, &raw) in other.cell_labels.iter().enumerate() {
            let label = EntityLabel::new(raw)?;
            if !cell_index.contains_key(&label) {
                let remapped = other.cells[from].map(|vertex| {
                    vertex_index[&EntityLabel::new(other.vertex_labels[vertex]).unwrap()]
                });
                cell_index.insert(label, mesh.cell_labels.len());
                mesh.cell_labels.push(raw);
                mesh.cells.push(remapped);
            }
        }

        Ok(MeshUnion {
            mesh,
            vertex_index,
            cell_index,
        })
    }

    fn snapshot(&self) -> MeshSnapshot {
        let mut cell_offsets = Vec::with_capacity(self.cells.len() + 1);
        let mut cell_vertices = Vec::with_capacity(self.cells.len() * 3);
        cell_offsets.push(0);
        for cell in &self.cells {
            cell_vertices.extend_from_slice(cell);
            cell_offsets.push(cell_vertices.len());
        }
        MeshSnapshot {
            vertex_labels: self.vertex_labels.clone(),
            coordinates: self.coords.iter().flatten().copied().collect(),
            cell_labels: self.cell_labels.clone(),
            cell_kinds: vec![CellKind::Triangle; self.cells.len()],
            cell_offsets,
            cell_vertices,
        }
    }
}

/// Sink that records every message it receives, by level.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub messages: RefCell<Vec<(&'static str, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, level: &str, fragment: &str) -> bool {
        self.messages
            .borrow()
            .iter()
            .any(|(l, message)| *l == level && message.contains(fragment))
    }
}

impl DiagnosticSink for RecordingSink {
    fn debug(&self, message: &str) {
        self.messages.borrow_mut().push(("debug", message.into()));
    }

    fn info(&self, message: &str) {
        self.messages.borrow_mut().push(("info", message.into()));
    }

    fn error(&self, message: &str) {
        self.messages.borrow_mut().push(("error", message.into()));
    }
}

pub fn label(raw: u64) -> EntityLabel {
    EntityLabel::new(raw).unwrap()
}

pub fn square() -> Arc<TriMesh> {
    Arc::new(TriMesh::unit_square())
}

/// Vertex index carrying `label` in `mesh`, if any.
pub fn vertex_index_of(mesh: &TriMesh, wanted: EntityLabel) -> Option<usize> {
    (0..mesh.vertex_count()).find(|&vertex| mesh.vertex_label(vertex).unwrap() == wanted)
}

/// Cell index carrying `label` in `mesh`, if any.
pub fn cell_index_of(mesh: &TriMesh, wanted: EntityLabel) -> Option<usize> {
    (0..mesh.cell_count()).find(|&cell| mesh.cell_label(cell).unwrap() == wanted)
}
