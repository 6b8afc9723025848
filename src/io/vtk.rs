//! Legacy VTK (`.vtk`) export for unstructured grids.
//!
//! Writes ASCII legacy VTK with an `UNSTRUCTURED_GRID` dataset: the shared
//! mesh first, then one named array per field, placed under `POINT_DATA`
//! or `CELL_DATA` depending on the field's storage mode. Arrays are named
//! by quantity.
//!
//! This layout carries no unit and no time; the export is documented as
//! lossy on both. Round-trip fidelity lives in [`crate::io::store`].

use std::io::Write;
use std::sync::Arc;

use itertools::Itertools;

use crate::data::storage::Storage;
use crate::field::Field;
use crate::field_error::FieldError;
use crate::mesh::{Discretization, MeshSnapshot};
use crate::value::{StorageMode, ValueKind};

/// Writer for the legacy ASCII VTK unstructured-grid format.
#[derive(Debug, Default, Clone)]
pub struct VtkWriter;

impl VtkWriter {
    /// Write `fields` as one unstructured grid.
    ///
    /// All fields must reference the same discretization instance (the
    /// same `Arc`), since the grid is written once and every array must
    /// line up with its numbering.
    ///
    /// # Errors
    /// [`FieldError::EmptyExport`] for an empty field list,
    /// [`FieldError::MeshNotShared`] when the fields disagree on the mesh
    /// instance, plus I/O failures from `writer`.
    pub fn write<W, M, St>(&self, mut writer: W, fields: &[&Field<M, St>]) -> Result<(), FieldError>
    where
        W: Write,
        M: Discretization,
        St: Storage<f64>,
    {
        let first = *fields.first().ok_or(FieldError::EmptyExport)?;
        for field in &fields[1..] {
            if !Arc::ptr_eq(first.mesh(), field.mesh()) {
                return Err(FieldError::MeshNotShared);
            }
        }

        let snapshot = first.mesh().snapshot();
        Self::write_grid(&mut writer, &snapshot)?;

        let point_fields: Vec<_> = fields
            .iter()
            .filter(|field| field.storage_mode() == StorageMode::VertexBased)
            .collect();
        if !point_fields.is_empty() {
            writeln!(writer, "POINT_DATA {}", snapshot.vertex_count())?;
            for field in point_fields {
                Self::write_array(&mut writer, field)?;
            }
        }

        let cell_fields: Vec<_> = fields
            .iter()
            .filter(|field| field.storage_mode() == StorageMode::CellBased)
            .collect();
        if !cell_fields.is_empty() {
            writeln!(writer, "CELL_DATA {}", snapshot.cell_count())?;
            for field in cell_fields {
                Self::write_array(&mut writer, field)?;
            }
        }

        Ok(())
    }

    fn write_grid<W: Write>(writer: &mut W, snapshot: &MeshSnapshot) -> Result<(), FieldError> {
        writeln!(writer, "# vtk DataFile Version 3.0")?;
        writeln!(writer, "mesh-field")?;
        writeln!(writer, "ASCII")?;
        writeln!(writer, "DATASET UNSTRUCTURED_GRID")?;

        writeln!(writer, "POINTS {} double", snapshot.vertex_count())?;
        for vertex in 0..snapshot.vertex_count() {
            let [x, y, z] = snapshot.position(vertex).ok_or(FieldError::StorageRange {
                offset: vertex * 3,
                len: 3,
                size: snapshot.coordinates.len(),
            })?;
            writeln!(writer, "{x} {y} {z}")?;
        }

        let total: usize = snapshot.cell_vertices.len() + snapshot.cell_count();
        writeln!(writer, "CELLS {} {}", snapshot.cell_count(), total)?;
        for cell in 0..snapshot.cell_count() {
            let vertices = snapshot.cell(cell).ok_or(FieldError::IndexOutOfRange {
                index: cell,
                count: snapshot.cell_count(),
            })?;
            writeln!(writer, "{} {}", vertices.len(), vertices.iter().format(" "))?;
        }

        writeln!(writer, "CELL_TYPES {}", snapshot.cell_kinds.len())?;
        for kind in &snapshot.cell_kinds {
            writeln!(writer, "{}", kind.vtk_code())?;
        }
        Ok(())
    }

    fn write_array<W, M, St>(writer: &mut W, field: &Field<M, St>) -> Result<(), FieldError>
    where
        W: Write,
        M: Discretization,
        St: Storage<f64>,
    {
        let name = field.quantity().name();
        match field.value_kind() {
            ValueKind::Scalar => {
                writeln!(writer, "SCALARS {name} double 1")?;
                writeln!(writer, "LOOKUP_TABLE default")?;
                for entity in 0..field.entity_count() {
                    writeln!(writer, "{}", field.value_at(entity)?[0])?;
                }
            }
            ValueKind::Vector => {
                writeln!(writer, "VECTORS {name} double")?;
                for entity in 0..field.entity_count() {
                    writeln!(writer, "{}", field.value_at(entity)?.iter().format(" "))?;
                }
            }
            ValueKind::Tensor => {
                writeln!(writer, "TENSORS {name} double")?;
                for entity in 0..field.entity_count() {
                    let tuple = field.value_at(entity)?;
                    for row in tuple.chunks(3) {
                        writeln!(writer, "{}", row.iter().format(" "))?;
                    }
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }
}
