//! Merging two fields that share a logical discretization.
//!
//! The inputs may cover overlapping or disjoint parts of the domain; what
//! ties them together is the stable entity labels of their
//! discretizations. The union discretization is built by the mesh itself
//! (copy-on-merge; neither input mesh is touched), then both value tables
//! are scattered onto the union numbering by label.

use std::sync::Arc;

use crate::data::storage::Storage;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::field::Field;
use crate::field_error::FieldError;
use crate::mesh::{Discretization, MeshUnion};
use crate::value::StorageMode;

impl<M, St> Field<M, St>
where
    M: Discretization,
    St: Storage<f64>,
{
    /// Merge `other` into `self`.
    ///
    /// Replaces `self`'s discretization and values with the union;
    /// `other` is left unmodified. Where both inputs carry a value for the
    /// same label, **`other`'s value wins** — values are scattered in
    /// argument order and the later write sticks. That last-writer-wins
    /// rule is part of the contract, not an implementation accident.
    ///
    /// # Errors
    /// [`FieldError::IncompatibleFieldType`] when the fields disagree on
    /// storage mode or value kind; [`FieldError::MergedLabelMissing`] when
    /// the union discretization fails to index one of the input labels.
    pub fn merge(&mut self, other: &Field<M, St>) -> Result<(), FieldError> {
        self.merge_with_sink(other, &LogSink)
    }

    /// [`merge`](Field::merge) with an explicit diagnostic sink.
    pub fn merge_with_sink<D>(
        &mut self,
        other: &Field<M, St>,
        sink: &D,
    ) -> Result<(), FieldError>
    where
        D: DiagnosticSink,
    {
        if self.storage_mode() != other.storage_mode() {
            return Err(FieldError::IncompatibleFieldType(format!(
                "storage mode {:?} vs {:?}",
                self.storage_mode(),
                other.storage_mode()
            )));
        }
        if self.value_kind() != other.value_kind() {
            return Err(FieldError::IncompatibleFieldType(format!(
                "value kind {:?} vs {:?}",
                self.value_kind(),
                other.value_kind()
            )));
        }

        let union = self.mesh.merge_with(&other.mesh)?;
        let ncomp = self.components_per_value();
        let entities = match self.storage_mode() {
            StorageMode::VertexBased => union.mesh.vertex_count(),
            StorageMode::CellBased => union.mesh.cell_count(),
        };
        let mut values = St::with_len(entities * ncomp, 0.0);

        scatter_by_label(self, &union, &mut values, ncomp)?;
        scatter_by_label(other, &union, &mut values, ncomp)?;

        sink.debug(&format!(
            "merge: union discretization has {} vertices, {} cells",
            union.mesh.vertex_count(),
            union.mesh.cell_count()
        ));

        self.mesh = Arc::new(union.mesh);
        self.values = values;
        Ok(())
    }
}

/// Copy every value tuple of `source` to its label's slot in the union
/// numbering. Later calls overwrite earlier ones on label collision.
fn scatter_by_label<M, St>(
    source: &Field<M, St>,
    union: &MeshUnion<M>,
    values: &mut St,
    ncomp: usize,
) -> Result<(), FieldError>
where
    M: Discretization,
    St: Storage<f64>,
{
    for entity in 0..source.entity_count() {
        let (label, target) = match source.storage_mode() {
            StorageMode::VertexBased => {
                let label = source.mesh().vertex_label(entity)?;
                (label, union.vertex_index.get(&label).copied())
            }
            StorageMode::CellBased => {
                let label = source.mesh().cell_label(entity)?;
                (label, union.cell_index.get(&label).copied())
            }
        };
        let target = target.ok_or(FieldError::MergedLabelMissing(label))?;
        values.write_at(target * ncomp, source.entity_values(entity)?)?;
    }
    Ok(())
}
