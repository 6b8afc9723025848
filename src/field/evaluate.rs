//! Spatial evaluation: position → owning cell → interpolated or averaged
//! value.
//!
//! Candidate cells come from the discretization's localizer, queried with a
//! box of half-width `tolerance` around the position. Vertex-based fields
//! interpolate inside the first containing candidate, in localizer emission
//! order; cell-based fields average over every containing candidate, which
//! handles positions shared by adjacent cells symmetrically.

use crate::data::storage::Storage;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::field::Field;
use crate::field_error::FieldError;
use crate::mesh::{BoundingBox, Containment, Discretization, Position};
use crate::value::StorageMode;

impl<M, St> Field<M, St>
where
    M: Discretization,
    St: Storage<f64>,
{
    /// Evaluate the field at a single position.
    ///
    /// `tolerance` widens the localizer query box to
    /// `[position - tolerance, position + tolerance]`; `0.0` is the normal
    /// exact query. A positive tolerance deliberately admits positions
    /// lying on a cell boundary at the cost of ambiguous ownership: for
    /// vertex-based fields the tie-break is the *first* containing cell in
    /// localizer emission order, and later candidates are never consulted.
    ///
    /// Candidates whose containment test reports a degenerate (zero
    /// measure) cell are skipped and the scan continues.
    ///
    /// # Errors
    /// [`FieldError::NoContainingCell`] when no candidate contains the
    /// position; [`FieldError::InconsistentFieldData`] when the value
    /// buffer has desynchronized from the discretization (fatal, never
    /// skipped).
    pub fn evaluate(&self, position: Position, tolerance: f64) -> Result<Vec<f64>, FieldError> {
        self.evaluate_with(position, tolerance, &LogSink)
    }

    /// Evaluate the field at each position independently, preserving input
    /// order. No state is shared between the per-position evaluations.
    pub fn evaluate_many(
        &self,
        positions: &[Position],
        tolerance: f64,
    ) -> Result<Vec<Vec<f64>>, FieldError> {
        positions
            .iter()
            .map(|&position| self.evaluate_with(position, tolerance, &LogSink))
            .collect()
    }

    /// [`evaluate`](Field::evaluate) with an explicit diagnostic sink.
    pub fn evaluate_with<D>(
        &self,
        position: Position,
        tolerance: f64,
        sink: &D,
    ) -> Result<Vec<f64>, FieldError>
    where
        D: DiagnosticSink,
    {
        let candidates = self.mesh.cells_near(&BoundingBox::around(position, tolerance));
        if candidates.is_empty() {
            sink.error(&format!("evaluate: no candidate cell near {position:?}"));
            return Err(FieldError::NoContainingCell { position });
        }
        match self.storage_mode() {
            StorageMode::VertexBased => self.interpolate_first(&candidates, position, sink),
            StorageMode::CellBased => self.average_containing(&candidates, position, sink),
        }
    }

    /// Vertex-based path: interpolate inside the first containing
    /// candidate.
    fn interpolate_first<D>(
        &self,
        candidates: &[usize],
        position: Position,
        sink: &D,
    ) -> Result<Vec<f64>, FieldError>
    where
        D: DiagnosticSink,
    {
        for &cell in candidates {
            match self.mesh.cell_contains(cell, position)? {
                Containment::Outside => continue,
                Containment::Degenerate => {
                    sink.debug(&format!(
                        "evaluate: skipping degenerate cell {cell} near {position:?}"
                    ));
                    continue;
                }
                Containment::Inside => {
                    let vertices = self.mesh.vertices_of_cell(cell)?;
                    let weights = self.mesh.interpolation_weights(cell, position)?;
                    if weights.len() != vertices.len() {
                        return Err(FieldError::WeightCountMismatch {
                            cell,
                            expected: vertices.len(),
                            found: weights.len(),
                        });
                    }
                    let mut combined = vec![0.0; self.components_per_value()];
                    for (&vertex, &weight) in vertices.iter().zip(&weights) {
                        let stored = self.entity_values(vertex).inspect_err(|_| {
                            sink.error(&format!("evaluate: inconsistent data at cell {cell}"));
                        })?;
                        for (acc, &component) in combined.iter_mut().zip(stored) {
                            *acc += weight * component;
                        }
                    }
                    return Ok(combined);
                }
            }
        }
        sink.error(&format!(
            "evaluate: no containing cell for position {position:?}"
        ));
        Err(FieldError::NoContainingCell { position })
    }

    /// Cell-based path: arithmetic mean over every containing candidate.
    fn average_containing<D>(
        &self,
        candidates: &[usize],
        position: Position,
        sink: &D,
    ) -> Result<Vec<f64>, FieldError>
    where
        D: DiagnosticSink,
    {
        let mut sum = vec![0.0; self.components_per_value()];
        let mut containing = 0usize;
        for &cell in candidates {
            match self.mesh.cell_contains(cell, position)? {
                Containment::Outside => continue,
                Containment::Degenerate => {
                    sink.debug(&format!(
                        "evaluate: skipping degenerate cell {cell} near {position:?}"
                    ));
                    continue;
                }
                Containment::Inside => {
                    let stored = self.entity_values(cell).inspect_err(|_| {
                        sink.error(&format!("evaluate: inconsistent data at cell {cell}"));
                    })?;
                    for (acc, &component) in sum.iter_mut().zip(stored) {
                        *acc += component;
                    }
                    containing += 1;
                }
            }
        }
        if containing == 0 {
            sink.error(&format!(
                "evaluate: no containing cell for position {position:?}"
            ));
            return Err(FieldError::NoContainingCell { position });
        }
        let scale = 1.0 / containing as f64;
        for component in &mut sum {
            *component *= scale;
        }
        Ok(sum)
    }
}
