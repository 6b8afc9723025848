//! Field: a sampled quantity attached to a spatial discretization.
//!
//! A `Field` couples a shared discretization with a dense buffer of
//! fixed-width value tuples, one per vertex or per cell depending on the
//! storage mode. It is a snapshot at a single instant; evaluation, merging,
//! and persistence live in the submodules and in [`crate::io`].

mod evaluate;
mod merge;

use std::fmt;
use std::sync::Arc;

use crate::data::storage::{Storage, VecStorage};
use crate::field_error::FieldError;
use crate::mesh::Discretization;
use crate::value::{QuantityKind, StorageMode, Unit, ValueKind};

/// A scalar/vector/tensor quantity sampled over a discretization at one
/// instant in time.
///
/// Values are stored densely in entity-numbering order, one
/// `components_per_value`-wide tuple per entity. The discretization is
/// shared read-only through an `Arc`; the value buffer is exclusively
/// owned, so `Clone` copies values and shares the mesh.
///
/// Quantity, value kind, and storage mode are fixed at construction; only
/// the values (and, through [`merge`](Field::merge), the discretization)
/// change afterwards.
pub struct Field<M, St = VecStorage<f64>>
where
    M: Discretization,
    St: Storage<f64>,
{
    mesh: Arc<M>,
    quantity: QuantityKind,
    value_kind: ValueKind,
    unit: Option<Unit>,
    time: f64,
    mode: StorageMode,
    values: St,
}

impl<M: Discretization> Field<M> {
    /// Create a zero-initialized field sized to the discretization.
    pub fn new(
        mesh: Arc<M>,
        quantity: QuantityKind,
        value_kind: ValueKind,
        unit: Option<Unit>,
        time: f64,
        mode: StorageMode,
    ) -> Self {
        let len = entity_count_of(mesh.as_ref(), mode) * value_kind.components();
        Field {
            mesh,
            quantity,
            value_kind,
            unit,
            time,
            mode,
            values: VecStorage::with_len(len, 0.0),
        }
    }

    /// Create a field from an existing flat value table.
    ///
    /// `values` holds `entity_count * components_per_value` scalars in
    /// entity-numbering order.
    ///
    /// # Errors
    /// Returns [`FieldError::InconsistentFieldData`] when the table does
    /// not match the discretization sizing.
    pub fn with_values(
        mesh: Arc<M>,
        quantity: QuantityKind,
        value_kind: ValueKind,
        unit: Option<Unit>,
        time: f64,
        mode: StorageMode,
        values: Vec<f64>,
    ) -> Result<Self, FieldError> {
        Self::from_storage(
            mesh,
            quantity,
            value_kind,
            unit,
            time,
            mode,
            VecStorage::from(values),
        )
    }
}

impl<M, St> Field<M, St>
where
    M: Discretization,
    St: Storage<f64>,
{
    /// Create a field over an arbitrary storage backend.
    ///
    /// # Errors
    /// Returns [`FieldError::InconsistentFieldData`] when the buffer does
    /// not match the discretization sizing.
    pub fn from_storage(
        mesh: Arc<M>,
        quantity: QuantityKind,
        value_kind: ValueKind,
        unit: Option<Unit>,
        time: f64,
        mode: StorageMode,
        values: St,
    ) -> Result<Self, FieldError> {
        let entities = entity_count_of(mesh.as_ref(), mode);
        let needed = entities * value_kind.components();
        if values.len() != needed {
            return Err(FieldError::InconsistentFieldData {
                entity: entities.saturating_sub(1),
                needed,
                found: values.len(),
            });
        }
        Ok(Field {
            mesh,
            quantity,
            value_kind,
            unit,
            time,
            mode,
            values,
        })
    }

    /// The underlying discretization.
    #[inline]
    pub fn mesh(&self) -> &Arc<M> {
        &self.mesh
    }

    /// Physical quantity this field carries.
    #[inline]
    pub fn quantity(&self) -> QuantityKind {
        self.quantity
    }

    /// Scalar/vector/tensor classification.
    #[inline]
    pub fn value_kind(&self) -> ValueKind {
        self.value_kind
    }

    /// Unit descriptor, if any.
    #[inline]
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// Instant this snapshot belongs to.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Whether values attach to vertices or cells.
    #[inline]
    pub fn storage_mode(&self) -> StorageMode {
        self.mode
    }

    /// Number of scalar components per stored value: 1, 3, or 9.
    #[inline]
    pub fn components_per_value(&self) -> usize {
        self.value_kind.components()
    }

    /// Number of entities carrying values, per the storage mode.
    #[inline]
    pub fn entity_count(&self) -> usize {
        entity_count_of(self.mesh.as_ref(), self.mode)
    }

    /// The raw value table, `entity_count * components_per_value` scalars
    /// in entity-numbering order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Value tuple stored for entity `index`.
    ///
    /// # Errors
    /// [`FieldError::IndexOutOfRange`] when `index` exceeds the entity
    /// count; [`FieldError::InconsistentFieldData`] when the buffer has
    /// desynchronized from the discretization.
    pub fn value_at(&self, index: usize) -> Result<&[f64], FieldError> {
        let count = self.entity_count();
        if index >= count {
            return Err(FieldError::IndexOutOfRange { index, count });
        }
        self.entity_values(index)
    }

    /// Overwrite the value tuple stored for entity `index`.
    ///
    /// The write is immediately visible to later reads and evaluation;
    /// see [`commit`](Field::commit) for backends that batch.
    ///
    /// # Errors
    /// [`FieldError::IndexOutOfRange`] for an invalid index,
    /// [`FieldError::ValueLengthMismatch`] for a tuple of the wrong arity,
    /// [`FieldError::InconsistentFieldData`] for a desynchronized buffer.
    pub fn set_value_at(&mut self, index: usize, value: &[f64]) -> Result<(), FieldError> {
        let count = self.entity_count();
        if index >= count {
            return Err(FieldError::IndexOutOfRange { index, count });
        }
        let ncomp = self.components_per_value();
        if value.len() != ncomp {
            return Err(FieldError::ValueLengthMismatch {
                expected: ncomp,
                found: value.len(),
            });
        }
        let start = index * ncomp;
        let end = start + ncomp;
        let buffer_len = self.values.len();
        let slot = self
            .values
            .as_mut_slice()
            .get_mut(start..end)
            .ok_or(FieldError::InconsistentFieldData {
                entity: index,
                needed: end,
                found: buffer_len,
            })?;
        slot.copy_from_slice(value);
        Ok(())
    }

    /// Flush staged writes on batching storage backends. No-op for the
    /// default in-memory storage.
    pub fn commit(&mut self) -> Result<(), FieldError> {
        self.values.commit()
    }

    /// Tuple slice for `entity` without an entity-count check, mapping a
    /// short buffer to the fatal desync error.
    pub(crate) fn entity_values(&self, entity: usize) -> Result<&[f64], FieldError> {
        let ncomp = self.value_kind.components();
        let start = entity * ncomp;
        let end = start + ncomp;
        let data = self.values.as_slice();
        data.get(start..end)
            .ok_or(FieldError::InconsistentFieldData {
                entity,
                needed: end,
                found: data.len(),
            })
    }
}

impl<M, St> Clone for Field<M, St>
where
    M: Discretization,
    St: Storage<f64> + Clone,
{
    fn clone(&self) -> Self {
        Field {
            mesh: Arc::clone(&self.mesh),
            quantity: self.quantity,
            value_kind: self.value_kind,
            unit: self.unit.clone(),
            time: self.time,
            mode: self.mode,
            values: self.values.clone(),
        }
    }
}

impl<M, St> fmt::Debug for Field<M, St>
where
    M: Discretization,
    St: Storage<f64>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("quantity", &self.quantity)
            .field("value_kind", &self.value_kind)
            .field("unit", &self.unit)
            .field("time", &self.time)
            .field("storage_mode", &self.mode)
            .field("entities", &self.entity_count())
            .finish()
    }
}

#[inline]
fn entity_count_of<M: Discretization>(mesh: &M, mode: StorageMode) -> usize {
    match mode {
        StorageMode::VertexBased => mesh.vertex_count(),
        StorageMode::CellBased => mesh.cell_count(),
    }
}
