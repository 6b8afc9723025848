//! Path-keyed persistent layout with content-addressed mesh records.
//!
//! A store holds one group per path. Each group stores discretizations and
//! fields separately:
//!
//! ```text
//! group
//!   +-- meshes[0]  { hash, snapshot }
//!   +-- meshes[1]  { hash, snapshot }
//!   +-- fields[0]  { quantity, kind, unit, time, mode, mesh: 0, values }
//!   +-- fields[1]  { ...,                               mesh: 0, ... }
//!   +-- fields[2]  { ...,                               mesh: 1, ... }
//! ```
//!
//! Discretizations are deduplicated by [`MeshSnapshot::content_hash`]: two
//! fields over structurally identical meshes share one mesh record, and
//! loading rebuilds exactly one mesh object per record so the sharing graph
//! survives the round trip. The store itself is plain serde data; any
//! binary object format (bincode, JSON, ...) can carry it unchanged.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::storage::Storage;
use crate::field::Field;
use crate::field_error::FieldError;
use crate::mesh::{Discretization, MeshSnapshot};
use crate::value::{QuantityKind, StorageMode, Unit, ValueKind};

/// One stored discretization, addressed by its content hash.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshRecord {
    /// Deduplication key, [`MeshSnapshot::content_hash`] of `snapshot`.
    pub hash: u64,
    /// Full geometry/topology.
    pub snapshot: MeshSnapshot,
}

/// One stored field, referencing a mesh record of its group by index.
///
/// `values` is the raw `entity_count * components_per_value` table in
/// entity-numbering order. The unit is carried opaquely; `None` is the
/// explicit no-unit sentinel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub quantity: QuantityKind,
    pub value_kind: ValueKind,
    pub unit: Option<Unit>,
    pub time: f64,
    pub storage_mode: StorageMode,
    /// Index into the group's mesh records.
    pub mesh: usize,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct Group {
    meshes: Vec<MeshRecord>,
    fields: Vec<FieldRecord>,
}

/// In-memory persistent layout for (discretization, field) pairs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldStore {
    groups: BTreeMap<String, Group>,
}

impl FieldStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `field` under `path`, deduplicating its discretization
    /// against the mesh records already in that group.
    pub fn insert<M, St>(&mut self, path: &str, field: &Field<M, St>) -> Result<(), FieldError>
    where
        M: Discretization,
        St: Storage<f64>,
    {
        let expected = field.entity_count() * field.components_per_value();
        let values = field.values();
        if values.len() != expected {
            return Err(FieldError::InconsistentFieldData {
                entity: field.entity_count().saturating_sub(1),
                needed: expected,
                found: values.len(),
            });
        }

        let hash = field.mesh().content_hash();
        let group = self.groups.entry(path.to_string()).or_default();
        let mesh = match group.meshes.iter().position(|record| record.hash == hash) {
            Some(index) => index,
            None => {
                group.meshes.push(MeshRecord {
                    hash,
                    snapshot: field.mesh().snapshot(),
                });
                group.meshes.len() - 1
            }
        };
        group.fields.push(FieldRecord {
            quantity: field.quantity(),
            value_kind: field.value_kind(),
            unit: field.unit().cloned(),
            time: field.time(),
            storage_mode: field.storage_mode(),
            mesh,
            values: values.to_vec(),
        });
        Ok(())
    }

    /// Rebuild every field stored under `path`, in insertion order.
    ///
    /// `build` is invoked exactly once per mesh record; fields referencing
    /// the same record receive clones of one shared `Arc`, reconstructing
    /// the discretization-sharing graph.
    ///
    /// # Errors
    /// [`FieldError::UnknownGroup`] for an unknown path,
    /// [`FieldError::MissingMeshRecord`] for a dangling mesh reference,
    /// plus whatever `build` or field construction reports.
    pub fn load<M, F>(&self, path: &str, mut build: F) -> Result<Vec<Field<M>>, FieldError>
    where
        M: Discretization,
        F: FnMut(&MeshSnapshot) -> Result<M, FieldError>,
    {
        let group = self
            .groups
            .get(path)
            .ok_or_else(|| FieldError::UnknownGroup(path.to_string()))?;

        let mut meshes = Vec::with_capacity(group.meshes.len());
        for record in &group.meshes {
            meshes.push(Arc::new(build(&record.snapshot)?));
        }

        let mut fields = Vec::with_capacity(group.fields.len());
        for record in &group.fields {
            let mesh = meshes
                .get(record.mesh)
                .cloned()
                .ok_or(FieldError::MissingMeshRecord {
                    index: record.mesh,
                    count: meshes.len(),
                })?;
            fields.push(Field::with_values(
                mesh,
                record.quantity,
                record.value_kind,
                record.unit.clone(),
                record.time,
                record.storage_mode,
                record.values.clone(),
            )?);
        }
        Ok(fields)
    }

    /// Paths with at least one stored record, in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of mesh records under `path`.
    pub fn mesh_count(&self, path: &str) -> usize {
        self.groups.get(path).map_or(0, |group| group.meshes.len())
    }

    /// Number of field records under `path`.
    pub fn field_count(&self, path: &str) -> usize {
        self.groups.get(path).map_or(0, |group| group.fields.len())
    }
}
