//! FieldError: unified error type for mesh-field public APIs.
//!
//! Every fallible operation in this crate reports through this enum so
//! callers match on one type, whether the failure came from addressed
//! access, spatial evaluation, merging, or the persistent layout.

use thiserror::Error;

use crate::mesh::label::EntityLabel;

/// Unified error type for mesh-field operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    /// No value kind stores the given number of components per value.
    #[error("invalid value kind: no kind stores {0} components per value (expected 1, 3, or 9)")]
    InvalidValueKind(usize),

    /// Addressed access beyond the entity count of the discretization.
    #[error("entity index {index} out of range: field stores values for {count} entities")]
    IndexOutOfRange { index: usize, count: usize },

    /// A value tuple of the wrong arity was passed to an addressed write.
    #[error("value tuple has {found} components, field stores {expected} per entity")]
    ValueLengthMismatch { expected: usize, found: usize },

    /// Evaluation exhausted every candidate cell without finding an owner.
    #[error("no containing cell found for position {position:?}")]
    NoContainingCell { position: [f64; 3] },

    /// The value buffer is out of sync with the discretization sizing.
    /// Fatal; never retried or skipped.
    #[error(
        "field values out of sync with discretization at entity {entity}: buffer holds {found} scalars, needs at least {needed}"
    )]
    InconsistentFieldData {
        entity: usize,
        needed: usize,
        found: usize,
    },

    /// Attempted to merge fields that do not agree on layout.
    #[error("cannot merge incompatible fields: {0}")]
    IncompatibleFieldType(String),

    /// The union discretization produced by a merge lost track of a label.
    #[error("label {0} missing from merged discretization")]
    MergedLabelMissing(EntityLabel),

    /// A discretization returned a weight vector that does not match the
    /// cell's vertex list.
    #[error(
        "discretization returned {found} interpolation weights for cell {cell} with {expected} vertices"
    )]
    WeightCountMismatch {
        cell: usize,
        expected: usize,
        found: usize,
    },

    /// Attempted to construct an EntityLabel from the reserved zero value.
    #[error("EntityLabel must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidEntityLabel,

    /// A storage access fell outside the underlying buffer.
    #[error("storage access of {len} scalars at offset {offset} exceeds buffer of {size}")]
    StorageRange {
        offset: usize,
        len: usize,
        size: usize,
    },

    /// No field group stored under the requested path.
    #[error("no field group stored under path `{0}`")]
    UnknownGroup(String),

    /// A field record references a mesh record its group does not hold.
    #[error("field record references mesh record {index}, but the group stores {count}")]
    MissingMeshRecord { index: usize, count: usize },

    /// A shared-mesh writer was handed fields bound to different
    /// discretization instances.
    #[error("fields passed to a shared-mesh writer must reference one discretization instance")]
    MeshNotShared,

    /// A shared-mesh writer was handed nothing to write.
    #[error("export requires at least one field")]
    EmptyExport,

    /// Underlying I/O failure while writing an export.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FieldError {
    fn from(err: std::io::Error) -> Self {
        FieldError::Io(err.to_string())
    }
}
