//! Value classification, quantity symbol table, storage mode, and units.
//!
//! These are the closed tag enums a field's identity is made of. Each is a
//! flat symbol table checked exhaustively at every branch point; raw codes
//! only enter at persistence boundaries, through fallible conversions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field_error::FieldError;

/// Classification of a field value, fixing the per-entity component count.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ValueKind {
    /// One component per value.
    Scalar,
    /// Three components per value.
    Vector,
    /// Nine components per value (full second-order tensor).
    Tensor,
}

impl ValueKind {
    /// Number of scalar components per stored value: 1, 3, or 9.
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            ValueKind::Scalar => 1,
            ValueKind::Vector => 3,
            ValueKind::Tensor => 9,
        }
    }

    /// Recover the kind from a per-entity record size.
    ///
    /// Used when adopting raw value tables whose provenance only gives the
    /// tuple width (e.g. visualization arrays).
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidValueKind`] for any size other than
    /// 1, 3, or 9.
    pub fn from_record_size(components: usize) -> Result<Self, FieldError> {
        match components {
            1 => Ok(ValueKind::Scalar),
            3 => Ok(ValueKind::Vector),
            9 => Ok(ValueKind::Tensor),
            other => Err(FieldError::InvalidValueKind(other)),
        }
    }
}

/// Physical quantity carried by a field.
///
/// An opaque tag as far as the core is concerned; the stable [`name`]
/// doubles as the array name in visualization exports.
///
/// [`name`]: QuantityKind::name
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum QuantityKind {
    Temperature,
    Displacement,
    Strain,
    Stress,
    Humidity,
    Concentration,
}

impl QuantityKind {
    /// Stable lowercase name of the quantity.
    pub const fn name(self) -> &'static str {
        match self {
            QuantityKind::Temperature => "temperature",
            QuantityKind::Displacement => "displacement",
            QuantityKind::Strain => "strain",
            QuantityKind::Stress => "stress",
            QuantityKind::Humidity => "humidity",
            QuantityKind::Concentration => "concentration",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether field values attach to mesh vertices or to mesh cells.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum StorageMode {
    /// One value per vertex, indexed by vertex number.
    VertexBased,
    /// One value per cell, indexed by cell number.
    CellBased,
}

/// Opaque unit descriptor.
///
/// Carried and serialized with the field, never interpreted by the core.
/// Absence of a unit is expressed as `Option::<Unit>::None`, which every
/// persistence target must represent explicitly.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Unit(String);

impl Unit {
    /// Wrap a unit symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Unit(symbol.into())
    }

    /// The wrapped symbol.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
