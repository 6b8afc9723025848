//! `EntityLabel`: a stable, mesh-independent handle for vertices and cells.
//!
//! Entity indices are positional and change whenever meshes are merged;
//! labels do not. A label wraps a nonzero `u64` so that 0 stays reserved
//! as an invalid/sentinel value, and the niche keeps `Option<EntityLabel>`
//! the size of a `u64`.

use std::{fmt, num::NonZeroU64};

use crate::field_error::FieldError;

/// Stable identifier for a mesh vertex or cell.
///
/// # Memory layout
/// `repr(transparent)` over `NonZeroU64`: same ABI and alignment as a
/// `u64`, usable directly in flat label arrays.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct EntityLabel(NonZeroU64);

impl EntityLabel {
    /// Creates a label from a raw `u64` value.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidEntityLabel`] if `raw == 0`.
    #[inline]
    pub fn new(raw: u64) -> Result<Self, FieldError> {
        NonZeroU64::new(raw)
            .map(EntityLabel)
            .ok_or(FieldError::InvalidEntityLabel)
    }

    /// Returns the inner `u64` value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityLabel").field(&self.get()).finish()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
