//! Pluggable storage for field value buffers.
//!
//! This trait abstracts how a field's flat scalar buffer is held (Vec,
//! mmap, a batching adapter over an external store). CPU-slice semantics
//! keep the field code simple; a backend that stages writes can flush them
//! in [`Storage::commit`].

use core::fmt::{self, Debug};

use crate::field_error::FieldError;

/// Contiguous, indexable storage for `V` with slice access.
pub trait Storage<V>: Debug {
    /// Construct a buffer of `len`, filled with `fill`.
    fn with_len(len: usize, fill: V) -> Self
    where
        V: Clone;

    /// Current length in elements.
    fn len(&self) -> usize;

    /// Whether the buffer is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entire read-only buffer.
    fn as_slice(&self) -> &[V];

    /// Entire mutable buffer.
    fn as_mut_slice(&mut self) -> &mut [V];

    /// Copy `src` into the range `[offset .. offset + src.len())`.
    fn write_at(&mut self, offset: usize, src: &[V]) -> Result<(), FieldError>
    where
        V: Clone,
    {
        let size = self.len();
        let end = offset
            .checked_add(src.len())
            .ok_or(FieldError::StorageRange {
                offset,
                len: src.len(),
                size,
            })?;
        let dst = self
            .as_mut_slice()
            .get_mut(offset..end)
            .ok_or(FieldError::StorageRange {
                offset,
                len: src.len(),
                size,
            })?;
        dst.clone_from_slice(src);
        Ok(())
    }

    /// Read the range `[offset .. offset + len)` into `dst`.
    fn read_into(&self, offset: usize, len: usize, dst: &mut [V]) -> Result<(), FieldError>
    where
        V: Clone,
    {
        if dst.len() != len {
            return Err(FieldError::StorageRange {
                offset,
                len,
                size: self.len(),
            });
        }
        let end = offset.checked_add(len).ok_or(FieldError::StorageRange {
            offset,
            len,
            size: self.len(),
        })?;
        let src = self
            .as_slice()
            .get(offset..end)
            .ok_or(FieldError::StorageRange {
                offset,
                len,
                size: self.len(),
            })?;
        dst.clone_from_slice(src);
        Ok(())
    }

    /// Flush staged writes to the backing store.
    ///
    /// Plain in-memory backends make every write immediately visible, so
    /// the default is a no-op. Extension point for adapters that batch
    /// writes.
    fn commit(&mut self) -> Result<(), FieldError> {
        Ok(())
    }
}

/// `Vec`-backed storage (default).
#[derive(Clone)]
pub struct VecStorage<V>(pub(crate) Vec<V>);

impl<V> Debug for VecStorage<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecStorage")
            .field("len", &self.0.len())
            .finish()
    }
}

impl<V> Storage<V> for VecStorage<V> {
    fn with_len(len: usize, fill: V) -> Self
    where
        V: Clone,
    {
        Self(vec![fill; len])
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn as_slice(&self) -> &[V] {
        &self.0
    }

    fn as_mut_slice(&mut self) -> &mut [V] {
        &mut self.0
    }
}

impl<V> From<Vec<V>> for VecStorage<V> {
    fn from(v: Vec<V>) -> Self {
        Self(v)
    }
}

impl<V> VecStorage<V> {
    pub fn into_inner(self) -> Vec<V> {
        self.0
    }
}
