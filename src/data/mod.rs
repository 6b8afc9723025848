//! Storage backends for field value buffers.

pub mod storage;

pub use storage::{Storage, VecStorage};
