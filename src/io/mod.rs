//! Persistent layouts and exports for fields.
//!
//! [`store`] defines the format-independent record layout: path-keyed
//! groups of content-addressed mesh records and field records referencing
//! them. [`vtk`] writes a lossy legacy-VTK visualization export.

pub mod store;
pub mod vtk;

pub use store::{FieldRecord, FieldStore, MeshRecord};
pub use vtk::VtkWriter;
