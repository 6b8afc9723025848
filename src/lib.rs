//! # mesh-field
//!
//! mesh-field is a Rust library for representing simulation results as fields
//! over spatial discretizations, designed for scientific computing and
//! multi-physics coupling codes. A [`Field`](field::Field) is a scalar,
//! vector, or tensor quantity sampled per vertex or per cell of a mesh at a
//! single instant; it can be evaluated at arbitrary spatial points, merged
//! with a field covering another part of the same logical mesh, and stored
//! through a persistent layout that deduplicates shared meshes.
//!
//! ## Features
//! - Dense per-entity value storage with pluggable buffer backends
//! - Point evaluation via the discretization's spatial localizer, with
//!   interpolation for vertex-based fields and symmetric averaging for
//!   cell-based fields
//! - Label-addressed merging of fields over overlapping or disjoint mesh
//!   parts, with a documented last-writer-wins collision policy
//! - A format-independent persistent layout with content-addressed mesh
//!   records, plus a legacy-VTK visualization export
//!
//! Mesh topology and geometry stay outside this crate: fields consume them
//! through the [`mesh::Discretization`] trait.
//!
//! ## Determinism
//!
//! Evaluation scans candidates in localizer emission order, merge and store
//! iteration follow entity/insertion order, and mesh deduplication keys are
//! stable FNV-1a hashes, so results are reproducible across runs.
//!
//! ## Usage
//! Add `mesh-field` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mesh-field = "0.1"
//! ```

pub mod data;
pub mod diagnostics;
pub mod field;
pub mod field_error;
pub mod io;
pub mod mesh;
pub mod value;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::storage::{Storage, VecStorage};
    pub use crate::diagnostics::{DiagnosticSink, LogSink, NullSink};
    pub use crate::field::Field;
    pub use crate::field_error::FieldError;
    pub use crate::io::store::{FieldRecord, FieldStore, MeshRecord};
    pub use crate::io::vtk::VtkWriter;
    pub use crate::mesh::{
        BoundingBox, CellKind, Containment, Discretization, EntityLabel, MeshSnapshot, MeshUnion,
        Position,
    };
    pub use crate::value::{QuantityKind, StorageMode, Unit, ValueKind};
}
