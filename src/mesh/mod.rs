//! The discretization seam: what a field needs to know about its mesh.
//!
//! Mesh topology and geometry live outside this crate. Fields consume them
//! through the [`Discretization`] trait, which covers entity counts, the
//! spatial localizer, point-in-cell tests, interpolation weights, stable
//! labels, label-deduplicating union construction, and a flattened
//! [`MeshSnapshot`] for persistence.

pub mod adapter;
pub mod bbox;
pub mod cell_kind;
pub mod label;
pub mod snapshot;
pub mod stable_hash;

pub use adapter::{Containment, Discretization, MeshUnion};
pub use bbox::{BoundingBox, Position};
pub use cell_kind::CellKind;
pub use label::EntityLabel;
pub use snapshot::MeshSnapshot;
