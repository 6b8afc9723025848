//! Cell taxonomy carried by discretization snapshots.

use serde::{Deserialize, Serialize};

/// Cell shapes a snapshot can describe.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CellKind {
    /// 1D segment/edge.
    Segment,
    /// 2D simplex.
    Triangle,
    /// 2D tensor-product cell.
    Quadrilateral,
    /// 3D simplex.
    Tetrahedron,
    /// 3D tensor-product cell.
    Hexahedron,
    /// 3D wedge.
    Prism,
    /// 3D pyramid.
    Pyramid,
}

impl CellKind {
    /// Topological dimension of the cell.
    pub const fn dimension(self) -> u8 {
        match self {
            CellKind::Segment => 1,
            CellKind::Triangle | CellKind::Quadrilateral => 2,
            CellKind::Tetrahedron | CellKind::Hexahedron | CellKind::Prism | CellKind::Pyramid => 3,
        }
    }

    /// Number of vertices the cell references.
    pub const fn vertex_count(self) -> usize {
        match self {
            CellKind::Segment => 2,
            CellKind::Triangle => 3,
            CellKind::Quadrilateral | CellKind::Tetrahedron => 4,
            CellKind::Hexahedron => 8,
            CellKind::Prism => 6,
            CellKind::Pyramid => 5,
        }
    }

    /// Legacy VTK cell type code.
    pub(crate) const fn vtk_code(self) -> i32 {
        match self {
            CellKind::Segment => 3,
            CellKind::Triangle => 5,
            CellKind::Quadrilateral => 9,
            CellKind::Tetrahedron => 10,
            CellKind::Hexahedron => 12,
            CellKind::Prism => 13,
            CellKind::Pyramid => 14,
        }
    }
}
