mod util;

use std::sync::Arc;

use mesh_field::field::Field;
use mesh_field::field_error::FieldError;
use mesh_field::io::vtk::VtkWriter;
use mesh_field::value::{QuantityKind, StorageMode, Unit, ValueKind};
use util::{TriMesh, square};

fn export(fields: &[&Field<TriMesh>]) -> Result<String, FieldError> {
    let mut out = Vec::new();
    VtkWriter.write(&mut out, fields)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn grid_header_and_cells_are_written() {
    let field = Field::with_values(
        square(),
        QuantityKind::Temperature,
        ValueKind::Scalar,
        None,
        0.0,
        StorageMode::VertexBased,
        vec![1.0, 2.0, 3.0, 4.0],
    )
    .unwrap();
    let text = export(&[&field]).unwrap();

    assert!(text.starts_with("# vtk DataFile Version 3.0\n"));
    assert!(text.contains("ASCII\n"));
    assert!(text.contains("DATASET UNSTRUCTURED_GRID\n"));
    assert!(text.contains("POINTS 4 double\n"));
    assert!(text.contains("CELLS 2 8\n"));
    assert!(text.contains("3 0 1 2\n"));
    assert!(text.contains("3 0 2 3\n"));
    assert!(text.contains("CELL_TYPES 2\n"));
    // triangles carry legacy VTK code 5
    assert!(text.contains("\n5\n5\n"));
}

#[test]
fn storage_mode_selects_point_or_cell_data() {
    let mesh = square();
    let vertex_field = Field::with_values(
        Arc::clone(&mesh),
        QuantityKind::Temperature,
        ValueKind::Scalar,
        None,
        0.0,
        StorageMode::VertexBased,
        vec![1.0, 2.0, 3.0, 4.0],
    )
    .unwrap();
    let cell_field = Field::with_values(
        Arc::clone(&mesh),
        QuantityKind::Displacement,
        ValueKind::Vector,
        None,
        0.0,
        StorageMode::CellBased,
        vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    )
    .unwrap();

    let text = export(&[&vertex_field, &cell_field]).unwrap();

    assert!(text.contains("POINT_DATA 4\n"));
    assert!(text.contains("SCALARS temperature double 1\nLOOKUP_TABLE default\n"));
    assert!(text.contains("CELL_DATA 2\n"));
    assert!(text.contains("VECTORS displacement double\n1 0 0\n0 1 0\n"));
}

#[test]
fn tensor_fields_use_the_tensors_array_form() {
    let field = Field::with_values(
        square(),
        QuantityKind::Stress,
        ValueKind::Tensor,
        None,
        0.0,
        StorageMode::CellBased,
        (0..18).map(f64::from).collect(),
    )
    .unwrap();
    let text = export(&[&field]).unwrap();
    assert!(text.contains("TENSORS stress double\n0 1 2\n3 4 5\n6 7 8\n"));
}

#[test]
fn export_is_lossy_on_unit_and_time() {
    let field = Field::with_values(
        square(),
        QuantityKind::Temperature,
        ValueKind::Scalar,
        Some(Unit::new("kelvin")),
        123.456,
        StorageMode::VertexBased,
        vec![1.0, 2.0, 3.0, 4.0],
    )
    .unwrap();
    let text = export(&[&field]).unwrap();
    assert!(!text.contains("kelvin"));
    assert!(!text.contains("123.456"));
}

#[test]
fn fields_must_share_one_mesh_instance() {
    // structurally identical, but distinct instances
    let a = Field::new(
        square(),
        QuantityKind::Temperature,
        ValueKind::Scalar,
        None,
        0.0,
        StorageMode::VertexBased,
    );
    let b = Field::new(
        square(),
        QuantityKind::Humidity,
        ValueKind::Scalar,
        None,
        0.0,
        StorageMode::VertexBased,
    );
    assert_eq!(export(&[&a, &b]).unwrap_err(), FieldError::MeshNotShared);
}

#[test]
fn empty_export_is_rejected() {
    assert_eq!(export(&[]).unwrap_err(), FieldError::EmptyExport);
}
