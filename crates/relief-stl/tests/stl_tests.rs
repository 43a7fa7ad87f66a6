use relief_geom::{Triangle, Vec3};
use relief_stl::{StlError, read_stl, write_stl};

fn sample_mesh() -> Vec<Triangle> {
    vec![
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
        ),
        Triangle::new(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 10.0, 15.0),
            Vec3::new(0.0, 10.0, 0.0),
        ),
        Triangle::new(
            Vec3::new(0.0, 30.0, -5.0),
            Vec3::new(30.0, 0.0, -5.0),
            Vec3::new(0.0, 0.0, -5.0),
        ),
    ]
}

#[test]
fn roundtrip_preserves_count_and_exact_vertices() {
    let mesh = sample_mesh();
    let mut buf = Vec::new();
    write_stl(&mut buf, &mesh).unwrap();

    let back = read_stl(buf.as_slice()).unwrap();
    assert_eq!(back.len(), mesh.len());
    for (orig, parsed) in mesh.iter().zip(&back) {
        assert_eq!(orig, parsed);
    }
}

#[test]
fn layout_matches_the_binary_format() {
    let mesh = sample_mesh();
    let mut buf = Vec::new();
    write_stl(&mut buf, &mesh).unwrap();

    assert_eq!(buf.len(), 80 + 4 + mesh.len() * 50);
    let count = u32::from_le_bytes(buf[80..84].try_into().unwrap());
    assert_eq!(count as usize, mesh.len());

    // first record leads with the winding normal of the first triangle
    let nx = f32::from_le_bytes(buf[84..88].try_into().unwrap());
    let ny = f32::from_le_bytes(buf[88..92].try_into().unwrap());
    let nz = f32::from_le_bytes(buf[92..96].try_into().unwrap());
    assert_eq!(Vec3::new(nx, ny, nz), mesh[0].normal());

    // each record ends with a zero attribute byte count
    let attr = u16::from_le_bytes(buf[132..134].try_into().unwrap());
    assert_eq!(attr, 0);
}

#[test]
fn empty_mesh_roundtrips() {
    let mut buf = Vec::new();
    write_stl(&mut buf, &[]).unwrap();
    assert_eq!(buf.len(), 84);
    assert!(read_stl(buf.as_slice()).unwrap().is_empty());
}

#[test]
fn truncated_data_is_reported_with_progress() {
    let mesh = sample_mesh();
    let mut buf = Vec::new();
    write_stl(&mut buf, &mesh).unwrap();
    buf.truncate(80 + 4 + 50 + 10);

    match read_stl(buf.as_slice()) {
        Err(StlError::Truncated { expected, read }) => {
            assert_eq!(expected, 3);
            assert_eq!(read, 1);
        }
        other => panic!("expected Truncated, got {other:?}"),
    }
}

#[test]
fn short_header_is_an_io_error() {
    let buf = [0u8; 20];
    assert!(matches!(read_stl(&buf[..]), Err(StlError::Io(_))));
}
