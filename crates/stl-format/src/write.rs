//! STL serialization — binary and ASCII formats.
//!
//! Binary layout:
//! - 80 bytes: header (arbitrary text, ignored by readers)
//! - 4 bytes: u32 LE triangle count
//! - Per triangle (50 bytes each):
//!   - 12 bytes: normal vector (3 × f32 LE)
//!   - 36 bytes: 3 vertices (3 × 3 × f32 LE)
//!   - 2 bytes: attribute byte count (0u16)

use shade_types::{Mesh, Vec3};

use crate::errors::StlError;

/// Serialize a mesh as binary STL. The buffer length is always
/// `84 + 50 × triangle_count`.
pub fn write_binary(mesh: &Mesh, name: &str) -> Result<Vec<u8>, StlError> {
    let tri_count = mesh.triangle_count();
    if tri_count == 0 {
        return Err(StlError::EmptyMesh);
    }

    let expected = 84 + tri_count * 50;
    let mut buf = Vec::with_capacity(expected);

    // 80-byte header, name truncated and zero-padded.
    let header = format!("binary STL: {name}");
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for tri in &mesh.triangles {
        write_vec3(&mut buf, tri.normal());
        for v in tri.vertices {
            write_vec3(&mut buf, v);
        }
        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    if buf.len() != expected {
        return Err(StlError::SizeMismatch {
            expected,
            actual: buf.len(),
        });
    }
    Ok(buf)
}

fn write_vec3(buf: &mut Vec<u8>, v: Vec3) {
    buf.extend_from_slice(&v.x.to_le_bytes());
    buf.extend_from_slice(&v.y.to_le_bytes());
    buf.extend_from_slice(&v.z.to_le_bytes());
}

/// Serialize a mesh as ASCII STL.
pub fn write_ascii(mesh: &Mesh, name: &str) -> Result<String, StlError> {
    if mesh.is_empty() {
        return Err(StlError::EmptyMesh);
    }

    let mut out = String::with_capacity(mesh.triangle_count() * 250);
    out.push_str(&format!("solid {name}\n"));

    for tri in &mesh.triangles {
        let n = tri.normal();
        out.push_str(&format!(
            "  facet normal {} {} {}\n",
            fmt_coord(n.x),
            fmt_coord(n.y),
            fmt_coord(n.z)
        ));
        out.push_str("    outer loop\n");
        for v in tri.vertices {
            out.push_str(&format!(
                "      vertex {} {} {}\n",
                fmt_coord(v.x),
                fmt_coord(v.y),
                fmt_coord(v.z)
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {name}\n"));
    Ok(out)
}

/// Fixed 6 decimal places with trailing zeros stripped; values within
/// 1e-10 of zero (negative zero included) collapse to the literal `0`.
fn fmt_coord(v: f32) -> String {
    if v.abs() < 1e-10 {
        return "0".to_string();
    }
    let mut s = format!("{v:.6}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.push_triangle(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        mesh
    }

    #[test]
    fn empty_mesh_rejected() {
        assert_eq!(write_binary(&Mesh::new(), "x").unwrap_err(), StlError::EmptyMesh);
        assert_eq!(write_ascii(&Mesh::new(), "x").unwrap_err(), StlError::EmptyMesh);
    }

    #[test]
    fn binary_size_is_84_plus_50_per_triangle() {
        let stl = write_binary(&unit_triangle(), "shade").unwrap();
        assert_eq!(stl.len(), 84 + 50);
        assert_eq!(u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]]), 1);
    }

    #[test]
    fn binary_header_carries_name() {
        let stl = write_binary(&unit_triangle(), "lampshade").unwrap();
        let header = String::from_utf8_lossy(&stl[..80]);
        assert!(header.contains("lampshade"));
    }

    #[test]
    fn binary_normal_is_plus_z() {
        let stl = write_binary(&unit_triangle(), "shade").unwrap();
        let nz = f32::from_le_bytes([stl[92], stl[93], stl[94], stl[95]]);
        assert!((nz - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ascii_structure_and_name() {
        let text = write_ascii(&unit_triangle(), "shade").unwrap();
        assert!(text.starts_with("solid shade\n"));
        assert!(text.ends_with("endsolid shade\n"));
        assert_eq!(text.matches("facet normal").count(), 1);
        assert_eq!(text.matches("vertex").count(), 3);
        assert!(text.contains("outer loop"));
    }

    #[test]
    fn coord_formatting_strips_trailing_zeros() {
        assert_eq!(fmt_coord(1.5), "1.5");
        assert_eq!(fmt_coord(2.0), "2");
        assert_eq!(fmt_coord(-3.25), "-3.25");
        assert_eq!(fmt_coord(0.123456), "0.123456");
    }

    #[test]
    fn coord_formatting_normalizes_zero() {
        assert_eq!(fmt_coord(0.0), "0");
        assert_eq!(fmt_coord(-0.0), "0");
        assert_eq!(fmt_coord(1e-11), "0");
        assert_eq!(fmt_coord(-1e-11), "0");
    }
}
