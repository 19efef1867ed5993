//! Binary STL parsing, used for round-trip verification and mesh
//! inspection tooling.

use shade_types::{Mesh, Triangle, Vec3};

use crate::errors::StlError;

/// One facet as stored on disk: the serialized normal plus the vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StlFacet {
    pub normal: Vec3,
    pub vertices: [Vec3; 3],
}

/// A parsed binary STL file.
#[derive(Debug, Clone)]
pub struct StlModel {
    /// The 80-byte header with trailing NULs stripped.
    pub header: String,
    pub facets: Vec<StlFacet>,
}

impl StlModel {
    pub fn triangle_count(&self) -> usize {
        self.facets.len()
    }

    /// Rebuild a [`Mesh`] from the stored vertices (normals are derived,
    /// not copied).
    pub fn to_mesh(&self) -> Mesh {
        Mesh {
            triangles: self
                .facets
                .iter()
                .map(|f| Triangle::new(f.vertices[0], f.vertices[1], f.vertices[2]))
                .collect(),
        }
    }
}

/// Parse a binary STL buffer, enforcing the `84 + 50 × N` layout.
pub fn read_binary(bytes: &[u8]) -> Result<StlModel, StlError> {
    if bytes.len() < 84 {
        return Err(StlError::Truncated {
            detail: format!("{} bytes is shorter than the 84-byte preamble", bytes.len()),
        });
    }

    let header = String::from_utf8_lossy(&bytes[..80])
        .trim_end_matches('\0')
        .to_string();
    let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize;

    let expected = 84 + count * 50;
    if bytes.len() != expected {
        return Err(StlError::BadLayout {
            detail: format!(
                "{count} triangles require {expected} bytes, buffer has {}",
                bytes.len()
            ),
        });
    }

    let mut facets = Vec::with_capacity(count);
    for i in 0..count {
        let at = 84 + i * 50;
        facets.push(StlFacet {
            normal: read_vec3(bytes, at),
            vertices: [
                read_vec3(bytes, at + 12),
                read_vec3(bytes, at + 24),
                read_vec3(bytes, at + 36),
            ],
        });
    }

    Ok(StlModel { header, facets })
}

fn read_vec3(bytes: &[u8], at: usize) -> Vec3 {
    let f = |o: usize| {
        f32::from_le_bytes([bytes[at + o], bytes[at + o + 1], bytes[at + o + 2], bytes[at + o + 3]])
    };
    Vec3::new(f(0), f(4), f(8))
}
