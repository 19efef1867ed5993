use serde::{Deserialize, Serialize};

use crate::vec3::{triangle_normal, Vec3};

/// A single triangle, counter-clockwise when viewed from the outward side.
///
/// Triangles are value objects: nothing references them by index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Outward unit normal derived from the winding (zero if degenerate).
    pub fn normal(&self) -> Vec3 {
        triangle_normal(self.vertices[0], self.vertices[1], self.vertices[2])
    }
}

/// An ordered triangle soup. Ordering only matters for file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        self.triangles.push(Triangle::new(a, b, c));
    }

    /// Emit a quad as two triangles split along the a–c diagonal.
    /// Corners must be given counter-clockwise when viewed from the
    /// outward-normal side.
    pub fn push_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        self.push_triangle(a, b, c);
        self.push_triangle(a, c, d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_splits_into_two_triangles() {
        let mut mesh = Mesh::new();
        mesh.push_quad(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(mesh.triangle_count(), 2);
        // Both halves face the same way
        for tri in &mesh.triangles {
            assert!(tri.normal().z > 0.99);
        }
    }
}
