//! Rich assertion helpers with diagnostic output.

use shade_types::Mesh;

use crate::helpers::HarnessError;
use crate::inspect::{inspect_mesh, EdgeReport};

/// Assert the mesh is a closed 2-manifold; the failure message embeds the
/// full edge histogram.
pub fn assert_manifold(mesh: &Mesh, ctx: &str) -> Result<EdgeReport, HarnessError> {
    let report = inspect_mesh(mesh);
    if report.is_manifold() {
        Ok(report)
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] mesh is not manifold:\n{report}"),
        })
    }
}

/// Assert a binary STL buffer obeys `len == 84 + 50 × triangle_count`.
pub fn assert_size_invariant(bytes: &[u8], triangle_count: usize, ctx: &str) -> Result<(), HarnessError> {
    let expected = 84 + 50 * triangle_count;
    if bytes.len() == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{ctx}] expected {expected} bytes for {triangle_count} triangles, got {}",
                bytes.len()
            ),
        })
    }
}

/// Assert every non-degenerate triangle carries a unit normal and every
/// degenerate one the exact zero vector.
pub fn assert_normals_valid(mesh: &Mesh, ctx: &str) -> Result<(), HarnessError> {
    for (i, tri) in mesh.triangles.iter().enumerate() {
        let n = tri.normal();
        let len = n.length();
        let unit = (len - 1.0).abs() <= 1e-4;
        let zero = len == 0.0;
        if !unit && !zero {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{ctx}] triangle {i} normal has length {len}, expected 1 or exactly 0"
                ),
            });
        }
    }
    Ok(())
}
