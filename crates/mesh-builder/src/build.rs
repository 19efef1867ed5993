//! Top-level mesh assembly.

use std::f32::consts::TAU;

use tracing::info;

use shade_types::{GeometryParams, Mesh, PolarMask, Vec3};

use crate::base::build_base;
use crate::dome::build_dome;
use crate::error::BuildError;
use crate::grid::WallGrid;
use crate::validate::validate_params;
use crate::wall::build_wall;

/// Unit direction of angular slot boundary `col`. The index wraps before
/// the trigonometry so the seam column reuses the exact angle-zero values
/// and shares vertex positions across the wrap.
pub(crate) fn unit_dir(col: usize, columns: usize) -> (f32, f32) {
    let angle = TAU * (col % columns) as f32 / columns as f32;
    (angle.cos(), angle.sin())
}

pub(crate) fn point_at(dir: (f32, f32), r: f32, z: f32) -> Vec3 {
    Vec3::new(dir.0 * r, dir.1 * r, z)
}

/// Build the closed lampshade shell for a polar mask and geometry record.
///
/// Validation runs first; on any failure no geometry is emitted. The
/// returned mesh is freshly allocated and owned by the caller.
pub fn build_mesh(mask: &PolarMask, params: &GeometryParams) -> Result<Mesh, BuildError> {
    if mask.columns < 3 || mask.rows < 3 {
        return Err(BuildError::InvalidResolution {
            columns: mask.columns,
            rows: mask.rows,
        });
    }
    let dims = validate_params(params)?;
    let grid = WallGrid::new(mask, params);

    let mut mesh = Mesh::new();
    build_base(&mut mesh, &dims, mask.columns);
    build_wall(&mut mesh, &grid, &dims);
    build_dome(&mut mesh, &dims, mask.columns);

    info!(
        triangles = mesh.triangle_count(),
        columns = mask.columns,
        rows = mask.rows,
        solid_cells = grid.solid_count(),
        "lampshade mesh built"
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coarse_mask_rejected() {
        let mask = PolarMask::filled(2, 8);
        let err = build_mesh(&mask, &GeometryParams::default()).unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidResolution {
                columns: 8,
                rows: 2
            }
        );
    }

    #[test]
    fn invalid_geometry_emits_nothing() {
        let mask = PolarMask::filled(4, 8);
        let params = GeometryParams {
            wall_thickness: -1.0,
            ..GeometryParams::default()
        };
        assert!(build_mesh(&mask, &params).is_err());
    }

    #[test]
    fn seam_column_reuses_angle_zero() {
        let columns = 7;
        assert_eq!(unit_dir(columns, columns), unit_dir(0, columns));
        assert_eq!(unit_dir(0, columns), (1.0, 0.0));
    }

    #[test]
    fn full_mask_produces_closed_shell_counts() {
        let mask = PolarMask::filled(4, 8);
        let mesh = build_mesh(&mask, &GeometryParams::default()).unwrap();
        let steps = crate::dome::dome_steps(8);
        let expected = 8 * 4 * 2 // base quads
            + 4 * 8 * 2 * 2 // wall skins
            + 8 * (4 * steps + 8); // dome
        assert_eq!(mesh.triangle_count(), expected);
    }

    #[test]
    fn mesh_stays_within_outer_radius() {
        let mask = PolarMask::filled(6, 24);
        let params = GeometryParams::default();
        let mesh = build_mesh(&mask, &params).unwrap();
        let r_out = params.outer_radius();
        for tri in &mesh.triangles {
            for v in tri.vertices {
                let r = (v.x * v.x + v.y * v.y).sqrt();
                assert!(r <= r_out + 1e-4);
                assert!(v.z >= -1e-6);
            }
        }
    }
}
