//! Wall panels and cap faces.
//!
//! Each solid grid cell is treated as a hexahedral block spanning
//! [r_in, r_out] × one angular slot × one z band, and the wall surface is
//! the set of block faces not shared with another solid block. Whenever a
//! solid cell borders an open one, the shared face becomes a radial cap
//! quad, which is what keeps the shell watertight around arbitrary window
//! shapes. The top row abuts the dome ring and the bottom row abuts the
//! base slab, so no faces are emitted there.

use shade_types::Mesh;

use crate::build::{point_at, unit_dir};
use crate::grid::WallGrid;
use crate::validate::ShellDims;

/// z of wall band boundary `i`, with `i = 0` at the wall top and `i = rows`
/// at the wall bottom. Endpoints reuse the shell dimensions exactly so the
/// wall shares vertices with the dome and base rings.
pub(crate) fn band_z(i: usize, rows: usize, dims: &ShellDims) -> f32 {
    if i == 0 {
        dims.z_wall_top
    } else if i == rows {
        dims.z_base_top
    } else {
        let wall_height = dims.z_wall_top - dims.z_base_top;
        dims.z_base_top + wall_height * (rows - i) as f32 / rows as f32
    }
}

pub(crate) fn build_wall(mesh: &mut Mesh, grid: &WallGrid, dims: &ShellDims) {
    let rows = grid.rows();
    let columns = grid.columns();

    for row in 0..rows {
        let z_hi = band_z(row, rows, dims);
        let z_lo = band_z(row + 1, rows, dims);

        for col in 0..columns {
            if !grid.solid(row, col) {
                continue;
            }
            let d0 = unit_dir(col, columns);
            let d1 = unit_dir(col + 1, columns);

            // Outer skin, facing away from the axis.
            mesh.push_quad(
                point_at(d0, dims.r_out, z_lo),
                point_at(d1, dims.r_out, z_lo),
                point_at(d1, dims.r_out, z_hi),
                point_at(d0, dims.r_out, z_hi),
            );
            // Inner skin, facing the axis.
            mesh.push_quad(
                point_at(d0, dims.r_in, z_lo),
                point_at(d0, dims.r_in, z_hi),
                point_at(d1, dims.r_in, z_hi),
                point_at(d1, dims.r_in, z_lo),
            );

            // Cap above: row 0 is sealed by the dome ring instead.
            if row > 0 && !grid.solid(row - 1, col) {
                mesh.push_quad(
                    point_at(d0, dims.r_in, z_hi),
                    point_at(d0, dims.r_out, z_hi),
                    point_at(d1, dims.r_out, z_hi),
                    point_at(d1, dims.r_in, z_hi),
                );
            }
            // Cap below: the bottom row sits on the base slab.
            if row + 1 < rows && !grid.solid(row + 1, col) {
                mesh.push_quad(
                    point_at(d0, dims.r_in, z_lo),
                    point_at(d1, dims.r_in, z_lo),
                    point_at(d1, dims.r_out, z_lo),
                    point_at(d0, dims.r_out, z_lo),
                );
            }
            // Cap toward the next column.
            if !grid.solid(row, col + 1) {
                mesh.push_quad(
                    point_at(d1, dims.r_in, z_lo),
                    point_at(d1, dims.r_in, z_hi),
                    point_at(d1, dims.r_out, z_hi),
                    point_at(d1, dims.r_out, z_lo),
                );
            }
            // Cap toward the previous column.
            if !grid.solid(row, col + columns - 1) {
                mesh.push_quad(
                    point_at(d0, dims.r_in, z_lo),
                    point_at(d0, dims.r_out, z_lo),
                    point_at(d0, dims.r_out, z_hi),
                    point_at(d0, dims.r_in, z_hi),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::WallGrid;
    use crate::validate::validate_params;
    use shade_types::{GeometryParams, PolarMask};

    #[test]
    fn band_boundaries_hit_shell_dimensions_exactly() {
        let dims = validate_params(&GeometryParams::default()).unwrap();
        assert_eq!(band_z(0, 6, &dims), dims.z_wall_top);
        assert_eq!(band_z(6, 6, &dims), dims.z_base_top);
        let mid = band_z(3, 6, &dims);
        assert!(mid > dims.z_base_top && mid < dims.z_wall_top);
    }

    #[test]
    fn fully_solid_grid_emits_two_skins_and_no_caps() {
        let params = GeometryParams::default();
        let dims = validate_params(&params).unwrap();
        let mask = PolarMask::filled(4, 8);
        let grid = WallGrid::new(&mask, &params);

        let mut mesh = Mesh::new();
        build_wall(&mut mesh, &grid, &dims);
        // 4 rows × 8 columns × 2 skin quads × 2 triangles.
        assert_eq!(mesh.triangle_count(), 4 * 8 * 2 * 2);
    }

    #[test]
    fn single_opening_adds_four_caps() {
        // Pillars off the opened column so the cutout survives the policy.
        let params = GeometryParams {
            pillar_count: 1,
            ..GeometryParams::default()
        };
        let dims = validate_params(&params).unwrap();

        let mut mask = PolarMask::filled(5, 8);
        let open_col = 4; // opposite the single pillar at angle 0
        mask.set(2, open_col, false);
        let grid = WallGrid::new(&mask, &params);
        assert!(!grid.solid(2, open_col));

        let solid = PolarMask::filled(5, 8);
        let solid_grid = WallGrid::new(&solid, &params);

        let mut open_mesh = Mesh::new();
        build_wall(&mut open_mesh, &grid, &dims);
        let mut solid_mesh = Mesh::new();
        build_wall(&mut solid_mesh, &solid_grid, &dims);

        // The opening drops 2 skin quads and gains 4 cap quads: net +2 quads.
        assert_eq!(
            open_mesh.triangle_count(),
            solid_mesh.triangle_count() + 4
        );
    }
}
