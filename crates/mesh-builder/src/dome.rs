//! Domed roof with the LED mounting pocket.
//!
//! The outer surface tapers from the wall radius to the apex ring with a
//! cosine ease (zero slope at the wall junction, so the dome continues the
//! wall smoothly instead of breaking into a cone). The inner ceiling runs
//! one shell thickness lower and lands on the pocket boss; the pocket
//! itself descends from the apex and protrudes below the ceiling as a boss
//! closed from the lamp interior.

use std::f32::consts::FRAC_PI_2;

use shade_types::{Mesh, Vec3};

use crate::build::{point_at, unit_dir};
use crate::validate::ShellDims;

/// Discretized radial step count, proportional to the angular resolution.
pub(crate) fn dome_steps(columns: usize) -> usize {
    (columns / 4).max(8)
}

/// Cosine-ease taper from `from` (t = 0) to `to` (t = 1). Endpoints are
/// returned exactly so adjoining rings share vertex positions.
fn taper(from: f32, to: f32, k: usize, steps: usize) -> f32 {
    if k == 0 {
        from
    } else if k == steps {
        to
    } else {
        let t = k as f32 / steps as f32;
        to + (from - to) * (t * FRAC_PI_2).cos()
    }
}

/// Linear z interpolation with exact endpoints.
fn level(from: f32, to: f32, k: usize, steps: usize) -> f32 {
    if k == 0 {
        from
    } else if k == steps {
        to
    } else {
        from + (to - from) * k as f32 / steps as f32
    }
}

pub(crate) fn build_dome(mesh: &mut Mesh, dims: &ShellDims, columns: usize) {
    let steps = dome_steps(columns);

    let outer_ring = |k: usize| {
        (
            taper(dims.r_out, dims.r_top, k, steps),
            level(dims.z_wall_top, dims.z_apex, k, steps),
        )
    };
    let inner_ring = |k: usize| {
        (
            taper(dims.r_in, dims.r_boss, k, steps),
            level(dims.z_wall_top, dims.z_ceil_top, k, steps),
        )
    };

    for col in 0..columns {
        let d0 = unit_dir(col, columns);
        let d1 = unit_dir(col + 1, columns);

        for k in 0..steps {
            let (r_a, z_a) = outer_ring(k);
            let (r_b, z_b) = outer_ring(k + 1);
            // Outer surface, facing out and up.
            mesh.push_quad(
                point_at(d0, r_a, z_a),
                point_at(d1, r_a, z_a),
                point_at(d1, r_b, z_b),
                point_at(d0, r_b, z_b),
            );

            let (r_a, z_a) = inner_ring(k);
            let (r_b, z_b) = inner_ring(k + 1);
            // Inner ceiling, facing down into the lamp.
            mesh.push_quad(
                point_at(d0, r_a, z_a),
                point_at(d0, r_b, z_b),
                point_at(d1, r_b, z_b),
                point_at(d1, r_a, z_a),
            );
        }

        // Flat apex annulus closing the pocket mouth to the dome rim.
        mesh.push_quad(
            point_at(d0, dims.r_pocket, dims.z_apex),
            point_at(d0, dims.r_top, dims.z_apex),
            point_at(d1, dims.r_top, dims.z_apex),
            point_at(d1, dims.r_pocket, dims.z_apex),
        );
        // Pocket wall, facing the axis.
        mesh.push_quad(
            point_at(d0, dims.r_pocket, dims.z_pocket_floor),
            point_at(d0, dims.r_pocket, dims.z_apex),
            point_at(d1, dims.r_pocket, dims.z_apex),
            point_at(d1, dims.r_pocket, dims.z_pocket_floor),
        );
        // Boss wall under the ceiling, facing away from the axis.
        mesh.push_quad(
            point_at(d0, dims.r_boss, dims.z_boss_bottom),
            point_at(d1, dims.r_boss, dims.z_boss_bottom),
            point_at(d1, dims.r_boss, dims.z_ceil_top),
            point_at(d0, dims.r_boss, dims.z_ceil_top),
        );

        // Pocket floor, facing up into the pocket.
        let floor_center = Vec3::new(0.0, 0.0, dims.z_pocket_floor);
        mesh.push_triangle(
            floor_center,
            point_at(d0, dims.r_pocket, dims.z_pocket_floor),
            point_at(d1, dims.r_pocket, dims.z_pocket_floor),
        );
        // Boss underside, facing down into the lamp.
        let boss_center = Vec3::new(0.0, 0.0, dims.z_boss_bottom);
        mesh.push_triangle(
            boss_center,
            point_at(d1, dims.r_boss, dims.z_boss_bottom),
            point_at(d0, dims.r_boss, dims.z_boss_bottom),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_params;
    use shade_types::GeometryParams;

    #[test]
    fn step_count_scales_with_columns() {
        assert_eq!(dome_steps(8), 8);
        assert_eq!(dome_steps(32), 8);
        assert_eq!(dome_steps(96), 24);
    }

    #[test]
    fn taper_endpoints_are_exact() {
        assert_eq!(taper(30.0, 22.45, 0, 8), 30.0);
        assert_eq!(taper(30.0, 22.45, 8, 8), 22.45);
        let mid = taper(30.0, 22.45, 4, 8);
        assert!(mid > 22.45 && mid < 30.0);
        // Cosine ease: the first step barely leaves the wall radius.
        let first = taper(30.0, 22.45, 1, 8);
        assert!(30.0 - first < (30.0 - 22.45) / 8.0);
    }

    #[test]
    fn dome_triangle_count_matches_layout() {
        let dims = validate_params(&GeometryParams::default()).unwrap();
        let columns = 16;
        let steps = dome_steps(columns);
        let mut mesh = Mesh::new();
        build_dome(&mut mesh, &dims, columns);
        // Per column: 2 surfaces × steps quads, 3 single quads, 2 fan tris.
        assert_eq!(mesh.triangle_count(), columns * (4 * steps + 6 + 2));
    }

    #[test]
    fn apex_sits_at_shell_height() {
        let params = GeometryParams::default();
        let dims = validate_params(&params).unwrap();
        let mut mesh = Mesh::new();
        build_dome(&mut mesh, &dims, 8);
        let max_z = mesh
            .triangles
            .iter()
            .flat_map(|t| t.vertices)
            .map(|v| v.z)
            .fold(f32::MIN, f32::max);
        assert_eq!(max_z, dims.z_apex);
    }
}
