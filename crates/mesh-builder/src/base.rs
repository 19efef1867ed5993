//! Base slab: an annulus from the tea-light bore out to the outer radius,
//! closed top and bottom, with the short outer rim wall and the bore wall.
//!
//! The strip under the wall footprint (r_in → r_out at the slab top) is an
//! interior contact with the forced-solid bottom wall row, so the top shelf
//! only spans bore → inner radius.

use shade_types::Mesh;

use crate::build::{point_at, unit_dir};
use crate::validate::ShellDims;

pub(crate) fn build_base(mesh: &mut Mesh, dims: &ShellDims, columns: usize) {
    for col in 0..columns {
        let d0 = unit_dir(col, columns);
        let d1 = unit_dir(col + 1, columns);

        // Underside annulus, facing down.
        mesh.push_quad(
            point_at(d0, dims.r_bore, 0.0),
            point_at(d1, dims.r_bore, 0.0),
            point_at(d1, dims.r_out, 0.0),
            point_at(d0, dims.r_out, 0.0),
        );
        // Outer rim wall, facing away from the axis.
        mesh.push_quad(
            point_at(d0, dims.r_out, 0.0),
            point_at(d1, dims.r_out, 0.0),
            point_at(d1, dims.r_out, dims.z_base_top),
            point_at(d0, dims.r_out, dims.z_base_top),
        );
        // Bore wall, facing the axis.
        mesh.push_quad(
            point_at(d0, dims.r_bore, 0.0),
            point_at(d0, dims.r_bore, dims.z_base_top),
            point_at(d1, dims.r_bore, dims.z_base_top),
            point_at(d1, dims.r_bore, 0.0),
        );
        // Top shelf inside the lamp, facing up.
        mesh.push_quad(
            point_at(d0, dims.r_bore, dims.z_base_top),
            point_at(d0, dims.r_in, dims.z_base_top),
            point_at(d1, dims.r_in, dims.z_base_top),
            point_at(d1, dims.r_bore, dims.z_base_top),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_params;
    use shade_types::GeometryParams;

    #[test]
    fn base_emits_four_quads_per_column() {
        let dims = validate_params(&GeometryParams::default()).unwrap();
        let mut mesh = Mesh::new();
        build_base(&mut mesh, &dims, 12);
        assert_eq!(mesh.triangle_count(), 12 * 4 * 2);
    }

    #[test]
    fn underside_faces_down() {
        let dims = validate_params(&GeometryParams::default()).unwrap();
        let mut mesh = Mesh::new();
        build_base(&mut mesh, &dims, 8);
        // First quad of the first column is the underside annulus.
        let n = mesh.triangles[0].normal();
        assert!(n.z < -0.99, "underside normal should point down, got {n:?}");
    }
}
