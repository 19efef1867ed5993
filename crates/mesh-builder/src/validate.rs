//! Geometry validation and derived shell dimensions.

use shade_types::GeometryParams;

use crate::error::BuildError;

/// Radial clearance added around the LED mount bore for the roof pocket.
pub const MOUNT_CLEARANCE_MM: f32 = 0.25;

/// Every length and height the construction passes around, computed once
/// after validation. z = 0 is the underside of the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellDims {
    pub r_out: f32,
    pub r_in: f32,
    pub r_bore: f32,
    /// Roof pocket radius: bore plus clearance.
    pub r_pocket: f32,
    /// Outer radius of the pocket boss protruding below the ceiling.
    pub r_boss: f32,
    /// Outer radius of the dome at the apex ring.
    pub r_top: f32,
    /// Top of the base slab = bottom of the wall.
    pub z_base_top: f32,
    /// Top of the wall = bottom of the dome.
    pub z_wall_top: f32,
    /// Top of the dome (apex plane).
    pub z_apex: f32,
    /// Top of the inner ceiling taper (one shell thickness under the apex).
    pub z_ceil_top: f32,
    /// Floor of the mounting pocket.
    pub z_pocket_floor: f32,
    /// Underside of the pocket boss, seen from the lamp interior.
    pub z_boss_bottom: f32,
}

/// Validate a [`GeometryParams`] record and derive the shell dimensions.
///
/// Rejects non-finite or non-positive lengths, a zero pillar count, and any
/// sizing that would invert the inner/outer radii or push the mounting
/// pocket out of the shell. Messages name the parameter to change.
pub fn validate_params(params: &GeometryParams) -> Result<ShellDims, BuildError> {
    let lengths = [
        ("dome_diameter", params.dome_diameter),
        ("dome_height", params.dome_height),
        ("wall_thickness", params.wall_thickness),
        ("wall_height", params.wall_height),
        ("led_mount_diameter", params.led_mount_diameter),
        ("led_mount_height", params.led_mount_height),
    ];
    for (name, value) in lengths {
        if !value.is_finite() || value <= 0.0 {
            return Err(BuildError::geometry(format!(
                "{name} must be a positive finite length, got {value}"
            )));
        }
    }
    if params.pillar_count == 0 {
        return Err(BuildError::geometry("pillar_count must be at least 1"));
    }

    let r_out = params.outer_radius();
    let r_in = params.inner_radius();
    let r_bore = params.bore_radius();
    let r_pocket = r_bore + MOUNT_CLEARANCE_MM;
    let r_boss = r_pocket + params.wall_thickness;
    let r_top = r_boss + params.wall_thickness;

    if params.wall_thickness >= r_out {
        return Err(BuildError::geometry(format!(
            "wall_thickness {} must be smaller than the outer radius {}; \
             reduce wall_thickness or enlarge dome_diameter",
            params.wall_thickness, r_out
        )));
    }
    if r_bore + params.wall_thickness >= r_out {
        return Err(BuildError::geometry(format!(
            "led_mount_diameter {} plus wall_thickness leaves no base shelf inside \
             the outer radius {}; reduce led_mount_diameter",
            params.led_mount_diameter, r_out
        )));
    }
    if r_boss >= r_in {
        return Err(BuildError::geometry(format!(
            "mounting pocket (radius {r_pocket}) plus shell walls does not fit \
             inside the inner radius {r_in}; reduce led_mount_diameter"
        )));
    }
    if params.dome_height <= params.wall_thickness {
        return Err(BuildError::geometry(format!(
            "dome_height {} must exceed wall_thickness {} to leave room for the roof shell",
            params.dome_height, params.wall_thickness
        )));
    }
    if params.led_mount_height + params.wall_thickness >= params.dome_height + params.wall_height {
        return Err(BuildError::geometry(format!(
            "led_mount_height {} is too deep for the shell; reduce led_mount_height \
             or raise wall_height",
            params.led_mount_height
        )));
    }

    let z_base_top = params.wall_thickness;
    let z_wall_top = z_base_top + params.wall_height;
    let z_apex = z_wall_top + params.dome_height;

    Ok(ShellDims {
        r_out,
        r_in,
        r_bore,
        r_pocket,
        r_boss,
        r_top,
        z_base_top,
        z_wall_top,
        z_apex,
        z_ceil_top: z_apex - params.wall_thickness,
        z_pocket_floor: z_apex - params.led_mount_height,
        z_boss_bottom: z_apex - params.led_mount_height - params.wall_thickness,
    })
}
