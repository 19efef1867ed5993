use serde::{Deserialize, Serialize};

/// Lampshade geometry, all lengths in millimeters.
///
/// The record is a flat configuration surface consumed from the UI; it is
/// validated once at the mesh-builder boundary, never assumed pre-validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryParams {
    /// Outer diameter of the shade (wall and dome share it).
    pub dome_diameter: f32,
    /// Height of the domed roof above the wall top.
    pub dome_height: f32,
    /// Shell thickness of wall, base, dome and pocket.
    pub wall_thickness: f32,
    /// Height of the cylindrical wall section.
    pub wall_height: f32,
    /// Diameter of the tea-light / LED mounting bore.
    pub led_mount_diameter: f32,
    /// Depth of the roof mounting pocket, measured down from the apex.
    pub led_mount_height: f32,
    /// Number of forced-solid structural pillars around the wall.
    pub pillar_count: u32,
}

impl GeometryParams {
    pub fn outer_radius(&self) -> f32 {
        self.dome_diameter / 2.0
    }

    pub fn inner_radius(&self) -> f32 {
        self.outer_radius() - self.wall_thickness
    }

    pub fn bore_radius(&self) -> f32 {
        self.led_mount_diameter / 2.0
    }
}

impl Default for GeometryParams {
    fn default() -> Self {
        // Sized for a standard tea-light LED puck.
        Self {
            dome_diameter: 60.0,
            dome_height: 20.0,
            wall_thickness: 1.6,
            wall_height: 25.0,
            led_mount_diameter: 38.0,
            led_mount_height: 16.0,
            pillar_count: 8,
        }
    }
}

/// Sampling configuration consumed from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Angular resolution: number of polar columns (≥ 3).
    pub columns: usize,
    /// Luminance threshold in [0, 255]; darker pixels count as material.
    pub threshold: u8,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            columns: 96,
            threshold: 128,
        }
    }
}
