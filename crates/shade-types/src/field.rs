use serde::{Deserialize, Serialize};

/// Per-pixel occupancy of a source silhouette image.
///
/// Alongside the thresholded solid bit, the blended gray (Rec.601 luminance)
/// and alpha planes are retained so the polar resampler can run bilinear
/// lookups against the original continuous values. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryField {
    pub width: usize,
    pub height: usize,
    /// Thresholded occupancy, row-major, `width * height` entries.
    pub solid: Vec<bool>,
    /// Luminance plane in [0, 255], row-major.
    pub gray: Vec<f32>,
    /// Alpha plane in [0, 255], row-major.
    pub alpha: Vec<f32>,
}

impl BinaryField {
    pub fn solid_at(&self, x: usize, y: usize) -> bool {
        self.solid[y * self.width + x]
    }

    pub fn gray_at(&self, x: usize, y: usize) -> f32 {
        self.gray[y * self.width + x]
    }

    pub fn alpha_at(&self, x: usize, y: usize) -> f32 {
        self.alpha[y * self.width + x]
    }

    pub fn solid_count(&self) -> usize {
        self.solid.iter().filter(|&&s| s).count()
    }
}
