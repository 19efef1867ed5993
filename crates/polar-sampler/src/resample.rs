//! Polar resampling: rectangular binary field → angle × radius mask.
//!
//! Angular resolution is user-facing (it drives the visible window density);
//! radial resolution is derived from it with a fixed factor and capped, so
//! mask cost stays bounded no matter what the slider says.

use std::f32::consts::TAU;

use tracing::debug;

use shade_types::{BinaryField, PolarMask, SamplerConfig};

use crate::error::SampleError;
use crate::occupancy::is_solid;

/// Diagonal supersampling tap offset in pixels.
const TAP_OFFSET: f32 = 0.35;

const MIN_ROWS: usize = 4;
const MAX_ROWS: usize = 64;

/// Radial resolution derived from the angular resolution: half the column
/// count, clamped to [4, 64].
pub fn derive_rows(columns: usize) -> usize {
    (columns / 2).clamp(MIN_ROWS, MAX_ROWS)
}

/// Bilinear lookup into a row-major plane, clamped at the image borders.
fn bilinear(plane: &[f32], width: usize, height: usize, x: f32, y: f32) -> f32 {
    let x = x.clamp(0.0, (width - 1) as f32);
    let y = y.clamp(0.0, (height - 1) as f32);
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let top = plane[y0 * width + x0] * (1.0 - fx) + plane[y0 * width + x1] * fx;
    let bottom = plane[y1 * width + x0] * (1.0 - fx) + plane[y1 * width + x1] * fx;
    top * (1.0 - fy) + bottom * fy
}

/// Supersampled solid test at an image-space point.
///
/// Five taps (center plus four diagonals at ±0.35 px) are each resolved by
/// bilinear interpolation; the blended gray and alpha values are averaged
/// over the taps and the solid test is applied once to the averaged pair.
fn sample_cell(field: &BinaryField, x: f32, y: f32, threshold: u8) -> bool {
    const TAPS: [(f32, f32); 5] = [
        (0.0, 0.0),
        (-TAP_OFFSET, -TAP_OFFSET),
        (TAP_OFFSET, -TAP_OFFSET),
        (-TAP_OFFSET, TAP_OFFSET),
        (TAP_OFFSET, TAP_OFFSET),
    ];

    let mut gray_sum = 0.0;
    let mut alpha_sum = 0.0;
    for (dx, dy) in TAPS {
        gray_sum += bilinear(&field.gray, field.width, field.height, x + dx, y + dy);
        alpha_sum += bilinear(&field.alpha, field.width, field.height, x + dx, y + dy);
    }
    let n = TAPS.len() as f32;
    is_solid(gray_sum / n, alpha_sum / n, threshold)
}

/// Resample a binary field into a [`PolarMask`].
///
/// Cell (row, col) samples the image at angle `(col + 0.5) · 2π / columns`
/// and a radius interpolated over `[0, max_radius]` with row 0 outermost.
/// The outermost and innermost rows are forced solid so the wall always
/// seals against the dome and the base.
pub fn resample_polar(
    field: &BinaryField,
    config: &SamplerConfig,
) -> Result<PolarMask, SampleError> {
    let columns = config.columns;
    if columns < 3 {
        return Err(SampleError::InvalidResolution { columns });
    }
    let rows = derive_rows(columns);

    let cx = field.width as f32 / 2.0;
    let cy = field.height as f32 / 2.0;
    let max_radius = cx.min(cy);

    let mut data = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        // Row 0 maps to the outermost radius.
        let radius = max_radius * (rows - 1 - row) as f32 / (rows - 1) as f32;
        for col in 0..columns {
            let angle = (col as f32 + 0.5) * TAU / columns as f32;
            let x = cx + angle.cos() * radius;
            let y = cy + angle.sin() * radius;
            data.push(sample_cell(field, x, y, config.threshold));
        }
    }

    let mut mask = PolarMask {
        columns,
        rows,
        data,
    };

    // Sealing rim and hub, regardless of sampled content.
    for col in 0..columns {
        mask.set(0, col, true);
        mask.set(rows - 1, col, true);
    }

    debug!(
        columns,
        rows,
        solid = mask.solid_count(),
        total = rows * columns,
        "polar mask resampled"
    );

    Ok(mask)
}
