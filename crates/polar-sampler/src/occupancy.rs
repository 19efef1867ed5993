//! Raster occupancy sampling: RGBA pixels → thresholded binary field.

use tracing::debug;

use shade_types::BinaryField;

use crate::error::SampleError;

/// A pixel (or interpolated tap) counts as opaque from this alpha upward.
pub const ALPHA_OPAQUE_MIN: f32 = 128.0;

/// Rec.601 luma of an RGB triple, in [0, 255].
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// The single solid test applied everywhere: opaque and darker than the
/// threshold.
pub fn is_solid(gray: f32, alpha: f32, threshold: u8) -> bool {
    alpha >= ALPHA_OPAQUE_MIN && gray < threshold as f32
}

/// Rasterize an RGBA buffer into a [`BinaryField`].
///
/// Fails with [`SampleError::EmptyImage`] on zero dimensions or a buffer
/// that is not `width * height * 4` bytes, and with the uniformly-solid /
/// uniformly-empty errors when thresholding produced no silhouette at all.
pub fn sample_occupancy(
    pixels: &[u8],
    width: usize,
    height: usize,
    threshold: u8,
) -> Result<BinaryField, SampleError> {
    if width == 0 || height == 0 || pixels.len() != width * height * 4 {
        return Err(SampleError::EmptyImage {
            width,
            height,
            byte_len: pixels.len(),
        });
    }

    let count = width * height;
    let mut solid = Vec::with_capacity(count);
    let mut gray = Vec::with_capacity(count);
    let mut alpha = Vec::with_capacity(count);

    for px in pixels.chunks_exact(4) {
        let g = luminance(px[0], px[1], px[2]);
        let a = px[3] as f32;
        solid.push(is_solid(g, a, threshold));
        gray.push(g);
        alpha.push(a);
    }

    let solid_count = solid.iter().filter(|&&s| s).count();
    if solid_count == count {
        return Err(SampleError::UniformlySolid);
    }
    if solid_count == 0 {
        return Err(SampleError::UniformlyEmpty);
    }

    debug!(width, height, solid_count, "occupancy field sampled");

    Ok(BinaryField {
        width,
        height,
        solid,
        gray,
        alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba_image(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 4]) -> Vec<u8> {
        let mut out = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                out.extend_from_slice(&f(x, y));
            }
        }
        out
    }

    #[test]
    fn zero_dimensions_rejected() {
        let err = sample_occupancy(&[], 0, 4, 128).unwrap_err();
        assert!(matches!(err, SampleError::EmptyImage { .. }));
    }

    #[test]
    fn short_buffer_rejected() {
        let err = sample_occupancy(&[0u8; 10], 2, 2, 128).unwrap_err();
        assert!(matches!(err, SampleError::EmptyImage { byte_len: 10, .. }));
    }

    #[test]
    fn all_black_is_uniformly_solid() {
        let pixels = rgba_image(4, 4, |_, _| [0, 0, 0, 255]);
        let err = sample_occupancy(&pixels, 4, 4, 128).unwrap_err();
        assert_eq!(err, SampleError::UniformlySolid);
        assert!(err.to_string().contains("lower the threshold"));
    }

    #[test]
    fn all_white_is_uniformly_empty() {
        let pixels = rgba_image(4, 4, |_, _| [255, 255, 255, 255]);
        let err = sample_occupancy(&pixels, 4, 4, 128).unwrap_err();
        assert_eq!(err, SampleError::UniformlyEmpty);
        assert!(err.to_string().contains("raise the threshold"));
    }

    #[test]
    fn fully_transparent_is_uniformly_empty() {
        // Dark but transparent pixels never count as material.
        let pixels = rgba_image(4, 4, |_, _| [0, 0, 0, 0]);
        let err = sample_occupancy(&pixels, 4, 4, 128).unwrap_err();
        assert_eq!(err, SampleError::UniformlyEmpty);
    }

    #[test]
    fn half_dark_image_samples_both_states() {
        let pixels = rgba_image(4, 4, |x, _| {
            if x < 2 {
                [10, 10, 10, 255]
            } else {
                [240, 240, 240, 255]
            }
        });
        let field = sample_occupancy(&pixels, 4, 4, 128).unwrap();
        assert_eq!(field.solid_count(), 8);
        assert!(field.solid_at(0, 0));
        assert!(!field.solid_at(3, 0));
    }

    #[test]
    fn luminance_weights_match_rec601() {
        assert_eq!(luminance(255, 0, 0), 0.299 * 255.0);
        assert_eq!(luminance(0, 255, 0), 0.587 * 255.0);
        assert_eq!(luminance(0, 0, 255), 0.114 * 255.0);
    }
}
