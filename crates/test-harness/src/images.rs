//! Synthetic silhouette images for pipeline tests. All generators return
//! RGBA buffers, row-major, opaque unless stated otherwise.

/// Uniform color.
pub fn solid_color(width: usize, height: usize, rgba: [u8; 4]) -> Vec<u8> {
    rgba.repeat(width * height)
}

pub fn all_black(size: usize) -> Vec<u8> {
    solid_color(size, size, [0, 0, 0, 255])
}

pub fn all_white(size: usize) -> Vec<u8> {
    solid_color(size, size, [255, 255, 255, 255])
}

pub fn fully_transparent(size: usize) -> Vec<u8> {
    solid_color(size, size, [0, 0, 0, 0])
}

/// Black ring between the two radius fractions of the half-extent, white
/// elsewhere. Resampled, this yields solid outer bands and open inner
/// bands (plus the forced rim rows).
pub fn ring(size: usize, inner_frac: f32, outer_frac: f32) -> Vec<u8> {
    let c = size as f32 / 2.0;
    let mut out = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - c;
            let dy = y as f32 + 0.5 - c;
            let r = (dx * dx + dy * dy).sqrt() / c;
            let v = if r >= inner_frac && r < outer_frac { 0u8 } else { 255 };
            out.extend_from_slice(&[v, v, v, 255]);
        }
    }
    out
}

/// Angular wedges: alternating black/white sectors around the center.
/// Resampled, this yields vertical window columns in the wall.
pub fn wedges(size: usize, sectors: usize) -> Vec<u8> {
    let c = size as f32 / 2.0;
    let mut out = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - c;
            let dy = y as f32 + 0.5 - c;
            let angle = dy.atan2(dx).rem_euclid(std::f32::consts::TAU);
            let sector = (angle / std::f32::consts::TAU * sectors as f32) as usize;
            let v = if sector % 2 == 0 { 0u8 } else { 255 };
            out.extend_from_slice(&[v, v, v, 255]);
        }
    }
    out
}
