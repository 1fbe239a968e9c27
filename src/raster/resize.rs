//! Bilinear rescaling with half-pixel-centered sampling.
//!
//! Destination pixel `d` samples source coordinate `(d + 0.5) * src_len / dst_len - 0.5`,
//! clamped to the first/last source pixel. 8-bit output is rounded to nearest; weight output is
//! not rounded. Same-size resizes are exact copies.

use crate::foundation::core::{PixelBuffer, WeightMap};
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::foundation::math::round_u8;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tap {
    i0: usize,
    i1: usize,
    frac: f32,
}

fn taps(src_len: u32, dst_len: u32) -> Vec<Tap> {
    let last = src_len as usize - 1;
    let scale = src_len as f32 / dst_len as f32;
    (0..dst_len)
        .map(|d| {
            let s = ((d as f32 + 0.5) * scale - 0.5).max(0.0);
            let i0 = (s.floor() as usize).min(last);
            let i1 = (i0 + 1).min(last);
            let frac = if i0 == last { 0.0 } else { s - i0 as f32 };
            Tap { i0, i1, frac }
        })
        .collect()
}

fn check_target(width: u32, height: u32) -> OverlayResult<()> {
    if width == 0 || height == 0 {
        return Err(OverlayError::validation("resize target must be non-empty"));
    }
    Ok(())
}

/// Rescale an 8-bit image to `width x height`, keeping its channel count.
pub fn resize_bilinear(src: &PixelBuffer, width: u32, height: u32) -> OverlayResult<PixelBuffer> {
    src.validate()?;
    if src.is_empty() {
        return Err(OverlayError::validation("cannot resize an empty image"));
    }
    check_target(width, height)?;
    if (src.width, src.height) == (width, height) {
        return Ok(src.clone());
    }

    let xs = taps(src.width, width);
    let ys = taps(src.height, height);
    let c = src.channels as usize;
    let stride = src.stride();
    let mut out = PixelBuffer::new(width, height, src.channels)?;

    let mut o = 0usize;
    for ty in &ys {
        let row0 = &src.data[ty.i0 * stride..(ty.i0 + 1) * stride];
        let row1 = &src.data[ty.i1 * stride..(ty.i1 + 1) * stride];
        for tx in &xs {
            for ch in 0..c {
                let a = f32::from(row0[tx.i0 * c + ch]);
                let b = f32::from(row0[tx.i1 * c + ch]);
                let d = f32::from(row1[tx.i0 * c + ch]);
                let e = f32::from(row1[tx.i1 * c + ch]);
                let top = a + (b - a) * tx.frac;
                let bottom = d + (e - d) * tx.frac;
                out.data[o] = round_u8(top + (bottom - top) * ty.frac);
                o += 1;
            }
        }
    }
    Ok(out)
}

// Widened so neighbours of opposite sign near `f32::MAX` do not overflow.
fn lerp(a: f32, b: f32, t: f32) -> f64 {
    let a = f64::from(a);
    a + (f64::from(b) - a) * f64::from(t)
}

/// Rescale a weight map to `width x height`.
pub fn resize_weights_bilinear(src: &WeightMap, width: u32, height: u32) -> OverlayResult<WeightMap> {
    src.validate()?;
    check_target(width, height)?;
    if (src.width, src.height) == (width, height) {
        return Ok(src.clone());
    }

    let xs = taps(src.width, width);
    let ys = taps(src.height, height);
    let w = src.width as usize;
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for ty in &ys {
        let row0 = &src.data[ty.i0 * w..(ty.i0 + 1) * w];
        let row1 = &src.data[ty.i1 * w..(ty.i1 + 1) * w];
        for tx in &xs {
            let top = lerp(row0[tx.i0], row0[tx.i1], tx.frac);
            let bottom = lerp(row1[tx.i0], row1[tx.i1], tx.frac);
            data.push((top + (bottom - top) * f64::from(ty.frac)) as f32);
        }
    }
    Ok(WeightMap {
        width,
        height,
        data,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/resize.rs"]
mod tests;
