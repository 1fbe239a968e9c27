//! Paste-with-transparency: stamp an opaque glyph over a background, punching through its dark
//! margins.

use crate::foundation::core::{PixelBuffer, PixelRect};
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::foundation::math::luma_of;
use crate::raster::resize::resize_bilinear;

/// Luma at or below this value is treated as transparent.
pub const DEFAULT_MASK_THRESHOLD: u8 = 10;

/// Per-pixel keep flags: `true` where the Rec.601 luma of `src` is strictly above `threshold`.
pub fn foreground_mask(src: &PixelBuffer, threshold: u8) -> Vec<bool> {
    src.data
        .chunks_exact(src.channels as usize)
        .map(|px| luma_of(px) > threshold)
        .collect()
}

/// Rescale `src` to exactly fill `rect` of `dst` and paste it, keeping the destination wherever
/// the source is near-black.
///
/// The masked source and the complementary masked destination are combined with saturating
/// addition, so each pixel comes from exactly one side. `rect` must be non-empty and lie inside
/// `dst`; both buffers must have the same channel count.
pub fn paste_masked(
    dst: &mut PixelBuffer,
    src: &PixelBuffer,
    rect: PixelRect,
    threshold: u8,
) -> OverlayResult<()> {
    dst.validate()?;
    src.validate()?;
    if !rect.contained_in(dst.width, dst.height) {
        return Err(OverlayError::validation(format!(
            "paste rect {rect:?} is empty or outside {}x{}",
            dst.width, dst.height
        )));
    }
    if src.channels != dst.channels {
        return Err(OverlayError::validation(format!(
            "paste_masked expects equal channel counts, got src={} dst={}",
            src.channels, dst.channels
        )));
    }

    let scaled = resize_bilinear(src, rect.width() as u32, rect.height() as u32)?;
    let keep = foreground_mask(&scaled, threshold);
    let mut patch = dst.crop(rect)?;

    let c = patch.channels as usize;
    for ((d, s), &fg) in patch
        .data
        .chunks_exact_mut(c)
        .zip(scaled.data.chunks_exact(c))
        .zip(&keep)
    {
        for (dv, &sv) in d.iter_mut().zip(s) {
            let src_part = if fg { sv } else { 0 };
            let dst_part = if fg { 0 } else { *dv };
            *dv = src_part.saturating_add(dst_part);
        }
    }

    dst.write_rect(rect, &patch)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/masked.rs"]
mod tests;
