//! Rectangle primitives on RGB buffers. Every primitive clips to the buffer.

use crate::foundation::core::{PixelBuffer, PixelRect, Rgb8};
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::foundation::math::half_mix_u8;

fn check_rgb(buf: &PixelBuffer) -> OverlayResult<()> {
    buf.validate()?;
    if buf.channels != 3 {
        return Err(OverlayError::validation(format!(
            "drawing expects an rgb buffer, got {} channels",
            buf.channels
        )));
    }
    Ok(())
}

fn for_each_px(buf: &mut PixelBuffer, rect: PixelRect, mut f: impl FnMut(&mut [u8])) {
    let Some(r) = rect.clip(buf.width, buf.height) else {
        return;
    };
    let stride = buf.stride();
    for y in r.top as usize..r.bottom as usize {
        let row = &mut buf.data[y * stride..(y + 1) * stride];
        for px in row[r.left as usize * 3..r.right as usize * 3].chunks_exact_mut(3) {
            f(px);
        }
    }
}

/// Paint every pixel of `rect` with `color`.
pub fn fill_rect(buf: &mut PixelBuffer, rect: PixelRect, color: Rgb8) -> OverlayResult<()> {
    check_rgb(buf)?;
    let c = color.to_array();
    for_each_px(buf, rect, |px| px.copy_from_slice(&c));
    Ok(())
}

/// Mix `color` into `rect` at 50%: `out = (px + color + 1) / 2`.
pub fn mix_rect_half(buf: &mut PixelBuffer, rect: PixelRect, color: Rgb8) -> OverlayResult<()> {
    check_rgb(buf)?;
    let c = color.to_array();
    for_each_px(buf, rect, |px| {
        for (p, c) in px.iter_mut().zip(c) {
            *p = half_mix_u8(*p, c);
        }
    });
    Ok(())
}

/// One-pixel outline on the outermost rows and columns of `rect`
/// (`left`, `right - 1`, `top`, `bottom - 1`).
pub fn draw_outline(buf: &mut PixelBuffer, rect: PixelRect, color: Rgb8) -> OverlayResult<()> {
    check_rgb(buf)?;
    if rect.is_empty() {
        return Ok(());
    }
    let c = color.to_array();
    let PixelRect {
        left,
        top,
        right,
        bottom,
    } = rect;
    for edge in [
        PixelRect::new(left, top, right, top + 1),
        PixelRect::new(left, bottom - 1, right, bottom),
        PixelRect::new(left, top, left + 1, bottom),
        PixelRect::new(right - 1, top, right, bottom),
    ] {
        for_each_px(buf, edge, |px| px.copy_from_slice(&c));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/draw.rs"]
mod tests;
