use crate::foundation::core::{PixelBuffer, PixelRect, Rgb8, WeightMap};
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::foundation::math::alpha_mix_trunc_u8;
use crate::raster::resize::resize_weights_bilinear;

/// Min-max normalize `map` into `[0, 1]`.
///
/// Returns `None` for a flat map (`max - min` not strictly positive), which has no meaningful
/// normalization. The range is taken in `f64` so finite maps spanning more than `f32::MAX`
/// still normalize.
pub fn normalize_weights(map: &WeightMap) -> Option<WeightMap> {
    let (min, max) = map.min_max()?;
    let min = f64::from(min);
    let range = f64::from(max) - min;
    if !(range > 0.0) {
        return None;
    }
    Some(WeightMap {
        width: map.width,
        height: map.height,
        data: map
            .data
            .iter()
            .map(|&w| ((f64::from(w) - min) / range).clamp(0.0, 1.0) as f32)
            .collect(),
    })
}

/// Blend `color` into the `region` of `buf` with per-pixel alpha taken from the normalized,
/// region-sized `map`.
///
/// Pixels outside `region` are never touched. A flat map is a no-op. Returns whether anything
/// was blended.
pub fn blend_saliency(
    buf: &mut PixelBuffer,
    map: &WeightMap,
    region: PixelRect,
    color: Rgb8,
) -> OverlayResult<bool> {
    buf.validate()?;
    map.validate()?;
    if buf.channels != 3 {
        return Err(OverlayError::validation(
            "saliency blending expects an rgb buffer",
        ));
    }
    if !region.contained_in(buf.width, buf.height) {
        return Err(OverlayError::validation(format!(
            "saliency region {region:?} is empty or outside {}x{}",
            buf.width, buf.height
        )));
    }

    let Some(normed) = normalize_weights(map) else {
        tracing::debug!(
            width = map.width,
            height = map.height,
            "flat saliency map, skipping overlay"
        );
        return Ok(false);
    };
    let alpha = resize_weights_bilinear(&normed, region.width() as u32, region.height() as u32)?;

    let c = color.to_array();
    let stride = buf.stride();
    let (left, right) = (region.left as usize * 3, region.right as usize * 3);
    for (row, y) in (region.top as usize..region.bottom as usize).enumerate() {
        let line = &mut buf.data[y * stride + left..y * stride + right];
        let weights = &alpha.data[row * alpha.width as usize..(row + 1) * alpha.width as usize];
        for (px, &a) in line.chunks_exact_mut(3).zip(weights) {
            for (p, c) in px.iter_mut().zip(c) {
                *p = alpha_mix_trunc_u8(*p, c, a);
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/saliency.rs"]
mod tests;
