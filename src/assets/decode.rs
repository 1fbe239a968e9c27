use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::foundation::core::{PixelBuffer, WeightMap};
use crate::foundation::error::{OverlayError, OverlayResult};

fn from_rgb_image(img: image::RgbImage) -> OverlayResult<PixelBuffer> {
    let (width, height) = img.dimensions();
    PixelBuffer::from_raw(width, height, 3, img.into_raw())
}

/// Decode encoded image bytes into an RGB buffer.
pub fn decode_pixels(bytes: &[u8]) -> OverlayResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    from_rgb_image(dyn_img.to_rgb8())
}

/// Read and decode an image file into an RGB buffer.
pub fn load_pixels(path: &Path) -> OverlayResult<PixelBuffer> {
    let dyn_img =
        image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    from_rgb_image(dyn_img.to_rgb8())
}

fn color_type(channels: u32) -> OverlayResult<image::ColorType> {
    match channels {
        1 => Ok(image::ColorType::L8),
        2 => Ok(image::ColorType::La8),
        3 => Ok(image::ColorType::Rgb8),
        4 => Ok(image::ColorType::Rgba8),
        n => Err(OverlayError::validation(format!(
            "cannot encode a {n}-channel buffer"
        ))),
    }
}

/// Encode a buffer as PNG bytes.
pub fn encode_png(buf: &PixelBuffer) -> OverlayResult<Vec<u8>> {
    buf.validate()?;
    let mut out = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut out),
        &buf.data,
        buf.width,
        buf.height,
        color_type(buf.channels)?,
        image::ImageFormat::Png,
    )
    .context("encode png")?;
    Ok(out)
}

/// Write a buffer to `path` as PNG, creating parent directories.
pub fn save_png(buf: &PixelBuffer, path: &Path) -> OverlayResult<()> {
    let bytes = encode_png(buf)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Load a saliency map from JSON (array of rows) or from a grayscale image (scaled to `[0, 1]`).
pub fn load_weight_map(path: &Path) -> OverlayResult<WeightMap> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read weight map '{}'", path.display()))?;
        return serde_json::from_str(&text).map_err(|e| {
            OverlayError::serde(format!("parse weight map '{}': {e}", path.display()))
        });
    }

    let gray = image::open(path)
        .with_context(|| format!("open weight map '{}'", path.display()))?
        .to_luma8();
    let (width, height) = gray.dimensions();
    let data = gray.into_raw().into_iter().map(|v| f32::from(v) / 255.0).collect();
    WeightMap::from_raw(width, height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
