use std::path::Path;

use crate::assets::decode::load_pixels;
use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::overlay::direction::Direction;

/// Side length of the built-in arrow glyphs.
pub const BUILTIN_ICON_SIZE: u32 = 32;

/// File names looked up by [`IconSet::from_dir`], in canonical order.
pub const ICON_FILE_NAMES: [&str; 3] = ["left_arrow.png", "up_arrow.png", "right_arrow.png"];

/// One RGB glyph per direction slot, fixed for the lifetime of a renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct IconSet {
    icons: [PixelBuffer; 3],
}

impl IconSet {
    /// Build from caller-supplied buffers (any channel count; converted to RGB).
    pub fn new(left: PixelBuffer, up: PixelBuffer, right: PixelBuffer) -> OverlayResult<Self> {
        let icons = [left, up, right];
        for (icon, dir) in icons.iter().zip(Direction::ALL) {
            icon.validate()?;
            if icon.is_empty() {
                return Err(OverlayError::validation(format!(
                    "{dir:?} icon must be non-empty"
                )));
            }
        }
        Ok(Self {
            icons: icons.map(|i| i.to_rgb()),
        })
    }

    /// White arrows on black, drawn procedurally.
    pub fn builtin() -> Self {
        Self {
            icons: Direction::ALL.map(arrow_glyph),
        }
    }

    /// Decode one image file per direction, in canonical order (left, up, right).
    pub fn load(paths: [&Path; 3]) -> OverlayResult<Self> {
        let [left, up, right] = paths;
        Self::new(load_pixels(left)?, load_pixels(up)?, load_pixels(right)?)
    }

    /// Load `left_arrow.png`, `up_arrow.png` and `right_arrow.png` from `dir`.
    pub fn from_dir(dir: &Path) -> OverlayResult<Self> {
        let [l, u, r] = ICON_FILE_NAMES.map(|name| dir.join(name));
        Self::load([&l, &u, &r])
    }

    pub fn get(&self, dir: Direction) -> &PixelBuffer {
        &self.icons[dir.index()]
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn up_arrow_covers(x: u32, y: u32) -> bool {
    let n = BUILTIN_ICON_SIZE as f32;
    let dx = (x as f32 + 0.5 - n / 2.0).abs();
    let y = y as f32 + 0.5;
    let head_top = n * 0.125;
    let head_bottom = n * 0.5;
    if (head_top..head_bottom).contains(&y) {
        return dx <= (y - head_top) * 0.9;
    }
    (head_bottom..n * 0.875).contains(&y) && dx <= n * 0.125
}

fn arrow_glyph(dir: Direction) -> PixelBuffer {
    let n = BUILTIN_ICON_SIZE;
    let mut data = Vec::with_capacity((n * n * 3) as usize);
    for y in 0..n {
        for x in 0..n {
            let on = match dir {
                Direction::Up => up_arrow_covers(x, y),
                Direction::Left => up_arrow_covers(y, x),
                Direction::Right => up_arrow_covers(y, n - 1 - x),
            };
            let v = if on { 255 } else { 0 };
            data.extend_from_slice(&[v, v, v]);
        }
    }
    PixelBuffer {
        width: n,
        height: n,
        channels: 3,
        data,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/icons.rs"]
mod tests;
