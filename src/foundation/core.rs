use serde::{Deserialize, Serialize};

use crate::foundation::error::{OverlayError, OverlayResult};
use crate::foundation::math::luma_of;

/// Dense, row-major, interleaved 8-bit image.
///
/// Samples are stored as `data[(y * width + x) * channels + c]`. Three-channel buffers are
/// interpreted as RGB.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Interleaved samples per pixel (1..=4).
    pub channels: u32,
    /// Tightly packed samples.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Number of bytes a `width * height * channels` buffer occupies.
    pub fn byte_len(width: u32, height: u32, channels: u32) -> OverlayResult<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(channels as usize))
            .ok_or_else(|| OverlayError::validation("pixel buffer size overflow"))
    }

    /// Zero-filled buffer.
    pub fn new(width: u32, height: u32, channels: u32) -> OverlayResult<Self> {
        check_channels(channels)?;
        let len = Self::byte_len(width, height, channels)?;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![0u8; len],
        })
    }

    /// Buffer where every pixel equals `px`; the channel count is `px.len()`.
    pub fn filled(width: u32, height: u32, px: &[u8]) -> OverlayResult<Self> {
        let channels = u32::try_from(px.len())
            .map_err(|_| OverlayError::validation("pixel has too many channels"))?;
        check_channels(channels)?;
        let count = Self::byte_len(width, height, 1)?;
        Ok(Self {
            width,
            height,
            channels,
            data: px.repeat(count),
        })
    }

    /// Wrap existing samples, checking the length against the dimensions.
    pub fn from_raw(width: u32, height: u32, channels: u32, data: Vec<u8>) -> OverlayResult<Self> {
        let buf = Self {
            width,
            height,
            channels,
            data,
        };
        buf.validate()?;
        Ok(buf)
    }

    /// Check channel count and sample length.
    pub fn validate(&self) -> OverlayResult<()> {
        check_channels(self.channels)?;
        let expected = Self::byte_len(self.width, self.height, self.channels)?;
        if self.data.len() != expected {
            return Err(OverlayError::validation(format!(
                "pixel buffer holds {} bytes, expected {}x{}x{} = {expected}",
                self.data.len(),
                self.width,
                self.height,
                self.channels
            )));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride() + x as usize * self.channels as usize
    }

    /// Samples of one pixel. Panics when `(x, y)` is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let i = self.offset(x, y);
        &self.data[i..i + self.channels as usize]
    }

    /// Mutable samples of one pixel. Panics when `(x, y)` is out of bounds.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let i = self.offset(x, y);
        let c = self.channels as usize;
        &mut self.data[i..i + c]
    }

    /// Convert to three channels: gray is replicated, alpha (or the second gray channel) is
    /// dropped.
    pub fn to_rgb(&self) -> PixelBuffer {
        if self.channels == 3 {
            return self.clone();
        }
        let mut data = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for px in self.data.chunks_exact(self.channels as usize) {
            match px.len() {
                1 | 2 => data.extend_from_slice(&[px[0], px[0], px[0]]),
                _ => data.extend_from_slice(&px[..3]),
            }
        }
        PixelBuffer {
            width: self.width,
            height: self.height,
            channels: 3,
            data,
        }
    }

    /// Single-channel Rec.601 luma copy.
    pub fn to_gray(&self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            channels: 1,
            data: self
                .data
                .chunks_exact(self.channels as usize)
                .map(luma_of)
                .collect(),
        }
    }

    /// Copy of the pixels inside `rect`, which must lie fully within the buffer.
    pub fn crop(&self, rect: PixelRect) -> OverlayResult<PixelBuffer> {
        if !rect.contained_in(self.width, self.height) {
            return Err(OverlayError::validation(format!(
                "crop rect {rect:?} is empty or outside {}x{}",
                self.width, self.height
            )));
        }
        let (w, h) = (rect.width() as u32, rect.height() as u32);
        let row_len = w as usize * self.channels as usize;
        let mut data = Vec::with_capacity(row_len * h as usize);
        for y in rect.top..rect.bottom {
            let start = self.offset(rect.left as u32, y as u32);
            data.extend_from_slice(&self.data[start..start + row_len]);
        }
        Ok(PixelBuffer {
            width: w,
            height: h,
            channels: self.channels,
            data,
        })
    }

    /// Overwrite the pixels inside `rect` with `patch`, which must match the rect size and the
    /// channel count.
    pub fn write_rect(&mut self, rect: PixelRect, patch: &PixelBuffer) -> OverlayResult<()> {
        if !rect.contained_in(self.width, self.height) {
            return Err(OverlayError::validation(format!(
                "target rect {rect:?} is empty or outside {}x{}",
                self.width, self.height
            )));
        }
        if i64::from(patch.width) != rect.width()
            || i64::from(patch.height) != rect.height()
            || patch.channels != self.channels
        {
            return Err(OverlayError::validation(
                "write_rect expects a patch matching the rect size and channel count",
            ));
        }
        let row_len = patch.stride();
        for (row, y) in (rect.top..rect.bottom).enumerate() {
            let start = self.offset(rect.left as u32, y as u32);
            self.data[start..start + row_len]
                .copy_from_slice(&patch.data[row * row_len..(row + 1) * row_len]);
        }
        Ok(())
    }
}

fn check_channels(channels: u32) -> OverlayResult<()> {
    if !(1..=4).contains(&channels) {
        return Err(OverlayError::validation(format!(
            "channel count must be in 1..=4, got {channels}"
        )));
    }
    Ok(())
}

/// Single-channel grid of real-valued weights (a saliency map).
///
/// Serializes as an array of rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f32>>", into = "Vec<Vec<f32>>")]
pub struct WeightMap {
    pub width: u32,
    pub height: u32,
    /// Row-major weights.
    pub data: Vec<f32>,
}

impl WeightMap {
    /// Map where every weight equals `value`.
    pub fn filled(width: u32, height: u32, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Wrap existing weights, checking the length against the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<f32>) -> OverlayResult<Self> {
        let map = Self {
            width,
            height,
            data,
        };
        map.validate()?;
        Ok(map)
    }

    /// Build from equally sized rows.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> OverlayResult<Self> {
        let height = u32::try_from(rows.len())
            .map_err(|_| OverlayError::validation("weight map has too many rows"))?;
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return Err(OverlayError::validation("weight map rows must have equal length"));
        }
        let width = u32::try_from(width)
            .map_err(|_| OverlayError::validation("weight map has too many columns"))?;
        Self::from_raw(width, height, rows.into_iter().flatten().collect())
    }

    /// Non-empty, finite, and length matching the dimensions.
    pub fn validate(&self) -> OverlayResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(OverlayError::validation("weight map must be non-empty"));
        }
        if self.data.len() != self.width as usize * self.height as usize {
            return Err(OverlayError::validation(
                "weight map length does not match width*height",
            ));
        }
        if self.data.iter().any(|w| !w.is_finite()) {
            return Err(OverlayError::validation("weight map values must be finite"));
        }
        Ok(())
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Smallest and largest weight, `None` for an empty map.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let first = *self.data.first()?;
        Some(
            self.data
                .iter()
                .fold((first, first), |(lo, hi), &w| (lo.min(w), hi.max(w))),
        )
    }
}

impl TryFrom<Vec<Vec<f32>>> for WeightMap {
    type Error = OverlayError;

    fn try_from(rows: Vec<Vec<f32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<WeightMap> for Vec<Vec<f32>> {
    fn from(map: WeightMap) -> Self {
        if map.width == 0 {
            return Vec::new();
        }
        map.data
            .chunks(map.width as usize)
            .map(<[f32]>::to_vec)
            .collect()
    }
}

/// Half-open pixel rectangle `[left, right) x [top, bottom)`.
///
/// Coordinates are signed so layout arithmetic may land off-frame; drawing clips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl PixelRect {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(self) -> i64 {
        self.right - self.left
    }

    pub fn height(self) -> i64 {
        self.bottom - self.top
    }

    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Non-empty and fully inside a `width x height` image.
    pub fn contained_in(self, width: u32, height: u32) -> bool {
        !self.is_empty()
            && self.left >= 0
            && self.top >= 0
            && self.right <= i64::from(width)
            && self.bottom <= i64::from(height)
    }

    /// Intersection with a `width x height` image, `None` when nothing remains.
    pub fn clip(self, width: u32, height: u32) -> Option<PixelRect> {
        let r = PixelRect {
            left: self.left.max(0),
            top: self.top.max(0),
            right: self.right.min(i64::from(width)),
            bottom: self.bottom.min(i64::from(height)),
        };
        (!r.is_empty()).then_some(r)
    }
}

/// Opaque 8-bit RGB color.
///
/// Deserializes from `"#RRGGBB"` or `[r, g, b]`; serializes as hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    pub const GREEN: Rgb8 = Rgb8::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr([r, g, b]) => Ok(Rgb8::new(r, g, b)),
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgb8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if s.len() != 6 || !s.is_ascii() {
        return Err("hex color must be #RRGGBB (case-insensitive)".to_owned());
    }
    Ok(Rgb8::new(
        hex_byte(&s[0..2])?,
        hex_byte(&s[2..4])?,
        hex_byte(&s[4..6])?,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
