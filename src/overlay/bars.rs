//! Direction probability bars: a translucent track per slot, a solid fill sized by the
//! probability, and the slot's icon above the track.

use serde::{Deserialize, Serialize};

use crate::assets::icons::IconSet;
use crate::composite::masked::paste_masked;
use crate::foundation::core::{PixelBuffer, PixelRect, Rgb8};
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::overlay::direction::{Direction, DirectionProbs};
use crate::raster::draw::{fill_rect, mix_rect_half};

/// Fixed bar layout in pixels.
///
/// Column `i` spans `[padding + i * (width + margin), .. + width)`. The icon occupies the rows
/// `[padding, padding + width)`; the track starts `padding` rows below the icon and is `height`
/// rows tall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarLayout {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub padding: u32,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            width: 10,
            height: 50,
            margin: 10,
            padding: 10,
        }
    }
}

impl BarLayout {
    pub fn validate(&self) -> OverlayResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(OverlayError::config("bar width/height must be > 0"));
        }
        Ok(())
    }

    fn left(&self, slot: usize) -> i64 {
        i64::from(self.padding) + slot as i64 * (i64::from(self.width) + i64::from(self.margin))
    }

    fn track_top(&self) -> i64 {
        i64::from(self.padding) * 2 + i64::from(self.width)
    }

    fn track_bottom(&self) -> i64 {
        self.track_top() + i64::from(self.height)
    }

    pub fn icon_rect(&self, slot: usize) -> PixelRect {
        let left = self.left(slot);
        let top = i64::from(self.padding);
        PixelRect::new(left, top, left + i64::from(self.width), top + i64::from(self.width))
    }

    pub fn track_rect(&self, slot: usize) -> PixelRect {
        let left = self.left(slot);
        PixelRect::new(
            left,
            self.track_top(),
            left + i64::from(self.width),
            self.track_bottom(),
        )
    }

    /// Filled rows for probability `p`: `trunc(height * p)` rows up from the track bottom.
    ///
    /// `p > 1` reaches above the track and `p < 0` hangs below it. The row count is only
    /// bounded to `±u32::MAX`, which no frame can exceed; NaN fills nothing.
    pub fn fill_rect(&self, slot: usize, p: f32) -> PixelRect {
        let left = self.left(slot);
        let right = left + i64::from(self.width);
        let bottom = self.track_bottom();
        let limit = i64::from(u32::MAX);
        let filled = ((self.height as f32 * p) as i64).clamp(-limit, limit);
        if filled >= 0 {
            PixelRect::new(left, bottom - filled, right, bottom)
        } else {
            PixelRect::new(left, bottom, right, bottom - filled)
        }
    }
}

/// Draw all bars onto an RGB buffer.
///
/// Tracks are blended for every slot before any fill or icon is drawn, so no fill is dimmed by
/// a neighbouring track.
pub fn draw_probability_bars(
    buf: &mut PixelBuffer,
    probs: DirectionProbs,
    layout: &BarLayout,
    icons: &IconSet,
    color: Rgb8,
    threshold: u8,
) -> OverlayResult<()> {
    for dir in Direction::ALL {
        mix_rect_half(buf, layout.track_rect(dir.index()), color)?;
    }

    for dir in Direction::ALL {
        let slot = dir.index();
        fill_rect(buf, layout.fill_rect(slot, probs.get(dir)), color)?;

        let icon_rect = layout.icon_rect(slot);
        if icon_rect.contained_in(buf.width, buf.height) {
            paste_masked(buf, icons.get(dir), icon_rect, threshold)?;
        } else {
            tracing::debug!(?dir, ?icon_rect, "icon does not fit the frame, skipping");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/bars.rs"]
mod tests;
