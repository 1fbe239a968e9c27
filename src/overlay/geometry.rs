use crate::foundation::core::PixelRect;
use crate::foundation::error::{OverlayError, OverlayResult};

/// The bottom-anchored, full-width band of a frame that is sampled for the model and receives
/// the saliency overlay.
///
/// Its height keeps the aspect ratio of the model input:
/// `frame_width * watch_height / watch_width`, truncated.
///
/// The product is taken in exact integer arithmetic. Evaluating `frame_width / watch_width`
/// in floating point first can land one row short (300px wide, 7x7 input: 299 rather than 300);
/// this region never does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatchRegion {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl WatchRegion {
    /// Derive the region for a `frame_width x frame_height` frame and a
    /// `watch_width x watch_height` model input.
    ///
    /// Fails when any dimension is zero or the region would not fit (`0 <= top < bottom`).
    pub fn compute(
        frame_height: u32,
        frame_width: u32,
        watch_height: u32,
        watch_width: u32,
    ) -> OverlayResult<Self> {
        if frame_height == 0 || frame_width == 0 {
            return Err(OverlayError::config("frame width/height must be > 0"));
        }
        if watch_height == 0 || watch_width == 0 {
            return Err(OverlayError::config("watch width/height must be > 0"));
        }

        let span = u64::from(frame_width) * u64::from(watch_height) / u64::from(watch_width);
        if span == 0 {
            return Err(OverlayError::config(format!(
                "watch region for a {frame_width}px wide frame has zero rows"
            )));
        }
        if span > u64::from(frame_height) {
            return Err(OverlayError::config(format!(
                "watch region needs {span} rows but the frame has {frame_height}"
            )));
        }

        Ok(Self {
            left: 0,
            top: frame_height - span as u32,
            right: frame_width,
            bottom: frame_height,
        })
    }

    pub fn width(self) -> u32 {
        self.right - self.left
    }

    pub fn height(self) -> u32 {
        self.bottom - self.top
    }

    pub fn rect(self) -> PixelRect {
        PixelRect::new(
            i64::from(self.left),
            i64::from(self.top),
            i64::from(self.right),
            i64::from(self.bottom),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/geometry.rs"]
mod tests;
