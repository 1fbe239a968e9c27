use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::composite::masked::DEFAULT_MASK_THRESHOLD;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::overlay::bars::BarLayout;
use crate::overlay::geometry::WatchRegion;

/// Colors of the overlay elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayColors {
    /// Probability bar tracks and fills.
    pub bar: Rgb8,
    /// Watch-region outline.
    pub border: Rgb8,
    /// Saliency heat-map tint.
    pub saliency: Rgb8,
}

impl Default for OverlayColors {
    fn default() -> Self {
        Self {
            bar: Rgb8::WHITE,
            border: Rgb8::WHITE,
            saliency: Rgb8::GREEN,
        }
    }
}

/// Renderer configuration.
///
/// Deserializes from JSON; everything except the frame and watch sizes has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Expected frame height in pixels.
    pub height: u32,
    /// Expected frame width in pixels.
    pub width: u32,
    /// Samples per frame pixel (1..=4).
    #[serde(default = "default_channels")]
    pub channels: u32,
    /// Model input height; also fixes the watch-region aspect ratio.
    pub watch_height: u32,
    /// Model input width.
    pub watch_width: u32,
    #[serde(default)]
    pub bars: BarLayout,
    #[serde(default)]
    pub colors: OverlayColors,
    /// Icon luma at or below this is transparent.
    #[serde(default = "default_mask_threshold")]
    pub mask_threshold: u8,
}

fn default_channels() -> u32 {
    3
}

fn default_mask_threshold() -> u8 {
    DEFAULT_MASK_THRESHOLD
}

impl OverlayConfig {
    /// Configuration with default layout, colors and threshold.
    pub fn new(height: u32, width: u32, channels: u32, watch_height: u32, watch_width: u32) -> Self {
        Self {
            height,
            width,
            channels,
            watch_height,
            watch_width,
            bars: BarLayout::default(),
            colors: OverlayColors::default(),
            mask_threshold: DEFAULT_MASK_THRESHOLD,
        }
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if !(1..=4).contains(&self.channels) {
            return Err(OverlayError::config(format!(
                "channels must be in 1..=4, got {}",
                self.channels
            )));
        }
        self.bars.validate()?;
        self.watch_region()?;
        Ok(())
    }

    /// Watch region of a frame of the configured size.
    pub fn watch_region(&self) -> OverlayResult<WatchRegion> {
        WatchRegion::compute(self.height, self.width, self.watch_height, self.watch_width)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(text: &str) -> OverlayResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| OverlayError::serde(format!("parse overlay config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: &Path) -> OverlayResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read overlay config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
