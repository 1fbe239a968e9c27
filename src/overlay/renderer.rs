use crate::assets::icons::IconSet;
use crate::composite::saliency::blend_saliency;
use crate::config::OverlayConfig;
use crate::foundation::core::{PixelBuffer, WeightMap};
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::overlay::bars::draw_probability_bars;
use crate::overlay::direction::DirectionProbs;
use crate::overlay::geometry::WatchRegion;
use crate::overlay::sampler::sample_region;
use crate::raster::draw::draw_outline;
use crate::raster::resize::resize_weights_bilinear;

/// Which overlay elements [`OverlayRenderer::render`] draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderFlags {
    /// Saliency heat-map inside the watch region.
    pub salient: bool,
    /// Direction probability bars and icons.
    pub prob: bool,
    /// Watch-region outline.
    pub border: bool,
}

impl RenderFlags {
    /// Draw nothing; `render` returns the frame as submitted (in RGB).
    pub const NONE: RenderFlags = RenderFlags {
        salient: false,
        prob: false,
        border: false,
    };
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self {
            salient: true,
            prob: true,
            border: true,
        }
    }
}

struct StoredFrame {
    /// As submitted; sampled for the model.
    source: PixelBuffer,
    /// RGB copy used as the render base.
    display: PixelBuffer,
}

/// Composites saliency, direction bars and the watch-region border over the latest frame.
///
/// State is replaced piecewise: a new frame clears the saliency map, while the direction vector
/// persists until replaced. The watch region is recomputed from each submitted frame and shared
/// by [`observation`](Self::observation) and the saliency overlay.
pub struct OverlayRenderer {
    config: OverlayConfig,
    icons: IconSet,
    region: WatchRegion,
    frame: Option<StoredFrame>,
    salient: Option<WeightMap>,
    direction: DirectionProbs,
}

impl OverlayRenderer {
    /// Renderer with the built-in arrow icons.
    pub fn new(config: OverlayConfig) -> OverlayResult<Self> {
        Self::with_icons(config, IconSet::builtin())
    }

    pub fn with_icons(config: OverlayConfig, icons: IconSet) -> OverlayResult<Self> {
        config.validate()?;
        let region = config.watch_region()?;
        Ok(Self {
            config,
            icons,
            region,
            frame: None,
            salient: None,
            direction: DirectionProbs::default(),
        })
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Watch region of the current frame (of the configured size before any frame).
    pub fn region(&self) -> WatchRegion {
        self.region
    }

    /// Direction probabilities in canonical order.
    pub fn direction(&self) -> DirectionProbs {
        self.direction
    }

    /// Cached saliency map at model input resolution, if any.
    pub fn salient(&self) -> Option<&WeightMap> {
        self.salient.as_ref()
    }

    /// Replace the current frame and drop the cached saliency map.
    #[tracing::instrument(skip_all, fields(width = frame.width, height = frame.height))]
    pub fn set_frame(&mut self, frame: PixelBuffer) -> OverlayResult<()> {
        if frame.is_empty() {
            return Err(OverlayError::config("frame width/height must be > 0"));
        }
        if frame.channels != self.config.channels {
            return Err(OverlayError::config(format!(
                "frame has {} channels, renderer is configured for {}",
                frame.channels, self.config.channels
            )));
        }
        frame
            .validate()
            .map_err(|e| OverlayError::config(e.to_string()))?;

        let region = WatchRegion::compute(
            frame.height,
            frame.width,
            self.config.watch_height,
            self.config.watch_width,
        )?;
        if (frame.width, frame.height) != (self.config.width, self.config.height) {
            tracing::debug!(
                configured_width = self.config.width,
                configured_height = self.config.height,
                ?region,
                "frame size differs from configuration, watch region follows the frame"
            );
        }

        let display = frame.to_rgb();
        self.region = region;
        self.frame = Some(StoredFrame {
            source: frame,
            display,
        });
        self.salient = None;
        Ok(())
    }

    /// Cache a saliency map for the current frame, rescaled to the model input size.
    pub fn set_salient(&mut self, map: WeightMap) -> OverlayResult<()> {
        let map =
            resize_weights_bilinear(&map, self.config.watch_width, self.config.watch_height)?;
        self.salient = Some(map);
        Ok(())
    }

    /// Store model probabilities, reordering them into canonical (left, up, right) order.
    pub fn set_direction(&mut self, probs: [f32; 3]) {
        self.direction = DirectionProbs::from_model_order(probs);
    }

    /// Composite the overlay onto a fresh RGB copy of the current frame.
    ///
    /// Order: bars, border, then saliency on top.
    #[tracing::instrument(skip(self))]
    pub fn render(&self, flags: RenderFlags) -> OverlayResult<PixelBuffer> {
        let stored = self
            .frame
            .as_ref()
            .ok_or_else(|| OverlayError::state("render called before set_frame"))?;
        let mut out = stored.display.clone();
        let colors = self.config.colors;

        if flags.prob {
            draw_probability_bars(
                &mut out,
                self.direction,
                &self.config.bars,
                &self.icons,
                colors.bar,
                self.config.mask_threshold,
            )?;
        }
        if flags.border {
            draw_outline(&mut out, self.region.rect(), colors.border)?;
        }
        if flags.salient
            && let Some(map) = &self.salient
        {
            blend_saliency(&mut out, map, self.region.rect(), colors.saliency)?;
        }
        Ok(out)
    }

    /// Watch region of the current frame at model input resolution.
    #[tracing::instrument(skip(self))]
    pub fn observation(&self) -> OverlayResult<PixelBuffer> {
        let stored = self
            .frame
            .as_ref()
            .ok_or_else(|| OverlayError::state("no frame: observation called before set_frame"))?;
        sample_region(
            &stored.source,
            self.region,
            self.config.watch_width,
            self.config.watch_height,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/renderer.rs"]
mod tests;
