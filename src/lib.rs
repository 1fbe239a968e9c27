//! Debug overlay renderer for vision-driven controllers.
//!
//! Given a raw camera frame, the crate composites what a steering model is looking at and what it
//! decided:
//!
//! - **Watch region**: the bottom-anchored, full-width band sampled for the model
//!   ([`OverlayRenderer::observation`]) and outlined on screen.
//! - **Saliency overlay**: the model's heat-map, min-max normalized and alpha-blended into the
//!   watch region.
//! - **Probability bars**: one bar per direction (left, up, right) sized by the model's
//!   probabilities, each topped with an icon pasted by [`paste_masked`].
//!
//! # Pipeline overview
//!
//! 1. [`OverlayRenderer::set_frame`] stores the frame and recomputes the watch region.
//! 2. [`OverlayRenderer::observation`] feeds the model; the model's outputs come back through
//!    [`OverlayRenderer::set_salient`] and [`OverlayRenderer::set_direction`].
//! 3. [`OverlayRenderer::render`] draws bars, border and heat-map, in that order, onto a fresh copy
//!    of the frame.
//!
//! Every drawing step is a standalone function over [`PixelBuffer`] with documented integer
//! semantics, so each can be tested in isolation.
#![forbid(unsafe_code)]

mod assets;
mod composite;
mod config;
mod foundation;
mod overlay;
mod raster;

pub use assets::decode::{decode_pixels, encode_png, load_pixels, load_weight_map, save_png};
pub use assets::icons::{BUILTIN_ICON_SIZE, ICON_FILE_NAMES, IconSet};
pub use composite::masked::{DEFAULT_MASK_THRESHOLD, foreground_mask, paste_masked};
pub use composite::saliency::{blend_saliency, normalize_weights};
pub use config::{OverlayColors, OverlayConfig};
pub use foundation::core::{PixelBuffer, PixelRect, Rgb8, WeightMap};
pub use foundation::error::{OverlayError, OverlayResult};
pub use overlay::bars::{BarLayout, draw_probability_bars};
pub use overlay::direction::{Direction, DirectionProbs};
pub use overlay::geometry::WatchRegion;
pub use overlay::renderer::{OverlayRenderer, RenderFlags};
pub use overlay::sampler::sample_region;
pub use raster::draw::{draw_outline, fill_rect, mix_rect_half};
pub use raster::resize::{resize_bilinear, resize_weights_bilinear};
