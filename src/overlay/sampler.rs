use crate::foundation::core::PixelBuffer;
use crate::foundation::error::OverlayResult;
use crate::overlay::geometry::WatchRegion;
use crate::raster::resize::resize_bilinear;

/// Cut `region` out of `frame` and rescale it to the model input size, keeping the frame's
/// channel count.
pub fn sample_region(
    frame: &PixelBuffer,
    region: WatchRegion,
    out_width: u32,
    out_height: u32,
) -> OverlayResult<PixelBuffer> {
    let clip = frame.crop(region.rect())?;
    resize_bilinear(&clip, out_width, out_height)
}
