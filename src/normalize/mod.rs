//! Makes two images comparable before any pixel-wise operation.
//!
//! - The `reference` image's dimensions are authoritative: `primary` is
//!   resampled to match them (bilinear, lossy).
//! - When exactly one image is grayscale it is promoted to RGB by replicating
//!   its luminance, so per-channel stages see equal channel counts.
//! - No alignment, cropping or color correction happens here.

pub mod color;
pub mod resize;

use crate::error::Result;
use crate::image::ImageU8;

pub use color::{gray_to_rgb, luminance, to_grayscale};
pub use resize::resize_bilinear;

/// Validate both images and return copies with matching size and channels.
///
/// Inputs that already agree come back pixel-identical.
pub fn normalize(primary: &ImageU8, reference: &ImageU8) -> Result<(ImageU8, ImageU8)> {
    primary.validate()?;
    reference.validate()?;

    let resized = resize_bilinear(primary, reference.w, reference.h);
    if resized.channels == reference.channels {
        return Ok((resized, reference.clone()));
    }
    Ok((gray_to_rgb(&resized), gray_to_rgb(reference)))
}
