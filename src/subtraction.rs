//! Signed subtraction `second - first` stretched to the full 8-bit range.
//!
//! The stretch is relative to the current pair: the smallest delta across all
//! pixels and channels maps to 0, the largest to 255. Equal deltas in two
//! different pairs can therefore render at different intensities; the output
//! is a visualization aid, not a measurement.
use crate::error::Result;
use crate::image::{ImageU8, SubtractionResult, RGB};
use crate::normalize::{gray_to_rgb, normalize};

/// Fill value when every delta is equal and the range collapses to zero.
pub const ZERO_RANGE_FILL: u8 = 128;

/// Min-max rescaled `img2 - img1`, always three channels.
pub fn compute_subtraction(img1: &ImageU8, img2: &ImageU8) -> Result<SubtractionResult> {
    let (a, b) = normalize(img1, img2)?;

    let deltas: Vec<f32> = b
        .data
        .iter()
        .zip(&a.data)
        .map(|(&vb, &va)| vb as f32 - va as f32)
        .collect();

    let (lo, hi) = deltas
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &d| {
            (lo.min(d), hi.max(d))
        });

    let mut out = ImageU8::new(b.w, b.h, b.channels);
    let range = hi - lo;
    if range > 0.0 {
        let scale = 255.0 / range;
        for (o, &d) in out.data.iter_mut().zip(&deltas) {
            *o = ((d - lo) * scale).round().clamp(0.0, 255.0) as u8;
        }
    } else {
        out.data.fill(ZERO_RANGE_FILL);
    }

    if out.channels == RGB {
        Ok(out)
    } else {
        Ok(gray_to_rgb(&out))
    }
}
