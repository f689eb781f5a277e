//! Two-threshold gradient edge detector for difference maps.
//!
//! Stages, each in its own module:
//!
//! - `grad`: 3×3 Sobel (or Scharr) derivatives with replicated borders and an
//!   L1 or L2 magnitude.
//! - `nms`: direction-aligned non-maximum suppression to one-pixel ridges.
//! - `hysteresis`: responses above `high` seed edges that grow through
//!   8-connected responses above `low`.
//!
//! Thresholds apply to the raw magnitude on the 0–255 input scale. Lowering
//! them makes weaker intensity transitions in the difference map show up.

pub mod grad;
pub mod hysteresis;
pub mod nms;

use crate::error::{ChangeError, Result};
use crate::image::{EdgeMap, ImageF32, ImageU8};
use serde::{Deserialize, Serialize};

pub use grad::{image_gradients, Grad, GradientKernel, GradientNorm};
pub use hysteresis::{link_edges, EDGE};
pub use nms::suppress_non_maxima;

pub const DEFAULT_LOW: i32 = 100;
pub const DEFAULT_HIGH: i32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Linking threshold; must be non-negative and below `high`.
    pub low: i32,
    /// Seeding threshold.
    pub high: i32,
    pub kernel: GradientKernel,
    pub norm: GradientNorm,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
            kernel: GradientKernel::Sobel,
            norm: GradientNorm::L1,
        }
    }
}

impl EdgeOptions {
    pub fn with_thresholds(mut self, low: i32, high: i32) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.low < 0 || self.high < 0 {
            return Err(ChangeError::InvalidParameter(format!(
                "edge thresholds must be non-negative, got low={} high={}",
                self.low, self.high
            )));
        }
        if self.low >= self.high {
            return Err(ChangeError::InvalidParameter(format!(
                "edge threshold low={} must be below high={}",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Edge map of a single-channel difference map with Sobel/L1 gradients.
pub fn detect_edges(difference: &ImageU8, low: i32, high: i32) -> Result<EdgeMap> {
    detect_edges_with(difference, &EdgeOptions::default().with_thresholds(low, high))
}

/// [`detect_edges`] with explicit kernel and norm.
pub fn detect_edges_with(difference: &ImageU8, options: &EdgeOptions) -> Result<EdgeMap> {
    options.validate()?;
    difference.validate()?;
    let l = ImageF32::from_gray(difference)?;

    let grad = image_gradients(&l, options.kernel, options.norm);
    let thin = suppress_non_maxima(&grad, options.low as f32);
    Ok(link_edges(&thin, options.low as f32, options.high as f32))
}
