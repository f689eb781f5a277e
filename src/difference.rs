//! Grayscale absolute difference and the denoised binary change mask.
//!
//! Pipeline: normalize → luminance → `|a - b|` → `> threshold` → opening.
//!
//! The opening is a fixed noise floor: changed areas that cannot contain a
//! `kernel_size × kernel_size` square are dropped, trading sensitivity to
//! small changes for robustness to sensor noise and resampling artefacts.
use crate::error::{ChangeError, Result};
use crate::image::{ChangeMask, DifferenceMap, ImageU8, ImageView, ImageViewMut};
use crate::morphology;
use crate::normalize::{normalize, to_grayscale};
use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: i32 = 30;
pub const DEFAULT_OPEN_KERNEL: usize = 5;

/// Value written into masks for changed pixels.
pub const CHANGED: u8 = 255;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifferenceOptions {
    /// Pixels whose delta is strictly greater than this are changed. [0, 255].
    pub threshold: i32,
    /// Side of the square opening kernel. Odd, `1` disables denoising.
    pub kernel_size: usize,
}

impl Default for DifferenceOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            kernel_size: DEFAULT_OPEN_KERNEL,
        }
    }
}

impl DifferenceOptions {
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold("threshold", self.threshold)?;
        validate_kernel_size(self.kernel_size)
    }
}

/// Accept `value ∈ [0, 255]` and narrow it to `u8`.
pub fn validate_threshold(name: &str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        ChangeError::InvalidParameter(format!("{name} {value} outside [0, 255]"))
    })
}

pub(crate) fn validate_kernel_size(kernel_size: usize) -> Result<()> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(ChangeError::InvalidParameter(format!(
            "kernel size {kernel_size} must be odd and positive"
        )));
    }
    Ok(())
}

/// Per-pixel `|a - b|` of two single-channel images of equal size.
pub fn absolute_difference(a: &ImageU8, b: &ImageU8) -> Result<DifferenceMap> {
    if a.dims() != b.dims() {
        return Err(ChangeError::DimensionMismatch {
            expected: a.dims(),
            actual: b.dims(),
        });
    }
    if !a.is_gray() || !b.is_gray() {
        return Err(ChangeError::InvalidImage(
            "absolute difference expects single-channel inputs".into(),
        ));
    }
    let mut out = ImageU8::gray(a.w, a.h);
    for (y, (ra, rb)) in a.rows().zip(b.rows()).enumerate() {
        for ((d, &va), &vb) in out.row_mut(y).iter_mut().zip(ra).zip(rb) {
            *d = va.abs_diff(vb);
        }
    }
    Ok(out)
}

/// Binarize: `CHANGED` where `diff > threshold`, 0 elsewhere.
pub fn threshold_mask(diff: &DifferenceMap, threshold: u8) -> ChangeMask {
    let mut out = ImageU8::new(diff.w, diff.h, diff.channels);
    for (o, &v) in out.data.iter_mut().zip(&diff.data) {
        *o = if v > threshold { CHANGED } else { 0 };
    }
    out
}

/// Number of changed pixels in a mask.
pub fn count_changed(mask: &ChangeMask) -> usize {
    mask.data.iter().filter(|&&v| v == CHANGED).count()
}

/// Difference map and opened change mask with a 5×5 kernel.
///
/// `threshold` must lie in [0, 255]; `InvalidParameter` otherwise.
pub fn compute_difference(
    img1: &ImageU8,
    img2: &ImageU8,
    threshold: i32,
) -> Result<(DifferenceMap, ChangeMask)> {
    compute_difference_with(
        img1,
        img2,
        &DifferenceOptions::default().with_threshold(threshold),
    )
}

/// [`compute_difference`] with an explicit opening kernel size.
pub fn compute_difference_with(
    img1: &ImageU8,
    img2: &ImageU8,
    options: &DifferenceOptions,
) -> Result<(DifferenceMap, ChangeMask)> {
    let threshold = validate_threshold("threshold", options.threshold)?;
    validate_kernel_size(options.kernel_size)?;

    let diff = gray_difference(img1, img2)?;
    let raw = threshold_mask(&diff, threshold);
    let mask = morphology::open(&raw, options.kernel_size);
    Ok((diff, mask))
}

/// Raw change mask at `sensitivity`, without the opening step.
///
/// Meant for interactive threshold exploration where every pixel above the
/// cut should stay visible.
pub fn threshold_changes(img1: &ImageU8, img2: &ImageU8, sensitivity: i32) -> Result<ChangeMask> {
    let sensitivity = validate_threshold("sensitivity", sensitivity)?;
    let diff = gray_difference(img1, img2)?;
    Ok(threshold_mask(&diff, sensitivity))
}

/// Normalize the pair and return the grayscale difference map.
pub fn gray_difference(img1: &ImageU8, img2: &ImageU8) -> Result<DifferenceMap> {
    let (a, b) = normalize(img1, img2)?;
    absolute_difference(&to_grayscale(&a), &to_grayscale(&b))
}
