#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Pipeline stages, usable on their own.
pub mod contours;
pub mod difference;
pub mod edges;
pub mod morphology;
pub mod normalize;
pub mod subtraction;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{ChangeAnalysis, ChangeDetector};
pub use crate::error::ChangeError;

// The five pipeline operations.
pub use crate::contours::{extract_contours, Contour, ContourSet, Point};
pub use crate::difference::compute_difference;
pub use crate::edges::detect_edges;
pub use crate::normalize::normalize;
pub use crate::subtraction::compute_subtraction;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use change_detector::prelude::*;
///
/// # fn main() -> Result<(), ChangeError> {
/// let before = ImageU8::filled(100, 100, 3, 128);
/// let after = before.clone();
///
/// let (diff, mask) = compute_difference(&before, &after, 30)?;
/// let (contours, _annotated) = extract_contours(&mask, &after)?;
/// println!("max delta={} regions={}", diff.data.iter().max().unwrap_or(&0), contours.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::config::{AnalysisConfig, DetectionMethod};
    pub use crate::image::ImageU8;
    pub use crate::{
        compute_difference, compute_subtraction, detect_edges, extract_contours, normalize,
    };
    pub use crate::{ChangeDetector, ChangeError};
}
