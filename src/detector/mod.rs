//! One-call change analysis of an image pair.
//!
//! Overview
//! - Validates the whole [`AnalysisConfig`](crate::config::AnalysisConfig)
//!   before touching pixels.
//! - Produces the image selected by the detection method (difference map and
//!   opened mask, stretched subtraction, or raw threshold mask).
//! - Optionally adds the edge map of the difference map and the change
//!   contours drawn over the second image.
//! - Shares intermediate products between stages: the difference map is
//!   computed at most once per call.
//!
//! The detector holds only its configuration; `analyze` takes `&self` and is
//! safe to call from several threads on independent pairs.

mod pipeline;

pub use pipeline::{ChangeAnalysis, ChangeDetector};
