//! Configuration records for the analysis and the command-line tools.
//!
//! `AnalysisConfig` is the plain parameter record a presentation layer fills
//! in (method selector, sensitivity slider, feature toggles) and hands to
//! [`ChangeDetector`](crate::ChangeDetector). Every field has a default, so a
//! JSON config only needs the keys it changes.

pub mod report;

use crate::contours::ContourOptions;
use crate::difference::{validate_threshold, DifferenceOptions, DEFAULT_THRESHOLD};
use crate::edges::EdgeOptions;
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub use report::{load_config, ReportOutputConfig, ReportToolConfig};

/// Which change image the analysis produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Difference map plus the opened change mask.
    #[default]
    BasicDifference,
    /// Min-max stretched signed subtraction.
    Subtraction,
    /// Difference map cut at `sensitivity`, without denoising.
    ThresholdDetection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub method: DetectionMethod,
    pub difference: DifferenceOptions,
    /// Cut used by [`DetectionMethod::ThresholdDetection`], [0, 255].
    pub sensitivity: i32,
    /// Also compute an edge map of the difference map.
    pub detect_edges: bool,
    pub edges: EdgeOptions,
    /// Also trace change contours and annotate the second image.
    pub show_contours: bool,
    pub contours: ContourOptions,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            method: DetectionMethod::BasicDifference,
            difference: DifferenceOptions::default(),
            sensitivity: DEFAULT_THRESHOLD,
            detect_edges: false,
            edges: EdgeOptions::default(),
            show_contours: false,
            contours: ContourOptions::default(),
        }
    }
}

impl AnalysisConfig {
    /// Reject out-of-range parameters of every enabled stage.
    pub fn validate(&self) -> Result<()> {
        self.difference.validate()?;
        if self.method == DetectionMethod::ThresholdDetection {
            validate_threshold("sensitivity", self.sensitivity)?;
        }
        if self.detect_edges {
            self.edges.validate()?;
        }
        if self.show_contours {
            self.contours.validate()?;
        }
        Ok(())
    }
}
