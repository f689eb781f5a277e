use super::TimingBreakdown;
use crate::config::DetectionMethod;
use crate::contours::ChangeRegion;
use serde::Serialize;

/// Serializable summary of one [`ChangeDetector::analyze`](crate::ChangeDetector::analyze) run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub input: InputDescriptor,
    pub method: DetectionMethod,
    /// Threshold that produced `changed_pixels`; absent for subtraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_pixels: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_fraction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_pixels: Option<usize>,
    /// One entry per contour, in detection order.
    pub regions: Vec<ChangeRegion>,
    pub timings: TimingBreakdown,
}

/// Geometry of the pair after normalization.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub first: [usize; 3],
    pub second: [usize; 3],
    /// Working size, equal to the second image's.
    pub width: usize,
    pub height: usize,
}
