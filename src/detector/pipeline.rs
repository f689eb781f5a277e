//! [`ChangeDetector`] implementation.
//!
//! Typical usage:
//! ```no_run
//! use change_detector::config::AnalysisConfig;
//! use change_detector::image::ImageU8;
//! use change_detector::ChangeDetector;
//!
//! # fn example(before: ImageU8, after: ImageU8) {
//! let detector = ChangeDetector::new(AnalysisConfig {
//!     show_contours: true,
//!     ..Default::default()
//! });
//! let analysis = detector.analyze(&before, &after).expect("valid inputs");
//! println!("{} changed regions", analysis.contours.len());
//! # }
//! ```
use crate::config::{AnalysisConfig, DetectionMethod};
use crate::contours::{extract_contours_with, ContourSet};
use crate::diagnostics::{AnalysisReport, InputDescriptor, TimingBreakdown};
use crate::difference::{
    compute_difference_with, count_changed, gray_difference, threshold_mask, validate_threshold,
};
use crate::edges::{detect_edges_with, EDGE};
use crate::error::Result;
use crate::image::{ChangeMask, DifferenceMap, EdgeMap, ImageU8, SubtractionResult};
use crate::morphology;
use crate::subtraction::compute_subtraction;
use log::debug;
use std::time::Instant;

/// Everything one analysis run produced. Stages that were not requested
/// leave their slot empty.
#[derive(Clone, Debug)]
pub struct ChangeAnalysis {
    pub difference: Option<DifferenceMap>,
    /// Opened mask for `BasicDifference`, raw cut for `ThresholdDetection`.
    pub mask: Option<ChangeMask>,
    pub subtraction: Option<SubtractionResult>,
    pub edges: Option<EdgeMap>,
    pub contours: ContourSet,
    /// Second image with the contours drawn, when contours were requested.
    pub annotated: Option<ImageU8>,
    pub report: AnalysisReport,
}

#[derive(Clone, Debug, Default)]
pub struct ChangeDetector {
    config: AnalysisConfig,
}

impl ChangeDetector {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the configured analyses on `first` (earlier) and `second` (later,
    /// authoritative size).
    pub fn analyze(&self, first: &ImageU8, second: &ImageU8) -> Result<ChangeAnalysis> {
        let total_start = Instant::now();
        let cfg = &self.config;
        cfg.validate()?;
        first.validate()?;
        second.validate()?;

        let mut timings = TimingBreakdown::default();
        let mut difference: Option<DifferenceMap> = None;
        let mut opened: Option<ChangeMask> = None;
        let mut mask: Option<ChangeMask> = None;
        let mut subtraction = None;
        let mut threshold = None;

        match cfg.method {
            DetectionMethod::BasicDifference => {
                let (diff, m) = timings.measure("difference", || {
                    compute_difference_with(first, second, &cfg.difference)
                })?;
                difference = Some(diff);
                opened = Some(m.clone());
                mask = Some(m);
                threshold = Some(cfg.difference.threshold);
            }
            DetectionMethod::Subtraction => {
                subtraction = Some(
                    timings.measure("subtraction", || compute_subtraction(first, second))?,
                );
            }
            DetectionMethod::ThresholdDetection => {
                let sensitivity = validate_threshold("sensitivity", cfg.sensitivity)?;
                let diff = timings.measure("difference", || gray_difference(first, second))?;
                mask = Some(timings.measure("threshold", || threshold_mask(&diff, sensitivity)));
                difference = Some(diff);
                threshold = Some(cfg.sensitivity);
            }
        }

        let mut edges = None;
        if cfg.detect_edges {
            let diff = match difference.take() {
                Some(d) => d,
                None => timings.measure("difference", || gray_difference(first, second))?,
            };
            edges = Some(timings.measure("edges", || detect_edges_with(&diff, &cfg.edges))?);
            difference = Some(diff);
        }

        let mut contours = ContourSet::new();
        let mut annotated = None;
        if cfg.show_contours {
            let m = match opened.take() {
                Some(m) => m,
                None => {
                    let diff = match difference.take() {
                        Some(d) => d,
                        None => {
                            timings.measure("difference", || gray_difference(first, second))?
                        }
                    };
                    let cut = validate_threshold("threshold", cfg.difference.threshold)?;
                    let m = timings.measure("opening", || {
                        morphology::open(&threshold_mask(&diff, cut), cfg.difference.kernel_size)
                    });
                    difference = Some(diff);
                    m
                }
            };
            let (found, drawn) = timings.measure("contours", || {
                extract_contours_with(&m, second, &cfg.contours)
            })?;
            contours = found;
            annotated = Some(drawn);
        }

        let pixels = second.w * second.h;
        let changed_pixels = mask.as_ref().map(count_changed);
        let edge_pixels = edges
            .as_ref()
            .map(|e: &EdgeMap| e.data.iter().filter(|&&v| v == EDGE).count());
        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "ChangeDetector::analyze method={:?} changed={:?} edges={:?} regions={} total_ms={:.3}",
            cfg.method,
            changed_pixels,
            edge_pixels,
            contours.len(),
            timings.total_ms
        );
        for stage in &timings.stages {
            debug!("  stage {} took {:.3} ms", stage.label, stage.elapsed_ms);
        }

        let report = AnalysisReport {
            input: InputDescriptor {
                first: [first.w, first.h, first.channels],
                second: [second.w, second.h, second.channels],
                width: second.w,
                height: second.h,
            },
            method: cfg.method,
            threshold,
            changed_pixels,
            changed_fraction: changed_pixels.map(|c| c as f64 / pixels as f64),
            edge_pixels,
            regions: contours.iter().map(|c| c.region).collect(),
            timings,
        };

        Ok(ChangeAnalysis {
            difference,
            mask,
            subtraction,
            edges,
            contours,
            annotated,
            report,
        })
    }
}
