//! Diagnostics data model returned next to the analysis images.
//!
//! `AnalysisReport` is what the `change_report` tool writes as JSON; the
//! timings mirror the `debug!` lines the detector logs.

pub mod report;
pub mod timing;

pub use report::{AnalysisReport, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
