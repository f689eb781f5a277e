use super::AnalysisConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config for the `change_report` tool: two inputs, analysis, outputs.
#[derive(Debug, Deserialize)]
pub struct ReportToolConfig {
    /// Earlier capture; resampled to the second image's size.
    pub first: PathBuf,
    /// Later capture; its dimensions are authoritative.
    pub second: PathBuf,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    pub output: ReportOutputConfig,
}

/// Output paths. Images whose path is absent are not written.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportOutputConfig {
    pub difference_image: Option<PathBuf>,
    pub mask_image: Option<PathBuf>,
    pub subtraction_image: Option<PathBuf>,
    pub edges_image: Option<PathBuf>,
    pub contours_image: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ReportToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
