use change_detector::config::{load_config, ReportOutputConfig};
use change_detector::image::io::{load_image, save_image, write_json_file};
use change_detector::image::ImageU8;
use change_detector::{ChangeAnalysis, ChangeDetector};
use log::info;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let first = load_image(&config.first)?;
    let second = load_image(&config.second)?;
    info!(
        "Loaded {} ({}x{}x{}) and {} ({}x{}x{})",
        config.first.display(),
        first.w,
        first.h,
        first.channels,
        config.second.display(),
        second.w,
        second.h,
        second.channels
    );

    let detector = ChangeDetector::new(config.analysis);
    let analysis = detector
        .analyze(&first, &second)
        .map_err(|e| format!("Analysis failed: {e}"))?;

    write_outputs(&analysis, &config.output)?;

    let report = &analysis.report;
    println!(
        "method={:?} changed={} regions={} edges={} latency_ms={:.3}",
        report.method,
        report
            .changed_pixels
            .map_or_else(|| "-".to_string(), |c| c.to_string()),
        report.regions.len(),
        report
            .edge_pixels
            .map_or_else(|| "-".to_string(), |c| c.to_string()),
        report.timings.total_ms
    );
    Ok(())
}

fn write_outputs(analysis: &ChangeAnalysis, output: &ReportOutputConfig) -> Result<(), String> {
    let images: [(&Option<ImageU8>, &Option<std::path::PathBuf>); 5] = [
        (&analysis.difference, &output.difference_image),
        (&analysis.mask, &output.mask_image),
        (&analysis.subtraction, &output.subtraction_image),
        (&analysis.edges, &output.edges_image),
        (&analysis.annotated, &output.contours_image),
    ];
    for (image, path) in images {
        match (image, path) {
            (Some(image), Some(path)) => {
                save_image(image, path)?;
                println!("Saved {}", path.display());
            }
            (None, Some(path)) => {
                info!("Skipping {}: stage not enabled", path.display());
            }
            _ => {}
        }
    }
    if let Some(path) = &output.report_json {
        write_json_file(path, &analysis.report)?;
        println!("Saved report to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: change_report <config.json>".to_string()
}
