use change_detector::config::AnalysisConfig;
use change_detector::image::ImageU8;
use change_detector::ChangeDetector;

fn main() {
    env_logger::init();

    // Demo stub: a gray scene where a bright box appears in the second capture
    let (w, h) = (320usize, 240usize);
    let before = ImageU8::filled(w, h, 3, 96);
    let mut after = before.clone();
    for y in 80..140 {
        for x in 120..200 {
            after.put_pixel(x, y, &[230, 230, 230]);
        }
    }

    let detector = ChangeDetector::new(AnalysisConfig {
        detect_edges: true,
        show_contours: true,
        ..Default::default()
    });
    match detector.analyze(&before, &after) {
        Ok(analysis) => {
            let report = &analysis.report;
            println!(
                "changed={} regions={} edges={} latency_ms={:.3}",
                report.changed_pixels.unwrap_or(0),
                report.regions.len(),
                report.edge_pixels.unwrap_or(0),
                report.timings.total_ms
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
