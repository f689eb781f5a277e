mod common;

use change_detector::config::{AnalysisConfig, DetectionMethod};
use change_detector::contours::{find_contours, label_components, ContourApproximation};
use change_detector::difference::{count_changed, threshold_changes};
use change_detector::subtraction::ZERO_RANGE_FILL;
use change_detector::{
    compute_difference, compute_subtraction, detect_edges, normalize, ChangeDetector,
};
use common::synthetic_image::{checkerboard, noisy, solid, with_square};

#[test]
fn normalization_is_identity_on_matching_pairs() {
    for channels in [1, 3] {
        let a = checkerboard(37, 23, 5, channels);
        let b = solid(37, 23, channels, 9);
        let (na, nb) = normalize(&a, &b).expect("valid pair");
        assert_eq!(na, a, "channels={channels}");
        assert_eq!(nb, b, "channels={channels}");
    }
}

#[test]
fn normalization_adopts_reference_geometry() {
    let a = checkerboard(200, 150, 10, 1);
    let b = solid(64, 48, 3, 0);
    let (na, nb) = normalize(&a, &b).expect("valid pair");
    assert_eq!((na.w, na.h, na.channels), (64, 48, 3));
    assert_eq!((nb.w, nb.h, nb.channels), (64, 48, 3));
}

#[test]
fn identical_inputs_never_change_at_any_threshold() {
    let img = checkerboard(60, 40, 7, 3);
    for t in [0, 1, 30, 128, 255] {
        let (diff, mask) = compute_difference(&img, &img, t).expect("valid inputs");
        assert!(diff.data.iter().all(|&v| v == 0), "t={t}");
        assert_eq!(count_changed(&mask), 0, "t={t}");
    }
}

#[test]
fn change_count_is_non_increasing_in_threshold() {
    let a = noisy(80, 60, 120, 60, 7);
    let b = noisy(80, 60, 120, 60, 99);
    let mut last_opened = usize::MAX;
    let mut last_raw = usize::MAX;
    for t in (0..=255).step_by(5) {
        let (_, mask) = compute_difference(&a, &b, t).expect("valid inputs");
        let opened = count_changed(&mask);
        let raw = count_changed(&threshold_changes(&a, &b, t).expect("valid inputs"));
        assert!(opened <= last_opened, "opened count grew at t={t}");
        assert!(raw <= last_raw, "raw count grew at t={t}");
        assert!(opened <= raw, "opening added pixels at t={t}");
        last_opened = opened;
        last_raw = raw;
    }
}

#[test]
fn subtraction_stays_in_range_and_handles_zero_variance() {
    let img = checkerboard(30, 30, 4, 3);
    let same = compute_subtraction(&img, &img).expect("valid pair");
    assert!(same.data.iter().all(|&v| v == ZERO_RANGE_FILL));

    let other = noisy(45, 45, 100, 100, 3);
    let out = compute_subtraction(&other, &img).expect("valid pair");
    assert_eq!((out.w, out.h, out.channels), (30, 30, 3));
    assert!(out.data.contains(&0), "minimum delta must map to 0");
    assert!(out.data.contains(&255), "maximum delta must map to 255");
}

#[test]
fn contours_match_components_and_stay_on_the_mask() {
    for seed in [1, 17, 4242] {
        let raw = threshold_changes(
            &noisy(50, 40, 128, 127, seed),
            &noisy(50, 40, 128, 127, seed + 1),
            150,
        )
        .expect("valid inputs");
        let (_, regions) = label_components(&raw);
        for mode in [ContourApproximation::None, ContourApproximation::Simple] {
            let contours = find_contours(&raw, mode).expect("valid mask");
            assert_eq!(contours.len(), regions.len(), "seed={seed} {mode:?}");
            for (c, r) in contours.iter().zip(&regions) {
                assert!(!c.is_empty());
                assert_eq!(c.points[0], r.start);
                for p in &c.points {
                    assert_eq!(raw.get(p.x as usize, p.y as usize), 255);
                    assert!(r.bbox.contains(*p));
                }
            }
        }
    }
}

#[test]
fn edges_follow_the_changed_square() {
    let before = solid(64, 64, 3, 10);
    let after = with_square(&before, 20, 20, 24, 240);
    let (diff, _) = compute_difference(&before, &after, 30).expect("valid inputs");
    let edges = detect_edges(&diff, 100, 200).expect("valid thresholds");
    let count = edges.data.iter().filter(|&&v| v == 255).count();
    assert!(count > 4 * 16, "outline too sparse: {count}");
    assert_eq!(edges.get(32, 32), 0, "interior must be edge-free");
    assert_eq!(edges.get(2, 2), 0, "background must be edge-free");
}

#[test]
fn detector_is_shareable_across_threads() {
    let _ = env_logger::builder().is_test(true).try_init();
    let detector = ChangeDetector::new(AnalysisConfig {
        method: DetectionMethod::BasicDifference,
        show_contours: true,
        ..Default::default()
    });
    let before = solid(40, 40, 3, 50);
    let pairs: Vec<_> = (0..4)
        .map(|i| with_square(&before, 5 + i * 6, 10, 8, 250))
        .collect();

    let (detector, before) = (&detector, &before);
    std::thread::scope(|s| {
        let handles: Vec<_> = pairs
            .iter()
            .map(|after| s.spawn(move || detector.analyze(before, after)))
            .collect();
        for h in handles {
            let analysis = h.join().expect("worker panicked").expect("valid inputs");
            assert_eq!(analysis.contours.len(), 1);
            assert_eq!(analysis.report.changed_pixels, Some(64));
        }
    });
}

#[test]
fn noise_fixture_is_seeded_and_bounded() {
    let a = noisy(32, 24, 100, 20, 5);
    let b = noisy(32, 24, 100, 20, 5);
    let c = noisy(32, 24, 100, 20, 6);
    assert_eq!(a, b, "same seed must reproduce the image");
    assert_ne!(a, c, "different seeds should differ");
    assert!(a.data.iter().all(|&v| (80..=120).contains(&v)));
    assert!(a.data.iter().any(|&v| v != a.data[0]), "noise must not be flat");
}
