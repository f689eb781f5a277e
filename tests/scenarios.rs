mod common;

use change_detector::contours::label_components;
use change_detector::difference::count_changed;
use change_detector::{compute_difference, extract_contours, ChangeError};
use common::synthetic_image::{solid, with_square};

#[test]
fn identical_gray_images_show_no_change() {
    let _ = env_logger::builder().is_test(true).try_init();
    let img = solid(100, 100, 3, 128);

    let (diff, mask) = compute_difference(&img, &img, 30).expect("valid inputs");
    assert!(diff.data.iter().all(|&v| v == 0), "difference map must be zero");
    assert_eq!(count_changed(&mask), 0);

    let (contours, _) = extract_contours(&mask, &img).expect("valid mask");
    assert!(contours.is_empty(), "got {} contours", contours.len());
}

#[test]
fn inserted_white_square_is_one_region() {
    let before = solid(100, 100, 3, 0);
    let after = with_square(&before, 40, 30, 20, 255);

    let (_, mask) = compute_difference(&before, &after, 30).expect("valid inputs");
    let (_, regions) = label_components(&mask);
    assert_eq!(regions.len(), 1, "expected a single changed component");
    let region = regions[0];
    assert!(
        (16..=20).contains(&region.bbox.w) && (16..=20).contains(&region.bbox.h),
        "unexpected region size {:?}",
        region.bbox
    );
    assert!(region.area_px <= 400 && region.area_px >= 256);

    let (contours, annotated) = extract_contours(&mask, &after).expect("valid mask");
    assert_eq!(contours.len(), 1);
    let contour = &contours[0];
    for p in &contour.points {
        assert_eq!(mask.get(p.x as usize, p.y as usize), 255, "{p:?} off region");
        assert!((40..60).contains(&p.x) && (30..50).contains(&p.y), "{p:?}");
    }
    assert!(contour.polygon_area() >= 15.0 * 15.0);
    assert_eq!(annotated.pixel(40, 30), &[0, 255, 0]);
    assert_eq!(annotated.pixel(50, 40), &[255, 255, 255]);
}

#[test]
fn out_of_range_thresholds_are_rejected() {
    let img = solid(10, 10, 1, 0);
    for t in [-1, 300] {
        match compute_difference(&img, &img, t) {
            Err(ChangeError::InvalidParameter(msg)) => assert!(msg.contains("threshold")),
            other => panic!("threshold {t}: expected InvalidParameter, got {other:?}"),
        }
    }
}
