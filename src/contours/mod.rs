//! Change-region contours and their annotation.
//!
//! - `label`: 8-connected components of the mask, in raster order.
//! - `trace`: one outer border per component; inner (hole) borders are not
//!   reported. Points are integer pixel positions on the region itself and
//!   the polygon is implicitly closed.
//! - `draw`: closed-polyline rasterization onto a copy of the source image.

pub mod draw;
pub mod label;
pub mod trace;

use crate::error::{ChangeError, Result};
use crate::image::{ChangeMask, ImageU8};
use crate::normalize::gray_to_rgb;
use serde::{Deserialize, Serialize};

pub use draw::draw_contours;
pub use label::{label_components, ChangeRegion};
pub use trace::{approximate, trace_outer_border, ContourApproximation};

pub const DEFAULT_COLOR: [u8; 3] = [0, 255, 0];
pub const DEFAULT_THICKNESS: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in pixels, `w`/`h` counting both end pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl BoundingBox {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.w && p.y < self.y + self.h
    }
}

/// Closed outer border of one changed region.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contour {
    pub points: Vec<Point>,
    /// Statistics of the component this border encloses.
    pub region: ChangeRegion,
}

impl Contour {
    /// Contour with region statistics derived from the points alone; used
    /// for hand-built polygons passed to [`draw_contours`].
    pub fn from_points(points: Vec<Point>) -> Self {
        let start = points.first().copied().unwrap_or_default();
        let (mut min, mut max) = (start, start);
        for p in &points {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        let region = ChangeRegion {
            area_px: 0,
            bbox: BoundingBox {
                x: min.x,
                y: min.y,
                w: max.x - min.x + 1,
                h: max.y - min.y + 1,
            },
            start,
        };
        Self { points, region }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area of the polygon through the points (not the pixel count).
    pub fn polygon_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: i64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
            })
            .sum();
        twice.abs() as f64 / 2.0
    }
}

/// Ordered contours, one per connected changed region, in detection order.
pub type ContourSet = Vec<Contour>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourOptions {
    pub approximation: ContourApproximation,
    pub color: [u8; 3],
    /// Stroke width in pixels, at least 1.
    pub thickness: usize,
}

impl Default for ContourOptions {
    fn default() -> Self {
        Self {
            approximation: ContourApproximation::Simple,
            color: DEFAULT_COLOR,
            thickness: DEFAULT_THICKNESS,
        }
    }
}

impl ContourOptions {
    pub fn validate(&self) -> Result<()> {
        if self.thickness == 0 {
            return Err(ChangeError::InvalidParameter(
                "contour thickness must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Outer contours of every 8-connected non-zero region of `mask`.
pub fn find_contours(
    mask: &ChangeMask,
    approximation: ContourApproximation,
) -> Result<ContourSet> {
    mask.validate()?;
    if !mask.is_gray() {
        return Err(ChangeError::InvalidImage(format!(
            "change mask must be single-channel, got {} channels",
            mask.channels
        )));
    }

    let (labels, regions) = label_components(mask);
    Ok(regions
        .into_iter()
        .enumerate()
        .map(|(i, region)| {
            let label = i as u32 + 1;
            let border = trace_outer_border(&labels, mask.w, mask.h, label, region.start);
            Contour {
                points: approximate(border, approximation),
                region,
            }
        })
        .collect())
}

/// Contours of `mask` and an RGB copy of `original` with them drawn in green
/// at 2 px.
pub fn extract_contours(mask: &ChangeMask, original: &ImageU8) -> Result<(ContourSet, ImageU8)> {
    extract_contours_with(mask, original, &ContourOptions::default())
}

/// [`extract_contours`] with explicit approximation, color and stroke.
pub fn extract_contours_with(
    mask: &ChangeMask,
    original: &ImageU8,
    options: &ContourOptions,
) -> Result<(ContourSet, ImageU8)> {
    options.validate()?;
    original.validate()?;
    mask.validate()?;
    if mask.dims() != original.dims() {
        return Err(ChangeError::DimensionMismatch {
            expected: original.dims(),
            actual: mask.dims(),
        });
    }

    let contours = find_contours(mask, options.approximation)?;
    let mut annotated = gray_to_rgb(original);
    draw_contours(&mut annotated, &contours, options.color, options.thickness);
    Ok((contours, annotated))
}
