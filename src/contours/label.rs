//! 8-connected component labeling of a binary mask.
//!
//! Components are numbered in raster order of their first pixel, which is
//! also the order contours are reported in.
use super::{BoundingBox, Point};
use crate::image::ImageU8;
use serde::Serialize;

/// Per-component statistics, kept alongside each traced contour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRegion {
    /// Number of foreground pixels in the component.
    pub area_px: usize,
    pub bbox: BoundingBox,
    /// First pixel of the component in raster order.
    pub start: Point,
}

struct RegionAccumulator {
    area_px: usize,
    min: (usize, usize),
    max: (usize, usize),
}

impl RegionAccumulator {
    fn new(x: usize, y: usize) -> Self {
        Self {
            area_px: 0,
            min: (x, y),
            max: (x, y),
        }
    }

    fn push(&mut self, x: usize, y: usize) {
        self.area_px += 1;
        self.min = (self.min.0.min(x), self.min.1.min(y));
        self.max = (self.max.0.max(x), self.max.1.max(y));
    }
}

/// Label map (0 = background, components from 1) and one region per label.
pub fn label_components(mask: &ImageU8) -> (Vec<u32>, Vec<ChangeRegion>) {
    let (w, h) = (mask.w, mask.h);
    let mut labels = vec![0u32; w * h];
    let mut regions = Vec::new();
    let mut stack = Vec::new();

    for start in 0..w * h {
        if mask.data[start] == 0 || labels[start] != 0 {
            continue;
        }
        let label = regions.len() as u32 + 1;
        let (sx, sy) = (start % w, start / w);
        let mut acc = RegionAccumulator::new(sx, sy);
        labels[start] = label;
        stack.push(start);

        while let Some(i) = stack.pop() {
            let (x, y) = (i % w, i / w);
            acc.push(x, y);
            for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                    let j = ny * w + nx;
                    if mask.data[j] != 0 && labels[j] == 0 {
                        labels[j] = label;
                        stack.push(j);
                    }
                }
            }
        }

        regions.push(ChangeRegion {
            area_px: acc.area_px,
            bbox: BoundingBox {
                x: acc.min.0 as i32,
                y: acc.min.1 as i32,
                w: (acc.max.0 - acc.min.0 + 1) as i32,
                h: (acc.max.1 - acc.min.1 + 1) as i32,
            },
            start: Point::new(sx as i32, sy as i32),
        });
    }

    (labels, regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from(rows: &[&str]) -> ImageU8 {
        let h = rows.len();
        let w = rows[0].len();
        let data = rows
            .iter()
            .flat_map(|r| r.bytes().map(|b| if b == b'#' { 255 } else { 0 }))
            .collect();
        ImageU8::from_raw(w, h, 1, data).unwrap()
    }

    #[test]
    fn diagonal_neighbours_join_one_component() {
        let mask = mask_from(&["#...", ".#..", "..#.", "...."]);
        let (_, regions) = label_components(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].area_px, 3);
        assert_eq!(
            regions[0].bbox,
            BoundingBox {
                x: 0,
                y: 0,
                w: 3,
                h: 3
            }
        );
    }

    #[test]
    fn separate_blobs_are_numbered_in_raster_order() {
        let mask = mask_from(&["...##", "...##", ".....", "##...", "##..."]);
        let (labels, regions) = label_components(&mask);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].start, Point::new(3, 0));
        assert_eq!(regions[1].start, Point::new(0, 3));
        assert_eq!(labels[3 * 5], 2);
    }

    #[test]
    fn ring_with_hole_is_one_component() {
        let mask = mask_from(&["#####", "#...#", "#...#", "#####"]);
        let (_, regions) = label_components(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].area_px, 14);
    }
}
