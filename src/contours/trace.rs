//! Outer border following (Suzuki & Abe, 1985) restricted to one component.
//!
//! Starting at the component's first raster-order pixel, whose west neighbour
//! is background by construction, the tracer walks the 8-connected outer
//! boundary counter-clockwise on screen (y grows downward) until it returns
//! to the start pixel heading the same way it first left it. Holes are never
//! entered, so only the outermost border is produced.
use super::Point;
use serde::{Deserialize, Serialize};

/// Neighbour offsets in counter-clockwise order starting east.
const DIRS: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
const WEST: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContourApproximation {
    /// Every border pixel.
    None,
    /// Only the end points of horizontal, vertical and diagonal runs.
    #[default]
    Simple,
}

/// Trace the outer border of the component `label` that begins at `start`.
pub fn trace_outer_border(
    labels: &[u32],
    w: usize,
    h: usize,
    label: u32,
    start: Point,
) -> Vec<Point> {
    let inside = |p: Point| -> bool {
        p.x >= 0
            && p.y >= 0
            && (p.x as usize) < w
            && (p.y as usize) < h
            && labels[p.y as usize * w + p.x as usize] == label
    };
    let step = |p: Point, d: usize| Point::new(p.x + DIRS[d].0, p.y + DIRS[d].1);

    // Clockwise from west for the first neighbour.
    let Some(first_dir) = (0..8)
        .map(|k| (WEST + 8 - k) % 8)
        .find(|&d| inside(step(start, d)))
    else {
        return vec![start];
    };
    let second = step(start, first_dir);

    let mut points = Vec::new();
    let mut current = start;
    let mut back = first_dir;
    loop {
        points.push(current);
        // The pixel we came from is inside, so the search always succeeds.
        let d = (1..=8)
            .map(|k| (back + k) % 8)
            .find(|&d| inside(step(current, d)))
            .unwrap_or(back);
        let next = step(current, d);
        if next == start && current == second {
            break;
        }
        back = (d + 4) % 8;
        current = next;
    }
    points
}

/// Drop points that continue a straight run, keeping run end points.
///
/// The sequence is treated as closed; sequences of up to two points are
/// returned unchanged.
pub fn approximate(points: Vec<Point>, mode: ContourApproximation) -> Vec<Point> {
    let n = points.len();
    if mode == ContourApproximation::None || n <= 2 {
        return points;
    }
    let dir = |a: Point, b: Point| (b.x - a.x, b.y - a.y);
    (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            dir(prev, points[i]) != dir(points[i], next)
        })
        .map(|i| points[i])
        .collect()
}
