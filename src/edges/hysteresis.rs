//! Double-threshold edge linking.
//!
//! Thinned responses above `high` seed edges; responses above `low` are kept
//! only when 8-connected, directly or through other kept pixels, to a seed.
use crate::image::{EdgeMap, ImageF32, ImageU8};

pub const EDGE: u8 = 255;

const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Link `thin` responses into a binary edge map.
pub fn link_edges(thin: &ImageF32, low: f32, high: f32) -> EdgeMap {
    let (w, h) = (thin.w, thin.h);
    let mut out = ImageU8::gray(w, h);
    let mut stack: Vec<usize> = thin
        .data
        .iter()
        .enumerate()
        .filter(|(_, &m)| m > high)
        .map(|(i, _)| i)
        .collect();
    for &i in &stack {
        out.data[i] = EDGE;
    }

    while let Some(i) = stack.pop() {
        let (x, y) = ((i % w) as isize, (i / w) as isize);
        for (dx, dy) in NEIGHBORS_8 {
            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                continue;
            }
            let j = ny as usize * w + nx as usize;
            if out.data[j] == 0 && thin.data[j] > low {
                out.data[j] = EDGE;
                stack.push(j);
            }
        }
    }
    out
}
