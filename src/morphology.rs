//! Binary/grayscale morphology with a square structuring element.
//!
//! A `k × k` square is separable: erosion (dilation) is a running minimum
//! (maximum) over `k` samples horizontally followed by the same vertically.
//! Samples outside the image are ignored, so the border neither erodes nor
//! grows a region on its own.
//!
//! Complexity: O(W·H·k) per pass, one temporary buffer.
use crate::image::{ImageU8, ImageView, ImageViewMut};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rank {
    Min,
    Max,
}

impl Rank {
    #[inline]
    fn pick(self, a: u8, b: u8) -> u8 {
        match self {
            Rank::Min => a.min(b),
            Rank::Max => a.max(b),
        }
    }
}

fn rank_filter(src: &ImageU8, ksize: usize, rank: Rank) -> ImageU8 {
    let radius = ksize / 2;
    if radius == 0 {
        return src.clone();
    }
    let (w, h, c) = (src.w, src.h, src.channels);
    let mut tmp = ImageU8::new(w, h, c);
    let mut out = ImageU8::new(w, h, c);

    // horizontal
    for y in 0..h {
        let s = src.row(y);
        let d = tmp.row_mut(y);
        for x in 0..w {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius).min(w - 1);
            for ch in 0..c {
                let mut v = s[x0 * c + ch];
                for xx in x0 + 1..=x1 {
                    v = rank.pick(v, s[xx * c + ch]);
                }
                d[x * c + ch] = v;
            }
        }
    }
    // vertical
    for y in 0..h {
        let y0 = y.saturating_sub(radius);
        let y1 = (y + radius).min(h - 1);
        let d = out.row_mut(y);
        d.copy_from_slice(tmp.row(y0));
        for yy in y0 + 1..=y1 {
            for (dv, &sv) in d.iter_mut().zip(tmp.row(yy)) {
                *dv = rank.pick(*dv, sv);
            }
        }
    }
    out
}

/// Minimum over each `ksize × ksize` neighbourhood.
pub fn erode(src: &ImageU8, ksize: usize) -> ImageU8 {
    rank_filter(src, ksize, Rank::Min)
}

/// Maximum over each `ksize × ksize` neighbourhood.
pub fn dilate(src: &ImageU8, ksize: usize) -> ImageU8 {
    rank_filter(src, ksize, Rank::Max)
}

/// Opening: erosion followed by dilation. Removes foreground features that
/// cannot contain a `ksize × ksize` square; larger regions keep their shape.
pub fn open(src: &ImageU8, ksize: usize) -> ImageU8 {
    dilate(&erode(src, ksize), ksize)
}
