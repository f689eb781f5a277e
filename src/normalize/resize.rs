//! Bilinear resampling with half-pixel-centre alignment.
//!
//! Destination pixel `d` samples source coordinate `(d + 0.5) * scale - 0.5`
//! where `scale = src_len / dst_len`. Coordinates left of the first sample
//! or right of the last one clamp to the border (replicate), so corners map
//! onto corners for both up- and down-scaling.
use crate::image::{ImageU8, ImageView, ImageViewMut};

/// Interpolation taps along one axis: `(i0, i1, t)` blends `(1 - t)·s[i0] + t·s[i1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Tap {
    i0: usize,
    i1: usize,
    t: f32,
}

fn axis_taps(src_len: usize, dst_len: usize) -> Vec<Tap> {
    let scale = src_len as f32 / dst_len as f32;
    (0..dst_len)
        .map(|d| {
            let pos = ((d as f32 + 0.5) * scale - 0.5).max(0.0);
            let i0 = pos.floor() as usize;
            if i0 + 1 >= src_len {
                Tap {
                    i0: src_len - 1,
                    i1: src_len - 1,
                    t: 0.0,
                }
            } else {
                Tap {
                    i0,
                    i1: i0 + 1,
                    t: pos - i0 as f32,
                }
            }
        })
        .collect()
}

/// Resample `src` to exactly `w × h`, keeping its channel count.
///
/// Returns a plain copy when the size already matches. Callers validate
/// `src` and the target size beforehand.
pub fn resize_bilinear(src: &ImageU8, w: usize, h: usize) -> ImageU8 {
    if src.w == w && src.h == h {
        return src.clone();
    }
    let c = src.channels;
    let xs = axis_taps(src.w, w);
    let ys = axis_taps(src.h, h);
    let mut out = ImageU8::new(w, h, c);

    for (y, ty) in ys.iter().enumerate() {
        let r0 = src.row(ty.i0);
        let r1 = src.row(ty.i1);
        let dst = out.row_mut(y);
        for (x, tx) in xs.iter().enumerate() {
            for ch in 0..c {
                let a = r0[tx.i0 * c + ch] as f32;
                let b = r0[tx.i1 * c + ch] as f32;
                let top = a + (b - a) * tx.t;
                let a = r1[tx.i0 * c + ch] as f32;
                let b = r1[tx.i1 * c + ch] as f32;
                let bottom = a + (b - a) * tx.t;
                let v = top + (bottom - top) * ty.t;
                dst[x * c + ch] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upscale_by_two_interpolates_between_samples() {
        let src = ImageU8::from_raw(2, 1, 1, vec![0, 100]).unwrap();
        let out = resize_bilinear(&src, 4, 1);
        // Source positions: -0.25 (clamped), 0.25, 0.75, 1.25 (clamped).
        assert_eq!(out.data, vec![0, 25, 75, 100]);
    }

    #[test]
    fn downscale_by_two_averages_pairs() {
        let src = ImageU8::from_raw(4, 1, 1, vec![0, 100, 200, 40]).unwrap();
        let out = resize_bilinear(&src, 2, 1);
        assert_eq!(out.data, vec![50, 120]);
    }

    #[test]
    fn constant_image_stays_constant_at_any_scale() {
        let src = ImageU8::filled(7, 5, 3, 91);
        let out = resize_bilinear(&src, 13, 3);
        assert_eq!((out.w, out.h, out.channels), (13, 3, 3));
        assert!(out.data.iter().all(|&v| v == 91));
    }

    #[test]
    fn taps_clamp_at_both_borders() {
        let taps = axis_taps(3, 9);
        assert_eq!(taps[0], Tap { i0: 0, i1: 1, t: 0.0 });
        let last = taps[8];
        assert_eq!((last.i0, last.i1), (2, 2));
    }
}
