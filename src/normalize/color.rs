//! Channel conversions between gray and RGB rasters.
use crate::image::{ImageU8, ImageView, ImageViewMut, GRAY, RGB};

// BT.601 luma weights in Q14 fixed point; they sum to 1 << 14.
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;

#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT;
    ((y + (1 << (SHIFT - 1))) >> SHIFT) as u8
}

/// Luminance-weighted grayscale copy. Single-channel input is cloned as-is.
pub fn to_grayscale(img: &ImageU8) -> ImageU8 {
    if img.channels == GRAY {
        return img.clone();
    }
    let mut out = ImageU8::gray(img.w, img.h);
    for y in 0..img.h {
        let src = img.row(y);
        let dst = out.row_mut(y);
        for (px, rgb) in dst.iter_mut().zip(src.chunks_exact(RGB)) {
            *px = luminance(rgb[0], rgb[1], rgb[2]);
        }
    }
    out
}

/// Replicate a gray image into three identical channels. RGB input is cloned.
pub fn gray_to_rgb(img: &ImageU8) -> ImageU8 {
    if img.channels == RGB {
        return img.clone();
    }
    let mut out = ImageU8::rgb(img.w, img.h);
    for y in 0..img.h {
        let src = img.row(y);
        let dst = out.row_mut(y);
        for (rgb, &v) in dst.chunks_exact_mut(RGB).zip(src) {
            rgb.fill(v);
        }
    }
    out
}
