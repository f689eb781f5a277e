//! Image gradients (Sobel/Scharr) with a selectable magnitude norm.
//!
//! - Convolves a 3×3 kernel pair (`X` and `Y`) with border clamping.
//! - Outputs per-pixel `gx`, `gy` and the magnitude, either `|gx| + |gy|`
//!   (L1) or `sqrt(gx² + gy²)` (L2).
//!
//! Inputs stay on the 0–255 scale, so a full-contrast vertical step yields
//! a Sobel L1 magnitude of 1020.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const SCHARR_KERNEL_X: Kernel3 = [[-3.0, 0.0, 3.0], [-10.0, 0.0, 10.0], [-3.0, 0.0, 3.0]];
const SCHARR_KERNEL_Y: Kernel3 = [[-3.0, -10.0, -3.0], [0.0, 0.0, 0.0], [3.0, 10.0, 3.0]];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKernel {
    #[default]
    Sobel,
    /// Better rotational symmetry; responses are roughly 4× Sobel's.
    Scharr,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientNorm {
    #[default]
    L1,
    L2,
}

impl GradientNorm {
    #[inline]
    fn magnitude(self, gx: f32, gy: f32) -> f32 {
        match self {
            GradientNorm::L1 => gx.abs() + gy.abs(),
            GradientNorm::L2 => (gx * gx + gy * gy).sqrt(),
        }
    }
}

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
    pub mag: ImageF32,
}

fn gradients_with_kernels(
    l: &ImageF32,
    kernel_x: &Kernel3,
    kernel_y: &Kernel3,
    norm: GradientNorm,
) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &kernel_x[ky];
                let ky_row = &kernel_y[ky];
                sum_x += yy_row[x_idx[0]] * kx_row[0]
                    + yy_row[x_idx[1]] * kx_row[1]
                    + yy_row[x_idx[2]] * kx_row[2];
                sum_y += yy_row[x_idx[0]] * ky_row[0]
                    + yy_row[x_idx[1]] * ky_row[1]
                    + yy_row[x_idx[2]] * ky_row[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = norm.magnitude(sum_x, sum_y);
        }
    }

    Grad { gx, gy, mag }
}

/// Compute gradients on a single-channel float image.
pub fn image_gradients(l: &ImageF32, kernel: GradientKernel, norm: GradientNorm) -> Grad {
    match kernel {
        GradientKernel::Sobel => gradients_with_kernels(l, &SOBEL_KERNEL_X, &SOBEL_KERNEL_Y, norm),
        GradientKernel::Scharr => {
            gradients_with_kernels(l, &SCHARR_KERNEL_X, &SCHARR_KERNEL_Y, norm)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(w: usize, h: usize, split_x: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in split_x..w {
                img.set(x, y, 255.0);
            }
        }
        img
    }

    #[test]
    fn sobel_step_response() {
        let grad = image_gradients(&step(8, 5, 4), GradientKernel::Sobel, GradientNorm::L1);
        assert_eq!(grad.gx.get(3, 2), 1020.0);
        assert_eq!(grad.gx.get(4, 2), 1020.0);
        assert_eq!(grad.gy.get(3, 2), 0.0);
        assert_eq!(grad.mag.get(1, 2), 0.0);
    }

    #[test]
    fn l2_norm_on_diagonal_gradient() {
        let mut img = ImageF32::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                img.set(x, y, (x + y) as f32);
            }
        }
        let grad = image_gradients(&img, GradientKernel::Sobel, GradientNorm::L2);
        let m = grad.mag.get(2, 2);
        assert!((m - 8.0 * std::f32::consts::SQRT_2).abs() < 1e-4, "mag={m}");
    }

    #[test]
    fn flat_image_has_zero_scharr_gradient() {
        let mut img = ImageF32::new(6, 6);
        img.data.fill(42.0);
        let grad = image_gradients(&img, GradientKernel::Scharr, GradientNorm::L1);
        assert!(grad.mag.data.iter().all(|&m| m == 0.0));
    }
}
