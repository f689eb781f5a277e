//! Owned single-channel f32 buffer (stride == width).
//!
//! Used where integer samples would saturate: gradient responses of the edge
//! detector keep their sign and exceed 255.
use super::ImageU8;
use crate::error::{ChangeError, Result};

#[derive(Clone, Debug)]
pub struct ImageF32 {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Promote a single-channel 8-bit image, keeping the 0–255 scale.
    pub fn from_gray(gray: &ImageU8) -> Result<Self> {
        if !gray.is_gray() {
            return Err(ChangeError::InvalidImage(format!(
                "expected a single-channel image, got {} channels",
                gray.channels
            )));
        }
        Ok(Self {
            w: gray.w,
            h: gray.h,
            stride: gray.w,
            data: gray.data.iter().map(|&v| v as f32).collect(),
        })
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
