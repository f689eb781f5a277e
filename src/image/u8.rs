//! Owned 8-bit raster with 1 (gray) or 3 (RGB) interleaved channels.
//!
//! This is the value type that crosses the crate boundary: callers decode
//! their files into it, every operation borrows it immutably and returns
//! freshly allocated instances.
use crate::error::{ChangeError, Result};

/// Number of samples per pixel for single-channel images.
pub const GRAY: usize = 1;
/// Number of samples per pixel for interleaved RGB images.
pub const RGB: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageU8 {
    pub w: usize,
    pub h: usize,
    /// Samples per pixel, 1 or 3.
    pub channels: usize,
    /// Samples between rows (`w * channels`).
    pub stride: usize,
    pub data: Vec<u8>,
}

impl ImageU8 {
    /// Zero-filled image. Geometry is not validated here; see [`ImageU8::validate`].
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        Self {
            w,
            h,
            channels,
            stride: w * channels,
            data: vec![0; w * h * channels],
        }
    }

    pub fn gray(w: usize, h: usize) -> Self {
        Self::new(w, h, GRAY)
    }

    pub fn rgb(w: usize, h: usize) -> Self {
        Self::new(w, h, RGB)
    }

    /// Image with every sample set to `value`.
    pub fn filled(w: usize, h: usize, channels: usize, value: u8) -> Self {
        let mut img = Self::new(w, h, channels);
        img.data.fill(value);
        img
    }

    /// Wrap a caller buffer, rejecting geometry that violates the image
    /// invariants.
    pub fn from_raw(w: usize, h: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let img = Self {
            w,
            h,
            channels,
            stride: w * channels,
            data,
        };
        img.validate()?;
        Ok(img)
    }

    /// Check `w, h > 0`, `channels ∈ {1, 3}` and the buffer length.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(ChangeError::InvalidImage(format!(
                "zero-area image {}x{}",
                self.w, self.h
            )));
        }
        if self.channels != GRAY && self.channels != RGB {
            return Err(ChangeError::InvalidImage(format!(
                "unsupported channel count {}",
                self.channels
            )));
        }
        if self.stride != self.w * self.channels {
            return Err(ChangeError::InvalidImage(format!(
                "stride {} does not match {}x{} samples per row",
                self.stride, self.w, self.channels
            )));
        }
        let expected = self.w * self.h * self.channels;
        if self.data.len() != expected {
            return Err(ChangeError::InvalidImage(format!(
                "buffer holds {} samples, {}x{}x{} needs {expected}",
                self.data.len(),
                self.w,
                self.h,
                self.channels
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    #[inline]
    pub fn is_gray(&self) -> bool {
        self.channels == GRAY
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x * self.channels
    }

    /// First channel sample at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    /// All channel samples of the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let i = self.idx(x, y);
        &self.data[i..i + self.channels]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Write `color` into every channel of (x, y); extra entries are ignored.
    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, color: &[u8]) {
        let i = self.idx(x, y);
        let c = self.channels;
        self.data[i..i + c].copy_from_slice(&color[..c]);
    }
}

impl crate::image::traits::ImageView for ImageU8 {
    type Pixel = u8;

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
    fn channels(&self) -> usize {
        self.channels
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * self.channels]
    }
}

impl crate::image::traits::ImageViewMut for ImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.w * self.channels;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    #[test]
    fn from_raw_rejects_short_buffer() {
        let err = ImageU8::from_raw(4, 4, RGB, vec![0; 10]).unwrap_err();
        assert!(matches!(err, ChangeError::InvalidImage(_)), "got {err:?}");
    }

    #[test]
    fn validate_rejects_zero_area_and_bad_channels() {
        assert!(ImageU8::gray(0, 5).validate().is_err());
        assert!(ImageU8::new(3, 3, 4).validate().is_err());
        assert!(ImageU8::rgb(3, 3).validate().is_ok());
    }

    #[test]
    fn rows_expose_interleaved_samples() {
        let mut img = ImageU8::rgb(2, 2);
        img.put_pixel(1, 1, &[10, 20, 30]);
        let rows: Vec<&[u8]> = img.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[0, 0, 0, 10, 20, 30]);
        assert_eq!(img.pixel(1, 1), &[10, 20, 30]);
    }
}
