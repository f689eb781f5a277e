//! Codec and JSON helpers for the command-line tools.
//!
//! - `load_image`: decode a PNG/JPEG/etc. into an owned `ImageU8`, keeping
//!   grayscale sources single-channel and everything else RGB.
//! - `save_image`: encode an `ImageU8` (gray or RGB), format from extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The analysis operations never call into this module.
use super::ImageU8;
use image::{DynamicImage, GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Convert a decoded image into the crate's raster representation.
///
/// Alpha is dropped; 16-bit and float sources are quantized to 8 bits.
pub fn from_dynamic(img: DynamicImage) -> ImageU8 {
    let has_color = img.color().has_color();
    let (w, h) = (img.width() as usize, img.height() as usize);
    if has_color {
        let data = img.into_rgb8().into_raw();
        ImageU8 {
            w,
            h,
            channels: 3,
            stride: w * 3,
            data,
        }
    } else {
        let data = img.into_luma8().into_raw();
        ImageU8 {
            w,
            h,
            channels: 1,
            stride: w,
            data,
        }
    }
}

/// Wrap an `ImageU8` into the `image` crate's buffer types.
pub fn to_dynamic(img: &ImageU8) -> Result<DynamicImage, String> {
    img.validate().map_err(|e| e.to_string())?;
    let (w, h) = (img.w as u32, img.h as u32);
    let data = img.data.clone();
    if img.is_gray() {
        GrayImage::from_raw(w, h, data)
            .map(DynamicImage::ImageLuma8)
            .ok_or_else(|| "Failed to create grayscale buffer".to_string())
    } else {
        RgbImage::from_raw(w, h, data)
            .map(DynamicImage::ImageRgb8)
            .ok_or_else(|| "Failed to create RGB buffer".to_string())
    }
}

/// Load an image from disk.
pub fn load_image(path: &Path) -> Result<ImageU8, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    Ok(from_dynamic(img))
}

/// Save an image, creating parent directories as needed.
pub fn save_image(img: &ImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    to_dynamic(img)?
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
