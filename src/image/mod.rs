//! Raster buffers shared by every stage.
//!
//! [`ImageU8`] is the boundary type (gray or RGB, interleaved, row-major);
//! [`ImageF32`] holds intermediate float responses. Both implement the
//! [`ImageView`] row-access traits used by the filters.

pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::{ImageU8, GRAY, RGB};

/// Absolute grayscale delta between two normalized images.
pub type DifferenceMap = ImageU8;
/// Binary single-channel mask, 255 marks a changed pixel.
pub type ChangeMask = ImageU8;
/// Binary single-channel edge map, 255 marks an edge pixel.
pub type EdgeMap = ImageU8;
/// Three-channel min-max rescaled `second - first`.
pub type SubtractionResult = ImageU8;
