//! Error taxonomy shared by every pipeline operation.
//!
//! All checks run at the start of an operation, before any buffer is
//! allocated, so a failing call never yields a partial result.

/// Failure modes of the change-detection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangeError {
    /// Zero-area image, unsupported channel count, or a pixel buffer whose
    /// length does not match the declared geometry.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// A numeric parameter outside its accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two images that must share dimensions do not.
    #[error("dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        /// `(width, height)` the stage expected.
        expected: (usize, usize),
        /// `(width, height)` it received.
        actual: (usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, ChangeError>;
