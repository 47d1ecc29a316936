//! Error types for decoding operations.

use std::fmt;

/// Errors that can occur while decoding oct-encoded vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A quantized coordinate lies outside `[0, range_max]`.
    RangeViolation { x: u32, y: u32, range_max: u32 },
    /// The reconstructed vector has zero or non-finite length.
    DegenerateNormalization { x: u32, y: u32 },
    /// A range maximum of zero was supplied.
    InvalidRangeMax { value: u32 },
    /// A bit depth outside `1..=32` was supplied.
    InvalidBitDepth { bits: u32 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RangeViolation { x, y, range_max } => {
                write!(
                    f,
                    "oct coordinates ({x}, {y}) must be unsigned normalized integers between 0 and {range_max}"
                )
            }
            Self::DegenerateNormalization { x, y } => {
                write!(f, "oct coordinates ({x}, {y}) decode to a zero-length vector")
            }
            Self::InvalidRangeMax { value } => {
                write!(f, "range maximum must be positive, got {value}")
            }
            Self::InvalidBitDepth { bits } => {
                write!(f, "bit depth must be between 1 and 32, got {bits}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
