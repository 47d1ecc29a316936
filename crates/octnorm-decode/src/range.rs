//! Quantization range of oct-encoded coordinates.

use std::fmt;
use std::num::NonZeroU32;

use crate::error::{DecodeError, DecodeResult};

/// Maximum representable quantized value of an oct coordinate.
///
/// A coordinate stored in `bits` bits has a range maximum of `2^bits - 1`.
/// The value is never zero, so "not provided" and "explicitly zero" cannot
/// be confused: the former is [`RangeMax::resolve`] with `None`, the latter
/// is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RangeMax(NonZeroU32);

impl RangeMax {
    /// 8 bits per axis.
    pub const DEFAULT: Self = match NonZeroU32::new(255) {
        Some(value) => Self(value),
        None => unreachable!(),
    };

    /// Create a range maximum from an explicit value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidRangeMax`] if `value` is zero.
    pub fn new(value: u32) -> DecodeResult<Self> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(DecodeError::InvalidRangeMax { value })
    }

    /// Create the range maximum for coordinates stored in `bits` bits.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidBitDepth`] unless `bits` is in `1..=32`.
    pub fn from_bits(bits: u32) -> DecodeResult<Self> {
        if !(1..=32).contains(&bits) {
            return Err(DecodeError::InvalidBitDepth { bits });
        }
        Self::new(u32::MAX >> (32 - bits))
    }

    /// Resolve an optional range maximum, using [`RangeMax::DEFAULT`] when
    /// none was provided.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidRangeMax`] for `Some(0)`.
    pub fn resolve(value: Option<u32>) -> DecodeResult<Self> {
        value.map_or(Ok(Self::DEFAULT), Self::new)
    }

    /// Legacy resolution where zero means "use the default".
    ///
    /// Only for matching data produced by tools that treated a zero range
    /// as unspecified. Prefer [`RangeMax::resolve`].
    #[must_use]
    pub fn from_raw_or_default(value: u32) -> Self {
        NonZeroU32::new(value).map_or(Self::DEFAULT, Self)
    }

    /// The range maximum as an integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The range maximum as a float, for SNORM arithmetic.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.get())
    }

    /// Whether `value` is a valid quantized coordinate for this range.
    #[must_use]
    pub const fn contains(self, value: u32) -> bool {
        value <= self.get()
    }
}

impl Default for RangeMax {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for RangeMax {
    type Error = DecodeError;

    fn try_from(value: u32) -> DecodeResult<Self> {
        Self::new(value)
    }
}

impl From<RangeMax> for u32 {
    fn from(range_max: RangeMax) -> Self {
        range_max.get()
    }
}

impl fmt::Display for RangeMax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
