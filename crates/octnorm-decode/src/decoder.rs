//! Configured oct decoder.

use glam::{DVec3, Vec3};

use crate::error::DecodeResult;
use crate::octahedral::{decode_unit_vector, decode_unit_vector_clamped};
use crate::range::RangeMax;

/// How out-of-range quantized coordinates are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RangePolicy {
    /// Reject the pair with [`crate::DecodeError::RangeViolation`].
    #[default]
    Strict,
    /// Clamp to the nearest valid coordinate and keep decoding.
    Clamp,
}

/// An oct decoder bound to a quantization range and a range policy.
///
/// The decoder holds no mutable state; it is `Copy` and can be shared
/// across threads freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OctDecoder {
    range_max: RangeMax,
    policy: RangePolicy,
}

impl OctDecoder {
    /// Create a decoder with an explicit range and policy.
    #[must_use]
    pub const fn new(range_max: RangeMax, policy: RangePolicy) -> Self {
        Self { range_max, policy }
    }

    /// Create a decoder that rejects out-of-range coordinates.
    #[must_use]
    pub const fn strict(range_max: RangeMax) -> Self {
        Self::new(range_max, RangePolicy::Strict)
    }

    /// Create a decoder that clamps out-of-range coordinates.
    #[must_use]
    pub const fn clamping(range_max: RangeMax) -> Self {
        Self::new(range_max, RangePolicy::Clamp)
    }

    /// Create a decoder for coordinates stored in `bits` bits.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DecodeError::InvalidBitDepth`] unless `bits` is in
    /// `1..=32`.
    pub fn from_bits(bits: u32, policy: RangePolicy) -> DecodeResult<Self> {
        Ok(Self::new(RangeMax::from_bits(bits)?, policy))
    }

    /// The configured quantization range.
    #[must_use]
    pub const fn range_max(&self) -> RangeMax {
        self.range_max
    }

    /// The configured range policy.
    #[must_use]
    pub const fn policy(&self) -> RangePolicy {
        self.policy
    }

    /// Decode one oct-encoded pair according to the configured policy.
    pub fn decode(&self, x: u32, y: u32) -> DecodeResult<DVec3> {
        match self.policy {
            RangePolicy::Strict => decode_unit_vector(x, y, self.range_max),
            RangePolicy::Clamp => {
                if !self.range_max.contains(x) || !self.range_max.contains(y) {
                    tracing::debug!(
                        x,
                        y,
                        range_max = self.range_max.get(),
                        "clamping out-of-range oct coordinates"
                    );
                }
                decode_unit_vector_clamped(x, y, self.range_max)
            }
        }
    }

    /// Decode one oct-encoded pair to single precision.
    pub fn decode_f32(&self, x: u32, y: u32) -> DecodeResult<Vec3> {
        self.decode(x, y).map(|v| v.as_vec3())
    }
}
