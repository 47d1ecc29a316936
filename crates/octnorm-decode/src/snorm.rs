//! SNORM scalar helpers.

use crate::range::RangeMax;

/// Convert a quantized value in `[0, range_max]` to a scalar in `[-1.0, 1.0]`.
///
/// Values outside the range are clamped first, so malformed input degrades
/// to the nearest endpoint instead of escaping `[-1.0, 1.0]`. NaN propagates.
#[must_use]
pub fn denormalize_snorm(value: f64, range_max: RangeMax) -> f64 {
    let max = range_max.as_f64();
    (value.clamp(0.0, max) / max) * 2.0 - 1.0
}

/// Returns `-1.0` for negative values and `1.0` otherwise.
///
/// Unlike [`f64::signum`], both `0.0` and `-0.0` give `1.0`, so an axis that
/// lands exactly on zero still picks a mirroring direction.
#[must_use]
pub fn sign_or_positive(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
