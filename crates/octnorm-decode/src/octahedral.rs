//! Octahedral unprojection of oct-encoded unit vectors.
//!
//! An oct-encoded vector is a pair of quantized coordinates on the unfolded
//! octahedron. Decoding maps both to SNORM scalars, lifts the point onto the
//! octahedron surface (folding it back when it belongs to the lower half),
//! and normalizes the result onto the unit sphere.

use glam::DVec3;

use crate::error::{DecodeError, DecodeResult};
use crate::range::RangeMax;
use crate::snorm::{denormalize_snorm, sign_or_positive};

/// Decode an oct-encoded unit vector, rejecting out-of-range coordinates.
///
/// # Arguments
///
/// * `x` - First oct coordinate, in `[0, range_max]`
/// * `y` - Second oct coordinate, in `[0, range_max]`
/// * `range_max` - Maximum quantized value; the coordinates are stored in
///   `log2(range_max + 1)` bits
///
/// # Errors
///
/// Returns [`DecodeError::RangeViolation`] if either coordinate exceeds
/// `range_max`, or [`DecodeError::DegenerateNormalization`] if the
/// reconstructed vector cannot be normalized.
pub fn decode_unit_vector(x: u32, y: u32, range_max: RangeMax) -> DecodeResult<DVec3> {
    if !range_max.contains(x) || !range_max.contains(y) {
        return Err(DecodeError::RangeViolation {
            x,
            y,
            range_max: range_max.get(),
        });
    }

    decode_unit_vector_clamped(x, y, range_max)
}

/// Decode an oct-encoded unit vector, clamping out-of-range coordinates.
///
/// Coordinates above `range_max` are treated as `range_max`. This tolerates
/// malformed streams at the cost of possibly decoding a direction the
/// encoder never produced.
///
/// # Errors
///
/// Returns [`DecodeError::DegenerateNormalization`] if the reconstructed
/// vector cannot be normalized.
pub fn decode_unit_vector_clamped(x: u32, y: u32, range_max: RangeMax) -> DecodeResult<DVec3> {
    let vx = denormalize_snorm(f64::from(x), range_max);
    let vy = denormalize_snorm(f64::from(y), range_max);

    unproject(vx, vy)
        .try_normalize()
        .ok_or(DecodeError::DegenerateNormalization { x, y })
}

/// Lift a point of the unfolded octahedron onto the octahedron surface.
///
/// The returned vector satisfies `|x| + |y| + |z| == 1` for inputs in
/// `[-1, 1]`, but is not unit length.
fn unproject(vx: f64, vy: f64) -> DVec3 {
    let vz = 1.0 - (vx.abs() + vy.abs());

    if vz < 0.0 {
        // Lower half: mirror across the diagonal of the current quadrant.
        DVec3::new(
            (1.0 - vy.abs()) * sign_or_positive(vx),
            (1.0 - vx.abs()) * sign_or_positive(vy),
            vz,
        )
    } else {
        DVec3::new(vx, vy, vz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn assert_close(actual: DVec3, expected: DVec3) {
        assert!(
            (actual - expected).length() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_all_8_bit_codes_are_unit_length() {
        let range_max = RangeMax::DEFAULT;
        for x in 0..=255 {
            for y in 0..=255 {
                let v = decode_unit_vector(x, y, range_max).unwrap();
                assert!(
                    (v.length() - 1.0).abs() < EPSILON,
                    "({x}, {y}) decoded to {v:?} with length {}",
                    v.length()
                );
            }
        }
    }

    #[test]
    fn test_unproject_lies_on_octahedron() {
        let range_max = RangeMax::DEFAULT;
        for (x, y) in [(0, 0), (10, 240), (128, 128), (255, 3), (200, 60)] {
            let vx = denormalize_snorm(f64::from(x), range_max);
            let vy = denormalize_snorm(f64::from(y), range_max);
            let v = unproject(vx, vy);
            let l1 = v.x.abs() + v.y.abs() + v.z.abs();
            assert!((l1 - 1.0).abs() < EPSILON, "({x}, {y}) gave l1 norm {l1}");
        }
    }

    #[test]
    fn test_origin_corner_folds() {
        // vz = 1 - (1 + 1) = -1 before folding.
        let folded = unproject(-1.0, -1.0);
        assert_eq!(folded.z, -1.0);
        assert_eq!(folded.x, 0.0);
        assert_eq!(folded.y, 0.0);

        let v = decode_unit_vector(0, 0, RangeMax::DEFAULT).unwrap();
        assert_close(v, DVec3::NEG_Z);
    }

    #[test]
    fn test_corners_mirror_to_negative_z() {
        let a = decode_unit_vector(255, 255, RangeMax::DEFAULT).unwrap();
        let b = decode_unit_vector(0, 255, RangeMax::DEFAULT).unwrap();

        assert_close(a, DVec3::NEG_Z);
        assert_close(b, DVec3::NEG_Z);

        // The fold keeps the quadrant's sign on the collapsed axis.
        assert!(a.x.is_sign_positive());
        assert!(b.x.is_sign_negative());
        assert!(a.y.is_sign_positive());
        assert!(b.y.is_sign_positive());
    }

    #[test]
    fn test_axis_directions() {
        // An even range maximum places the center exactly at zero.
        let range_max = RangeMax::new(254).unwrap();

        let cases = [
            ((127, 127), DVec3::Z),
            ((254, 127), DVec3::X),
            ((0, 127), DVec3::NEG_X),
            ((127, 254), DVec3::Y),
            ((127, 0), DVec3::NEG_Y),
            ((0, 0), DVec3::NEG_Z),
        ];

        for ((x, y), expected) in cases {
            assert_close(decode_unit_vector(x, y, range_max).unwrap(), expected);
        }
    }

    #[test]
    fn test_diagonal_upper_half() {
        // (0.5, 0.5) on the unfolded square sits on the upper face with z = 0.
        let range_max = RangeMax::new(4).unwrap();
        let v = decode_unit_vector(3, 3, range_max).unwrap();
        let expected = DVec3::new(1.0, 1.0, 0.0).normalize();
        assert_close(v, expected);
    }

    #[test]
    fn test_lower_half_quadrant() {
        // (0.75, -0.75) folds to (0.25, -0.25, -0.5).
        let range_max = RangeMax::new(8).unwrap();
        let v = decode_unit_vector(7, 1, range_max).unwrap();
        let expected = DVec3::new(0.25, -0.25, -0.5).normalize();
        assert_close(v, expected);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let result = decode_unit_vector(300, 0, RangeMax::DEFAULT);
        assert!(matches!(
            result,
            Err(DecodeError::RangeViolation {
                x: 300,
                y: 0,
                range_max: 255
            })
        ));

        let result = decode_unit_vector(0, 256, RangeMax::DEFAULT);
        assert!(matches!(result, Err(DecodeError::RangeViolation { .. })));
    }

    #[test]
    fn test_out_of_range_clamps() {
        let clamped = decode_unit_vector_clamped(300, 0, RangeMax::DEFAULT).unwrap();
        let edge = decode_unit_vector(255, 0, RangeMax::DEFAULT).unwrap();
        assert_eq!(clamped, edge);
        assert!((clamped.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_clamped_matches_strict_in_range() {
        let range_max = RangeMax::from_bits(10).unwrap();
        for (x, y) in [(0, 1023), (511, 512), (1000, 17)] {
            assert_eq!(
                decode_unit_vector(x, y, range_max).unwrap(),
                decode_unit_vector_clamped(x, y, range_max).unwrap()
            );
        }
    }

    #[test]
    fn test_full_32_bit_range() {
        let range_max = RangeMax::from_bits(32).unwrap();
        let v = decode_unit_vector(u32::MAX, u32::MAX / 2, range_max).unwrap();
        assert!((v.length() - 1.0).abs() < EPSILON);
    }
}
