//! Angle helpers for the rotation constructors. Angles cross the public
//! surface in degrees and are converted here before any trigonometry.

pub const TWO_PI: f32 = 2.0 * std::f32::consts::PI;

const DEG_TO_RAD: f32 = 0.017453293;
const RAD_TO_DEG: f32 = 57.295779579;

#[cfg(test)]
mod test_angle {
    use super::{clamp_radians, clamp_value, degrees_to_radians, radians_to_degrees, TWO_PI};

    const EPS: f32 = 1e-4;

    #[test]
    fn conversion_round_trip() {
        let rad = degrees_to_radians(90.0);
        assert!((rad - std::f32::consts::FRAC_PI_2).abs() < EPS);
        assert!((radians_to_degrees(rad) - 90.0).abs() < EPS);
    }

    #[test]
    fn clamp_positive() {
        let clamped = clamp_radians(3.0 * TWO_PI + 1.0);
        assert!((clamped - 1.0).abs() < EPS);
    }

    #[test]
    fn clamp_negative() {
        let clamped = clamp_radians(-1.0);
        assert!(clamped >= 0.0 && (clamped - (TWO_PI - 1.0)).abs() < EPS);
    }

    #[test]
    fn clamp_value_wraps() {
        assert!((clamp_value(370.0, 360.0) - 10.0).abs() < EPS);
        assert!((clamp_value(359.0, 360.0) - 359.0).abs() < EPS);
    }
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Wraps an angle into the [0, 2π] range.
#[inline]
pub fn clamp_radians(mut radians: f32) -> f32 {
    if radians >= 0.0 {
        while radians > TWO_PI {
            radians -= TWO_PI;
        }
    } else {
        while radians < 0.0 {
            radians += TWO_PI;
        }
    }
    radians
}

#[inline]
pub fn clamp_value(mut value: f32, max_value: f32) -> f32 {
    while value >= max_value {
        value -= max_value;
    }
    value
}
