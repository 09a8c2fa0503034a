//! 2D computational geometry primitives.
//!
//! Self-contained: nothing else in the crate depends on this module.
//! Coordinate comparisons allow a fixed absolute tolerance for floating
//! point error; see [`TOLERANCE`].

mod line;
mod point;
mod segment;

pub use line::Line;
pub use point::Point;
pub use segment::Segment;

/// Absolute tolerance used by every approximate comparison in this module.
pub const TOLERANCE: f64 = 1e-4;

/// Whether `a` and `b` differ by less than [`TOLERANCE`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Whether `value` is within [`TOLERANCE`] of zero.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    approx_eq(value, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_within_tolerance() {
        assert!(approx_eq(1.0, 1.0));
        assert!(approx_eq(1.0, 1.0 + TOLERANCE / 2.0));
        assert!(!approx_eq(1.0, 1.0 + TOLERANCE * 2.0));
    }

    #[test]
    fn test_approx_zero() {
        assert!(approx_zero(0.0));
        assert!(approx_zero(-TOLERANCE / 10.0));
        assert!(!approx_zero(TOLERANCE));
    }

    #[test]
    fn test_nan_never_approx_equal() {
        assert!(!approx_eq(f64::NAN, f64::NAN));
        assert!(!approx_zero(f64::NAN));
    }
}
