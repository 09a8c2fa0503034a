//! Infinite lines in slope-intercept form.

use super::{approx_eq, approx_zero, Point};

/// An infinite line `y = slope * x + y_intercept`.
///
/// Vertical lines cannot be expressed in slope-intercept form; converting a
/// vertical segment yields a non-finite slope (see
/// [`Segment::to_line`](super::Segment::to_line)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Slope of the line.
    pub slope: f64,
    /// Where the line crosses the y axis.
    pub y_intercept: f64,
}

impl Line {
    /// Create a line from its slope and y-intercept.
    pub fn new(slope: f64, y_intercept: f64) -> Self {
        Self { slope, y_intercept }
    }

    /// The point where two lines cross.
    ///
    /// Returns `None` when the slopes are equal: parallel lines never cross
    /// and coincident lines have no single crossing point.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let slope_difference = self.slope - other.slope;
        if slope_difference == 0.0 {
            return None;
        }
        let x = (other.y_intercept - self.y_intercept) / slope_difference;
        let y = x * self.slope + self.y_intercept;
        let point = Point::new(x, y);
        if x.is_nan() || y.is_nan() {
            // non-finite slopes (vertical degenerate lines) have no
            // representable crossing
            return None;
        }
        Some(point)
    }

    /// Whether `point` lies on the line, within tolerance.
    pub fn contains_point(&self, point: &Point) -> bool {
        approx_zero(point.y - (self.slope * point.x + self.y_intercept))
    }

    /// Equality within tolerance. Two NaN slopes (vertical lines) count as
    /// equal slopes.
    pub fn approx_eq(&self, other: &Line) -> bool {
        let slopes_match = approx_eq(self.slope, other.slope)
            || (self.slope.is_nan() && other.slope.is_nan());
        slopes_match && approx_eq(self.y_intercept, other.y_intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_of_crossing_lines() {
        // y = x and y = -x + 2 cross at (1, 1)
        let a = Line::new(1.0, 0.0);
        let b = Line::new(-1.0, 2.0);
        let point = a.intersection(&b).unwrap();
        assert!(point.approx_eq(&Point::new(1.0, 1.0)));
        // intersection is symmetric
        assert!(b.intersection(&a).unwrap().approx_eq(&point));
    }

    #[test]
    fn test_parallel_lines_do_not_intersect() {
        let a = Line::new(2.0, 0.0);
        let b = Line::new(2.0, 5.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_coincident_lines_have_no_single_intersection() {
        let a = Line::new(1.5, -3.0);
        assert_eq!(a.intersection(&a), None);
    }

    #[test]
    fn test_contains_point() {
        let line = Line::new(2.0, 1.0);
        assert!(line.contains_point(&Point::new(0.0, 1.0)));
        assert!(line.contains_point(&Point::new(2.0, 5.0)));
        assert!(!line.contains_point(&Point::new(2.0, 6.0)));
    }

    #[test]
    fn test_approx_eq_with_vertical_slopes() {
        let v0 = Line::new(f64::NAN, 3.0);
        let v1 = Line::new(f64::NAN, 3.0);
        assert!(v0.approx_eq(&v1));
        assert!(!v0.approx_eq(&Line::new(f64::NAN, 4.0)));
        assert!(!v0.approx_eq(&Line::new(1.0, 3.0)));

        let a = Line::new(1.0, 2.0);
        assert!(a.approx_eq(&Line::new(1.0, 2.0)));
    }
}
