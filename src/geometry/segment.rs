//! Line segments between two endpoints.

use super::{Line, Point};

/// A segment bounded by two endpoints. The endpoint order carries no
/// meaning; [`Segment::approx_eq`] treats reversed segments as equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// One endpoint.
    pub p0: Point,
    /// The other endpoint.
    pub p1: Point,
}

impl Segment {
    /// Create a segment from two endpoints.
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    /// Create a segment from raw endpoint coordinates.
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        self.p0.distance(&self.p1)
    }

    /// Extend the segment into an infinite [`Line`].
    ///
    /// A vertical segment produces a non-finite slope; its `y_intercept`
    /// carries the shared y coordinate of the endpoints, which keeps
    /// [`Line::approx_eq`] usable for vertical lines.
    pub fn to_line(&self) -> Line {
        let x_difference = self.p0.x - self.p1.x;
        let slope = (self.p0.y - self.p1.y) / x_difference;
        let y_intercept = if x_difference == 0.0 {
            self.p0.y
        } else {
            self.p0.y - self.p0.x * slope
        };
        Line::new(slope, y_intercept)
    }

    // Whether `point` falls inside the segment's bounding box. Does not
    // check that the point lies on the carrying line.
    fn bound_contains(&self, point: &Point) -> bool {
        let (lower_x, upper_x) = if self.p0.x < self.p1.x {
            (self.p0.x, self.p1.x)
        } else {
            (self.p1.x, self.p0.x)
        };
        let (lower_y, upper_y) = if self.p0.y < self.p1.y {
            (self.p0.y, self.p1.y)
        } else {
            (self.p1.y, self.p0.y)
        };
        point.x >= lower_x && point.x <= upper_x && point.y >= lower_y && point.y <= upper_y
    }

    /// The point where two segments cross: the carrying lines' intersection,
    /// clipped to both segments' bounds. `None` if the lines are parallel or
    /// the crossing falls outside either segment.
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        let point = self.to_line().intersection(&other.to_line())?;
        if self.bound_contains(&point) && other.bound_contains(&point) {
            Some(point)
        } else {
            None
        }
    }

    /// Whether two segments cross.
    pub fn intersects(&self, other: &Segment) -> bool {
        self.intersection(other).is_some()
    }

    /// Whether `point` lies on the segment, within tolerance.
    pub fn contains_point(&self, point: &Point) -> bool {
        self.bound_contains(point) && self.to_line().contains_point(point)
    }

    /// Endpoint equality within tolerance, ignoring endpoint order.
    pub fn approx_eq(&self, other: &Segment) -> bool {
        (self.p0.approx_eq(&other.p0) && self.p1.approx_eq(&other.p1))
            || (self.p0.approx_eq(&other.p1) && self.p1.approx_eq(&other.p0))
    }
}
