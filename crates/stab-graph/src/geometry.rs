use serde::{Deserialize, Serialize};

/// Vertex position in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Strict counter-clockwise test for the turn `a -> b -> c`.
///
/// Collinear triples are reported as not counter-clockwise.
pub fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// True when segment `ab` properly crosses segment `cd`.
///
/// Exactly collinear overlapping segments are not reported.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonals_of_a_square_cross() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 1.0);
        let c = Point::new(0.0, 1.0);
        let d = Point::new(1.0, 0.0);
        assert!(segments_intersect(a, b, c, d));
        assert!(!segments_intersect(a, c, b, d));
    }

    #[test]
    fn collinear_overlap_is_not_reported() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 0.0);
        let c = Point::new(1.0, 0.0);
        let d = Point::new(3.0, 0.0);
        assert!(!segments_intersect(a, b, c, d));
    }
}
