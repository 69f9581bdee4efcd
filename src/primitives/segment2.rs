//! 2D line segment type, used for curve edges.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    /// - Values outside [0, 1] extrapolate beyond the segment
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Projects `p` orthogonally onto the infinite line through the segment.
    ///
    /// Returns the unclamped line parameter, or `None` for a degenerate segment.
    #[inline]
    pub fn project(self, p: Point2<F>) -> Option<F> {
        let len_sq = self.length_squared();
        if len_sq == F::zero() {
            return None;
        }
        Some((p - self.start).dot(self.direction()) / len_sq)
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// Returns a tuple of (closest_point, parameter_t) where t is in [0, 1].
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        match self.project(p) {
            Some(t) => {
                let t_clamped = t.max(F::zero()).min(F::one());
                (self.point_at(t_clamped), t_clamped)
            }
            None => (self.start, F::zero()),
        }
    }

    /// Computes the distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance(closest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment2<f64> {
        Segment2::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn test_length() {
        let s = seg(0.0, 0.0, 3.0, 4.0);
        assert_eq!(s.length_squared(), 25.0);
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_project_unclamped() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(s.project(Point2::new(5.0, 3.0)).unwrap(), 0.5);
        assert_relative_eq!(s.project(Point2::new(-5.0, 1.0)).unwrap(), -0.5);
        assert_relative_eq!(s.project(Point2::new(20.0, -1.0)).unwrap(), 2.0);
    }

    #[test]
    fn test_closest_point_clamps() {
        let s = seg(0.0, 0.0, 10.0, 0.0);

        let (c, t) = s.closest_point(Point2::new(5.0, 5.0));
        assert_relative_eq!(c.x, 5.0, epsilon = 1e-10);
        assert_relative_eq!(t, 0.5, epsilon = 1e-10);

        let (c, t) = s.closest_point(Point2::new(-5.0, 0.0));
        assert_eq!(c, Point2::new(0.0, 0.0));
        assert_eq!(t, 0.0);

        let (c, t) = s.closest_point(Point2::new(15.0, 0.0));
        assert_eq!(c, Point2::new(10.0, 0.0));
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_distance_to_point() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(s.distance_to_point(Point2::new(5.0, 3.0)), 3.0);
        assert_relative_eq!(s.distance_to_point(Point2::new(13.0, 4.0)), 5.0);
    }

    #[test]
    fn test_degenerate() {
        let s = seg(5.0, 5.0, 5.0, 5.0);
        assert!(s.project(Point2::new(0.0, 0.0)).is_none());
        let (closest, t) = s.closest_point(Point2::new(0.0, 0.0));
        assert_eq!(closest, Point2::new(5.0, 5.0));
        assert_eq!(t, 0.0);
        assert_relative_eq!(s.distance_to_point(Point2::new(8.0, 9.0)), 5.0);
    }
}
