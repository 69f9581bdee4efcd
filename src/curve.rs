//! Polygonal curves.
//!
//! A [`Curve`] is an ordered, immutable sequence of at least one vertex.
//! Edge `i` joins vertex `i` to vertex `i + 1`, so a curve with `n` vertices
//! has `n - 1` edges. A single-point curve has no edges at all.
//!
//! # Example
//!
//! ```
//! use frechet::{Curve, Point2};
//!
//! let curve = Curve::new(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(3.0, 4.0),
//!     Point2::new(3.0, 0.0),
//! ]).unwrap();
//!
//! assert_eq!(curve.num_points(), 3);
//! assert_eq!(curve.num_edges(), 2);
//! assert!((curve.length() - 9.0).abs() < 1e-12);
//! ```

use crate::error::FrechetError;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// An ordered sequence of 2D vertices joined by straight edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> Curve<F> {
    /// Creates a curve from its vertices.
    ///
    /// # Errors
    ///
    /// Returns [`FrechetError::InvalidCurve`] if `points` is empty or any
    /// coordinate is NaN or infinite.
    pub fn new(points: Vec<Point2<F>>) -> Result<Self, FrechetError> {
        if points.is_empty() {
            return Err(FrechetError::InvalidCurve("curve has no points"));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(FrechetError::InvalidCurve(
                "curve has a non-finite coordinate",
            ));
        }
        Ok(Self { points })
    }

    /// Creates a curve from `(x, y)` coordinate pairs.
    pub fn from_coords(coords: &[(F, F)]) -> Result<Self, FrechetError> {
        Self::new(coords.iter().map(|&c| Point2::from(c)).collect())
    }

    /// Number of vertices (always at least 1).
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Number of edges, one fewer than the number of vertices.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the vertices in order.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns vertex `index`.
    pub fn point(&self, index: usize) -> Result<Point2<F>, FrechetError> {
        self.points
            .get(index)
            .copied()
            .ok_or(FrechetError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// Returns edge `index`, from vertex `index` to vertex `index + 1`.
    pub fn edge(&self, index: usize) -> Result<Segment2<F>, FrechetError> {
        if index >= self.num_edges() {
            return Err(FrechetError::IndexOutOfRange {
                index,
                len: self.num_edges(),
            });
        }
        Ok(Segment2::new(self.points[index], self.points[index + 1]))
    }

    /// Iterates over the edges in order.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.points.windows(2).map(|w| Segment2::new(w[0], w[1]))
    }

    /// First vertex.
    #[inline]
    pub fn first(&self) -> Point2<F> {
        self.points[0]
    }

    /// Last vertex.
    #[inline]
    pub fn last(&self) -> Point2<F> {
        self.points[self.points.len() - 1]
    }

    /// Total length, the sum of the edge lengths.
    pub fn length(&self) -> F {
        self.edges().fold(F::zero(), |acc, e| acc + e.length())
    }
}

impl<F: Float> TryFrom<Vec<Point2<F>>> for Curve<F> {
    type Error = FrechetError;

    fn try_from(points: Vec<Point2<F>>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}
