//! Free-space diagrams.
//!
//! For two curves P (p vertices) and Q (q vertices) and a tolerance ε, the
//! free space is the set of parameter pairs whose points are within ε of each
//! other. Inside one grid cell it is convex, so reachability only needs its
//! trace on the cell boundaries:
//!
//! - **Left boundaries** `L(i, j)`: vertex `j` of Q against edge `i` of P, a
//!   vertical segment at grid x = j spanning y ∈ [i, i + 1].
//! - **Bottom boundaries** `B(i, j)`: vertex `j` of P against edge `i` of Q, a
//!   horizontal segment at grid y = j spanning x ∈ [i, i + 1].
//!
//! Each boundary is stored as an edge-local [`FreeInterval`], or `None` when
//! the ε-ball around the vertex misses the edge.
//!
//! # Example
//!
//! ```
//! use frechet::frechet::free_interval;
//! use frechet::{Point2, Segment2};
//!
//! let edge = Segment2::new(Point2::new(0.0_f64, 0.0), Point2::new(4.0, 0.0));
//!
//! // Ball of radius 1 around (2, 0) covers x in [1, 3]
//! let interval = free_interval(edge, Point2::new(2.0, 0.0), 1.0, 1e-12).unwrap();
//! assert!((interval.start - 0.25).abs() < 1e-12);
//! assert!((interval.end - 0.75).abs() < 1e-12);
//!
//! // Too far away
//! assert!(free_interval(edge, Point2::new(2.0, 3.0), 1.0, 1e-12).is_none());
//! ```

use crate::curve::Curve;
use crate::error::FrechetError;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// The free part `[start, end]` of an edge, in edge parameters.
///
/// Always satisfies `0 <= start <= end <= 1`. A degenerate interval
/// (`start == end`) is a single contact point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeInterval<F> {
    pub start: F,
    pub end: F,
}

impl<F: Float> FreeInterval<F> {
    /// Creates an interval. The caller guarantees `start <= end`.
    #[inline]
    pub fn new(start: F, end: F) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// The whole edge, [0, 1].
    #[inline]
    pub fn full() -> Self {
        Self::new(F::zero(), F::one())
    }

    /// A single contact point at parameter `t`.
    #[inline]
    pub fn point(t: F) -> Self {
        Self::new(t, t)
    }

    /// Returns `true` for a single contact point.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `t` lies in the interval, allowing `tolerance` slack.
    #[inline]
    pub fn contains(self, t: F, tolerance: F) -> bool {
        t >= self.start - tolerance && t <= self.end + tolerance
    }

    /// Returns `true` if the interval contains the start of its edge.
    #[inline]
    pub(crate) fn starts_at_zero(self, tolerance: F) -> bool {
        self.start <= tolerance
    }

    /// Returns `true` if the interval contains the end of its edge.
    #[inline]
    pub(crate) fn reaches_one(self, tolerance: F) -> bool {
        self.end >= F::one() - tolerance
    }

    /// Keeps the part at or above `lower`.
    ///
    /// Returns `None` when `lower` lies past the end of the interval by more
    /// than `tolerance`.
    pub(crate) fn clip_below(self, lower: F, tolerance: F) -> Option<Self> {
        if lower > self.end + tolerance {
            return None;
        }
        let start = self.start.max(lower).min(self.end);
        Some(Self::new(start, self.end))
    }
}

/// `d² <= ε² (1 + tolerance)`, scale free.
#[inline]
fn within<F: Float>(distance_squared: F, epsilon: F, tolerance: F) -> bool {
    epsilon >= F::zero() && distance_squared <= epsilon * epsilon * (F::one() + tolerance)
}

#[inline]
fn clamp_unit<F: Float>(t: F) -> F {
    t.max(F::zero()).min(F::one())
}

/// Computes the part of `edge` within `epsilon` of `vertex`.
///
/// Endpoint membership is decided by comparing the vertex-endpoint distances
/// directly, so an interval that contains an edge endpoint reports exactly 0
/// or 1 there. A zero-length edge is either entirely free or not at all.
/// Negative or NaN `epsilon` never produces a free interval.
///
/// # Arguments
///
/// * `edge` - The edge being intersected
/// * `vertex` - Center of the ε-ball
/// * `epsilon` - Ball radius
/// * `tolerance` - Relative slack on squared distances (`d² <= ε² (1 + tolerance)`)
pub fn free_interval<F: Float>(
    edge: Segment2<F>,
    vertex: Point2<F>,
    epsilon: F,
    tolerance: F,
) -> Option<FreeInterval<F>> {
    let start_in = within(vertex.distance_squared(edge.start), epsilon, tolerance);

    let t = match edge.project(vertex) {
        Some(t) => t,
        None => return start_in.then(FreeInterval::full),
    };

    let end_in = within(vertex.distance_squared(edge.end), epsilon, tolerance);
    if start_in && end_in {
        // The ball is convex, so it holds the whole edge.
        return Some(FreeInterval::full());
    }

    let d_sq = vertex.distance_squared(edge.point_at(t));
    let slack = (epsilon * epsilon - d_sq).max(F::zero());
    let half_width = slack.sqrt() / edge.length();

    match (start_in, end_in) {
        (true, false) => Some(FreeInterval::new(F::zero(), clamp_unit(t + half_width))),
        (false, true) => Some(FreeInterval::new(clamp_unit(t - half_width), F::one())),
        _ => {
            // Neither endpoint is free: the ball can only meet the edge
            // around an interior foot point.
            if !within(d_sq, epsilon, tolerance) || t < F::zero() || t > F::one() {
                return None;
            }
            if half_width == F::zero() {
                return Some(FreeInterval::point(t));
            }
            let start = clamp_unit(t - half_width);
            let end = clamp_unit(t + half_width).max(start);
            Some(FreeInterval::new(start, end))
        }
    }
}

/// Free-space boundaries of two curves at a fixed ε.
///
/// Built in one pass and never modified afterwards; a new ε needs a new
/// diagram.
#[derive(Debug, Clone)]
pub struct FreeSpaceDiagram<F> {
    epsilon: F,
    p_len: usize,
    q_len: usize,
    left: Vec<Option<FreeInterval<F>>>,
    bottom: Vec<Option<FreeInterval<F>>>,
    start_free: bool,
    end_free: bool,
}

impl<F: Float> FreeSpaceDiagram<F> {
    /// Builds the diagram of `p` and `q` at `epsilon`.
    ///
    /// `tolerance` is the relative slack on squared distances, as in
    /// [`free_interval`].
    ///
    /// # Complexity
    ///
    /// O(pq) time and space.
    pub fn new(p: &Curve<F>, q: &Curve<F>, epsilon: F, tolerance: F) -> Self {
        let p_len = p.num_points();
        let q_len = q.num_points();

        let mut left = Vec::with_capacity(p.num_edges() * q_len);
        for edge in p.edges() {
            for &vertex in q.points() {
                left.push(free_interval(edge, vertex, epsilon, tolerance));
            }
        }

        let mut bottom = Vec::with_capacity(q.num_edges() * p_len);
        for edge in q.edges() {
            for &vertex in p.points() {
                bottom.push(free_interval(edge, vertex, epsilon, tolerance));
            }
        }

        let start_free = within(p.first().distance_squared(q.first()), epsilon, tolerance);
        let end_free = within(p.last().distance_squared(q.last()), epsilon, tolerance);

        tracing::trace!(
            epsilon = epsilon.to_f64(),
            p_len,
            q_len,
            free_left = left.iter().filter(|c| c.is_some()).count(),
            free_bottom = bottom.iter().filter(|c| c.is_some()).count(),
            start_free,
            end_free,
            "built free-space diagram"
        );

        Self {
            epsilon,
            p_len,
            q_len,
            left,
            bottom,
            start_free,
            end_free,
        }
    }

    /// The ε this diagram was built for.
    #[inline]
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// Number of vertices of P (grid rows run over P).
    #[inline]
    pub fn p_len(&self) -> usize {
        self.p_len
    }

    /// Number of vertices of Q (grid columns run over Q).
    #[inline]
    pub fn q_len(&self) -> usize {
        self.q_len
    }

    /// Returns `true` if the first vertices of P and Q are within ε.
    #[inline]
    pub fn start_free(&self) -> bool {
        self.start_free
    }

    /// Returns `true` if the last vertices of P and Q are within ε.
    #[inline]
    pub fn end_free(&self) -> bool {
        self.end_free
    }

    /// The left boundary `L(edge_p, vertex_q)`: vertex `vertex_q` of Q
    /// against edge `edge_p` of P.
    pub fn left(
        &self,
        edge_p: usize,
        vertex_q: usize,
    ) -> Result<Option<FreeInterval<F>>, FrechetError> {
        check_index(edge_p, self.p_len - 1)?;
        check_index(vertex_q, self.q_len)?;
        Ok(self.left_at(edge_p, vertex_q))
    }

    /// The bottom boundary `B(edge_q, vertex_p)`: vertex `vertex_p` of P
    /// against edge `edge_q` of Q.
    pub fn bottom(
        &self,
        edge_q: usize,
        vertex_p: usize,
    ) -> Result<Option<FreeInterval<F>>, FrechetError> {
        check_index(edge_q, self.q_len - 1)?;
        check_index(vertex_p, self.p_len)?;
        Ok(self.bottom_at(edge_q, vertex_p))
    }

    /// All left boundaries, row-major by edge of P (`edge_p * q + vertex_q`).
    #[inline]
    pub fn left_cells(&self) -> &[Option<FreeInterval<F>>] {
        &self.left
    }

    /// All bottom boundaries, row-major by edge of Q (`edge_q * p + vertex_p`).
    #[inline]
    pub fn bottom_cells(&self) -> &[Option<FreeInterval<F>>] {
        &self.bottom
    }

    #[inline]
    pub(crate) fn left_at(&self, edge_p: usize, vertex_q: usize) -> Option<FreeInterval<F>> {
        self.left[edge_p * self.q_len + vertex_q]
    }

    #[inline]
    pub(crate) fn bottom_at(&self, edge_q: usize, vertex_p: usize) -> Option<FreeInterval<F>> {
        self.bottom[edge_q * self.p_len + vertex_p]
    }
}

#[inline]
fn check_index(index: usize, len: usize) -> Result<(), FrechetError> {
    if index < len {
        Ok(())
    } else {
        Err(FrechetError::IndexOutOfRange { index, len })
    }
}
