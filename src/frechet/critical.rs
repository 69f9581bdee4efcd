//! Critical values of the Fréchet decision problem.
//!
//! Feasibility of the decision problem can only change at a finite set of
//! tolerances, the ε at which some free-space interval appears, degenerates,
//! or lines up with another one:
//!
//! - **Type A**: distances between the first vertices and between the last
//!   vertices of the two curves.
//! - **Type B**: for each vertex of one curve and each edge of the other, the
//!   distance from the vertex to the closest point of the edge. A curve with
//!   a single vertex acts as one zero-length edge.
//! - **Type C**: for two vertices of one curve and an edge of the other, the
//!   distance from either vertex to the point where their perpendicular
//!   bisector crosses the edge.
//!
//! The Fréchet distance is the smallest of these values at which the decision
//! problem is feasible.
//!
//! # Example
//!
//! ```
//! use frechet::frechet::CriticalValues;
//! use frechet::Curve;
//!
//! let p = Curve::from_coords(&[(0.0_f64, 0.0), (3.0, 3.0)]).unwrap();
//! let q = Curve::from_coords(&[(1.0_f64, 0.0), (3.0, 2.0)]).unwrap();
//!
//! let critical = CriticalValues::new(&p, &q, 1e-6);
//! assert_eq!(critical.type_a(), &[1.0, 1.0]);
//! assert!(critical.values().windows(2).all(|w| w[0] < w[1]));
//! ```

use crate::curve::Curve;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::cmp::Ordering;

/// The critical values of a pair of curves, by type and merged.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalValues<F> {
    type_a: Vec<F>,
    type_b: Vec<F>,
    type_c: Vec<F>,
    values: Vec<F>,
}

impl<F: Float> CriticalValues<F> {
    /// Enumerates the critical values of `p` and `q`.
    ///
    /// `bisector_tolerance` decides when an edge endpoint counts as lying on
    /// a bisector (Type C).
    ///
    /// # Complexity
    ///
    /// O(p²q + pq²) time, dominated by Type C.
    pub fn new(p: &Curve<F>, q: &Curve<F>, bisector_tolerance: F) -> Self {
        let type_a = vec![p.first().distance(q.first()), p.last().distance(q.last())];

        let mut type_b = Vec::with_capacity(p.num_points() * q.num_edges() * 2);
        vertex_edge_distances(p, q, &mut type_b);
        vertex_edge_distances(q, p, &mut type_b);

        let mut type_c = Vec::new();
        bisector_distances(p, q, bisector_tolerance, &mut type_c);
        bisector_distances(q, p, bisector_tolerance, &mut type_c);

        let mut values: Vec<F> = type_a
            .iter()
            .chain(&type_b)
            .chain(&type_c)
            .copied()
            .collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        values.dedup();

        tracing::debug!(
            type_a = type_a.len(),
            type_b = type_b.len(),
            type_c = type_c.len(),
            distinct = values.len(),
            "enumerated critical values"
        );

        Self {
            type_a,
            type_b,
            type_c,
            values,
        }
    }

    /// Start-to-start and end-to-end distances.
    #[inline]
    pub fn type_a(&self) -> &[F] {
        &self.type_a
    }

    /// Vertex-to-edge distances, P's vertices first. A single-point curve
    /// contributes its distance to every vertex of the other curve.
    #[inline]
    pub fn type_b(&self) -> &[F] {
        &self.type_b
    }

    /// Bisector crossing distances, P's vertex pairs first.
    #[inline]
    pub fn type_c(&self) -> &[F] {
        &self.type_c
    }

    /// All values, ascending, without exact duplicates.
    #[inline]
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Number of distinct values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn vertex_edge_distances<F: Float>(vertices: &Curve<F>, edges: &Curve<F>, out: &mut Vec<F>) {
    // A single-point curve counts as one zero-length edge.
    if edges.num_edges() == 0 {
        let only = edges.first();
        out.extend(vertices.points().iter().map(|v| v.distance(only)));
        return;
    }
    for &v in vertices.points() {
        out.extend(edges.edges().map(|e| e.distance_to_point(v)));
    }
}

fn bisector_distances<F: Float>(
    vertices: &Curve<F>,
    edges: &Curve<F>,
    tolerance: F,
    out: &mut Vec<F>,
) {
    let points = vertices.points();
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            for edge in edges.edges() {
                if let Some(crossing) = bisector_crossing(a, b, edge, tolerance) {
                    out.push(a.distance(crossing));
                }
            }
        }
    }
}

/// Finds where the perpendicular bisector of `a` and `b` crosses `edge`.
///
/// The edge endpoints are projected onto the line from `a` to `b`; the
/// bisector sits at parameter 0.5. An endpoint projecting within `tolerance`
/// of 0.5 is returned as is (the one nearer `a` if both do). Returns `None`
/// when `a == b` or the edge lies entirely on one side of the bisector.
pub fn bisector_crossing<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    edge: Segment2<F>,
    tolerance: F,
) -> Option<Point2<F>> {
    let axis = Segment2::new(a, b);
    let s = axis.project(edge.start)?;
    let e = axis.project(edge.end)?;
    let half = (F::one() + F::one()).recip();

    let below = half - tolerance;
    let above = half + tolerance;
    if (s < below && e < below) || (s > above && e > above) {
        return None;
    }

    let start_on = s >= below && s <= above;
    let end_on = e >= below && e <= above;
    match (start_on, end_on) {
        (true, false) => Some(edge.start),
        (false, true) => Some(edge.end),
        (true, true) => {
            if a.distance_squared(edge.start) < a.distance_squared(edge.end) {
                Some(edge.start)
            } else {
                Some(edge.end)
            }
        }
        (false, false) => {
            // Endpoints on opposite sides; split the edge (0.5 - s) : (e - 0.5).
            let before = half - s;
            let after = e - half;
            Some(edge.point_at(before / (before + after)))
        }
    }
}
