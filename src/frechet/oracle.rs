//! Reference distances for tests.
//!
//! The discrete Fréchet distance of two densely resampled curves bounds the
//! continuous distance from above and converges to it as the sampling gets
//! finer.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Discrete Fréchet distance over vertices only, O(nm) dynamic programming.
pub(crate) fn discrete_frechet_distance<F: Float>(p: &[Point2<F>], q: &[Point2<F>]) -> F {
    let m = q.len();
    let mut prev = vec![F::zero(); m];
    let mut curr = vec![F::zero(); m];

    prev[0] = p[0].distance(q[0]);
    for j in 1..m {
        prev[j] = prev[j - 1].max(p[0].distance(q[j]));
    }

    for &pi in &p[1..] {
        curr[0] = prev[0].max(pi.distance(q[0]));
        for j in 1..m {
            let reach = prev[j].min(curr[j - 1]).min(prev[j - 1]);
            curr[j] = reach.max(pi.distance(q[j]));
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m - 1]
}

/// Inserts `samples_per_segment - 1` evenly spaced points into every edge.
pub(crate) fn resample<F: Float>(polyline: &[Point2<F>], samples_per_segment: usize) -> Vec<Point2<F>> {
    let samples = samples_per_segment.max(1);
    let mut out = Vec::with_capacity(polyline.len().saturating_sub(1) * samples + 1);
    for w in polyline.windows(2) {
        let seg = Segment2::new(w[0], w[1]);
        for k in 0..samples {
            let t = F::from(k).unwrap() / F::from(samples).unwrap();
            out.push(seg.point_at(t));
        }
    }
    out.push(*polyline.last().unwrap());
    out
}

/// Discrete Fréchet distance of the resampled curves.
pub(crate) fn sampled_frechet_distance<F: Float>(
    p: &[Point2<F>],
    q: &[Point2<F>],
    samples_per_segment: usize,
) -> F {
    discrete_frechet_distance(
        &resample(p, samples_per_segment),
        &resample(q, samples_per_segment),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discrete_parallel() {
        let p = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)];
        let q = vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0), Point2::new(2.0, 1.0)];
        assert_relative_eq!(discrete_frechet_distance(&p, &q), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_resample() {
        let line = vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)];
        let sampled = resample(&line, 4);
        let xs: Vec<f64> = sampled.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_sampling_tightens_bound() {
        // Vertex-only matching overestimates; sampling recovers the true 1.0.
        let p = vec![Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)];
        let q = vec![Point2::new(0.0, 0.0), Point2::new(2.0, 1.0), Point2::new(4.0, 0.0)];
        let coarse = discrete_frechet_distance(&p, &q);
        let fine = sampled_frechet_distance(&p, &q, 64);
        assert!(coarse > 2.0);
        assert_relative_eq!(fine, 1.0, epsilon = 1e-9);
    }
}
