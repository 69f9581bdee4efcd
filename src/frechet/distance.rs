//! Fréchet distance by binary search over critical values.

use super::critical::CriticalValues;
use super::decision::decide;
use super::options::FrechetOptions;
use crate::curve::Curve;
use num_traits::Float;

/// Computes the continuous Fréchet distance between two curves.
///
/// Returns `None` only if no critical value is feasible, which does not
/// happen for valid curves.
///
/// # Example
///
/// ```
/// use frechet::{frechet_distance, Curve};
///
/// let p = Curve::from_coords(&[(0.0_f64, 0.0), (3.0, 3.0)]).unwrap();
/// let q = Curve::from_coords(&[(1.0_f64, 0.0), (3.0, 2.0)]).unwrap();
///
/// let d = frechet_distance(&p, &q).unwrap();
/// assert!((d - 1.0).abs() < 1e-12);
/// ```
pub fn frechet_distance<F: Float>(p: &Curve<F>, q: &Curve<F>) -> Option<F> {
    FrechetDistance::new(p, q).compute()
}

/// Computes the continuous Fréchet distance with explicit options.
pub fn frechet_distance_with<F: Float>(
    p: &Curve<F>,
    q: &Curve<F>,
    options: &FrechetOptions<F>,
) -> Option<F> {
    FrechetDistance::with_options(p, q, *options).compute()
}

/// Binary-search driver over the critical values of two curves.
///
/// The critical values are enumerated once on construction; every probe of
/// [`compute`](Self::compute) decides a fresh free-space diagram.
#[derive(Debug, Clone)]
pub struct FrechetDistance<'a, F> {
    p: &'a Curve<F>,
    q: &'a Curve<F>,
    options: FrechetOptions<F>,
    critical: CriticalValues<F>,
}

impl<'a, F: Float> FrechetDistance<'a, F> {
    /// Prepares the search with default options.
    pub fn new(p: &'a Curve<F>, q: &'a Curve<F>) -> Self {
        Self::with_options(p, q, FrechetOptions::default())
    }

    /// Prepares the search with the given options.
    pub fn with_options(p: &'a Curve<F>, q: &'a Curve<F>, options: FrechetOptions<F>) -> Self {
        let critical = CriticalValues::new(p, q, options.bisector_tolerance);
        Self {
            p,
            q,
            options,
            critical,
        }
    }

    /// The candidate values searched.
    #[inline]
    pub fn critical_values(&self) -> &CriticalValues<F> {
        &self.critical
    }

    /// Returns the smallest critical value at which the curves are within
    /// Fréchet distance, or `None` if none is.
    ///
    /// # Complexity
    ///
    /// O(log K) decisions of O(pq) each, for K critical values.
    pub fn compute(&self) -> Option<F> {
        let values = self.critical.values();
        let &largest = values.last()?;

        let mut best = None;
        let mut lo = 0;
        let mut hi = values.len();
        let mut probes = 0usize;

        // Invariant: everything below `lo` is infeasible, everything at or
        // above `hi` is feasible.
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let epsilon = values[mid];
            let feasible = decide(self.p, self.q, epsilon, &self.options);
            probes += 1;
            tracing::debug!(
                probe = probes,
                index = mid,
                epsilon = epsilon.to_f64(),
                feasible,
                "probed critical value"
            );

            if feasible {
                best = Some(epsilon);
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }

        match best {
            Some(distance) => {
                tracing::debug!(
                    distance = distance.to_f64(),
                    probes,
                    candidates = values.len(),
                    "frechet distance found"
                );
            }
            None => {
                tracing::error!(
                    largest = largest.to_f64(),
                    candidates = values.len(),
                    "largest critical value is infeasible"
                );
            }
        }
        best
    }
}
