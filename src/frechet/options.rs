//! Tuning knobs for the decision procedure and distance search.

use num_traits::Float;

/// Algorithm used to decide reachability in a free-space diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReachabilityStrategy {
    /// Row-by-row propagation of reachable intervals, O(pq).
    #[default]
    Propagation,
    /// Worklist search over boundary cells with a visited table.
    Search,
}

/// Options for Fréchet decision and distance computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrechetOptions<F> {
    /// Relative slack for distance comparisons: a point is within ε when
    /// `d² <= ε² * (1 + distance_tolerance)`. Independent of coordinate scale.
    pub distance_tolerance: F,
    /// Absolute slack for comparisons between edge parameters in [0, 1].
    pub parameter_tolerance: F,
    /// Slack for deciding that an edge endpoint projects onto a bisector.
    pub bisector_tolerance: F,
    /// Reachability algorithm.
    pub strategy: ReachabilityStrategy,
}

impl<F: Float> Default for FrechetOptions<F> {
    fn default() -> Self {
        Self {
            distance_tolerance: F::epsilon() * F::from(64).unwrap_or_else(F::one),
            parameter_tolerance: F::epsilon().sqrt(),
            bisector_tolerance: F::from(1e-6).unwrap_or_else(F::epsilon),
            strategy: ReachabilityStrategy::Propagation,
        }
    }
}

impl<F: Float> FrechetOptions<F> {
    /// Sets the relative distance tolerance.
    pub fn distance_tolerance(mut self, tolerance: F) -> Self {
        self.distance_tolerance = tolerance;
        self
    }

    /// Sets the edge-parameter tolerance.
    pub fn parameter_tolerance(mut self, tolerance: F) -> Self {
        self.parameter_tolerance = tolerance;
        self
    }

    /// Sets the bisector-touch tolerance used for critical values.
    pub fn bisector_tolerance(mut self, tolerance: F) -> Self {
        self.bisector_tolerance = tolerance;
        self
    }

    /// Sets the reachability strategy.
    pub fn strategy(mut self, strategy: ReachabilityStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
