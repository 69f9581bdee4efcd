//! The Fréchet decision problem: are two curves within ε?

use super::free_space::FreeSpaceDiagram;
use super::options::FrechetOptions;
use super::reachability::is_reachable;
use crate::curve::Curve;
use num_traits::Float;

/// Decides whether the Fréchet distance of `p` and `q` is at most `epsilon`.
///
/// Builds a fresh free-space diagram and runs the configured reachability
/// strategy on it.
///
/// # Example
///
/// ```
/// use frechet::frechet::{decide, FrechetOptions};
/// use frechet::Curve;
///
/// let p = Curve::from_coords(&[(0.0_f64, 0.0), (2.0, 0.0)]).unwrap();
/// let q = Curve::from_coords(&[(0.0_f64, 1.0), (2.0, 1.0)]).unwrap();
/// let options = FrechetOptions::default();
///
/// assert!(decide(&p, &q, 1.0, &options));
/// assert!(!decide(&p, &q, 0.9, &options));
/// ```
pub fn decide<F: Float>(
    p: &Curve<F>,
    q: &Curve<F>,
    epsilon: F,
    options: &FrechetOptions<F>,
) -> bool {
    let diagram = FreeSpaceDiagram::new(p, q, epsilon, options.distance_tolerance);
    is_reachable(&diagram, options.strategy, options.parameter_tolerance)
}

/// A decision problem over two borrowed curves, re-decided whenever ε changes.
#[derive(Debug, Clone)]
pub struct DecisionProblem<'a, F> {
    p: &'a Curve<F>,
    q: &'a Curve<F>,
    options: FrechetOptions<F>,
    diagram: FreeSpaceDiagram<F>,
    exists: bool,
}

impl<'a, F: Float> DecisionProblem<'a, F> {
    /// Creates and decides the problem with default options.
    pub fn new(p: &'a Curve<F>, q: &'a Curve<F>, epsilon: F) -> Self {
        Self::with_options(p, q, epsilon, FrechetOptions::default())
    }

    /// Creates and decides the problem with the given options.
    pub fn with_options(
        p: &'a Curve<F>,
        q: &'a Curve<F>,
        epsilon: F,
        options: FrechetOptions<F>,
    ) -> Self {
        let diagram = FreeSpaceDiagram::new(p, q, epsilon, options.distance_tolerance);
        let exists = is_reachable(&diagram, options.strategy, options.parameter_tolerance);
        Self {
            p,
            q,
            options,
            diagram,
            exists,
        }
    }

    /// Returns `true` if a monotone path exists at the current ε.
    #[inline]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// The current ε.
    #[inline]
    pub fn epsilon(&self) -> F {
        self.diagram.epsilon()
    }

    /// Replaces ε, rebuilding the diagram and deciding again.
    pub fn set_epsilon(&mut self, epsilon: F) {
        self.diagram =
            FreeSpaceDiagram::new(self.p, self.q, epsilon, self.options.distance_tolerance);
        self.exists = is_reachable(
            &self.diagram,
            self.options.strategy,
            self.options.parameter_tolerance,
        );
    }

    /// The first curve.
    #[inline]
    pub fn curve_p(&self) -> &'a Curve<F> {
        self.p
    }

    /// The second curve.
    #[inline]
    pub fn curve_q(&self) -> &'a Curve<F> {
        self.q
    }

    /// The free-space diagram at the current ε.
    #[inline]
    pub fn free_space(&self) -> &FreeSpaceDiagram<F> {
        &self.diagram
    }

    /// The options in use.
    #[inline]
    pub fn options(&self) -> &FrechetOptions<F> {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frechet::options::ReachabilityStrategy;

    fn curve(coords: &[(f64, f64)]) -> Curve<f64> {
        Curve::from_coords(coords).unwrap()
    }

    #[test]
    fn test_diagonal_translate() {
        let p = curve(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let q = curve(&[(1.0, -1.0), (2.0, 0.0), (3.0, 1.0), (4.0, 2.0)]);

        let mut problem = DecisionProblem::new(&p, &q, 1.5);
        assert!(problem.exists());
        assert_eq!(problem.epsilon(), 1.5);

        problem.set_epsilon(1.4);
        assert!(!problem.exists());
        assert_eq!(problem.epsilon(), 1.4);
        assert_eq!(problem.free_space().epsilon(), 1.4);

        problem.set_epsilon(2.0_f64.sqrt());
        assert!(problem.exists());
    }

    #[test]
    fn test_accessors() {
        let p = curve(&[(0.0, 0.0), (1.0, 0.0)]);
        let q = curve(&[(0.0, 1.0), (1.0, 1.0), (2.0, 1.0)]);
        let options = FrechetOptions::default().strategy(ReachabilityStrategy::Search);
        let problem = DecisionProblem::with_options(&p, &q, 1.0, options);

        assert!(std::ptr::eq(problem.curve_p(), &p));
        assert!(std::ptr::eq(problem.curve_q(), &q));
        assert_eq!(problem.options().strategy, ReachabilityStrategy::Search);
        assert_eq!(problem.free_space().left_cells().len(), 3);
        assert_eq!(problem.free_space().bottom_cells().len(), 4);
    }

    #[test]
    fn test_decide_matches_problem() {
        let p = curve(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0), (3.0, 2.0)]);
        let q = curve(&[(0.0, 1.0), (1.0, -1.0), (2.0, 1.0), (3.0, -1.0)]);
        let options = FrechetOptions::default();
        let mut problem = DecisionProblem::new(&p, &q, 0.0);
        for step in 0..30 {
            let epsilon = step as f64 * 0.25;
            problem.set_epsilon(epsilon);
            assert_eq!(problem.exists(), decide(&p, &q, epsilon, &options));
        }
    }

    #[test]
    fn test_negative_epsilon_infeasible() {
        let p = curve(&[(0.0, 0.0), (1.0, 0.0)]);
        let problem = DecisionProblem::new(&p, &p, -1.0);
        assert!(!problem.exists());
    }
}
