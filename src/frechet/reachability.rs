//! Monotone reachability in a free-space diagram.
//!
//! A monotone path from grid corner (0, 0) to (q - 1, p - 1) that stays in the
//! free space exists exactly when the curves are within ε in Fréchet
//! distance. Because the free space of a cell is convex, a path entering a
//! cell through its bottom boundary can leave through any free point of its
//! right boundary, while a path entering through the left boundary at height
//! `y` can only leave through right-boundary points at height `y` or above
//! (and symmetrically for the top boundary).
//!
//! Two procedures are provided and always agree:
//!
//! - [`propagate`] sweeps the cells in order and carries the reachable part
//!   of every boundary forward. This is the canonical one.
//! - [`search`] explores boundaries from the start corner with an explicit
//!   worklist and a table of the lowest entry seen per boundary.

use super::free_space::{FreeInterval, FreeSpaceDiagram};
use super::options::ReachabilityStrategy;
use num_traits::Float;

/// Decides reachability with the requested strategy.
pub fn is_reachable<F: Float>(
    diagram: &FreeSpaceDiagram<F>,
    strategy: ReachabilityStrategy,
    tolerance: F,
) -> bool {
    let reachable = match strategy {
        ReachabilityStrategy::Propagation => propagate(diagram, tolerance),
        ReachabilityStrategy::Search => search(diagram, tolerance),
    };
    tracing::trace!(
        epsilon = diagram.epsilon().to_f64(),
        ?strategy,
        reachable,
        "reachability decided"
    );
    reachable
}

/// Corner conditions shared by both procedures.
///
/// Returns `Some(answer)` when the corners alone settle the question.
fn corner_verdict<F: Float>(diagram: &FreeSpaceDiagram<F>) -> Option<bool> {
    if !diagram.start_free() || !diagram.end_free() {
        return Some(false);
    }
    if diagram.p_len() == 1 && diagram.q_len() == 1 {
        return Some(true);
    }
    None
}

/// Decides reachability by forward propagation of reachable intervals.
///
/// # Complexity
///
/// O(pq) time and space.
pub fn propagate<F: Float>(diagram: &FreeSpaceDiagram<F>, tolerance: F) -> bool {
    if let Some(verdict) = corner_verdict(diagram) {
        return verdict;
    }

    let p = diagram.p_len();
    let q = diagram.q_len();

    // reach_left[edge_p * q + vertex_q], reach_bottom[edge_q * p + vertex_p]
    let mut reach_left: Vec<Option<FreeInterval<F>>> = vec![None; (p - 1) * q];
    let mut reach_bottom: Vec<Option<FreeInterval<F>>> = vec![None; (q - 1) * p];

    // Column x = 0: climb from the start corner while whole edges stay free.
    let mut corner_reached = true;
    for edge_p in 0..p - 1 {
        if !corner_reached {
            break;
        }
        let cell = diagram
            .left_at(edge_p, 0)
            .filter(|c| c.starts_at_zero(tolerance));
        reach_left[edge_p * q] = cell;
        corner_reached = cell.is_some_and(|c| c.reaches_one(tolerance));
    }

    // Row y = 0, the same along Q.
    let mut corner_reached = true;
    for edge_q in 0..q - 1 {
        if !corner_reached {
            break;
        }
        let cell = diagram
            .bottom_at(edge_q, 0)
            .filter(|c| c.starts_at_zero(tolerance));
        reach_bottom[edge_q * p] = cell;
        corner_reached = cell.is_some_and(|c| c.reaches_one(tolerance));
    }

    // Cell (a, b) spans x in [a, a + 1] and y in [b, b + 1].
    for b in 0..p - 1 {
        for a in 0..q - 1 {
            let left = reach_left[b * q + a];
            let bottom = reach_bottom[a * p + b];

            reach_left[b * q + a + 1] = diagram.left_at(b, a + 1).and_then(|right| {
                if bottom.is_some() {
                    Some(right)
                } else {
                    left.and_then(|l| right.clip_below(l.start, tolerance))
                }
            });

            reach_bottom[a * p + b + 1] = diagram.bottom_at(a, b + 1).and_then(|top| {
                if left.is_some() {
                    Some(top)
                } else {
                    bottom.and_then(|bt| top.clip_below(bt.start, tolerance))
                }
            });
        }
    }

    let via_top_row = q >= 2
        && reach_bottom[(q - 2) * p + p - 1].is_some_and(|c| c.reaches_one(tolerance));
    let via_last_column = p >= 2
        && reach_left[(p - 2) * q + q - 1].is_some_and(|c| c.reaches_one(tolerance));
    via_top_row || via_last_column
}

/// A boundary cell of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    /// `L(edge_p, vertex_q)`
    Left { edge_p: usize, vertex_q: usize },
    /// `B(edge_q, vertex_p)`
    Bottom { edge_q: usize, vertex_p: usize },
}

struct Explorer<'d, F> {
    diagram: &'d FreeSpaceDiagram<F>,
    tolerance: F,
    best_left: Vec<Option<F>>,
    best_bottom: Vec<Option<F>>,
    stack: Vec<(Boundary, FreeInterval<F>)>,
}

impl<'d, F: Float> Explorer<'d, F> {
    fn new(diagram: &'d FreeSpaceDiagram<F>, tolerance: F) -> Self {
        let p = diagram.p_len();
        let q = diagram.q_len();
        Self {
            diagram,
            tolerance,
            best_left: vec![None; (p - 1) * q],
            best_bottom: vec![None; (q - 1) * p],
            stack: Vec::new(),
        }
    }

    /// Enters `boundary` at parameter `lower` or above.
    ///
    /// The boundary is queued only if this entry is strictly lower than any
    /// earlier one; a lower entry reaches a superset of what a higher one does.
    fn offer(&mut self, boundary: Boundary, lower: F) {
        let (cell, best) = match boundary {
            Boundary::Left { edge_p, vertex_q } => (
                self.diagram.left_at(edge_p, vertex_q),
                &mut self.best_left[edge_p * self.diagram.q_len() + vertex_q],
            ),
            Boundary::Bottom { edge_q, vertex_p } => (
                self.diagram.bottom_at(edge_q, vertex_p),
                &mut self.best_bottom[edge_q * self.diagram.p_len() + vertex_p],
            ),
        };
        let Some(reached) = cell.and_then(|c| c.clip_below(lower, self.tolerance)) else {
            return;
        };
        if best.is_some_and(|b| b <= reached.start) {
            return;
        }
        *best = Some(reached.start);
        self.stack.push((boundary, reached));
    }

    /// Enters `boundary` through the grid corner at its start.
    fn offer_corner(&mut self, boundary: Boundary) {
        let cell = match boundary {
            Boundary::Left { edge_p, vertex_q } => self.diagram.left_at(edge_p, vertex_q),
            Boundary::Bottom { edge_q, vertex_p } => self.diagram.bottom_at(edge_q, vertex_p),
        };
        if cell.is_some_and(|c| c.starts_at_zero(self.tolerance)) {
            self.offer(boundary, F::zero());
        }
    }

    fn is_target(&self, boundary: Boundary, reached: FreeInterval<F>) -> bool {
        let p = self.diagram.p_len();
        let q = self.diagram.q_len();
        let at_end_corner = match boundary {
            Boundary::Left { edge_p, vertex_q } => edge_p + 2 == p && vertex_q + 1 == q,
            Boundary::Bottom { edge_q, vertex_p } => edge_q + 2 == q && vertex_p + 1 == p,
        };
        at_end_corner && reached.reaches_one(self.tolerance)
    }

    fn run(mut self) -> bool {
        let p = self.diagram.p_len();
        let q = self.diagram.q_len();

        if p >= 2 {
            self.offer_corner(Boundary::Left {
                edge_p: 0,
                vertex_q: 0,
            });
        }
        if q >= 2 {
            self.offer_corner(Boundary::Bottom {
                edge_q: 0,
                vertex_p: 0,
            });
        }

        while let Some((boundary, reached)) = self.stack.pop() {
            if self.is_target(boundary, reached) {
                return true;
            }
            // Skip states superseded by a lower entry pushed later.
            let best = match boundary {
                Boundary::Left { edge_p, vertex_q } => self.best_left[edge_p * q + vertex_q],
                Boundary::Bottom { edge_q, vertex_p } => self.best_bottom[edge_q * p + vertex_p],
            };
            if best.is_some_and(|b| b < reached.start) {
                continue;
            }

            match boundary {
                Boundary::Left { edge_p, vertex_q } => {
                    if vertex_q + 1 < q {
                        // Across cell (vertex_q, edge_p).
                        self.offer(
                            Boundary::Left {
                                edge_p,
                                vertex_q: vertex_q + 1,
                            },
                            reached.start,
                        );
                        self.offer(
                            Boundary::Bottom {
                                edge_q: vertex_q,
                                vertex_p: edge_p + 1,
                            },
                            F::zero(),
                        );
                    }
                    if reached.reaches_one(self.tolerance) && edge_p + 2 < p {
                        // Up through the corner (vertex_q, edge_p + 1).
                        self.offer_corner(Boundary::Left {
                            edge_p: edge_p + 1,
                            vertex_q,
                        });
                    }
                }
                Boundary::Bottom { edge_q, vertex_p } => {
                    if vertex_p + 1 < p {
                        // Across cell (edge_q, vertex_p).
                        self.offer(
                            Boundary::Bottom {
                                edge_q,
                                vertex_p: vertex_p + 1,
                            },
                            reached.start,
                        );
                        self.offer(
                            Boundary::Left {
                                edge_p: vertex_p,
                                vertex_q: edge_q + 1,
                            },
                            F::zero(),
                        );
                    }
                    if reached.reaches_one(self.tolerance) && edge_q + 2 < q {
                        // Right through the corner (edge_q + 1, vertex_p).
                        self.offer_corner(Boundary::Bottom {
                            edge_q: edge_q + 1,
                            vertex_p,
                        });
                    }
                }
            }
        }
        false
    }
}

/// Decides reachability with a worklist search from the start corner.
///
/// Each boundary is re-entered only with a strictly lower entry parameter, so
/// the search visits finitely many states and needs no recursion.
pub fn search<F: Float>(diagram: &FreeSpaceDiagram<F>, tolerance: F) -> bool {
    if let Some(verdict) = corner_verdict(diagram) {
        return verdict;
    }
    Explorer::new(diagram, tolerance).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Curve;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TOL: f64 = 1e-9;

    fn curve(coords: &[(f64, f64)]) -> Curve<f64> {
        Curve::from_coords(coords).unwrap()
    }

    fn both(p: &Curve<f64>, q: &Curve<f64>, epsilon: f64) -> bool {
        let diagram = FreeSpaceDiagram::new(p, q, epsilon, TOL);
        let a = propagate(&diagram, TOL);
        let b = search(&diagram, TOL);
        assert_eq!(a, b, "strategies disagree at epsilon = {epsilon}");
        a
    }

    fn random_curve(rng: &mut StdRng, len: usize) -> Curve<f64> {
        let points: Vec<(f64, f64)> = (0..len)
            .map(|_| (rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0)))
            .collect();
        curve(&points)
    }

    #[test]
    fn test_parallel_segments() {
        let p = curve(&[(0.0, 0.0), (3.0, 3.0)]);
        let q = curve(&[(1.0, 0.0), (3.0, 2.0)]);
        assert!(both(&p, &q, 1.0));
        assert!(both(&p, &q, 1.5));
        assert!(!both(&p, &q, 0.99));
    }

    #[test]
    fn test_start_condition_blocks() {
        let p = curve(&[(0.0, 0.0), (1.0, 0.0)]);
        let q = curve(&[(0.0, 2.0), (1.0, 0.0)]);
        assert!(!both(&p, &q, 1.9));
        assert!(both(&p, &q, 2.0));
    }

    #[test]
    fn test_end_condition_blocks() {
        let p = curve(&[(0.0, 0.0), (1.0, 0.0)]);
        let q = curve(&[(0.0, 0.0), (1.0, 3.0)]);
        assert!(!both(&p, &q, 2.9));
        assert!(both(&p, &q, 3.0));
    }

    #[test]
    fn test_requires_monotone_order() {
        // Q visits the far end first and comes back: every point of P is
        // within 1 of Q, but a monotone walk needs more.
        let p = curve(&[(0.0, 0.0), (4.0, 0.0)]);
        let q = curve(&[(0.0, 0.0), (4.0, 0.0), (0.0, 0.0), (4.0, 0.0)]);
        assert!(!both(&p, &q, 1.0));
        assert!(both(&p, &q, 2.0));
        assert!(!both(&p, &q, 1.99));
    }

    #[test]
    fn test_identical_curves_at_zero() {
        let p = curve(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert!(both(&p, &p, 0.0));

        let zigzag = curve(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0), (3.0, 2.0)]);
        assert!(both(&zigzag, &zigzag, 0.0));
    }

    #[test]
    fn test_single_point_against_curve() {
        let p = curve(&[(0.0, 0.0)]);
        let q = curve(&[(-1.0, 1.0), (1.0, 1.0), (0.0, 2.0)]);
        assert!(both(&p, &q, 2.0));
        assert!(!both(&p, &q, 1.9));
        assert!(both(&q, &p, 2.0));
        assert!(!both(&q, &p, 1.9));
    }

    #[test]
    fn test_single_points() {
        let p = curve(&[(0.0, 0.0)]);
        let q = curve(&[(3.0, 4.0)]);
        assert!(both(&p, &q, 5.0));
        assert!(!both(&p, &q, 4.0));
    }

    #[test]
    fn test_is_reachable_dispatch() {
        let p = curve(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let q = curve(&[(1.0, -1.0), (2.0, 0.0), (3.0, 1.0), (4.0, 2.0)]);
        let diagram = FreeSpaceDiagram::new(&p, &q, 1.5, TOL);
        assert!(is_reachable(&diagram, ReachabilityStrategy::Propagation, TOL));
        assert!(is_reachable(&diagram, ReachabilityStrategy::Search, TOL));
        let diagram = FreeSpaceDiagram::new(&p, &q, 1.4, TOL);
        assert!(!is_reachable(&diagram, ReachabilityStrategy::Propagation, TOL));
        assert!(!is_reachable(&diagram, ReachabilityStrategy::Search, TOL));
    }

    #[test]
    fn test_strategies_agree_on_random_curves() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let p_len = rng.gen_range(1..7);
            let q_len = rng.gen_range(1..7);
            let p = random_curve(&mut rng, p_len);
            let q = random_curve(&mut rng, q_len);
            for step in 0..12 {
                both(&p, &q, step as f64 * 0.5);
            }
        }
    }

    #[test]
    fn test_monotone_in_epsilon() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..100 {
            let p = random_curve(&mut rng, 5);
            let q = random_curve(&mut rng, 4);
            let mut seen_feasible = false;
            for step in 0..50 {
                let feasible = both(&p, &q, step as f64 * 0.2);
                assert!(!seen_feasible || feasible, "feasibility lost as epsilon grew");
                seen_feasible |= feasible;
            }
            assert!(seen_feasible);
        }
    }
}
