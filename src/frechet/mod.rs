//! Continuous Fréchet distance between polygonal curves.
//!
//! The distance is computed the Alt–Godau way: a free-space diagram answers
//! the decision problem for a fixed ε, and a binary search over the sorted
//! critical values finds the smallest feasible one.
//!
//! # Example
//!
//! ```
//! use frechet::frechet::{frechet_distance, CriticalValues};
//! use frechet::Curve;
//!
//! let p = Curve::from_coords(&[(0.0_f64, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
//! let q = Curve::from_coords(&[(0.0_f64, 1.0), (1.0, 1.0), (2.0, 1.0)]).unwrap();
//!
//! let critical = CriticalValues::new(&p, &q, 1e-6);
//! assert!(!critical.is_empty());
//!
//! let d = frechet_distance(&p, &q).unwrap();
//! assert!((d - 1.0).abs() < 1e-9);
//! ```

mod critical;
mod decision;
mod distance;
mod free_space;
mod options;
#[cfg(test)]
mod oracle;
mod reachability;

pub use critical::{bisector_crossing, CriticalValues};
pub use decision::{decide, DecisionProblem};
pub use distance::{frechet_distance, frechet_distance_with, FrechetDistance};
pub use free_space::{free_interval, FreeInterval, FreeSpaceDiagram};
pub use options::{FrechetOptions, ReachabilityStrategy};
pub use reachability::{is_reachable, propagate, search};
