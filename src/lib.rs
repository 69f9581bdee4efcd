//! frechet - Continuous Fréchet distance for polygonal curves
//!
//! Computes the exact Fréchet distance between two planar polylines by
//! deciding reachability in the free-space diagram at each candidate ε and
//! searching the finite set of critical values for the smallest feasible one.
//!
//! # Example
//!
//! ```
//! use frechet::{frechet_distance, Curve, Point2};
//!
//! let p = Curve::new(vec![Point2::new(0.0_f64, 0.0), Point2::new(5.0, 0.0)]).unwrap();
//! let q = Curve::new(vec![Point2::new(0.0_f64, 1.0), Point2::new(0.0, -2.0)]).unwrap();
//!
//! let d = frechet_distance(&p, &q).unwrap();
//! assert!((d - 29.0_f64.sqrt()).abs() < 1e-9);
//! ```

pub mod curve;
pub mod error;
pub mod frechet;
pub mod primitives;

pub use curve::Curve;
pub use error::FrechetError;
pub use frechet::{
    frechet_distance, frechet_distance_with, CriticalValues, DecisionProblem, FrechetDistance,
    FrechetOptions, ReachabilityStrategy,
};
pub use primitives::{Point2, Segment2, Vec2};
