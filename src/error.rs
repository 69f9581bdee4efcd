//! Error types for Fréchet distance operations.

use thiserror::Error;

/// Errors that can occur while building curves or addressing diagram cells.
///
/// An infeasible tolerance is not an error: the decision procedure reports
/// it as `false` and the distance driver as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrechetError {
    /// The curve cannot be used as input.
    #[error("invalid curve: {0}")]
    InvalidCurve(&'static str),

    /// A point, edge, or free-space cell was addressed beyond its bounds.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of addressable elements.
        len: usize,
    },
}
