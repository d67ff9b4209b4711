//! Error types for simulation preconditions.
//!
//! Every error is a local precondition violation surfaced synchronously to
//! the caller. The core performs no I/O, so there is no transient failure
//! class and nothing is retried internally.

/// Errors raised by grid construction, mutation and stepping.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SimError {
    /// Grid side length is zero or its cell count would not fit in `u32`.
    #[error("invalid grid size {size}: must be in [1, {max}]")]
    InvalidSize {
        /// The rejected side length.
        size: u32,
        /// Largest accepted side length.
        max: u32,
    },

    /// A coordinate lies outside the grid.
    #[error("coordinate ({x}, {y}) out of range for grid of size {size}")]
    OutOfRange {
        /// Requested row.
        x: i32,
        /// Requested column.
        y: i32,
        /// Grid side length.
        size: u32,
    },

    /// The grid size has not been set yet.
    #[error("simulation not initialized: set a grid size first")]
    NotInitialized,

    /// A birth probability outside `[0, 1]` was passed to `randomize`.
    #[error("probability must be finite and in [0.0, 1.0], got {p}")]
    InvalidProbability {
        /// The rejected probability.
        p: f64,
    },
}
