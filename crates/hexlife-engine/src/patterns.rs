//! Starter patterns for seeding a grid.
//!
//! Patterns are plain coordinate lists, installed with
//! [`Simulation::populate_pattern`](crate::Simulation::populate_pattern).

/// The five-cell sample pattern. Fits any grid of side 4 or more.
pub const SAMPLE: &[(i32, i32)] = &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)];
