//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the builder input for
//! [`Simulation::with_config`](crate::Simulation::with_config).
//! [`validate()`](SimulationConfig::validate) checks every structural
//! invariant before any grid is allocated.

use hexlife_core::SimError;
use hexlife_space::HexNeighbourhood;

/// Generations between forced reseeds unless configured otherwise.
pub const DEFAULT_RESEED_INTERVAL: u64 = 4;

/// Generations between a death and its forced resurrection unless
/// configured otherwise.
pub const DEFAULT_RESURRECTION_DELAY: u64 = 6;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The configured grid size was rejected.
    #[error("grid: {0}")]
    Size(#[from] SimError),
    /// `reseed_interval` is zero.
    #[error("reseed_interval must be at least 1")]
    ReseedIntervalZero,
    /// `resurrection_delay` is zero.
    #[error("resurrection_delay must be at least 1")]
    ResurrectionDelayZero,
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for a simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Grid side length. `None` leaves the simulation uninitialized until
    /// [`Simulation::set_size`](crate::Simulation::set_size) is called.
    pub size: Option<u32>,
    /// A reseed fires on every multiple of this generation count. Default: 4.
    pub reseed_interval: u64,
    /// A dead cell is resurrected exactly this many generations after its
    /// death. Default: 6.
    pub resurrection_delay: u64,
    /// Seed for the reseed RNG.
    pub seed: u64,
    /// Evaluate cells on the rayon thread pool. Default: `false`.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: None,
            reseed_interval: DEFAULT_RESEED_INTERVAL,
            resurrection_delay: DEFAULT_RESURRECTION_DELAY,
            seed: 0,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// Default configuration for a `size x size` grid.
    pub fn with_size(size: u32) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(size) = self.size {
            HexNeighbourhood::new(size)?;
        }
        if self.reseed_interval == 0 {
            return Err(ConfigError::ReseedIntervalZero);
        }
        if self.resurrection_delay == 0 {
            return Err(ConfigError::ResurrectionDelayZero);
        }
        Ok(())
    }
}
