//! Benchmark profiles for the hexlife simulation.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), serial evaluation
//! - [`stress_profile`]: 316x316 grid (~100K cells), parallel evaluation
//! - [`seeded_simulation`]: a randomized simulation from any configuration

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexlife_core::SimError;
use hexlife_engine::{ConfigError, Simulation, SimulationConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default configuration on a 100x100 grid (10K cells).
pub fn reference_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        seed,
        ..SimulationConfig::with_size(100)
    }
}

/// Same rules as [`reference_profile`] at 10x the cell count, evaluated on
/// the rayon pool.
pub fn stress_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        seed,
        parallel: true,
        ..SimulationConfig::with_size(316)
    }
}

/// Errors from building a benchmark simulation.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The profile configuration was rejected.
    #[error("invalid profile: {0}")]
    Config(#[from] ConfigError),
    /// Randomizing the grid failed.
    #[error("seeding failed: {0}")]
    Sim(#[from] SimError),
}

/// Build a simulation from `config` with every cell alive with probability
/// one half, drawn from a ChaCha8 stream seeded with `config.seed`.
pub fn seeded_simulation(config: SimulationConfig) -> Result<Simulation, ProfileError> {
    let seed = config.seed;
    let mut sim = Simulation::with_config(config)?;
    sim.randomize(&mut ChaCha8Rng::seed_from_u64(seed))?;
    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_valid() {
        assert!(reference_profile(1).validate().is_ok());
        assert!(stress_profile(1).validate().is_ok());
        assert!(stress_profile(1).parallel);
    }

    #[test]
    fn seeded_simulation_is_populated() {
        let sim = seeded_simulation(SimulationConfig::with_size(10)).unwrap();
        assert!(sim.live_count().unwrap() > 0);
    }

    #[test]
    fn seeded_simulation_requires_size() {
        assert!(matches!(
            seeded_simulation(SimulationConfig::default()),
            Err(ProfileError::Sim(SimError::NotInitialized))
        ));
    }

    #[test]
    fn profile_errors_convert_and_render() {
        let err = seeded_simulation(SimulationConfig::with_size(0)).unwrap_err();
        assert!(matches!(err, ProfileError::Config(ConfigError::Size(_))));
        assert!(err.to_string().starts_with("invalid profile: grid: invalid grid size 0"));

        let err: Box<dyn std::error::Error> = ProfileError::from(SimError::NotInitialized).into();
        assert!(err.to_string().starts_with("seeding failed: simulation not initialized"));
    }
}
