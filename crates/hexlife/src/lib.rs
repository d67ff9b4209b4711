//! Hexlife: a hexagonal cellular automaton with death, resurrection and
//! reseed history.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all hexlife sub-crates. For most users, adding `hexlife` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hexlife::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut sim = Simulation::with_config(SimulationConfig {
//!     seed: 42,
//!     ..SimulationConfig::with_size(16)
//! })
//! .unwrap();
//! sim.randomize(&mut ChaCha8Rng::seed_from_u64(42)).unwrap();
//!
//! let snap = sim.run(8).unwrap();
//! assert_eq!(snap.generation, Generation(8));
//! assert!(snap.reseeded.is_some());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hexlife-core` | Positions, generations, event records, errors |
//! | [`space`] | `hexlife-space` | Hex neighbourhood and the world grid |
//! | [`engine`] | `hexlife-engine` | Lifecycle rules, ledger, reseed, simulation clock |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`hexlife-core`).
///
/// Contains [`types::Position`], [`types::Generation`], the event records
/// and [`types::SimError`].
pub use hexlife_core as types;

/// Hex topology and grid storage (`hexlife-space`).
pub use hexlife_space as space;

/// Simulation engine (`hexlife-engine`).
///
/// [`engine::Simulation`] drives the world; [`engine::patterns`] holds
/// starter patterns.
pub use hexlife_engine as engine;

/// Common imports for typical hexlife usage.
///
/// ```rust
/// use hexlife::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use hexlife_core::{
        DeathCause, DeathRecord, Generation, Position, ResurrectionRecord, SimError,
    };

    // Space
    pub use hexlife_space::{HexNeighbourhood, WorldGrid};

    // Engine
    pub use hexlife_engine::{
        patterns, snapshot_hash, ConfigError, EventLedger, Simulation, SimulationConfig,
        SimulationSnapshot, StepMetrics,
    };
}
