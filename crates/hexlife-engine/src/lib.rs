//! Simulation engine for hexagonal life with death and resurrection history.
//!
//! [`Simulation`] owns the world grid, the event ledger and the generation
//! counter. Each step runs the [`LifecycleEngine`] against the frozen
//! previous generation, applies delayed resurrections, then lets the
//! [`ReseedStrategy`] force one dead cell alive on its cadence.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod hash;
pub mod ledger;
pub mod lifecycle;
pub mod metrics;
pub mod patterns;
pub mod reseed;
pub mod simulation;
pub mod snapshot;

pub use config::{ConfigError, SimulationConfig};
pub use hash::snapshot_hash;
pub use ledger::EventLedger;
pub use lifecycle::{judge, LifecycleEngine, RuleTally, Transition, Verdict};
pub use metrics::StepMetrics;
pub use reseed::ReseedStrategy;
pub use simulation::Simulation;
pub use snapshot::SimulationSnapshot;
