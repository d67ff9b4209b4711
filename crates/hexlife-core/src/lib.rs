//! Core types for the hexlife cellular automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: grid positions, the
//! generation counter, lifecycle records kept in the event ledger, and the
//! error type for precondition violations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod record;

pub use error::SimError;
pub use id::{Generation, Position};
pub use record::{DeathCause, DeathRecord, ResurrectionRecord};
