//! Lifecycle records stored in the event ledger.
//!
//! A [`DeathRecord`] is written whenever a live cell dies from under- or
//! overpopulation. Once the configured resurrection delay has elapsed the
//! cell is forced back to life and the death record is copied into a
//! [`ResurrectionRecord`], which grants immunity against dying again from
//! the same cause.

use std::fmt;

use crate::id::{Generation, Position};

/// Why a cell died.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeathCause {
    /// Fewer than two live neighbours.
    Underpopulation,
    /// More than three live neighbours.
    Overpopulation,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underpopulation => write!(f, "underpopulation"),
            Self::Overpopulation => write!(f, "overpopulation"),
        }
    }
}

/// A cell death observed during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeathRecord {
    /// Where the cell died.
    pub position: Position,
    /// The generation whose evaluation killed the cell.
    pub generation: Generation,
    /// The rule that killed it.
    pub cause: DeathCause,
}

impl DeathRecord {
    /// Record a death at `position` during `generation`.
    pub const fn new(position: Position, generation: Generation, cause: DeathCause) -> Self {
        Self {
            position,
            generation,
            cause,
        }
    }

    /// Whether exactly `delay` generations separate this death from `now`.
    pub fn is_due(&self, now: Generation, delay: u64) -> bool {
        now.since(self.generation) == Some(delay)
    }
}

/// A delayed resurrection, copied from the death record that triggered it.
///
/// `generation` and `cause` are those of the original death. While the
/// record is active, the cell is exempt from dying again from `cause`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResurrectionRecord {
    /// The resurrected cell.
    pub position: Position,
    /// Generation of the original death.
    pub generation: Generation,
    /// Cause of the original death; the cause the cell is immune to.
    pub cause: DeathCause,
}

impl ResurrectionRecord {
    /// Whether this record exempts its cell from dying of `cause`.
    pub fn grants_immunity(&self, cause: DeathCause) -> bool {
        self.cause == cause
    }
}

impl From<DeathRecord> for ResurrectionRecord {
    fn from(death: DeathRecord) -> Self {
        Self {
            position: death.position,
            generation: death.generation,
            cause: death.cause,
        }
    }
}
