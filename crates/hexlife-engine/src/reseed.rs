//! Periodic forced reseed of one dead cell.
//!
//! Every `interval`-th generation, after the lifecycle rules have produced
//! the next grid, one position is drawn uniformly from the cells that were
//! dead in the *previous* grid and forced alive. Its death and resurrection
//! records are cleared, and only its records.
//!
//! The draw uses a seeded ChaCha8 RNG owned by the strategy, so identical
//! seeds reproduce identical reseed sequences.

use hexlife_core::{Generation, Position};
use hexlife_space::WorldGrid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{trace, warn};

use crate::ledger::EventLedger;

/// Forces one uniformly-chosen dead cell alive every `interval` generations.
#[derive(Clone, Debug)]
pub struct ReseedStrategy {
    interval: u64,
    rng: ChaCha8Rng,
}

impl ReseedStrategy {
    /// Create a strategy firing on multiples of `interval`, seeded with
    /// `seed`. An `interval` of 0 never fires.
    pub fn new(interval: u64, seed: u64) -> Self {
        Self {
            interval,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generations between reseeds.
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Restart the RNG stream from `seed`.
    pub fn reseed_rng(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Whether `now` is a reseed generation.
    pub fn is_due(&self, now: Generation) -> bool {
        now.is_multiple_of(self.interval)
    }

    /// Apply the reseed for generation `now`.
    ///
    /// `previous` is the pre-step grid the candidate set is drawn from;
    /// `next` and `ledger` are the tentative next generation. Returns the
    /// reseeded position, or `None` when `now` is not a reseed generation
    /// or `previous` has no dead cell.
    pub fn apply(
        &mut self,
        now: Generation,
        previous: &WorldGrid,
        next: &mut WorldGrid,
        ledger: &mut EventLedger,
    ) -> Option<Position> {
        if !self.is_due(now) {
            return None;
        }
        let dead: Vec<usize> = previous
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| !alive)
            .map(|(rank, _)| rank)
            .collect();
        if dead.is_empty() {
            warn!(generation = now.0, "reseed skipped: no dead cell to revive");
            return None;
        }

        let rank = dead[self.rng.random_range(0..dead.len())];
        let position = previous.topology().position_at(rank);
        next.set_rank(rank, true);
        ledger.clear(position);
        trace!(generation = now.0, %position, candidates = dead.len(), "reseeded cell");
        Some(position)
    }
}
