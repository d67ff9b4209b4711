//! Read-only view of the simulation handed to renderers and exporters.

use hexlife_core::{DeathRecord, Generation, Position, ResurrectionRecord};
use hexlife_space::WorldGrid;

/// State of the simulation after a committed step.
///
/// Owns a copy of the grid and of the active ledger records, so it stays
/// valid while the simulation keeps stepping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationSnapshot {
    /// The committed grid.
    pub grid: WorldGrid,
    /// The generation whose rules produced this grid. A snapshot taken
    /// before the first step reports generation 0.
    pub generation: Generation,
    /// Active death records in canonical order.
    pub death_events: Vec<DeathRecord>,
    /// Active resurrection records in canonical order.
    pub resurrection_events: Vec<ResurrectionRecord>,
    /// Cell forced alive by the periodic reseed during this step.
    pub reseeded: Option<Position>,
}

impl SimulationSnapshot {
    /// Whether the cell at `p` is alive; `false` off the grid.
    pub fn is_alive(&self, p: Position) -> bool {
        self.grid.is_alive(p.x, p.y).unwrap_or(false)
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    /// The active death record at `p`.
    pub fn death_at(&self, p: Position) -> Option<&DeathRecord> {
        self.death_events.iter().find(|d| d.position == p)
    }

    /// The active resurrection record at `p`.
    pub fn resurrection_at(&self, p: Position) -> Option<&ResurrectionRecord> {
        self.resurrection_events.iter().find(|r| r.position == p)
    }
}
