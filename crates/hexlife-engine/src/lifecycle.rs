//! Lifecycle rules: computes the next grid and ledger from the previous ones.
//!
//! Evaluation is split in two phases, mirroring a double-buffered tick:
//!
//! 1. [`LifecycleEngine::evaluate`] reads the frozen previous grid and
//!    ledger and produces one [`Verdict`] per cell. No state is written, so
//!    cells can be evaluated in any order or in parallel.
//! 2. [`LifecycleEngine::apply`] builds a fresh grid and a copy of the
//!    ledger from those verdicts, then applies delayed resurrections.
//!
//! # Rules
//!
//! For a cell with `n` live neighbours in the previous generation:
//!
//! | State | `n`    | Outcome |
//! |-------|--------|---------|
//! | alive | `< 2`  | dies of underpopulation, unless immune to it |
//! | alive | `2..=3`| survives |
//! | alive | `> 3`  | dies of overpopulation, unless immune to it |
//! | dead  | `3`    | born with a clean history |
//! | dead  | other  | stays dead |
//!
//! Independently, every death record exactly `resurrection_delay`
//! generations old forces its cell alive and leaves a resurrection record
//! that makes the cell immune, once, to the cause it died of.

use hexlife_core::{DeathCause, DeathRecord, Generation, ResurrectionRecord};
use hexlife_space::WorldGrid;
use rayon::prelude::*;

use crate::ledger::EventLedger;

/// Outcome of the neighbour-count rules for a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Alive with two or three live neighbours.
    Survive,
    /// Alive and killed by `cause`.
    Die(DeathCause),
    /// Alive and would have died of `cause`, but holds a matching
    /// resurrection record. The record is consumed.
    Exempt(DeathCause),
    /// Dead with exactly three live neighbours.
    Born,
    /// Dead and not born.
    StayDead,
}

impl Verdict {
    /// Whether the cell is alive in the next grid before resurrections.
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Survive | Self::Exempt(_) | Self::Born)
    }
}

/// Decide a cell's fate from its state, live-neighbour count and immunity.
///
/// `immunity` is the cause on the cell's active resurrection record. It is
/// only spent when it actually averts a death: a cell that keeps surviving
/// holds its record until the first generation it would have died of that
/// cause, however late that is.
///
/// The three alive branches partition the neighbour count, so the ordered
/// rule cascade collapses into a single match.
pub fn judge(alive: bool, live_neighbours: u8, immunity: Option<DeathCause>) -> Verdict {
    let dying = |cause| {
        if immunity == Some(cause) {
            Verdict::Exempt(cause)
        } else {
            Verdict::Die(cause)
        }
    };
    match (alive, live_neighbours) {
        (true, 0..=1) => dying(DeathCause::Underpopulation),
        (true, 2..=3) => Verdict::Survive,
        (true, _) => dying(DeathCause::Overpopulation),
        (false, 3) => Verdict::Born,
        (false, _) => Verdict::StayDead,
    }
}

/// Per-step counts of rule firings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleTally {
    /// Cells born from exactly three neighbours.
    pub births: u32,
    /// Cells killed by under- or overpopulation.
    pub deaths: u32,
    /// Delayed resurrections.
    pub resurrections: u32,
    /// Deaths averted by a matching resurrection record.
    pub exemptions: u32,
}

/// The next generation's grid and ledger.
#[derive(Clone, Debug)]
pub struct Transition {
    /// Next grid, before any reseed.
    pub grid: WorldGrid,
    /// Next ledger, before any reseed.
    pub ledger: EventLedger,
    /// What fired during this transition.
    pub tally: RuleTally,
}

/// Applies the lifecycle rules to a whole grid.
#[derive(Clone, Copy, Debug)]
pub struct LifecycleEngine {
    resurrection_delay: u64,
    parallel: bool,
}

impl LifecycleEngine {
    /// Create an engine resurrecting cells `resurrection_delay` generations
    /// after death. With `parallel` set, cells are evaluated on the rayon
    /// thread pool.
    pub fn new(resurrection_delay: u64, parallel: bool) -> Self {
        Self {
            resurrection_delay,
            parallel,
        }
    }

    /// Generations between a death and its forced resurrection.
    pub fn resurrection_delay(&self) -> u64 {
        self.resurrection_delay
    }

    /// Whether evaluation runs in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Judge every cell against the frozen previous generation.
    ///
    /// Returns one verdict per cell in canonical order. Serial and parallel
    /// evaluation produce identical output.
    pub fn evaluate(&self, grid: &WorldGrid, ledger: &EventLedger) -> Vec<Verdict> {
        let cell_count = grid.topology().cell_count();
        if self.parallel {
            (0..cell_count)
                .into_par_iter()
                .map(|rank| Self::evaluate_rank(grid, ledger, rank))
                .collect()
        } else {
            (0..cell_count)
                .map(|rank| Self::evaluate_rank(grid, ledger, rank))
                .collect()
        }
    }

    fn evaluate_rank(grid: &WorldGrid, ledger: &EventLedger, rank: usize) -> Verdict {
        let position = grid.topology().position_at(rank);
        judge(
            grid.is_alive_rank(rank),
            grid.count_live_neighbours(position),
            ledger.immunity_at(position),
        )
    }

    /// Build the next grid and ledger from `verdicts`.
    ///
    /// `grid` and `ledger` are the previous generation; neither is modified.
    /// `now` is the generation being evaluated and stamps new death records.
    /// A [`Verdict::Exempt`] cell loses its resurrection record here; a
    /// surviving cell keeps it.
    pub fn apply(
        &self,
        grid: &WorldGrid,
        ledger: &EventLedger,
        now: Generation,
        verdicts: &[Verdict],
    ) -> Transition {
        let topology = *grid.topology();
        let mut next_grid = WorldGrid::with_topology(topology);
        let mut next_ledger = ledger.clone();
        let mut tally = RuleTally::default();

        for (rank, &verdict) in verdicts.iter().enumerate() {
            next_grid.set_rank(rank, verdict.is_alive());
            let position = topology.position_at(rank);
            match verdict {
                Verdict::Survive | Verdict::StayDead => {}
                Verdict::Die(cause) => {
                    next_ledger.record_death(DeathRecord::new(position, now, cause));
                    tally.deaths += 1;
                }
                Verdict::Exempt(_) => {
                    next_ledger.take_resurrection(position);
                    tally.exemptions += 1;
                }
                Verdict::Born => {
                    next_ledger.clear(position);
                    tally.births += 1;
                }
            }
        }

        // Delayed resurrection reads the previous ledger, so deaths recorded
        // this step can never be due.
        for death in ledger.due_for_resurrection(now, self.resurrection_delay) {
            let Some(rank) = topology.canonical_rank(death.position) else {
                continue;
            };
            next_grid.set_rank(rank, true);
            // A birth this step already gave the cell a clean history.
            if verdicts.get(rank) == Some(&Verdict::Born) {
                continue;
            }
            next_ledger.record_resurrection(ResurrectionRecord::from(*death));
            tally.resurrections += 1;
        }

        Transition {
            grid: next_grid,
            ledger: next_ledger,
            tally,
        }
    }

    /// Evaluate and apply in one call.
    pub fn advance(&self, grid: &WorldGrid, ledger: &EventLedger, now: Generation) -> Transition {
        let verdicts = self.evaluate(grid, ledger);
        self.apply(grid, ledger, now, &verdicts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexlife_core::Position;
    use proptest::prelude::*;

    const DELAY: u64 = 6;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn grid_with(size: u32, live: &[(i32, i32)]) -> WorldGrid {
        let mut g = WorldGrid::new(size).unwrap();
        for &(x, y) in live {
            g.populate(x, y).unwrap();
        }
        g
    }

    // Neighbours of (2,2): (2,3) (3,2) (3,1) (2,1) (1,1) (1,2).

    // ── judge ────────────────────────────────────────────────────

    #[test]
    fn judge_rule_table() {
        use DeathCause::{Overpopulation as Over, Underpopulation as Under};
        assert_eq!(judge(true, 0, None), Verdict::Die(Under));
        assert_eq!(judge(true, 1, None), Verdict::Die(Under));
        assert_eq!(judge(true, 2, None), Verdict::Survive);
        assert_eq!(judge(true, 3, None), Verdict::Survive);
        assert_eq!(judge(true, 4, None), Verdict::Die(Over));
        assert_eq!(judge(true, 6, None), Verdict::Die(Over));
        assert_eq!(judge(false, 3, None), Verdict::Born);
        assert_eq!(judge(false, 2, None), Verdict::StayDead);
        assert_eq!(judge(false, 4, None), Verdict::StayDead);
    }

    #[test]
    fn judge_immunity_matches_cause_only() {
        use DeathCause::{Overpopulation as Over, Underpopulation as Under};
        assert_eq!(judge(true, 1, Some(Under)), Verdict::Exempt(Under));
        assert_eq!(judge(true, 1, Some(Over)), Verdict::Die(Under));
        assert_eq!(judge(true, 5, Some(Over)), Verdict::Exempt(Over));
        assert_eq!(judge(true, 5, Some(Under)), Verdict::Die(Over));
        // Immunity never affects survivors or dead cells.
        assert_eq!(judge(true, 2, Some(Under)), Verdict::Survive);
        assert_eq!(judge(false, 3, Some(Over)), Verdict::Born);
    }

    // ── advance ─────────────────────────────────────────────────

    #[test]
    fn isolated_cell_dies_of_underpopulation() {
        let grid = grid_with(5, &[(2, 2)]);
        let engine = LifecycleEngine::new(DELAY, false);
        let t = engine.advance(&grid, &EventLedger::new(), Generation(1));
        assert!(!t.grid.is_alive(2, 2).unwrap());
        assert_eq!(
            t.ledger.death_at(p(2, 2)),
            Some(&DeathRecord::new(p(2, 2), Generation(1), DeathCause::Underpopulation))
        );
        assert_eq!(t.tally.deaths, 1);
    }

    #[test]
    fn crowded_cell_dies_of_overpopulation() {
        let grid = grid_with(5, &[(2, 2), (2, 3), (3, 2), (3, 1), (2, 1)]);
        let engine = LifecycleEngine::new(DELAY, false);
        let t = engine.advance(&grid, &EventLedger::new(), Generation(3));
        assert!(!t.grid.is_alive(2, 2).unwrap());
        assert_eq!(
            t.ledger.death_at(p(2, 2)).map(|d| (d.generation, d.cause)),
            Some((Generation(3), DeathCause::Overpopulation))
        );
    }

    #[test]
    fn overpopulation_immunity_keeps_cell_alive_once() {
        let grid = grid_with(5, &[(2, 2), (2, 3), (3, 2), (3, 1), (2, 1)]);
        let mut ledger = EventLedger::new();
        let old = DeathRecord::new(p(2, 2), Generation(1), DeathCause::Overpopulation);
        ledger.record_death(old);
        ledger.record_resurrection(old.into());

        let engine = LifecycleEngine::new(DELAY, false);
        let t = engine.advance(&grid, &ledger, Generation(8));
        assert!(t.grid.is_alive(2, 2).unwrap());
        assert_eq!(t.tally.exemptions, 1);
        assert!(t.ledger.resurrection_at(p(2, 2)).is_none());
        // The previous ledger is untouched.
        assert!(ledger.resurrection_at(p(2, 2)).is_some());
    }

    #[test]
    fn survivor_keeps_unused_immunity() {
        // (2,2) has two live neighbours and survives without needing immunity.
        let grid = grid_with(5, &[(2, 2), (2, 3), (3, 2)]);
        let mut ledger = EventLedger::new();
        let old = DeathRecord::new(p(2, 2), Generation(1), DeathCause::Underpopulation);
        ledger.record_death(old);
        ledger.record_resurrection(old.into());

        let engine = LifecycleEngine::new(DELAY, false);
        let t = engine.advance(&grid, &ledger, Generation(20));
        assert!(t.grid.is_alive(2, 2).unwrap());
        assert_eq!(t.tally.exemptions, 0);
        assert_eq!(
            t.ledger.immunity_at(p(2, 2)),
            Some(DeathCause::Underpopulation)
        );
    }

    #[test]
    fn immunity_for_other_cause_does_not_help() {
        let grid = grid_with(5, &[(2, 2), (2, 3), (3, 2), (3, 1), (2, 1)]);
        let mut ledger = EventLedger::new();
        let old = DeathRecord::new(p(2, 2), Generation(1), DeathCause::Underpopulation);
        ledger.record_death(old);
        ledger.record_resurrection(old.into());

        let engine = LifecycleEngine::new(DELAY, false);
        let t = engine.advance(&grid, &ledger, Generation(8));
        assert!(!t.grid.is_alive(2, 2).unwrap());
        assert!(t.ledger.resurrection_at(p(2, 2)).is_none());
        assert_eq!(
            t.ledger.death_at(p(2, 2)).map(|d| (d.generation, d.cause)),
            Some((Generation(8), DeathCause::Overpopulation))
        );
    }

    #[test]
    fn birth_clears_history() {
        let grid = grid_with(5, &[(2, 3), (3, 2), (3, 1)]);
        let mut ledger = EventLedger::new();
        let old = DeathRecord::new(p(2, 2), Generation(2), DeathCause::Underpopulation);
        ledger.record_death(old);
        ledger.record_resurrection(old.into());

        let engine = LifecycleEngine::new(DELAY, false);
        let t = engine.advance(&grid, &ledger, Generation(4));
        assert!(t.grid.is_alive(2, 2).unwrap());
        assert!(t.ledger.death_at(p(2, 2)).is_none());
        assert!(t.ledger.resurrection_at(p(2, 2)).is_none());
        assert!(t.tally.births >= 1);
    }

    #[test]
    fn resurrection_fires_exactly_at_delay() {
        let grid = WorldGrid::new(5).unwrap();
        let mut ledger = EventLedger::new();
        ledger.record_death(DeathRecord::new(
            p(1, 1),
            Generation(1),
            DeathCause::Underpopulation,
        ));
        let engine = LifecycleEngine::new(DELAY, false);

        for now in [6, 8] {
            let t = engine.advance(&grid, &ledger, Generation(now));
            assert!(!t.grid.is_alive(1, 1).unwrap(), "no resurrection at {now}");
            assert_eq!(t.tally.resurrections, 0);
        }

        let t = engine.advance(&grid, &ledger, Generation(7));
        assert!(t.grid.is_alive(1, 1).unwrap());
        assert_eq!(
            t.ledger.resurrection_at(p(1, 1)).map(|r| r.cause),
            Some(DeathCause::Underpopulation)
        );
        assert_eq!(t.tally.resurrections, 1);
    }

    #[test]
    fn resurrection_overrides_neighbour_rules() {
        // (2,2) is dead with two live neighbours, so it would stay dead.
        let grid = grid_with(5, &[(2, 3), (3, 2)]);
        let mut ledger = EventLedger::new();
        ledger.record_death(DeathRecord::new(
            p(2, 2),
            Generation(4),
            DeathCause::Overpopulation,
        ));
        let engine = LifecycleEngine::new(DELAY, false);
        let t = engine.advance(&grid, &ledger, Generation(10));
        assert!(t.grid.is_alive(2, 2).unwrap());
    }

    #[test]
    fn birth_on_resurrection_day_leaves_no_records() {
        // (2,2) is dead with three live neighbours and its death is due.
        let grid = grid_with(5, &[(1, 2), (3, 2), (2, 3)]);
        let mut ledger = EventLedger::new();
        ledger.record_death(DeathRecord::new(
            p(2, 2),
            Generation(1),
            DeathCause::Underpopulation,
        ));

        let engine = LifecycleEngine::new(DELAY, false);
        let t = engine.advance(&grid, &ledger, Generation(1 + DELAY));
        assert!(t.grid.is_alive(2, 2).unwrap());
        assert!(t.ledger.death_at(p(2, 2)).is_none());
        assert!(t.ledger.resurrection_at(p(2, 2)).is_none());
        assert_eq!(t.tally.resurrections, 0);
        assert_eq!(t.tally.births, 1);
    }

    #[test]
    fn engine_reports_its_settings() {
        let engine = LifecycleEngine::new(9, true);
        assert_eq!(engine.resurrection_delay(), 9);
        assert!(engine.is_parallel());
        assert!(!LifecycleEngine::new(DELAY, false).is_parallel());
    }

    #[test]
    fn all_dead_grid_stays_dead() {
        let grid = WorldGrid::new(6).unwrap();
        let engine = LifecycleEngine::new(DELAY, false);
        let t = engine.advance(&grid, &EventLedger::new(), Generation(1));
        assert_eq!(t.grid.live_count(), 0);
        assert!(t.ledger.is_empty());
        assert_eq!(t.tally, RuleTally::default());
    }

    proptest! {
        #[test]
        fn parallel_matches_serial(
            size in 1u32..10,
            cells in proptest::collection::vec(any::<bool>(), 81),
            now in 1u64..20,
        ) {
            let mut grid = WorldGrid::new(size).unwrap();
            for rank in 0..grid.topology().cell_count() {
                grid.set_rank(rank, cells[rank]);
            }
            let mut ledger = EventLedger::new();
            if let Some(first) = grid.live_positions().first() {
                let d = DeathRecord::new(*first, Generation(now), DeathCause::Underpopulation);
                ledger.record_death(d);
                ledger.record_resurrection(d.into());
            }
            let serial = LifecycleEngine::new(DELAY, false).advance(&grid, &ledger, Generation(now));
            let parallel = LifecycleEngine::new(DELAY, true).advance(&grid, &ledger, Generation(now));
            prop_assert_eq!(&serial.grid, &parallel.grid);
            prop_assert_eq!(&serial.ledger, &parallel.ledger);
            prop_assert_eq!(serial.tally, parallel.tally);
        }
    }
}
