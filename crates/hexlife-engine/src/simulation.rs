//! The simulation clock: owns grid, ledger and generation counter.
//!
//! [`Simulation`] is the user-facing API. Each [`step()`](Simulation::step)
//! runs one complete generation: judge every cell against the frozen
//! previous state → build the next grid and ledger → apply the periodic
//! reseed → commit → advance the counter. Nothing is observable between
//! those phases; callers only see committed generations.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`] and all mutating methods take `&mut self`.
//! Snapshots are owned copies, so they can be handed to a renderer on
//! another thread while the simulation keeps stepping.

use std::fmt;
use std::time::Instant;

use hexlife_core::{Generation, Position, SimError};
use hexlife_space::WorldGrid;
use rand::Rng;
use tracing::debug;

use crate::config::{ConfigError, SimulationConfig};
use crate::ledger::EventLedger;
use crate::lifecycle::{LifecycleEngine, Transition};
use crate::metrics::StepMetrics;
use crate::reseed::ReseedStrategy;
use crate::snapshot::SimulationSnapshot;

// Compile-time assertion: Simulation can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// Birth probability used by [`Simulation::randomize`].
pub const DEFAULT_BIRTH_PROBABILITY: f64 = 0.5;

/// Committed state of one generation.
#[derive(Clone, Debug)]
struct WorldState {
    grid: WorldGrid,
    ledger: EventLedger,
    /// The next generation to evaluate.
    generation: Generation,
    last_reseed: Option<Position>,
}

impl WorldState {
    fn fresh(size: u32) -> Result<Self, SimError> {
        Ok(Self {
            grid: WorldGrid::new(size)?,
            ledger: EventLedger::new(),
            generation: Generation::FIRST,
            last_reseed: None,
        })
    }

    fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            grid: self.grid.clone(),
            generation: Generation(self.generation.0.saturating_sub(1)),
            death_events: self.ledger.sorted_deaths(),
            resurrection_events: self.ledger.sorted_resurrections(),
            reseeded: self.last_reseed,
        }
    }
}

/// A hexagonal life simulation with death, resurrection and reseed history.
///
/// Created uninitialized with [`new()`](Simulation::new) and sized with
/// [`set_size()`](Simulation::set_size), or in one go with
/// [`create()`](Simulation::create) or
/// [`with_config()`](Simulation::with_config). Grid operations before a
/// size is set fail with [`SimError::NotInitialized`].
///
/// # Example
///
/// ```
/// use hexlife_engine::Simulation;
///
/// let mut sim = Simulation::create(5).unwrap();
/// sim.populate(2, 2).unwrap();
/// let snap = sim.step().unwrap();
/// assert!(!snap.grid.is_alive(2, 2).unwrap());
/// assert_eq!(snap.death_events.len(), 1);
/// assert_eq!(sim.generation().0, 2);
/// ```
pub struct Simulation {
    config: SimulationConfig,
    lifecycle: LifecycleEngine,
    reseed: ReseedStrategy,
    state: Option<WorldState>,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// An uninitialized simulation with the default configuration.
    pub fn new() -> Self {
        let config = SimulationConfig::default();
        Self {
            lifecycle: LifecycleEngine::new(config.resurrection_delay, config.parallel),
            reseed: ReseedStrategy::new(config.reseed_interval, config.seed),
            config,
            state: None,
            last_metrics: StepMetrics::default(),
        }
    }

    /// A simulation with an all-dead `size x size` grid and default rules.
    pub fn create(size: u32) -> Result<Self, SimError> {
        let mut sim = Self::new();
        sim.set_size(size)?;
        Ok(sim)
    }

    /// Build a simulation from a [`SimulationConfig`].
    ///
    /// Validates the configuration first. If `config.size` is set the grid
    /// is allocated immediately; otherwise the simulation waits for
    /// [`set_size()`](Simulation::set_size).
    pub fn with_config(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = config.size.map(WorldState::fresh).transpose()?;
        Ok(Self {
            lifecycle: LifecycleEngine::new(config.resurrection_delay, config.parallel),
            reseed: ReseedStrategy::new(config.reseed_interval, config.seed),
            config,
            state,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Allocate a fresh `size x size` grid with every cell dead and an
    /// empty ledger, restarting the counter at generation 1.
    ///
    /// Fails with [`SimError::InvalidSize`] for a zero or oversized side,
    /// leaving any existing state untouched.
    pub fn set_size(&mut self, size: u32) -> Result<(), SimError> {
        self.state = Some(WorldState::fresh(size)?);
        self.config.size = Some(size);
        self.last_metrics = StepMetrics::default();
        Ok(())
    }

    /// Set the cell at `(x, y)` alive.
    pub fn populate(&mut self, x: i32, y: i32) -> Result<(), SimError> {
        self.state_mut()?.grid.populate(x, y)
    }

    /// Set every cell in `cells` alive.
    ///
    /// All coordinates are checked before any cell changes, so an
    /// out-of-range entry leaves the grid untouched.
    pub fn populate_pattern(&mut self, cells: &[(i32, i32)]) -> Result<(), SimError> {
        let grid = &mut self.state_mut()?.grid;
        for &(x, y) in cells {
            grid.topology().check_bounds(Position::new(x, y))?;
        }
        for &(x, y) in cells {
            grid.populate(x, y)?;
        }
        Ok(())
    }

    /// Set each cell alive with probability one half, drawing from `rng`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SimError> {
        self.randomize_with(rng, DEFAULT_BIRTH_PROBABILITY)
    }

    /// Set each cell alive independently with probability `p`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, p: f64) -> Result<(), SimError> {
        self.state_mut()?.grid.randomize(rng, p)
    }

    /// Advance the simulation by one generation.
    ///
    /// Returns a snapshot of the committed state. Fails only with
    /// [`SimError::NotInitialized`]; once started, a step always completes.
    pub fn step(&mut self) -> Result<SimulationSnapshot, SimError> {
        let step_start = Instant::now();
        let state = self.state.as_mut().ok_or(SimError::NotInitialized)?;
        let now = state.generation;

        // 1. Judge every cell against the frozen previous generation.
        let verdicts = self.lifecycle.evaluate(&state.grid, &state.ledger);
        let evaluated = Instant::now();

        // 2. Build the next grid and ledger, then reseed against the
        //    pre-step grid.
        let Transition {
            grid: mut next_grid,
            ledger: mut next_ledger,
            tally,
        } = self
            .lifecycle
            .apply(&state.grid, &state.ledger, now, &verdicts);
        let reseeded = self
            .reseed
            .apply(now, &state.grid, &mut next_grid, &mut next_ledger);
        let merged = Instant::now();

        // 3. Commit.
        state.grid = next_grid;
        state.ledger = next_ledger;
        state.generation = now.next();
        state.last_reseed = reseeded;

        let mut metrics = StepMetrics {
            total_us: step_start.elapsed().as_micros() as u64,
            evaluate_us: (evaluated - step_start).as_micros() as u64,
            merge_us: (merged - evaluated).as_micros() as u64,
            live_cells: state.grid.live_count(),
            reseeded,
            ..StepMetrics::default()
        };
        metrics.record_tally(tally);

        debug!(
            generation = now.0,
            live = metrics.live_cells,
            births = metrics.births,
            deaths = metrics.deaths,
            resurrections = metrics.resurrections,
            exemptions = metrics.exemptions,
            reseeded = reseeded.is_some(),
            "generation committed"
        );

        let snapshot = state.snapshot();
        self.last_metrics = metrics;
        Ok(snapshot)
    }

    /// Step `generations` times and return the final snapshot.
    ///
    /// With `generations == 0` this is [`snapshot()`](Simulation::snapshot).
    pub fn run(&mut self, generations: u64) -> Result<SimulationSnapshot, SimError> {
        let mut last = self.snapshot()?;
        for _ in 0..generations {
            last = self.step()?;
        }
        Ok(last)
    }

    /// Return to generation 1 with an all-dead grid, an empty ledger and
    /// the reseed RNG restarted from `seed`.
    pub fn reset(&mut self, seed: u64) -> Result<(), SimError> {
        let size = self.state()?.grid.size();
        self.state = Some(WorldState::fresh(size)?);
        self.reseed.reseed_rng(seed);
        self.config.seed = seed;
        self.last_metrics = StepMetrics::default();
        Ok(())
    }

    /// Whether the cell at `(x, y)` is alive.
    pub fn is_alive(&self, x: i32, y: i32) -> Result<bool, SimError> {
        self.state()?.grid.is_alive(x, y)
    }

    /// Number of live hex neighbours of `(x, y)`.
    pub fn live_neighbour_count(&self, x: i32, y: i32) -> Result<u8, SimError> {
        self.state()?.grid.live_neighbour_count(x, y)
    }

    /// The next generation to be evaluated (1 before the first step).
    pub fn generation(&self) -> Generation {
        self.state
            .as_ref()
            .map_or(Generation::FIRST, |s| s.generation)
    }

    /// An owned copy of the committed state.
    pub fn snapshot(&self) -> Result<SimulationSnapshot, SimError> {
        Ok(self.state()?.snapshot())
    }

    /// The committed grid.
    pub fn grid(&self) -> Result<&WorldGrid, SimError> {
        Ok(&self.state()?.grid)
    }

    /// The committed ledger.
    pub fn ledger(&self) -> Result<&EventLedger, SimError> {
        Ok(&self.state()?.ledger)
    }

    /// Number of live cells.
    pub fn live_count(&self) -> Result<usize, SimError> {
        Ok(self.state()?.grid.live_count())
    }

    /// Grid side length, once set.
    pub fn size(&self) -> Option<u32> {
        self.state.as_ref().map(|s| s.grid.size())
    }

    /// Whether a grid size has been set.
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    fn state(&self) -> Result<&WorldState, SimError> {
        self.state.as_ref().ok_or(SimError::NotInitialized)
    }

    fn state_mut(&mut self) -> Result<&mut WorldState, SimError> {
        self.state.as_mut().ok_or(SimError::NotInitialized)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("size", &self.size())
            .field("generation", &self.generation())
            .field("live", &self.state.as_ref().map(|s| s.grid.live_count()))
            .field("seed", &self.config.seed)
            .field("reseed_interval", &self.reseed.interval())
            .field("resurrection_delay", &self.lifecycle.resurrection_delay())
            .field("parallel", &self.lifecycle.is_parallel())
            .finish()
    }
}
