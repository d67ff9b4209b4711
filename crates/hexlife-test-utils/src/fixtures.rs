//! Ready-made simulations for lifecycle scenarios.
//!
//! - [`isolated_cell`]: one live cell at the centre of an empty grid, no
//!   reseed. It dies of underpopulation in generation 1.
//! - [`crowded_cell`]: a live cell with all six hex neighbours alive.
//! - [`sample_pattern`]: the five-cell sample pattern on a grid of `size`.

use hexlife_core::Position;
use hexlife_engine::{patterns, Simulation, SimulationConfig};
use hexlife_space::HEX_OFFSETS;

use crate::no_reseed_config;

/// A `size x size` simulation with one live cell at the centre and the
/// reseed disabled. Returns the simulation and the cell's position.
pub fn isolated_cell(size: u32) -> (Simulation, Position) {
    let centre = Position::new(size as i32 / 2, size as i32 / 2);
    let mut sim = Simulation::with_config(no_reseed_config(size)).expect("valid config");
    sim.populate(centre.x, centre.y).expect("centre in bounds");
    (sim, centre)
}

/// A 5x5 simulation with the centre cell and all six of its hex
/// neighbours alive, reseed disabled.
pub fn crowded_cell() -> (Simulation, Position) {
    let centre = Position::new(2, 2);
    let mut sim = Simulation::with_config(no_reseed_config(5)).expect("valid config");
    sim.populate(centre.x, centre.y).expect("centre in bounds");
    for (dx, dy) in HEX_OFFSETS {
        let n = centre.offset(dx, dy);
        sim.populate(n.x, n.y).expect("neighbour in bounds");
    }
    (sim, centre)
}

/// The sample pattern installed on a `size x size` grid with `config`'s
/// other settings.
pub fn sample_pattern(size: u32, config: SimulationConfig) -> Simulation {
    let mut sim = Simulation::with_config(SimulationConfig {
        size: Some(size),
        ..config
    })
    .expect("valid config");
    sim.populate_pattern(patterns::SAMPLE)
        .expect("sample pattern fits");
    sim
}
