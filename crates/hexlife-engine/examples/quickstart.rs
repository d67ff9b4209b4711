//! Hexlife quickstart: seed the sample pattern and watch it evolve.
//!
//! Demonstrates:
//!   1. Building a Simulation from a SimulationConfig
//!   2. Installing a starter pattern
//!   3. Stepping and reading snapshots, metrics and the event ledger
//!   4. Resetting and randomizing
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use hexlife_engine::{patterns, snapshot_hash, Simulation, SimulationConfig};
use hexlife_space::WorldGrid;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const SIZE: u32 = 8;
const GENERATIONS: u64 = 12;
const SEED: u64 = 2024;

fn render(grid: &WorldGrid) -> String {
    let size = grid.size() as i32;
    let mut out = String::new();
    for y in 0..size {
        // Offset odd rows so the hex layout reads naturally.
        if y % 2 == 1 {
            out.push(' ');
        }
        for x in 0..size {
            out.push(if grid.is_alive(x, y).unwrap_or(false) { 'O' } else { '.' });
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut sim = Simulation::with_config(SimulationConfig {
        seed: SEED,
        ..SimulationConfig::with_size(SIZE)
    })?;
    sim.populate_pattern(patterns::SAMPLE)?;

    println!("generation 0 ({} live)", sim.live_count()?);
    print!("{}", render(sim.grid()?));

    for _ in 0..GENERATIONS {
        let snap = sim.step()?;
        let m = sim.last_metrics();
        println!(
            "\ngeneration {} ({} live, +{} born, -{} died, {} resurrected, {} exempt{})",
            snap.generation,
            snap.live_count(),
            m.births,
            m.deaths,
            m.resurrections,
            m.exemptions,
            match snap.reseeded {
                Some(p) => format!(", reseeded {p}"),
                None => String::new(),
            }
        );
        print!("{}", render(&snap.grid));
    }

    let ledger = sim.ledger()?;
    println!(
        "\nledger: {} deaths, {} resurrections",
        ledger.death_count(),
        ledger.resurrection_count()
    );
    for death in ledger.sorted_deaths() {
        println!("  {} died at generation {} ({})", death.position, death.generation, death.cause);
    }

    sim.reset(SEED)?;
    sim.randomize(&mut ChaCha8Rng::seed_from_u64(SEED))?;
    let snap = sim.run(GENERATIONS)?;
    println!(
        "\nrandom start: {} live after {} generations, hash {:016x}",
        snap.live_count(),
        snap.generation,
        snapshot_hash(&snap)
    );
    Ok(())
}
