//! Test fixtures and grid builders for hexlife development.
//!
//! Provides ASCII grid construction ([`grid_from_rows`]), configurations
//! that keep the reseed out of the way ([`no_reseed_config`]), and ready
//! scenarios for the lifecycle rules in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use hexlife_core::Position;
use hexlife_engine::SimulationConfig;
use hexlife_space::WorldGrid;

/// A reseed interval long enough that no test reaches it.
pub const NEVER_RESEED: u64 = 1_000_000;

/// Build a square grid from rows of `#` (alive) and `.` (dead).
///
/// Row `i` holds the cells with `y == i`; column `j` is `x == j`. Every row
/// must have the same length as the number of rows.
///
/// # Panics
///
/// Panics on a non-square layout or an unknown character.
pub fn grid_from_rows(rows: &[&str]) -> WorldGrid {
    let size = rows.len() as u32;
    let mut grid = WorldGrid::new(size).expect("at least one row");
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), rows.len(), "row {y} is not square");
        for (x, ch) in row.chars().enumerate() {
            match ch {
                '#' => grid
                    .set(Position::new(x as i32, y as i32), true)
                    .expect("in bounds"),
                '.' => {}
                other => panic!("unexpected cell character {other:?}"),
            }
        }
    }
    grid
}

/// Render a grid in the [`grid_from_rows`] layout, for assertion messages.
pub fn grid_to_rows(grid: &WorldGrid) -> Vec<String> {
    let size = grid.size() as i32;
    (0..size)
        .map(|y| {
            (0..size)
                .map(|x| match grid.is_alive(x, y) {
                    Ok(true) => '#',
                    _ => '.',
                })
                .collect()
        })
        .collect()
}

/// Default rules on a `size x size` grid with the reseed disabled in
/// practice.
pub fn no_reseed_config(size: u32) -> SimulationConfig {
    SimulationConfig {
        reseed_interval: NEVER_RESEED,
        ..SimulationConfig::with_size(size)
    }
}
