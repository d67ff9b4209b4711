//! Fixed-size boolean cell grid.

use hexlife_core::{Position, SimError};
use rand::Rng;

use crate::hex::HexNeighbourhood;

/// Square grid of alive/dead cells addressed by [`Position`].
///
/// Storage is a flat `Vec<bool>` in the canonical x-then-y order of the
/// owning [`HexNeighbourhood`]. The side length is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldGrid {
    topology: HexNeighbourhood,
    cells: Vec<bool>,
}

impl WorldGrid {
    /// Allocate a `size x size` grid with every cell dead.
    ///
    /// Returns `Err(SimError::InvalidSize)` for a zero or oversized side.
    pub fn new(size: u32) -> Result<Self, SimError> {
        let topology = HexNeighbourhood::new(size)?;
        Ok(Self::with_topology(topology))
    }

    /// Allocate an all-dead grid over an existing neighbourhood.
    pub fn with_topology(topology: HexNeighbourhood) -> Self {
        Self {
            cells: vec![false; topology.cell_count()],
            topology,
        }
    }

    /// Side length.
    pub fn size(&self) -> u32 {
        self.topology.size()
    }

    /// The neighbour model this grid delegates to.
    pub fn topology(&self) -> &HexNeighbourhood {
        &self.topology
    }

    /// Cell states in canonical order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Set the cell at `(x, y)` alive.
    pub fn populate(&mut self, x: i32, y: i32) -> Result<(), SimError> {
        self.set(Position::new(x, y), true)
    }

    /// Set the cell at `p` to `alive`.
    pub fn set(&mut self, p: Position, alive: bool) -> Result<(), SimError> {
        let rank = self.rank(p)?;
        self.cells[rank] = alive;
        Ok(())
    }

    /// Set the cell at canonical `rank`. Ranks past the end are ignored.
    pub fn set_rank(&mut self, rank: usize, alive: bool) {
        if let Some(cell) = self.cells.get_mut(rank) {
            *cell = alive;
        }
    }

    /// Whether the cell at `(x, y)` is alive.
    pub fn is_alive(&self, x: i32, y: i32) -> Result<bool, SimError> {
        let rank = self.rank(Position::new(x, y))?;
        Ok(self.cells[rank])
    }

    /// Whether the cell at canonical `rank` is alive (`false` past the end).
    pub fn is_alive_rank(&self, rank: usize) -> bool {
        self.cells.get(rank).copied().unwrap_or(false)
    }

    /// Number of live hex neighbours of `(x, y)`, in `0..=6`.
    pub fn live_neighbour_count(&self, x: i32, y: i32) -> Result<u8, SimError> {
        let p = self.topology.check_bounds(Position::new(x, y))?;
        Ok(self.count_live_neighbours(p))
    }

    /// Number of live hex neighbours of `p` without a bounds check on `p`.
    pub fn count_live_neighbours(&self, p: Position) -> u8 {
        self.topology
            .neighbours(p)
            .into_iter()
            .filter_map(|n| self.topology.canonical_rank(n))
            .filter(|&rank| self.cells[rank])
            .count() as u8
    }

    /// Set each cell alive independently with probability `p`.
    ///
    /// Cells are drawn in canonical order, so a seeded `rng` reproduces the
    /// same grid.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, p: f64) -> Result<(), SimError> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(SimError::InvalidProbability { p });
        }
        for cell in &mut self.cells {
            *cell = rng.random_bool(p);
        }
        Ok(())
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live positions in canonical order.
    pub fn live_positions(&self) -> Vec<Position> {
        self.positions_where(true)
    }

    /// Dead positions in canonical order.
    pub fn dead_positions(&self) -> Vec<Position> {
        self.positions_where(false)
    }

    fn positions_where(&self, alive: bool) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == alive)
            .map(|(rank, _)| self.topology.position_at(rank))
            .collect()
    }

    fn rank(&self, p: Position) -> Result<usize, SimError> {
        self.topology
            .canonical_rank(p)
            .ok_or(SimError::OutOfRange {
                x: p.x,
                y: p.y,
                size: self.size(),
            })
    }
}
