//! Hexagonal neighbourhood over a bounded square grid.

use hexlife_core::{Position, SimError};
use smallvec::SmallVec;

/// Hex offsets `(dx, dy)` applied to a position, in evaluation order.
///
/// The set is the axial scheme used by the automaton. It is not closed under
/// negation, so adjacency is not symmetric: `q` may count `p` as a
/// neighbour while `p` does not count `q`.
pub const HEX_OFFSETS: [(i32, i32); 6] = [(0, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0)];

/// Neighbour model for an `S x S` grid with a hard boundary.
///
/// Each position has at most six neighbours, obtained by applying
/// [`HEX_OFFSETS`] and dropping results outside `[0, S)` on either axis.
/// There is no wraparound.
///
/// Canonical ordering is x-then-y: outer loop over x, inner loop over y,
/// so the rank of `(x, y)` is `x * S + y`.
///
/// # Examples
///
/// ```
/// use hexlife_core::Position;
/// use hexlife_space::HexNeighbourhood;
///
/// let hex = HexNeighbourhood::new(5).unwrap();
/// assert_eq!(hex.cell_count(), 25);
///
/// // Interior cell has 6 neighbours.
/// assert_eq!(hex.neighbours(Position::new(2, 2)).len(), 6);
///
/// // The origin keeps only (0,1) and (1,0).
/// assert_eq!(hex.neighbours(Position::new(0, 0)).len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexNeighbourhood {
    size: u32,
}

impl HexNeighbourhood {
    /// Largest accepted side length: the cell count must fit in `u32`.
    pub const MAX_SIZE: u32 = u16::MAX as u32;

    /// Create the neighbourhood for a `size x size` grid.
    ///
    /// Returns `Err(SimError::InvalidSize)` if `size` is 0 or exceeds
    /// [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn new(size: u32) -> Result<Self, SimError> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(SimError::InvalidSize {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// Side length of the grid.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Whether `p` lies on the grid.
    pub fn contains(&self, p: Position) -> bool {
        p.in_bounds(self.size)
    }

    /// Return `p` unchanged if it lies on the grid, else `OutOfRange`.
    pub fn check_bounds(&self, p: Position) -> Result<Position, SimError> {
        if self.contains(p) {
            Ok(p)
        } else {
            Err(SimError::OutOfRange {
                x: p.x,
                y: p.y,
                size: self.size,
            })
        }
    }

    /// In-bounds hex neighbours of `p`, in [`HEX_OFFSETS`] order.
    ///
    /// Offsets that leave the grid are silently dropped. Positions that are
    /// themselves off the grid still get their in-bounds neighbours.
    pub fn neighbours(&self, p: Position) -> SmallVec<[Position; 6]> {
        HEX_OFFSETS
            .iter()
            .map(|&(dx, dy)| p.offset(dx, dy))
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// Position of `p` in the canonical ordering, or `None` if off the grid.
    pub fn canonical_rank(&self, p: Position) -> Option<usize> {
        if self.contains(p) {
            Some(p.x as usize * self.size as usize + p.y as usize)
        } else {
            None
        }
    }

    /// Inverse of [`canonical_rank`](Self::canonical_rank).
    ///
    /// `rank` must be below [`cell_count`](Self::cell_count).
    pub fn position_at(&self, rank: usize) -> Position {
        let size = self.size as usize;
        // MAX_SIZE keeps both quotient and remainder inside i32.
        Position::new((rank / size) as i32, (rank % size) as i32)
    }

    /// All positions in canonical order.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cell_count()).map(move |rank| self.position_at(rank))
    }
}
