//! Strongly-typed grid positions and the generation counter.

use std::fmt;

/// A cell address on the square grid, 0-indexed.
///
/// `x` selects the row and `y` the column; canonical ordering is x-then-y
/// (outer loop over x, inner loop over y). Coordinates are signed so that
/// neighbour offsets can step off the grid before being filtered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index.
    pub x: i32,
    /// Column index.
    pub y: i32,
}

impl Position {
    /// Construct a position from its row and column.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Apply a `(dx, dy)` offset. The result may lie outside any grid.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether `0 <= x < size` and `0 <= y < size`.
    pub fn in_bounds(self, size: u32) -> bool {
        let size = i64::from(size);
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        x >= 0 && x < size && y >= 0 && y < size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Monotonic generation counter.
///
/// A fresh simulation starts at [`Generation::FIRST`] and the counter is
/// incremented once per committed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation evaluated by the first step.
    pub const FIRST: Generation = Generation(1);

    /// The following generation.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Generations elapsed since `earlier`, or `None` if `earlier` is later.
    pub fn since(self, earlier: Generation) -> Option<u64> {
        self.0.checked_sub(earlier.0)
    }

    /// Whether this generation is a positive multiple of `interval`.
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval != 0 && self.0 != 0 && self.0 % interval == 0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn in_bounds_rejects_negative_and_overflow() {
        assert!(Position::new(0, 0).in_bounds(3));
        assert!(Position::new(2, 2).in_bounds(3));
        assert!(!Position::new(-1, 0).in_bounds(3));
        assert!(!Position::new(0, 3).in_bounds(3));
        assert!(!Position::new(0, 0).in_bounds(0));
    }

    #[test]
    fn offset_can_leave_grid() {
        let p = Position::new(0, 0).offset(-1, 1);
        assert_eq!(p, Position::new(-1, 1));
        assert!(!p.in_bounds(5));
    }

    #[test]
    fn generation_arithmetic() {
        let g = Generation::FIRST;
        assert_eq!(g.next(), Generation(2));
        assert_eq!(Generation(7).since(Generation(1)), Some(6));
        assert_eq!(Generation(1).since(Generation(7)), None);
    }

    #[test]
    fn multiples_of_interval() {
        assert!(Generation(4).is_multiple_of(4));
        assert!(Generation(12).is_multiple_of(4));
        assert!(!Generation(6).is_multiple_of(4));
        assert!(!Generation(0).is_multiple_of(4));
        assert!(!Generation(4).is_multiple_of(0));
    }

    proptest! {
        #[test]
        fn in_bounds_matches_range_check(x in -4i32..12, y in -4i32..12, size in 0u32..10) {
            let expected = x >= 0 && y >= 0 && (x as u32) < size && (y as u32) < size;
            prop_assert_eq!(Position::new(x, y).in_bounds(size), expected);
        }
    }
}
