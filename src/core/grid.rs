//! The 4×4 puzzle grid.
//!
//! Cells hold tile values directly: 0 is empty, anything else is a power of
//! two no smaller than 2. The only ways to obtain a `Grid` are
//! [`Grid::empty`] and the validating [`Grid::from_rows`] (also used by
//! `Deserialize`), so every `Grid` in the program satisfies the invariant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::GridError;

/// Side length of the grid.
pub const GRID_SIZE: usize = 4;

/// One row or column, ordered so that index 0 is the edge tiles slide toward.
pub type Line = [u32; GRID_SIZE];

/// Raw row-major cell values.
pub type Rows = [Line; GRID_SIZE];

/// Largest tile a cell can hold.
///
/// Two `MAX_TILE` tiles never merge, so the engine cannot produce a value
/// outside `2..=MAX_TILE`.
pub const MAX_TILE: u32 = 1 << 31;

/// A `(row, col)` cell position.
pub type Cell = (usize, usize);

/// A 4×4 grid of tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Rows", into = "Rows")]
pub struct Grid {
    cells: Rows,
}

impl Grid {
    /// An all-empty grid.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from row-major values, rejecting any non-zero cell that
    /// is not a power of two of at least 2.
    pub fn from_rows(rows: Rows) -> Result<Self, GridError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Row-major cell values.
    #[must_use]
    pub const fn rows(&self) -> &Rows {
        &self.cells
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `0..4`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Row `r`, left to right.
    #[must_use]
    pub fn row(&self, r: usize) -> Line {
        self.cells[r]
    }

    /// Column `c`, top to bottom.
    #[must_use]
    pub fn column(&self, c: usize) -> Line {
        std::array::from_fn(|r| self.cells[r][c])
    }

    /// Write a cell. Callers inside the crate only ever store tile values
    /// produced by merging or spawning, which keeps the invariant.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(value == 0 || value.is_power_of_two(), "invalid tile value {value}");
        self.cells[row][col] = value;
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Cell; GRID_SIZE * GRID_SIZE]> {
        Self::positions().filter(|&(r, c)| self.cells[r][c] == 0).collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn count_tiles(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.count_empty()
    }

    /// True if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Largest tile on the grid (0 for an empty grid).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values. Moves never change it.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    fn positions() -> impl Iterator<Item = Cell> {
        (0..GRID_SIZE).flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
    }
}

/// 0 (empty) or a power of two in `2..=MAX_TILE`.
#[must_use]
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

impl TryFrom<Rows> for Grid {
    type Error = GridError;

    fn try_from(rows: Rows) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Rows {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

/// Renders four right-aligned rows, `.` for empty cells.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().max(1).to_string().len();

        for (r, line) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &value) in line.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows([[2, 0, 0, 4], [0, 8, 0, 0], [0, 0, 0, 0], [16, 0, 2, 0]]).unwrap()
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty();
        assert_eq!(grid.count_empty(), 16);
        assert_eq!(grid.count_tiles(), 0);
        assert_eq!(grid.max_tile(), 0);
        assert_eq!(grid.tile_sum(), 0);
        assert!(!grid.is_full());
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn test_from_rows_rejects_bad_tiles() {
        let err = Grid::from_rows([[2, 0, 0, 0], [0, 3, 0, 0], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidTile {
                row: 1,
                col: 1,
                value: 3,
            }
        );

        // 1 is a power of two but never a tile
        assert!(Grid::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
        assert!(Grid::from_rows([[MAX_TILE + 2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
        assert!(Grid::from_rows([[MAX_TILE, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_ok());
        assert!(is_valid_tile(MAX_TILE));
        assert!(!is_valid_tile(u32::MAX));
    }

    #[test]
    fn test_accessors() {
        let grid = sample();
        assert_eq!(grid.get(0, 3), 4);
        assert_eq!(grid.row(3), [16, 0, 2, 0]);
        assert_eq!(grid.column(0), [2, 0, 0, 16]);
        assert_eq!(grid.count_tiles(), 5);
        assert_eq!(grid.max_tile(), 16);
        assert_eq!(grid.tile_sum(), 32);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = sample();
        let empty = grid.empty_cells();
        assert_eq!(empty.len(), 11);
        assert_eq!(empty[0], (0, 1));
        assert_eq!(empty[1], (0, 2));
        assert_eq!(empty[2], (1, 0));
        assert_eq!(*empty.last().unwrap(), (3, 3));
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0, 1024, 0, 0], [0; 4], [0, 0, 0, 4]]).unwrap();
        let expected = "   2    .    .    .\n   . 1024    .    .\n   .    .    .    .\n   .    .    .    4";
        assert_eq!(grid.to_string(), expected);
        assert_eq!(Grid::empty().to_string().lines().next(), Some(". . . ."));
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());

        let bad = "[[3,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]]";
        assert!(serde_json::from_str::<Grid>(bad).is_err());
    }
}
