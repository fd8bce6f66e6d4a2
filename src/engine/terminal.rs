//! Terminal-state detection.

use super::line::merges_with;
use crate::core::{Grid, GRID_SIZE};

/// True iff the grid is full and no two orthogonally adjacent cells match.
///
/// Scans cells row-major and stops at the first empty cell or mergeable
/// right/down neighbour; a grid that passes the scan has had all 12
/// horizontal and 12 vertical pairs compared. Adjacent `MAX_TILE` tiles
/// cannot merge and so do not keep the game alive.
#[must_use]
pub fn is_terminal(grid: &Grid) -> bool {
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let value = grid.get(r, c);
            if value == 0 {
                return false;
            }
            if c + 1 < GRID_SIZE && merges_with(value, grid.get(r, c + 1)) {
                return false;
            }
            if r + 1 < GRID_SIZE && merges_with(value, grid.get(r + 1, c)) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, MAX_TILE};
    use crate::engine::can_move;

    const CHECKERBOARD: [[u32; 4]; 4] = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];

    #[test]
    fn test_checkerboard_is_terminal() {
        let grid = Grid::from_rows(CHECKERBOARD).unwrap();
        assert!(is_terminal(&grid));
    }

    #[test]
    fn test_any_hole_is_not_terminal() {
        for r in 0..4 {
            for c in 0..4 {
                let mut rows = CHECKERBOARD;
                rows[r][c] = 0;
                let grid = Grid::from_rows(rows).unwrap();
                assert!(!is_terminal(&grid), "hole at ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_horizontal_pair_in_last_row() {
        let mut rows = CHECKERBOARD;
        rows[3][3] = 4; // matches rows[3][2]
        rows[2][3] = 8; // keep the vertical neighbour distinct
        let grid = Grid::from_rows(rows).unwrap();
        assert!(!is_terminal(&grid));
    }

    #[test]
    fn test_vertical_pair_in_last_column() {
        let mut rows = CHECKERBOARD;
        rows[3][3] = 4; // matches rows[2][3]
        rows[3][2] = 8; // keep the horizontal neighbour distinct
        let grid = Grid::from_rows(rows).unwrap();
        assert!(!is_terminal(&grid));
    }

    #[test]
    fn test_empty_grid_not_terminal() {
        assert!(!is_terminal(&Grid::empty()));
    }

    #[test]
    fn test_ceiling_pair_does_not_merge() {
        let mut rows = CHECKERBOARD;
        rows[0][0] = MAX_TILE;
        rows[0][1] = MAX_TILE;
        let grid = Grid::from_rows(rows).unwrap();
        assert!(is_terminal(&grid));

        rows[0][1] = MAX_TILE >> 1;
        rows[1][1] = MAX_TILE >> 1;
        let grid = Grid::from_rows(rows).unwrap();
        assert!(!is_terminal(&grid));
    }

    #[test]
    fn test_terminal_matches_no_legal_move() {
        let grids = [
            CHECKERBOARD,
            [[2, 4, 8, 16], [32, 64, 128, 256], [512, 1024, 2048, 4096], [8, 16, 32, 64]],
            [[2, 4, 8, 16], [32, 64, 128, 256], [512, 1024, 2048, 4096], [8, 16, 32, 4096]],
            [[2, 2, 4, 8], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]],
            [[MAX_TILE, MAX_TILE, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]],
        ];
        for rows in grids {
            let grid = Grid::from_rows(rows).unwrap();
            let stuck = Direction::ALL.into_iter().all(|d| !can_move(&grid, d));
            assert_eq!(is_terminal(&grid), stuck, "{grid}");
        }
    }
}
