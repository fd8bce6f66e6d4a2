//! Directional moves.
//!
//! Every direction runs the same line primitive. Only the orientation
//! differs: which axis the lines run along, and whether a line is read
//! back to front so that "toward index 0" means toward the chosen edge.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::line::compact_and_merge_line;
use crate::core::{Direction, Grid, Line, GRID_SIZE};

/// Result of sliding a grid in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The grid after the move (no tile spawned).
    pub grid: Grid,
    /// Sum of every tile created by a merge during this move.
    pub score_delta: u64,
    /// True iff `grid` differs from the input in any cell.
    pub changed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Rows,
    Columns,
}

/// How a direction maps grid cells onto lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Orientation {
    axis: Axis,
    reversed: bool,
}

impl Orientation {
    const fn of(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self {
                axis: Axis::Rows,
                reversed: false,
            },
            Direction::Right => Self {
                axis: Axis::Rows,
                reversed: true,
            },
            Direction::Up => Self {
                axis: Axis::Columns,
                reversed: false,
            },
            Direction::Down => Self {
                axis: Axis::Columns,
                reversed: true,
            },
        }
    }

    fn read(self, grid: &Grid, index: usize) -> Line {
        let mut line = match self.axis {
            Axis::Rows => grid.row(index),
            Axis::Columns => grid.column(index),
        };
        if self.reversed {
            line.reverse();
        }
        line
    }

    fn write(self, grid: &mut Grid, index: usize, mut line: Line) {
        if self.reversed {
            line.reverse();
        }
        for (i, value) in line.into_iter().enumerate() {
            match self.axis {
                Axis::Rows => grid.set(index, i, value),
                Axis::Columns => grid.set(i, index, value),
            }
        }
    }
}

/// Slide and merge every line of `grid` toward `direction`.
///
/// The input is left untouched. `changed` compares the whole resulting grid
/// against the input; adding `score_delta` to a running total is up to the
/// caller.
///
/// ```
/// use rust_2048::core::{Direction, Grid};
/// use rust_2048::engine::apply_move;
///
/// let grid = Grid::from_rows([[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let outcome = apply_move(&grid, Direction::Right);
/// assert_eq!(outcome.grid.row(0), [0, 0, 0, 4]);
/// assert_eq!(outcome.score_delta, 4);
/// assert!(outcome.changed);
/// ```
#[must_use]
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveOutcome {
    let orientation = Orientation::of(direction);
    let mut next = *grid;
    let mut score_delta = 0u64;

    for index in 0..GRID_SIZE {
        let (line, points) = compact_and_merge_line(orientation.read(grid, index));
        score_delta += points;
        orientation.write(&mut next, index, line);
    }

    MoveOutcome {
        grid: next,
        score_delta,
        changed: next != *grid,
    }
}

/// True if moving in `direction` would change the grid.
#[must_use]
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    apply_move(grid, direction).changed
}

/// Directions that would change the grid, in `Direction::ALL` order.
#[must_use]
pub fn legal_moves(grid: &Grid) -> SmallVec<[Direction; 4]> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(grid, dir))
        .collect()
}
