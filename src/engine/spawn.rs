//! Random tile insertion.
//!
//! The RNG is always passed in. Sessions hand over their `GameRng`; tests
//! can use any seeded `rand::Rng`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::Grid;

/// Probability that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// A tile placed by [`spawn_tile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
///
/// The cell index and the tile value are two independent draws, in that
/// order. Returns `None` and leaves the grid alone when it is full.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<Spawn> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = if rng.gen_bool(SPAWN_TWO_PROBABILITY) { 2 } else { 4 };
    grid.set(row, col, value);

    Some(Spawn { row, col, value })
}

/// Return a copy of `grid` with one random tile inserted.
///
/// A full grid comes back unchanged.
///
/// ```
/// use rust_2048::core::Grid;
/// use rust_2048::engine::insert_random_tile;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let grid = insert_random_tile(&Grid::empty(), &mut rng);
/// assert_eq!(grid.count_tiles(), 1);
/// ```
#[must_use]
pub fn insert_random_tile<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    let mut next = *grid;
    spawn_tile(&mut next, rng);
    next
}
