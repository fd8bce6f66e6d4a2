//! The grid engine: pure functions over a [`Grid`](crate::core::Grid).
//!
//! - [`compact_and_merge_line`]: the single slide/merge primitive
//! - [`apply_move`]: runs the primitive over all four lines of a direction
//! - [`insert_random_tile`] / [`spawn_tile`]: seeded 2/4 spawns
//! - [`is_terminal`]: full grid with no adjacent equal pair
//!
//! Nothing here holds state or knows whether a game is over; that belongs
//! to [`Session`](crate::session::Session).

mod line;
mod moves;
mod spawn;
mod terminal;

pub use line::compact_and_merge_line;
pub use moves::{apply_move, can_move, legal_moves, MoveOutcome};
pub use spawn::{insert_random_tile, spawn_tile, Spawn, SPAWN_TWO_PROBABILITY};
pub use terminal::is_terminal;
