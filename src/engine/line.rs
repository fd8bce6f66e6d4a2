//! The line primitive every move is built from.

use crate::core::{Line, GRID_SIZE, MAX_TILE};

/// True if `a` and `b` combine into one tile.
///
/// Two `MAX_TILE` tiles have no representable sum, so they stay apart.
pub(crate) fn merges_with(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// Slide one line toward index 0 and merge equal neighbours.
///
/// Zeros are dropped first, then the tiles are scanned left to right: an
/// equal pair becomes one tile of double value and the consumed tile is
/// skipped, so a tile merges at most once per call (`[2, 2, 2, 0]` gives
/// `[4, 2, 0, 0]`). A pair of `MAX_TILE` tiles does not merge. The result is
/// padded with zeros back to four cells.
///
/// Returns the new line and the sum of the tiles created by merges.
///
/// ```
/// use rust_2048::engine::compact_and_merge_line;
///
/// assert_eq!(compact_and_merge_line([2, 0, 2, 0]), ([4, 0, 0, 0], 4));
/// assert_eq!(compact_and_merge_line([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
/// ```
#[must_use]
pub fn compact_and_merge_line(line: Line) -> (Line, u64) {
    let mut out = [0; GRID_SIZE];
    let mut len = 0;
    let mut points = 0;
    let mut pending: Option<u32> = None;

    for tile in line.into_iter().filter(|&v| v != 0) {
        match pending {
            Some(prev) if merges_with(prev, tile) => {
                let merged = prev << 1;
                out[len] = merged;
                len += 1;
                points += u64::from(merged);
                pending = None;
            }
            Some(prev) => {
                out[len] = prev;
                len += 1;
                pending = Some(tile);
            }
            None => pending = Some(tile),
        }
    }

    if let Some(prev) = pending {
        out[len] = prev;
    }

    (out, points)
}
