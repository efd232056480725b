//! Loss check: is any legal move left?
//!
//! The board is terminal when no cell is empty and no two axis-adjacent
//! cells hold the same value. This is a full O(N^2) rescan on every call.
//! Equal neighbours count only when they can still merge, so a board stuck
//! on [`MAX_TILE`](crate::core::grid::MAX_TILE) pairs is terminal.

use super::merge::can_merge;
use crate::core::grid::Grid;

/// True iff no move in any direction can change `grid`.
#[must_use]
pub fn is_terminal(grid: &Grid) -> bool {
    let size = grid.size();
    let cells = grid.cells();
    for row in 0..size {
        for col in 0..size {
            let tile = cells[row * size + col];
            if tile == 0 {
                return false;
            }
            // Checking right and down neighbours covers every adjacent pair.
            if col + 1 < size {
                let right = cells[row * size + col + 1];
                if right == 0 || can_merge(tile, right) {
                    return false;
                }
            }
            if row + 1 < size {
                let below = cells[(row + 1) * size + col];
                if below == 0 || can_merge(tile, below) {
                    return false;
                }
            }
        }
    }
    true
}
