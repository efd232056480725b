//! Line merge: collapse one row or column toward an edge.
//!
//! The merge is a pure function over an owned copy of the line:
//!
//! 1. Compact: drop empty cells, keeping order.
//! 2. Merge: walk the compacted tiles once from the target edge. Two equal
//!    neighbours become one tile of double value; the result does not merge
//!    again in the same pass, so `[2, 2, 2, 2]` becomes `[4, 4]`, never `[8]`.
//! 3. Pad with empty cells back to the original length.
//!
//! Merging toward the end of a line is the same algorithm run over the
//! reversed line, with the output reversed back.
//!
//! Tiles at [`MAX_TILE`] are final: doubling them would overflow, so a pair
//! of them stays side by side.

use smallvec::SmallVec;

use crate::core::grid::{Line, Tile, MAX_TILE};

/// Which end of the line tiles slide toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Toward {
    /// Toward index 0 (Left on rows, Up on columns).
    Start,
    /// Toward the last index (Right on rows, Down on columns).
    End,
}

/// Output of [`merge_line`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedLine {
    /// The collapsed line, same length and orientation as the input.
    pub tiles: Line,
    /// Output differs from input at some position.
    pub changed: bool,
    /// Sum of the values produced by merges in this line.
    pub score: u64,
}

/// True if `a` and `b` combine into one tile.
#[inline]
#[must_use]
pub fn can_merge(a: Tile, b: Tile) -> bool {
    a == b && a != 0 && a < MAX_TILE
}

/// Collapse `input` toward `toward`.
///
/// ## Example
///
/// ```
/// use rust_2048::rules::{merge_line, Toward};
///
/// let merged = merge_line(&[0, 0, 2, 2], Toward::Start);
/// assert_eq!(merged.tiles.as_slice(), &[4, 0, 0, 0]);
/// assert!(merged.changed);
/// assert_eq!(merged.score, 4);
/// ```
#[must_use]
pub fn merge_line(input: &[Tile], toward: Toward) -> MergedLine {
    let dense: Line = match toward {
        Toward::Start => input.iter().copied().filter(|&t| t != 0).collect(),
        Toward::End => input.iter().rev().copied().filter(|&t| t != 0).collect(),
    };

    let mut tiles: Line = SmallVec::with_capacity(input.len());
    let mut score: u64 = 0;
    let mut i = 0;
    while i < dense.len() {
        if i + 1 < dense.len() && can_merge(dense[i], dense[i + 1]) {
            let doubled = dense[i] << 1;
            tiles.push(doubled);
            score = score.saturating_add(doubled);
            // Skip the partner; the doubled tile is final for this pass
            i += 2;
        } else {
            tiles.push(dense[i]);
            i += 1;
        }
    }
    tiles.resize(input.len(), 0);

    if toward == Toward::End {
        tiles.reverse();
    }

    let changed = tiles.as_slice() != input;
    MergedLine {
        tiles,
        changed,
        score,
    }
}
