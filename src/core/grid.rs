//! Grid module - the square board of tiles.
//!
//! The grid is N x N, stored as a flat row-major `Vec` for cache locality.
//! Coordinates are `(row, col)`, with row 0 at the top and column 0 on the left.
//! A tile value of 0 means the cell is empty.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{GameError, Result};

/// A tile value: 0 for empty, otherwise a power of two.
pub type Tile = u64;

/// Largest representable tile. Two of these never merge.
pub const MAX_TILE: Tile = 1 << 63;

/// One extracted row or column. Boards up to 16 wide stay on the stack.
pub type Line = SmallVec<[Tile; 16]>;

/// Which row or column to read or write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineRef {
    /// Row by index, read left to right.
    Row(usize),
    /// Column by index, read top to bottom.
    Column(usize),
}

/// Square grid of tiles.
///
/// Deserialization runs the same checks as [`Grid::from_rows`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    /// Flat array of tiles, row-major order (row * size + col)
    cells: Vec<Tile>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Tile>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GameError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        if raw.size == 0 {
            return Err(GameError::argument("grid must have at least one row"));
        }
        let expected = raw.size.checked_mul(raw.size);
        if expected != Some(raw.cells.len()) {
            return Err(GameError::argument(format!(
                "grid of size {} has {} cells",
                raw.size,
                raw.cells.len()
            )));
        }
        if let Some(idx) = raw.cells.iter().position(|&t| !is_valid_tile(t)) {
            return Err(GameError::argument(format!(
                "tile {} at index {idx} is not 0 or a power of two >= 2",
                raw.cells[idx]
            )));
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Rows must form a non-empty square and every tile must be 0 or a
    /// power of two no smaller than 2.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::argument("grid must have at least one row"));
        }
        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GameError::argument(format!(
                    "row {r} has {} tiles, expected {size}",
                    row.len()
                )));
            }
            for (c, &tile) in row.iter().enumerate() {
                if !is_valid_tile(tile) {
                    return Err(GameError::argument(format!(
                        "tile {tile} at ({r}, {c}) is not 0 or a power of two >= 2"
                    )));
                }
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Tile at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at `(row, col)`. Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Tile at a flat row-major index.
    #[must_use]
    pub fn get_flat(&self, idx: usize) -> Option<Tile> {
        self.cells.get(idx).copied()
    }

    /// Set tile at a flat row-major index. Returns false if out of bounds.
    pub fn set_flat(&mut self, idx: usize, tile: Tile) -> bool {
        match self.cells.get_mut(idx) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Flat row-major view of all tiles.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(<[Tile]>::to_vec).collect()
    }

    /// Extract a row (left to right) or column (top to bottom).
    ///
    /// # Panics
    ///
    /// Panics if the row or column index is not below [`size`](Self::size).
    #[must_use]
    pub fn line(&self, line: LineRef) -> Line {
        self.check_line(line);
        match line {
            LineRef::Row(r) => {
                let start = r * self.size;
                SmallVec::from_slice(&self.cells[start..start + self.size])
            }
            LineRef::Column(c) => (0..self.size)
                .map(|r| self.cells[r * self.size + c])
                .collect(),
        }
    }

    /// Write a row or column back, in the same orientation `line` reads it.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range or `tiles` is not exactly
    /// [`size`](Self::size) long.
    pub fn write_line(&mut self, line: LineRef, tiles: &[Tile]) {
        self.check_line(line);
        assert_eq!(tiles.len(), self.size, "line length must match grid size");
        match line {
            LineRef::Row(r) => {
                let start = r * self.size;
                self.cells[start..start + self.size].copy_from_slice(tiles);
            }
            LineRef::Column(c) => {
                for (r, &tile) in tiles.iter().enumerate() {
                    self.cells[r * self.size + c] = tile;
                }
            }
        }
    }

    fn check_line(&self, line: LineRef) {
        let (LineRef::Row(idx) | LineRef::Column(idx)) = line;
        assert!(idx < self.size, "{line:?} out of range for grid of size {}", self.size);
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&t| t != 0).count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cell_count() - self.occupied_count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&t| t != 0)
    }

    /// Sum of all tile values, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.cells.iter().fold(0u64, |acc, &t| acc.saturating_add(t))
    }

    /// Largest tile on the board (0 when empty).
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Clear the entire grid.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

fn is_valid_tile(tile: Tile) -> bool {
    tile == 0 || (tile >= 2 && tile.is_power_of_two())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().to_string().len();
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let tile = self.cells[row * self.size + col];
                if tile == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{tile:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
