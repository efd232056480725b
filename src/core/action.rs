//! Move representation: directions and the per-move outcome.
//!
//! A move is one of the four slide directions or one of two meta actions:
//! - `Restart` re-seeds the board as `initialize()` does
//! - `GenerateOnly` spawns a single tile without sliding anything
//!
//! Numeric codes follow the classic enumeration (Up = 1 through
//! GenerateOnly = 6) so front ends can map raw input onto moves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A move request.
///
/// ## Example
///
/// ```
/// use rust_2048::core::Direction;
///
/// let left: Direction = "left".parse().unwrap();
/// assert_eq!(left, Direction::Left);
/// assert_eq!(Direction::try_from(1u8).unwrap(), Direction::Up);
/// assert!(Direction::Left.is_slide());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Slide toward row 0.
    Up,
    /// Slide toward the last column.
    Right,
    /// Slide toward the last row.
    Down,
    /// Slide toward column 0.
    Left,
    /// Reset score and flag, then seed a fresh board.
    Restart,
    /// Spawn exactly one tile, if there is room.
    GenerateOnly,
}

impl Direction {
    /// The four slide directions.
    pub const SLIDES: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// True for Up/Right/Down/Left.
    #[must_use]
    pub fn is_slide(self) -> bool {
        matches!(
            self,
            Direction::Up | Direction::Right | Direction::Down | Direction::Left
        )
    }

    /// Numeric code of this move.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
            Direction::Left => 4,
            Direction::Restart => 5,
            Direction::GenerateOnly => 6,
        }
    }

    /// The slide in the opposite direction. Meta actions map to themselves.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            other => other,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Direction::Up),
            2 => Ok(Direction::Right),
            3 => Ok(Direction::Down),
            4 => Ok(Direction::Left),
            5 => Ok(Direction::Restart),
            6 => Ok(Direction::GenerateOnly),
            _ => Err(GameError::argument(format!("unknown direction code {code}"))),
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "right" | "r" => Ok(Direction::Right),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "restart" => Ok(Direction::Restart),
            "generate" | "generateonly" | "generate-only" => Ok(Direction::GenerateOnly),
            other => Err(GameError::argument(format!("unknown direction {other:?}"))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Right => "Right",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Restart => "Restart",
            Direction::GenerateOnly => "GenerateOnly",
        };
        f.write_str(name)
    }
}

/// What a single `apply_move` call did.
///
/// The two flags are independent: `GenerateOnly` can spawn without a
/// player-driven change, and a slide on a lost board does neither.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveResult {
    /// Tiles slid or merged because of the request.
    pub changed: bool,
    /// At least one new tile was placed.
    pub spawned: bool,
}

impl MoveResult {
    /// Neither changed nor spawned.
    pub const NOOP: MoveResult = MoveResult {
        changed: false,
        spawned: false,
    };

    /// Create a result.
    #[must_use]
    pub const fn new(changed: bool, spawned: bool) -> Self {
        Self { changed, spawned }
    }

    /// True if anything happened.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        self.changed || self.spawned
    }
}
