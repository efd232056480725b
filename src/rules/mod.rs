//! Pure rule algorithms.
//!
//! - `merge`: collapse one row or column toward an edge
//! - `loss`: exhaustive scan for any remaining legal move
//! - `spawn`: place new 2/4 tiles in random empty cells
//!
//! `GameState` orchestrates these; none of them owns any state.

pub mod loss;
pub mod merge;
pub mod spawn;

pub use loss::is_terminal;
pub use merge::{can_merge, merge_line, MergedLine, Toward};
pub use spawn::{Spawn, Spawner};
