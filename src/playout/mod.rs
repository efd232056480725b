//! Headless play for exercising the engine end to end.
//!
//! ## Overview
//!
//! - **Policy**: chooses the next move for a game in progress
//! - **PlayoutRunner**: plays fresh games to completion
//! - **Trajectory**: records every move and the final position
//!
//! ## Usage
//!
//! ```
//! use rust_2048::core::GameConfig;
//! use rust_2048::playout::{PlayoutConfig, PlayoutRunner, RandomPolicy};
//!
//! let runner = PlayoutRunner::new(GameConfig::classic(), PlayoutConfig::default()).unwrap();
//! let trajectory = runner.play_game(&mut RandomPolicy::new(1), 42).unwrap();
//! assert!(trajectory.lost);
//! ```

pub mod policy;
pub mod runner;
pub mod trajectory;

pub use policy::{CyclePolicy, Policy, RandomPolicy};
pub use runner::{PlayoutConfig, PlayoutRunner};
pub use trajectory::{Step, Trajectory};
