//! Error types for engine construction and input conversion.
//!
//! The engine has a narrow failure surface. Moves and restarts are total over
//! valid state; only configuration and externally supplied values can be
//! rejected. A full grid on a spawn request is not an error.

use derive_more::{Display, Error};

/// Errors raised by the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A board size or spawn policy that cannot produce a playable game.
    #[display("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the configuration.
        reason: String,
    },
    /// A value supplied by the caller that does not map onto the engine's types.
    #[display("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: String,
    },
}

impl GameError {
    /// Build an [`GameError::InvalidConfiguration`].
    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Build an [`GameError::InvalidArgument`].
    pub fn argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
