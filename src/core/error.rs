//! Error types.
//!
//! The engine itself has exactly one failure mode: an invalid best-of count.
//! Everything else it does is total over the closed `Move` enumeration.

use super::config::Mode;

/// Rejected match configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("best-of must be a positive odd integer, got {0}")]
    InvalidBestOf(i64),
}

/// Rejected session call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("operation not available in {mode} mode")]
    WrongMode { mode: Mode },

    #[error("match is complete; restart or reset to keep playing")]
    MatchComplete,
}
