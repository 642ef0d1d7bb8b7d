//! Match and session configuration.
//!
//! - `BestOf`: a validated best-of-N match format
//! - `Mode`: single-player against the computer, or local two-player
//! - `SessionConfig`: combines mode, best-of and RNG seed

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// A best-of-N match format. `N` is always a positive odd integer.
///
/// ```
/// use rust_rps::core::BestOf;
///
/// let format = BestOf::new(5).unwrap();
/// assert_eq!(format.rounds(), 5);
/// assert_eq!(format.target(), 3);
///
/// assert!(BestOf::new(4).is_err());
/// assert!(BestOf::new(-3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BestOf(u32);

impl BestOf {
    /// Validate a best-of count.
    pub fn new(n: i64) -> Result<Self, ConfigError> {
        if n <= 0 || n % 2 == 0 {
            return Err(ConfigError::InvalidBestOf(n));
        }
        u32::try_from(n)
            .map(Self)
            .map_err(|_| ConfigError::InvalidBestOf(n))
    }

    /// The `N` in best-of-N.
    #[must_use]
    pub const fn rounds(self) -> u32 {
        self.0
    }

    /// Wins needed to take the match: `N / 2 + 1`.
    #[must_use]
    pub const fn target(self) -> u32 {
        self.0 / 2 + 1
    }
}

impl std::fmt::Display for BestOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "best-of-{} (first to {})", self.0, self.target())
    }
}

/// Play mode of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// One human against the computer opponent.
    #[default]
    SinglePlayer,
    /// Two humans sharing one front end.
    LocalTwoPlayer,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::SinglePlayer => f.write_str("single-player"),
            Mode::LocalTwoPlayer => f.write_str("local two-player"),
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Play mode (default: single-player).
    pub mode: Mode,

    /// Best-of count. `None` for an unbounded match.
    /// Signed so out-of-range input reaches `BestOf::new` and is rejected
    /// there. Validated when the session is created.
    pub best_of: Option<i64>,

    /// Seed for the opponent's random source.
    /// Same seed produces the same computer moves.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::SinglePlayer,
            best_of: None,
            seed: 42,
        }
    }
}

impl SessionConfig {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_best_of(mut self, n: i64) -> Self {
        self.best_of = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
