//! Core types: moves, outcomes, match state, configuration, errors, RNG.
//!
//! Nothing in this module renders, reads input, or touches I/O.

pub mod moves;
pub mod outcome;
pub mod error;
pub mod config;
pub mod rng;
pub mod state;

pub use moves::Move;
pub use outcome::{RoundOutcome, Side};
pub use error::{ConfigError, SessionError};
pub use config::{BestOf, Mode, SessionConfig};
pub use rng::{GameRng, GameRngState};
pub use state::{MatchState, RoundRecord, HISTORY_LIMIT};
