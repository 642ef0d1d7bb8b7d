//! # rust-rps
//!
//! A deterministic Rock-Paper-Scissors outcome engine shared by GUI, CLI and
//! web front ends.
//!
//! ## Design Principles
//!
//! 1. **Judge, don't play**: The engine compares moves it is given. Computer
//!    moves come from an `OpponentPolicy` fed by a caller-owned `GameRng`.
//!
//! 2. **Caller-owned state**: `MatchState` is an explicit value threaded
//!    through every call. There is no ambient session store.
//!
//! 3. **One move type**: `Move` is a closed enumeration. Display strings are
//!    produced at the presentation boundary only.
//!
//! ## Modules
//!
//! - `core`: Moves, outcomes, match state, configuration, errors, RNG
//! - `rules`: The outcome engine (`decide`, `apply_round`, best-of, restart)
//! - `opponent`: Computer opponent policies
//! - `session`: Mode-aware play sessions and history analytics
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use rust_rps::core::{MatchState, Move, RoundOutcome};
//! use rust_rps::rules;
//!
//! let mut state = MatchState::new();
//! rules::set_best_of(&mut state, Some(3)).unwrap();
//!
//! let (outcome, complete) = rules::apply_round(&mut state, Move::Rock, Move::Scissors);
//! assert_eq!(outcome, RoundOutcome::FirstWins);
//! assert!(!complete);
//!
//! let (_, complete) = rules::apply_round(&mut state, Move::Paper, Move::Rock);
//! assert!(complete);
//! ```

pub mod core;
pub mod rules;
pub mod opponent;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Move, RoundOutcome, Side,
    MatchState, RoundRecord, HISTORY_LIMIT,
    BestOf, Mode, SessionConfig,
    ConfigError, SessionError,
    GameRng, GameRngState,
};

pub use crate::rules::{apply_round, decide, match_result, reset_all, restart_match, set_best_of, MatchResult};

pub use crate::opponent::{CounterOpponent, FixedOpponent, OpponentPolicy, UniformOpponent, WeightedOpponent};

pub use crate::session::{MatchStats, RoundReport, Session};
