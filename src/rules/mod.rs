//! Outcome engine.
//!
//! - `decide`: judge a pair of moves
//! - `apply_round`: fold a round into a `MatchState`
//! - `set_best_of`: configure or clear the best-of target
//! - `restart_match` / `reset_all`: start over, keeping or clearing the target
//!
//! The engine judges moves; it never produces them.

pub mod engine;

pub use engine::{apply_round, decide, match_result, reset_all, restart_match, set_best_of, MatchResult};
