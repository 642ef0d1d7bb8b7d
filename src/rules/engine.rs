//! Round decision and match progression.
//!
//! All functions here are synchronous and constant-time. `decide` is pure;
//! the rest mutate or replace one `MatchState` supplied by the caller and do
//! nothing else: no randomness, no logging, no I/O.

use crate::core::config::BestOf;
use crate::core::error::ConfigError;
use crate::core::moves::Move;
use crate::core::outcome::{RoundOutcome, Side};
use crate::core::state::{MatchState, RoundRecord};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// The side that reached the best-of target.
    Winner(Side),
    /// Both sides at or above the target with level scores.
    Draw,
}

impl MatchResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        match self {
            MatchResult::Winner(s) => *s == side,
            MatchResult::Draw => false,
        }
    }
}

/// Compare two moves.
///
/// ```
/// use rust_rps::core::{Move, RoundOutcome};
/// use rust_rps::rules::decide;
///
/// assert_eq!(decide(Move::Rock, Move::Scissors), RoundOutcome::FirstWins);
/// assert_eq!(decide(Move::Scissors, Move::Rock), RoundOutcome::SecondWins);
/// assert_eq!(decide(Move::Paper, Move::Paper), RoundOutcome::Tie);
/// ```
#[must_use]
pub fn decide(a: Move, b: Move) -> RoundOutcome {
    if a == b {
        RoundOutcome::Tie
    } else if a.beats(b) {
        RoundOutcome::FirstWins
    } else {
        RoundOutcome::SecondWins
    }
}

/// Resolve one round and fold it into `state`.
///
/// Returns the round outcome and whether the match is now complete.
/// Completion is only possible when a best-of target is set.
pub fn apply_round(state: &mut MatchState, a: Move, b: Move) -> (RoundOutcome, bool) {
    let outcome = decide(a, b);
    state.record(RoundRecord::new(a, b, outcome));
    (outcome, state.is_complete())
}

/// Configure a best-of-N match, or clear it with `None`.
///
/// Scores are left alone; the caller decides whether to restart.
/// On error `state` is unchanged.
pub fn set_best_of(state: &mut MatchState, n: Option<i64>) -> Result<(), ConfigError> {
    match n {
        None => {
            state.target = None;
            state.best_of = None;
        }
        Some(n) => {
            let format = BestOf::new(n)?;
            state.target = Some(format.target());
            state.best_of = Some(format.rounds());
        }
    }
    Ok(())
}

/// A fresh match that keeps the best-of setting of `state`.
#[must_use]
pub fn restart_match(state: &MatchState) -> MatchState {
    MatchState {
        target: state.target,
        best_of: state.best_of,
        ..MatchState::default()
    }
}

/// A fresh, unbounded match.
#[must_use]
pub fn reset_all(_state: &MatchState) -> MatchState {
    MatchState::default()
}

/// The match result, once a side has reached the target.
#[must_use]
pub fn match_result(state: &MatchState) -> Option<MatchResult> {
    if !state.is_complete() {
        return None;
    }
    Some(state.winner().map_or(MatchResult::Draw, MatchResult::Winner))
}
