//! Match state: scores, best-of target and round history.
//!
//! `MatchState` is a plain value owned by the caller. It is mutated only by
//! `rules::apply_round` and `rules::set_best_of`, and replaced wholesale by
//! `rules::restart_match` / `rules::reset_all`.
//!
//! History uses `im::Vector` so a front end can clone the whole state for a
//! view snapshot in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::BestOf;
use super::moves::Move;
use super::outcome::{RoundOutcome, Side};

/// Maximum number of rounds kept in history.
pub const HISTORY_LIMIT: usize = 50;

/// One resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundRecord {
    pub first: Move,
    pub second: Move,
    pub outcome: RoundOutcome,
}

impl RoundRecord {
    #[must_use]
    pub const fn new(first: Move, second: Move, outcome: RoundOutcome) -> Self {
        Self { first, second, outcome }
    }

    /// The move played by `side`.
    #[must_use]
    pub const fn move_of(&self, side: Side) -> Move {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }
}

/// Progress of a single match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) first_score: u32,
    pub(crate) second_score: u32,
    pub(crate) tie_count: u32,

    /// Wins needed to take the match. `None` for an unbounded match.
    pub(crate) target: Option<u32>,

    /// The best-of count `target` was derived from.
    pub(crate) best_of: Option<u32>,

    /// Rounds resolved since the match started. Not capped.
    pub(crate) rounds_played: u32,

    /// Most recent round first.
    pub(crate) history: Vector<RoundRecord>,
}

impl MatchState {
    /// A fresh, unbounded match.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn first_score(&self) -> u32 {
        self.first_score
    }

    #[must_use]
    pub fn second_score(&self) -> u32 {
        self.second_score
    }

    #[must_use]
    pub fn tie_count(&self) -> u32 {
        self.tie_count
    }

    /// Score of one side.
    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::First => self.first_score,
            Side::Second => self.second_score,
        }
    }

    #[must_use]
    pub fn target(&self) -> Option<u32> {
        self.target
    }

    #[must_use]
    pub fn best_of(&self) -> Option<u32> {
        self.best_of
    }

    /// The best-of format in play, if any.
    #[must_use]
    pub fn format(&self) -> Option<BestOf> {
        self.best_of.and_then(|n| BestOf::new(i64::from(n)).ok())
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Round history, most recent first. At most `HISTORY_LIMIT` entries.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// The most recently resolved round.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.front()
    }

    /// Has either side reached the target?
    ///
    /// Always false for an unbounded match.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self.target {
            Some(target) => self.first_score >= target || self.second_score >= target,
            None => false,
        }
    }

    /// Side that reached the target, if the match is complete.
    ///
    /// A mid-match `set_best_of` can leave both sides at or above the
    /// target. The higher score wins then; level scores have no winner.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if !self.is_complete() {
            return None;
        }
        match self.first_score.cmp(&self.second_score) {
            std::cmp::Ordering::Greater => Some(Side::First),
            std::cmp::Ordering::Less => Some(Side::Second),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Record a resolved round: bump one counter and prepend to history.
    pub(crate) fn record(&mut self, round: RoundRecord) {
        match round.outcome {
            RoundOutcome::Tie => self.tie_count += 1,
            RoundOutcome::FirstWins => self.first_score += 1,
            RoundOutcome::SecondWins => self.second_score += 1,
        }
        self.rounds_played += 1;

        self.history.push_front(round);
        if self.history.len() > HISTORY_LIMIT {
            self.history.truncate(HISTORY_LIMIT);
        }
    }
}
