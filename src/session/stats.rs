//! Match analytics for dashboard charts.
//!
//! Computed from the capped round history, so figures cover at most the
//! last `HISTORY_LIMIT` rounds.

use im::Vector;
use rustc_hash::FxHashMap;

use crate::core::{Move, RoundOutcome, RoundRecord, Side};

/// Aggregates over a round history.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchStats {
    /// Rounds covered.
    pub rounds: u32,

    pub first_wins: u32,

    pub second_wins: u32,

    pub ties: u32,

    /// Per-side move counts, indexed like `Move::ALL`.
    pub first_moves: [u32; 3],
    pub second_moves: [u32; 3],

    /// How often each (first, second) pairing occurred.
    pub matchups: FxHashMap<(Move, Move), u32>,
}

impl MatchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_history(history: &Vector<RoundRecord>) -> Self {
        let mut stats = Self::new();
        for round in history {
            stats.add(round);
        }
        stats
    }

    /// Fold one round in.
    pub fn add(&mut self, round: &RoundRecord) {
        self.rounds += 1;
        match round.outcome {
            RoundOutcome::Tie => self.ties += 1,
            RoundOutcome::FirstWins => self.first_wins += 1,
            RoundOutcome::SecondWins => self.second_wins += 1,
        }
        self.first_moves[round.first.index()] += 1;
        self.second_moves[round.second.index()] += 1;
        *self.matchups.entry((round.first, round.second)).or_insert(0) += 1;
    }

    #[must_use]
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::First => self.first_wins,
            Side::Second => self.second_wins,
        }
    }

    /// Fraction of rounds won by `side` (ties count as rounds).
    #[must_use]
    pub fn win_rate(&self, side: Side) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins(side) as f64 / self.rounds as f64
        }
    }

    #[must_use]
    pub fn tie_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.ties as f64 / self.rounds as f64
        }
    }

    /// How many times `side` played `mv`.
    #[must_use]
    pub fn move_count(&self, side: Side, mv: Move) -> u32 {
        self.moves(side)[mv.index()]
    }

    /// The move `side` played most. Ties go to the earlier move in `Move::ALL`.
    #[must_use]
    pub fn favorite(&self, side: Side) -> Option<Move> {
        let counts = self.moves(side);
        let mut best: Option<(Move, u32)> = None;
        for mv in Move::ALL {
            let count = counts[mv.index()];
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((mv, count));
            }
        }
        best.map(|(mv, _)| mv)
    }

    /// How often `first` met `second`.
    #[must_use]
    pub fn matchup(&self, first: Move, second: Move) -> u32 {
        self.matchups.get(&(first, second)).copied().unwrap_or(0)
    }

    fn moves(&self, side: Side) -> &[u32; 3] {
        match side {
            Side::First => &self.first_moves,
            Side::Second => &self.second_moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(rounds: &[(Move, Move, RoundOutcome)]) -> Vector<RoundRecord> {
        rounds
            .iter()
            .map(|&(a, b, o)| RoundRecord::new(a, b, o))
            .collect()
    }

    #[test]
    fn test_empty() {
        let stats = MatchStats::from_history(&Vector::new());
        assert_eq!(stats.rounds, 0);
        assert_eq!(stats.win_rate(Side::First), 0.0);
        assert_eq!(stats.tie_rate(), 0.0);
        assert_eq!(stats.favorite(Side::First), None);
    }

    #[test]
    fn test_counts() {
        let stats = MatchStats::from_history(&history(&[
            (Move::Rock, Move::Scissors, RoundOutcome::FirstWins),
            (Move::Rock, Move::Paper, RoundOutcome::SecondWins),
            (Move::Rock, Move::Scissors, RoundOutcome::FirstWins),
            (Move::Paper, Move::Paper, RoundOutcome::Tie),
        ]));

        assert_eq!(stats.rounds, 4);
        assert_eq!(stats.wins(Side::First), 2);
        assert_eq!(stats.wins(Side::Second), 1);
        assert_eq!(stats.ties, 1);
        assert_eq!(stats.win_rate(Side::First), 0.5);
        assert_eq!(stats.tie_rate(), 0.25);
        assert_eq!(stats.move_count(Side::First, Move::Rock), 3);
        assert_eq!(stats.move_count(Side::Second, Move::Scissors), 2);
        assert_eq!(stats.matchup(Move::Rock, Move::Scissors), 2);
        assert_eq!(stats.matchup(Move::Scissors, Move::Rock), 0);
    }

    #[test]
    fn test_favorite_tie_break() {
        let stats = MatchStats::from_history(&history(&[
            (Move::Scissors, Move::Paper, RoundOutcome::FirstWins),
            (Move::Paper, Move::Scissors, RoundOutcome::SecondWins),
        ]));

        assert_eq!(stats.favorite(Side::First), Some(Move::Paper));
        assert_eq!(stats.favorite(Side::Second), Some(Move::Paper));
    }
}
