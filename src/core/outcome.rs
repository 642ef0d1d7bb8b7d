//! Round outcomes and the two sides of a round.

use serde::{Deserialize, Serialize};

/// One party of a round.
///
/// In single-player mode the human is `First` and the computer `Second`.
/// In local two-player mode they are Player 1 and Player 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Result of comparing two moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Tie,
    FirstWins,
    SecondWins,
}

impl RoundOutcome {
    /// The side that won the round, or `None` on a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::Tie => None,
            RoundOutcome::FirstWins => Some(Side::First),
            RoundOutcome::SecondWins => Some(Side::Second),
        }
    }

    /// The outcome seen with the two sides swapped.
    #[must_use]
    pub const fn inverse(self) -> RoundOutcome {
        match self {
            RoundOutcome::Tie => RoundOutcome::Tie,
            RoundOutcome::FirstWins => RoundOutcome::SecondWins,
            RoundOutcome::SecondWins => RoundOutcome::FirstWins,
        }
    }

    #[must_use]
    pub const fn is_tie(self) -> bool {
        matches!(self, RoundOutcome::Tie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner() {
        assert_eq!(RoundOutcome::Tie.winner(), None);
        assert_eq!(RoundOutcome::FirstWins.winner(), Some(Side::First));
        assert_eq!(RoundOutcome::SecondWins.winner(), Some(Side::Second));
        assert!(RoundOutcome::Tie.is_tie());
        assert!(!RoundOutcome::FirstWins.is_tie());
    }

    #[test]
    fn test_inverse_is_involution() {
        for outcome in [RoundOutcome::Tie, RoundOutcome::FirstWins, RoundOutcome::SecondWins] {
            assert_eq!(outcome.inverse().inverse(), outcome);
        }
        assert_eq!(RoundOutcome::FirstWins.inverse(), RoundOutcome::SecondWins);
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
    }
}
