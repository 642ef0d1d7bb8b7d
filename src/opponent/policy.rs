//! Opponent policies for the computer player.
//!
//! The computer always plays the second side. Policies see the match
//! history (most recent first) and draw randomness from the caller's RNG.

use im::Vector;

use crate::core::{GameRng, Move, RoundRecord, Side};

/// Policy that picks the computer's move.
pub trait OpponentPolicy: Send + Sync {
    /// Choose the next move for the second side.
    fn choose_move(&self, history: &Vector<RoundRecord>, rng: &mut GameRng) -> Move;
}

/// Uniform random opponent.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_move(&self, _history: &Vector<RoundRecord>, rng: &mut GameRng) -> Move {
        rng.gen_move()
    }
}

/// Always plays the same move.
#[derive(Clone, Debug)]
pub struct FixedOpponent(pub Move);

impl OpponentPolicy for FixedOpponent {
    fn choose_move(&self, _history: &Vector<RoundRecord>, _rng: &mut GameRng) -> Move {
        self.0
    }
}

/// Biased random opponent.
///
/// Weights are indexed like `Move::ALL`. All-zero weights play uniformly.
#[derive(Clone, Debug)]
pub struct WeightedOpponent {
    weights: [f32; 3],
}

impl WeightedOpponent {
    /// Create from rock, paper and scissors weights.
    pub fn new(rock: f32, paper: f32, scissors: f32) -> Self {
        assert!(
            rock >= 0.0 && paper >= 0.0 && scissors >= 0.0,
            "Weights must be non-negative"
        );
        Self {
            weights: [rock, paper, scissors],
        }
    }

    #[must_use]
    pub fn weight(&self, mv: Move) -> f32 {
        self.weights[mv.index()]
    }
}

impl OpponentPolicy for WeightedOpponent {
    fn choose_move(&self, _history: &Vector<RoundRecord>, rng: &mut GameRng) -> Move {
        match rng.choose_weighted(&self.weights) {
            Some(i) => Move::ALL[i],
            None => rng.gen_move(),
        }
    }
}

/// Plays whatever beats the first side's previous move.
///
/// Opens with a random move.
#[derive(Clone, Debug, Default)]
pub struct CounterOpponent;

impl OpponentPolicy for CounterOpponent {
    fn choose_move(&self, history: &Vector<RoundRecord>, rng: &mut GameRng) -> Move {
        match history.front() {
            Some(last) => last.move_of(Side::First).beaten_by(),
            None => rng.gen_move(),
        }
    }
}
