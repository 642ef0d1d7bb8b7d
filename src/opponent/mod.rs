//! Computer opponents.
//!
//! Randomness stays outside the engine: a policy gets the caller's `GameRng`
//! and the match history, and returns a move for the engine to judge.

pub mod policy;

pub use policy::{CounterOpponent, FixedOpponent, OpponentPolicy, UniformOpponent, WeightedOpponent};
