//! Play sessions and match analytics.
//!
//! A `Session` drives the outcome engine the way a front end does: it knows
//! the play mode, asks the opponent policy for the computer's move, and
//! refuses rounds once a best-of match is decided.

mod play;
pub mod stats;

pub use play::{RoundReport, Session};
pub use stats::MatchStats;
