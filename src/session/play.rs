//! A play session: one match bound to a mode, an opponent and an RNG.
//!
//! Front ends own a `Session` value and thread every interaction through
//! it. There is no global session store.

use crate::core::{
    ConfigError, GameRng, GameRngState, MatchState, Mode, Move, RoundOutcome, SessionConfig,
    SessionError, Side,
};
use crate::opponent::{OpponentPolicy, UniformOpponent};
use crate::rules;

use super::stats::MatchStats;

/// What happened in one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number within the match (starts at 1).
    pub round: u32,
    pub first: Move,
    pub second: Move,
    pub outcome: RoundOutcome,
    pub match_complete: bool,
    /// Set on the round that completed the match.
    pub winner: Option<Side>,
}

/// A single-process play session.
pub struct Session {
    mode: Mode,
    state: MatchState,
    rng: GameRng,
    opponent: Box<dyn OpponentPolicy>,
}

impl Session {
    /// Create a session. Fails if the configured best-of is invalid.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let mut state = MatchState::new();
        rules::set_best_of(&mut state, config.best_of)?;

        match state.format() {
            Some(format) => log::info!("new {} session (seed {}, {})", config.mode, config.seed, format),
            None => log::info!("new {} session (seed {}, unbounded)", config.mode, config.seed),
        }

        Ok(Self {
            mode: config.mode,
            state,
            rng: GameRng::new(config.seed),
            opponent: Box::new(UniformOpponent),
        })
    }

    /// Replace the computer opponent.
    #[must_use]
    pub fn with_opponent(mut self, opponent: impl OpponentPolicy + 'static) -> Self {
        self.opponent = Box::new(opponent);
        self
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Checkpoint of the opponent's random source.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Display name for a side in the current mode.
    #[must_use]
    pub fn side_label(&self, side: Side) -> &'static str {
        match (self.mode, side) {
            (Mode::SinglePlayer, Side::First) => "You",
            (Mode::SinglePlayer, Side::Second) => "Computer",
            (Mode::LocalTwoPlayer, Side::First) => "Player 1",
            (Mode::LocalTwoPlayer, Side::Second) => "Player 2",
        }
    }

    /// Play one round against the computer. Single-player only.
    pub fn play_against_computer(&mut self, player: Move) -> Result<RoundReport, SessionError> {
        self.check_playable(Mode::SinglePlayer)?;
        let computer = self.opponent.choose_move(self.state.history(), &mut self.rng);
        Ok(self.resolve(player, computer))
    }

    /// Play one round between two local players. Two-player only.
    pub fn play_local(&mut self, first: Move, second: Move) -> Result<RoundReport, SessionError> {
        self.check_playable(Mode::LocalTwoPlayer)?;
        Ok(self.resolve(first, second))
    }

    /// Switch mode. Restarts the match but keeps the best-of setting.
    pub fn set_mode(&mut self, mode: Mode) {
        log::info!("mode changed: {} -> {}", self.mode, mode);
        self.mode = mode;
        self.state = rules::restart_match(&self.state);
    }

    /// Configure best-of-N, or `None` for unbounded. Scores are kept.
    pub fn set_best_of(&mut self, n: Option<i64>) -> Result<(), SessionError> {
        if let Err(err) = rules::set_best_of(&mut self.state, n) {
            log::warn!("{}", err);
            return Err(err.into());
        }
        match self.state.format() {
            Some(format) => log::info!("switched to {}", format),
            None => log::info!("switched to unbounded match"),
        }
        Ok(())
    }

    /// Start a new match with the same best-of setting.
    pub fn restart(&mut self) {
        log::debug!("match restarted");
        self.state = rules::restart_match(&self.state);
    }

    /// Start a new unbounded match with a fresh opponent stream.
    pub fn reset_all(&mut self) {
        log::debug!("session reset");
        self.state = rules::reset_all(&self.state);
        self.rng = self.rng.fork();
    }

    /// Analytics over the current history window.
    #[must_use]
    pub fn stats(&self) -> MatchStats {
        MatchStats::from_history(self.state.history())
    }

    fn check_playable(&self, required: Mode) -> Result<(), SessionError> {
        if self.mode != required {
            log::warn!("rejected {} round in {} mode", required, self.mode);
            return Err(SessionError::WrongMode { mode: self.mode });
        }
        if self.state.is_complete() {
            log::warn!("rejected round after match completion");
            return Err(SessionError::MatchComplete);
        }
        Ok(())
    }

    fn resolve(&mut self, first: Move, second: Move) -> RoundReport {
        let (outcome, match_complete) = rules::apply_round(&mut self.state, first, second);
        let round = self.state.rounds_played();

        log::debug!(
            "round {}: {} {} vs {} {} -> {:?}",
            round,
            self.side_label(Side::First),
            first,
            self.side_label(Side::Second),
            second,
            outcome
        );

        let winner = if match_complete { self.state.winner() } else { None };
        if let Some(side) = winner {
            log::info!(
                "match over after {} rounds: {} wins {}-{}",
                round,
                self.side_label(side),
                self.state.score(side),
                self.state.score(side.other())
            );
        }

        RoundReport {
            round,
            first,
            second,
            outcome,
            match_complete,
            winner,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("rng", &self.rng)
            .finish_non_exhaustive()
    }
}
