//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Mode, SessionConfig, Side};
use crate::session::{RoundReport, Session};

use super::py_core::{PyMove, PyRoundOutcome};

fn parse_mode(mode: &str) -> PyResult<Mode> {
    match mode {
        "single" => Ok(Mode::SinglePlayer),
        "local" => Ok(Mode::LocalTwoPlayer),
        other => Err(PyValueError::new_err(format!(
            "unknown mode '{}', expected 'single' or 'local'",
            other
        ))),
    }
}

fn side_number(side: Side) -> u8 {
    match side {
        Side::First => 1,
        Side::Second => 2,
    }
}

/// Python view of a resolved round.
#[pyclass(name = "RoundReport", get_all)]
#[derive(Clone, Debug)]
pub struct PyRoundReport {
    pub round: u32,
    pub first: PyMove,
    pub second: PyMove,
    pub outcome: PyRoundOutcome,
    pub match_complete: bool,
    /// 1 or 2 on the round that completed the match.
    pub winner: Option<u8>,
}

impl From<RoundReport> for PyRoundReport {
    fn from(report: RoundReport) -> Self {
        Self {
            round: report.round,
            first: report.first.into(),
            second: report.second.into(),
            outcome: report.outcome.into(),
            match_complete: report.match_complete,
            winner: report.winner.map(side_number),
        }
    }
}

#[pymethods]
impl PyRoundReport {
    fn __repr__(&self) -> String {
        format!(
            "RoundReport(round={}, outcome={:?}, match_complete={})",
            self.round, self.outcome, self.match_complete
        )
    }
}

/// Python wrapper for Session.
#[pyclass(name = "Session")]
pub struct PySession {
    session: Session,
}

#[pymethods]
impl PySession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - mode: "single" (vs computer) or "local" (two players)
    /// - best_of: Positive odd match length, or None for unbounded
    /// - seed: RNG seed for the computer's moves
    #[new]
    #[pyo3(signature = (mode = "single", best_of = None, seed = 42))]
    fn new(mode: &str, best_of: Option<i64>, seed: u64) -> PyResult<Self> {
        let mut config = SessionConfig::default()
            .with_mode(parse_mode(mode)?)
            .with_seed(seed);
        config.best_of = best_of;

        let session = Session::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { session })
    }

    /// Play against the computer.
    fn play(&mut self, mv: PyMove) -> PyResult<PyRoundReport> {
        self.session
            .play_against_computer(mv.into())
            .map(PyRoundReport::from)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Play one local two-player round.
    fn play_local(&mut self, first: PyMove, second: PyMove) -> PyResult<PyRoundReport> {
        self.session
            .play_local(first.into(), second.into())
            .map(PyRoundReport::from)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[pyo3(signature = (n = None))]
    fn set_best_of(&mut self, n: Option<i64>) -> PyResult<()> {
        self.session
            .set_best_of(n)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn set_mode(&mut self, mode: &str) -> PyResult<()> {
        self.session.set_mode(parse_mode(mode)?);
        Ok(())
    }

    fn restart(&mut self) {
        self.session.restart();
    }

    fn reset_all(&mut self) {
        self.session.reset_all();
    }

    #[getter]
    fn first_score(&self) -> u32 {
        self.session.state().first_score()
    }

    #[getter]
    fn second_score(&self) -> u32 {
        self.session.state().second_score()
    }

    #[getter]
    fn tie_count(&self) -> u32 {
        self.session.state().tie_count()
    }

    #[getter]
    fn target(&self) -> Option<u32> {
        self.session.state().target()
    }

    #[getter]
    fn best_of(&self) -> Option<u32> {
        self.session.state().best_of()
    }

    /// Rounds resolved this match, including those dropped from history.
    #[getter]
    fn rounds_played(&self) -> u32 {
        self.session.state().rounds_played()
    }

    #[getter]
    fn is_complete(&self) -> bool {
        self.session.state().is_complete()
    }

    /// Round history, most recent first.
    fn history(&self) -> Vec<(PyMove, PyMove, PyRoundOutcome)> {
        self.session
            .state()
            .history()
            .iter()
            .map(|r| (r.first.into(), r.second.into(), r.outcome.into()))
            .collect()
    }

    /// Label for side 1 or 2 in the current mode.
    fn side_label(&self, side: u8) -> PyResult<&'static str> {
        match side {
            1 => Ok(self.session.side_label(Side::First)),
            2 => Ok(self.session.side_label(Side::Second)),
            other => Err(PyValueError::new_err(format!("side must be 1 or 2, got {}", other))),
        }
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        format!(
            "Session(mode={}, score={}-{}, ties={})",
            self.session.mode(),
            state.first_score(),
            state.second_score(),
            state.tie_count()
        )
    }
}
