//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Move, RoundOutcome};
use crate::rules;

/// Python wrapper for Move.
#[pyclass(name = "Move", eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PyMove {
    Rock,
    Paper,
    Scissors,
}

#[pymethods]
impl PyMove {
    /// Display label ("Rock", "Paper", "Scissors").
    #[getter]
    fn label(&self) -> &'static str {
        Move::from(*self).label()
    }

    #[getter]
    fn emoji(&self) -> &'static str {
        Move::from(*self).emoji()
    }
}

impl From<PyMove> for Move {
    fn from(mv: PyMove) -> Self {
        match mv {
            PyMove::Rock => Move::Rock,
            PyMove::Paper => Move::Paper,
            PyMove::Scissors => Move::Scissors,
        }
    }
}

impl From<Move> for PyMove {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Rock => PyMove::Rock,
            Move::Paper => PyMove::Paper,
            Move::Scissors => PyMove::Scissors,
        }
    }
}

/// Python wrapper for RoundOutcome.
#[pyclass(name = "RoundOutcome", eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PyRoundOutcome {
    Tie,
    FirstWins,
    SecondWins,
}

impl From<RoundOutcome> for PyRoundOutcome {
    fn from(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::Tie => PyRoundOutcome::Tie,
            RoundOutcome::FirstWins => PyRoundOutcome::FirstWins,
            RoundOutcome::SecondWins => PyRoundOutcome::SecondWins,
        }
    }
}

/// Judge a pair of moves.
#[pyfunction]
pub fn decide(a: PyMove, b: PyMove) -> PyRoundOutcome {
    rules::decide(a.into(), b.into()).into()
}
