//! Python bindings for the rust-rps engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_rps as rps
//!
//! session = rps.Session(mode="single", best_of=5, seed=42)
//! report = session.play(rps.Move.Rock)
//! print(report.outcome, session.first_score, session.second_score)
//!
//! assert rps.decide(rps.Move.Paper, rps.Move.Rock) == rps.RoundOutcome.FirstWins
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// rust-rps: Rock-Paper-Scissors outcome engine.
#[pymodule]
fn rust_rps(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMove>()?;
    m.add_class::<PyRoundOutcome>()?;
    m.add_function(wrap_pyfunction!(decide, m)?)?;

    m.add_class::<PyRoundReport>()?;
    m.add_class::<PySession>()?;

    Ok(())
}
