//! Scoring: per-game formulas and the write-once scorer.
//!
//! Games supply a [`ScoreFormula`]; the [`Scorer`] evaluates it once, on
//! the frozen elapsed time, and clamps the result to `[0, formula.max()]`.

mod formula;
mod scorer;

pub use formula::{FnFormula, LinearFormula, ScoreFormula, SignalWeight};
pub use scorer::{clamp_and_round, Scorer};
