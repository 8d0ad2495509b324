//! Write-once score slot for a session.

use log::debug;

use super::formula::ScoreFormula;
use crate::core::{PerformanceSignals, Result, SessionError};

/// Clamp `raw` into `[0, max]` and round half away from zero.
///
/// NaN scores 0; positive infinity scores `max`.
#[must_use]
pub fn clamp_and_round(raw: f64, max: u32) -> u32 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, f64::from(max)).round() as u32
}

/// Computes a session's score exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scorer {
    score: Option<u32>,
}

impl Scorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score from the frozen elapsed time and the recorded signals.
    ///
    /// Fails with `AlreadyScored` on a second call; the first result stays.
    pub fn compute<F: ScoreFormula + ?Sized>(
        &mut self,
        elapsed_ms: u64,
        signals: &PerformanceSignals,
        formula: &F,
    ) -> Result<u32> {
        if self.score.is_some() {
            return Err(SessionError::AlreadyScored);
        }

        let elapsed_secs = elapsed_ms as f64 / 1_000.0;
        let raw = formula.evaluate(elapsed_secs, signals);
        let score = clamp_and_round(raw, formula.max());
        debug!("scored {raw:.3} -> {score} (max {}, {elapsed_secs:.3}s)", formula.max());

        self.score = Some(score);
        Ok(score)
    }

    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.score
    }
}
