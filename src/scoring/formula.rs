//! Per-game scoring formulas.
//!
//! A formula maps `(elapsed_seconds, signals)` to a raw score and declares
//! its own ceiling. The scorer does the clamping and rounding, so formulas
//! can be written naively (penalties may push them below zero).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::PerformanceSignals;

/// A pure scoring function supplied by a lesson game.
///
/// Must be deterministic: no clocks, no randomness.
pub trait ScoreFormula: Send + Sync {
    /// Upper bound of the final score.
    fn max(&self) -> u32;

    /// Raw, unclamped score.
    fn evaluate(&self, elapsed_secs: f64, signals: &PerformanceSignals) -> f64;
}

impl<F: ScoreFormula + ?Sized> ScoreFormula for Arc<F> {
    fn max(&self) -> u32 {
        (**self).max()
    }

    fn evaluate(&self, elapsed_secs: f64, signals: &PerformanceSignals) -> f64 {
        (**self).evaluate(elapsed_secs, signals)
    }
}

impl<F: ScoreFormula + ?Sized> ScoreFormula for Box<F> {
    fn max(&self) -> u32 {
        (**self).max()
    }

    fn evaluate(&self, elapsed_secs: f64, signals: &PerformanceSignals) -> f64 {
        (**self).evaluate(elapsed_secs, signals)
    }
}

/// One weighted signal term of a [`LinearFormula`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalWeight {
    pub signal: String,
    pub weight: f64,
}

/// `base + per_second * secs + Σ weight * signal`.
///
/// Covers the common rubric shapes: a time bonus that shrinks each second
/// minus a penalty per move, or a flat base minus time and wrong-answer
/// penalties.
///
/// ```
/// use lesson_session::core::PerformanceSignals;
/// use lesson_session::scoring::{LinearFormula, ScoreFormula};
///
/// let formula = LinearFormula::new(100.0, 100)
///     .per_second(-2.0)
///     .weight("wrong", -10.0);
///
/// let mut signals = PerformanceSignals::new();
/// signals.record("wrong", 1.0).unwrap();
/// assert_eq!(formula.evaluate(20.0, &signals), 50.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearFormula {
    pub base: f64,
    #[serde(default)]
    pub per_second: f64,
    #[serde(default)]
    pub weights: Vec<SignalWeight>,
    pub max: u32,
}

impl LinearFormula {
    #[must_use]
    pub fn new(base: f64, max: u32) -> Self {
        Self {
            base,
            per_second: 0.0,
            weights: Vec::new(),
            max,
        }
    }

    /// Points added per elapsed second (negative for a time penalty).
    #[must_use]
    pub fn per_second(mut self, rate: f64) -> Self {
        self.per_second = rate;
        self
    }

    /// Points added per unit of `signal` (negative for a penalty).
    #[must_use]
    pub fn weight(mut self, signal: impl Into<String>, weight: f64) -> Self {
        self.weights.push(SignalWeight {
            signal: signal.into(),
            weight,
        });
        self
    }
}

impl ScoreFormula for LinearFormula {
    fn max(&self) -> u32 {
        self.max
    }

    fn evaluate(&self, elapsed_secs: f64, signals: &PerformanceSignals) -> f64 {
        let terms: f64 = self
            .weights
            .iter()
            .map(|w| w.weight * signals.get(&w.signal))
            .sum();
        self.base + self.per_second * elapsed_secs + terms
    }
}

type FormulaFn = dyn Fn(f64, &PerformanceSignals) -> f64 + Send + Sync;

/// Closure-backed formula for rubrics that are not linear.
///
/// ```
/// use lesson_session::core::PerformanceSignals;
/// use lesson_session::scoring::{FnFormula, ScoreFormula};
///
/// // Bonus only when finished under a minute.
/// let formula = FnFormula::new(150, |secs, signals| {
///     let bonus = if secs < 60.0 { 50.0 } else { 0.0 };
///     100.0 + bonus - 15.0 * signals.get("mistakes")
/// });
/// assert_eq!(formula.evaluate(30.0, &PerformanceSignals::new()), 150.0);
/// ```
#[derive(Clone)]
pub struct FnFormula {
    max: u32,
    f: Arc<FormulaFn>,
}

impl FnFormula {
    pub fn new<F>(max: u32, f: F) -> Self
    where
        F: Fn(f64, &PerformanceSignals) -> f64 + Send + Sync + 'static,
    {
        Self { max, f: Arc::new(f) }
    }
}

impl fmt::Debug for FnFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFormula").field("max", &self.max).finish_non_exhaustive()
    }
}

impl ScoreFormula for FnFormula {
    fn max(&self) -> u32 {
        self.max
    }

    fn evaluate(&self, elapsed_secs: f64, signals: &PerformanceSignals) -> f64 {
        (self.f)(elapsed_secs, signals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_time_bonus_minus_moves() {
        let formula = LinearFormula::new(1000.0, 1000)
            .per_second(-10.0)
            .weight("moves", -5.0);

        let mut signals = PerformanceSignals::new();
        signals.record("moves", 12.0).unwrap();

        assert_eq!(formula.evaluate(30.0, &signals), 1000.0 - 300.0 - 60.0);
        assert_eq!(formula.max(), 1000);
    }

    #[test]
    fn test_unrecorded_signal_counts_as_zero() {
        let formula = LinearFormula::new(100.0, 100).weight("wrong", -10.0);
        assert_eq!(formula.evaluate(0.0, &PerformanceSignals::new()), 100.0);
    }

    #[test]
    fn test_linear_serialization() {
        let formula = LinearFormula::new(150.0, 150)
            .per_second(-1.0)
            .weight("mistakes", -15.0);

        let json = serde_json::to_string(&formula).unwrap();
        let deserialized: LinearFormula = serde_json::from_str(&json).unwrap();
        assert_eq!(formula, deserialized);

        let minimal: LinearFormula = serde_json::from_str(r#"{"base":10.0,"max":10}"#).unwrap();
        assert_eq!(minimal.per_second, 0.0);
        assert!(minimal.weights.is_empty());
    }

    #[test]
    fn test_shared_formula_delegates() {
        let formula: Arc<dyn ScoreFormula> = Arc::new(FnFormula::new(100, |secs, _| 100.0 - secs));
        assert_eq!(formula.max(), 100);
        assert_eq!(formula.evaluate(25.0, &PerformanceSignals::new()), 75.0);
    }
}
