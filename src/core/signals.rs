//! Performance signals recorded by a game during play.
//!
//! Games define the signal names (`moves`, `mistakes`, `correctAnswers`,
//! ...); the engine never interprets them, it only hands them to the
//! scoring formula. Recording is additive and entries are never removed.
//!
//! Backed by `im::OrdMap` so the presentation layer can take a snapshot
//! every tick without copying the map.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::error::{Result, SessionError};

/// Name → running total of every signal recorded for a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSignals {
    values: OrdMap<String, f64>,
}

impl PerformanceSignals {
    /// Create an empty signal set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the running total for `name`.
    ///
    /// Returns the new total.
    pub fn record(&mut self, name: &str, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(SessionError::InvalidSignal {
                name: name.to_string(),
            });
        }

        let total = self.get(name) + value;
        self.values.insert(name.to_string(), total);
        Ok(total)
    }

    /// Current total for `name`, or 0 if never recorded.
    #[must_use]
    pub fn get(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    /// Whether `name` has been recorded at least once.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of distinct signals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate signals in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates() {
        let mut signals = PerformanceSignals::new();

        assert_eq!(signals.get("moves"), 0.0);
        signals.record("moves", 1.0).unwrap();
        signals.record("moves", 1.0).unwrap();
        assert_eq!(signals.record("moves", 3.0).unwrap(), 5.0);
        assert_eq!(signals.get("moves"), 5.0);
        assert!(signals.contains("moves"));
        assert!(!signals.contains("mistakes"));
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut signals = PerformanceSignals::new();

        let err = signals.record("mistakes", f64::NAN).unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidSignal {
                name: "mistakes".to_string()
            }
        );
        assert!(signals.record("mistakes", f64::INFINITY).is_err());
        assert!(signals.is_empty());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut signals = PerformanceSignals::new();
        signals.record("moves", 2.0).unwrap();

        let snapshot = signals.clone();
        signals.record("moves", 1.0).unwrap();

        assert_eq!(snapshot.get("moves"), 2.0);
        assert_eq!(signals.get("moves"), 3.0);
    }

    #[test]
    fn test_iter_in_name_order() {
        let mut signals = PerformanceSignals::new();
        signals.record("wrong", 1.0).unwrap();
        signals.record("correct", 4.0).unwrap();

        let names: Vec<&str> = signals.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["correct", "wrong"]);
        assert_eq!(signals.len(), 2);
    }
}
