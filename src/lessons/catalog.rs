//! Lesson configuration and lookup.
//!
//! The `LessonCatalog` stores every lesson game a host can mount, keyed by
//! level label. Each entry carries only what differs between games: the
//! label sent to the ledger, the scoring formula and an optional time limit.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::scoring::{LinearFormula, ScoreFormula};

/// Everything the engine needs to know about one lesson game.
#[derive(Clone)]
pub struct LessonConfig {
    /// Opaque label forwarded to the ledger (e.g. "Level 8").
    pub level_label: String,

    /// Scoring rubric.
    pub formula: Arc<dyn ScoreFormula>,

    /// Countdown length, if the game shows one.
    pub time_limit_ms: Option<u64>,
}

impl LessonConfig {
    pub fn new<F>(level_label: impl Into<String>, formula: F) -> Self
    where
        F: ScoreFormula + 'static,
    {
        Self {
            level_label: level_label.into(),
            formula: Arc::new(formula),
            time_limit_ms: None,
        }
    }

    /// Show a countdown of `ms`.
    #[must_use]
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }
}

impl fmt::Debug for LessonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessonConfig")
            .field("level_label", &self.level_label)
            .field("max_score", &self.formula.max())
            .field("time_limit_ms", &self.time_limit_ms)
            .finish()
    }
}

/// Serializable form of a lesson using a [`LinearFormula`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LessonSpec {
    pub level_label: String,
    pub formula: LinearFormula,
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
}

impl From<LessonSpec> for LessonConfig {
    fn from(spec: LessonSpec) -> Self {
        Self {
            level_label: spec.level_label,
            formula: Arc::new(spec.formula),
            time_limit_ms: spec.time_limit_ms,
        }
    }
}

/// Registry of lesson games by level label.
///
/// ## Example
///
/// ```
/// use lesson_session::lessons::{LessonCatalog, LessonConfig};
/// use lesson_session::scoring::LinearFormula;
///
/// let mut catalog = LessonCatalog::new();
/// catalog.register(LessonConfig::new("Level 1", LinearFormula::new(100.0, 100)));
///
/// assert!(catalog.get("Level 1").is_some());
/// assert!(catalog.get("Level 2").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct LessonCatalog {
    lessons: FxHashMap<String, LessonConfig>,
}

impl LessonCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from serialized specs. Later duplicates win.
    pub fn from_specs(specs: impl IntoIterator<Item = LessonSpec>) -> Self {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.register(spec.into());
        }
        catalog
    }

    /// Add or replace a lesson. Returns the one it replaced.
    pub fn register(&mut self, lesson: LessonConfig) -> Option<LessonConfig> {
        self.lessons.insert(lesson.level_label.clone(), lesson)
    }

    #[must_use]
    pub fn get(&self, level_label: &str) -> Option<&LessonConfig> {
        self.lessons.get(level_label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Level labels, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.lessons.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }
}
