//! Engine configuration.
//!
//! Hosts provide an `EngineConfig` when mounting a game. Per-game scoring
//! and labels live in [`crate::lessons::LessonConfig`]; this struct only
//! carries what is common to every session.

use serde::{Deserialize, Serialize};

/// Default display tick cadence.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

/// Engine-wide settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Interval between display ticks while `Playing` or `Quiz`.
    pub tick_interval_ms: u64,

    /// Seed for session ids. `None` seeds from entropy.
    pub id_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            id_seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the tick interval. Zero is bumped to 1 ms.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, interval: u64) -> Self {
        self.tick_interval_ms = interval.max(1);
        self
    }

    /// Use a fixed seed for session ids.
    #[must_use]
    pub fn with_id_seed(mut self, seed: u64) -> Self {
        self.id_seed = Some(seed);
        self
    }
}
