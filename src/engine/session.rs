//! The session aggregate.

use serde::{Deserialize, Serialize};

use crate::clock::{ActiveClock, TickSchedule};
use crate::core::{PerformanceSignals, SessionId};
use crate::ledger::SubmissionGate;
use crate::scoring::Scorer;
use crate::stage::{Stage, StageController};

/// One play-through of one lesson game.
///
/// Each part is owned by exactly one component: the stage by the
/// controller, the timestamps by the clock, the score by the scorer and the
/// submitted flag by the gate. Only [`super::SessionEngine`] mutates it.
#[derive(Clone, Debug)]
pub struct Session {
    pub(crate) id: SessionId,
    pub(crate) stages: StageController,
    pub(crate) clock: ActiveClock,
    pub(crate) signals: PerformanceSignals,
    pub(crate) scorer: Scorer,
    pub(crate) gate: SubmissionGate,
    pub(crate) ticks: TickSchedule,
}

impl Session {
    pub(crate) fn new(id: SessionId, tick_interval_ms: u64) -> Self {
        Self {
            id,
            stages: StageController::new(),
            clock: ActiveClock::new(),
            signals: PerformanceSignals::new(),
            scorer: Scorer::new(),
            gate: SubmissionGate::new(),
            ticks: TickSchedule::new(tick_interval_ms),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stages.current()
    }

    #[must_use]
    pub fn stages(&self) -> &StageController {
        &self.stages
    }

    #[must_use]
    pub fn clock(&self) -> &ActiveClock {
        &self.clock
    }

    #[must_use]
    pub fn signals(&self) -> &PerformanceSignals {
        &self.signals
    }

    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.scorer.score()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.gate.is_submitted()
    }

    #[must_use]
    pub fn elapsed_ms(&self, now: u64) -> u64 {
        self.clock.elapsed_ms(now)
    }

    /// Read-only view at `now`.
    #[must_use]
    pub fn snapshot(&self, now: u64, level_label: &str) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            level_label: level_label.to_string(),
            stage: self.stage(),
            elapsed_ms: self.elapsed_ms(now),
            signals: self.signals.clone(),
            score: self.score(),
            submitted: self.is_submitted(),
        }
    }
}

/// What the presentation layer renders from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub level_label: String,
    pub stage: Stage,
    pub elapsed_ms: u64,
    pub signals: PerformanceSignals,
    pub score: Option<u32>,
    pub submitted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session() {
        let session = Session::new(SessionId::new(3), 1_000);

        assert_eq!(session.id(), SessionId::new(3));
        assert_eq!(session.stage(), Stage::Intro);
        assert_eq!(session.elapsed_ms(50_000), 0);
        assert_eq!(session.score(), None);
        assert!(!session.is_submitted());
        assert!(session.signals().is_empty());
        assert!(!session.clock().is_started());
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut session = Session::new(SessionId::new(3), 1_000);
        session.signals.record("moves", 4.0).unwrap();

        let snapshot = session.snapshot(0, "Level 5");
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back, snapshot);
        assert_eq!(back.signals.get("moves"), 4.0);
        assert_eq!(back.level_label, "Level 5");
    }
}
