//! The score ledger seam.
//!
//! The remote ledger is an external collaborator; the engine only needs to
//! hand it `(level_label, score)` once. Implementations decide how that
//! travels (HTTP, a queue, a test recorder).

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::SessionId;

/// What gets delivered for a finished session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub session_id: SessionId,
    /// Free-text level identifier, passed through uninterpreted.
    pub level_label: String,
    pub score: u32,
}

/// Delivery failures. Logged and dropped by the submission gate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    #[error("ledger rejected score ({status}): {reason}")]
    Rejected { status: u16, reason: String },

    #[error("ledger channel disconnected")]
    Disconnected,
}

/// Destination for final scores.
///
/// Called at most once per session. Idempotency is not assumed.
pub trait ScoreLedger {
    fn submit_score(&self, report: &ScoreReport) -> Result<(), LedgerError>;
}

impl<L: ScoreLedger + ?Sized> ScoreLedger for &L {
    fn submit_score(&self, report: &ScoreReport) -> Result<(), LedgerError> {
        (**self).submit_score(report)
    }
}

impl<L: ScoreLedger + ?Sized> ScoreLedger for Arc<L> {
    fn submit_score(&self, report: &ScoreReport) -> Result<(), LedgerError> {
        (**self).submit_score(report)
    }
}

impl<L: ScoreLedger + ?Sized> ScoreLedger for Box<L> {
    fn submit_score(&self, report: &ScoreReport) -> Result<(), LedgerError> {
        (**self).submit_score(report)
    }
}

#[derive(Debug, Default)]
struct Recorded {
    accepted: Vec<ScoreReport>,
    attempts: usize,
    failing: Option<LedgerError>,
}

/// In-memory ledger. Clones share the same record.
///
/// Can be switched into a failing mode to stand in for an unreachable
/// server; attempts are counted either way.
#[derive(Clone, Debug, Default)]
pub struct RecordingLedger {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger whose every delivery fails with `error`.
    #[must_use]
    pub fn failing(error: LedgerError) -> Self {
        let ledger = Self::new();
        ledger.fail_with(Some(error));
        ledger
    }

    /// Switch failing mode on (`Some`) or off (`None`).
    pub fn fail_with(&self, error: Option<LedgerError>) {
        self.lock().failing = error;
    }

    /// Reports that were accepted.
    #[must_use]
    pub fn reports(&self) -> Vec<ScoreReport> {
        self.lock().accepted.clone()
    }

    /// Delivery attempts, successful or not.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.lock().attempts
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ScoreLedger for RecordingLedger {
    fn submit_score(&self, report: &ScoreReport) -> Result<(), LedgerError> {
        let mut recorded = self.lock();
        recorded.attempts += 1;

        if let Some(error) = &recorded.failing {
            return Err(error.clone());
        }
        recorded.accepted.push(report.clone());
        Ok(())
    }
}
