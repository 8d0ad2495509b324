//! Fire-and-forget delivery through a channel.
//!
//! `OutboxLedger` is what the engine holds: submitting only enqueues, so
//! the `Result` stage renders without waiting on the network. An
//! `OutboxWorker` on the host side drains the queue into the real ledger.
//! Outcomes stay on the worker side and never reach a session.

use log::{debug, warn};

use super::sink::{LedgerError, ScoreLedger, ScoreReport};

/// Create a connected outbox sender/worker pair.
///
/// ```
/// use lesson_session::core::SessionId;
/// use lesson_session::ledger::{outbox, RecordingLedger, ScoreLedger, ScoreReport};
///
/// let (sender, worker) = outbox();
/// let report = ScoreReport {
///     session_id: SessionId::new(1),
///     level_label: "Level 2".into(),
///     score: 90,
/// };
/// sender.submit_score(&report).unwrap();
///
/// let remote = RecordingLedger::new();
/// let stats = worker.drain(&remote);
/// assert_eq!(stats.delivered, 1);
/// assert_eq!(remote.reports(), vec![report]);
/// ```
#[must_use]
pub fn outbox() -> (OutboxLedger, OutboxWorker) {
    let (sender, receiver) = flume::unbounded();
    (OutboxLedger { sender }, OutboxWorker { receiver })
}

/// Enqueuing side. Cheap to clone, never blocks.
#[derive(Clone, Debug)]
pub struct OutboxLedger {
    sender: flume::Sender<ScoreReport>,
}

impl ScoreLedger for OutboxLedger {
    fn submit_score(&self, report: &ScoreReport) -> Result<(), LedgerError> {
        self.sender
            .send(report.clone())
            .map_err(|_| LedgerError::Disconnected)
    }
}

/// Counts from one drain pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainStats {
    pub delivered: usize,
    pub failed: usize,
}

/// Delivering side.
#[derive(Debug)]
pub struct OutboxWorker {
    receiver: flume::Receiver<ScoreReport>,
}

impl OutboxWorker {
    /// Reports waiting to be delivered.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Deliver everything queued right now, once each.
    pub fn drain<L: ScoreLedger + ?Sized>(&self, ledger: &L) -> DrainStats {
        let mut stats = DrainStats::default();
        for report in self.receiver.try_iter() {
            deliver(ledger, &report, &mut stats);
        }
        stats
    }

    /// Deliver until every `OutboxLedger` is dropped. Blocks; meant for a
    /// dedicated thread.
    pub fn run<L: ScoreLedger + ?Sized>(self, ledger: &L) -> DrainStats {
        let mut stats = DrainStats::default();
        for report in self.receiver.iter() {
            deliver(ledger, &report, &mut stats);
        }
        debug!(
            "outbox closed: {} delivered, {} failed",
            stats.delivered, stats.failed
        );
        stats
    }
}

fn deliver<L: ScoreLedger + ?Sized>(ledger: &L, report: &ScoreReport, stats: &mut DrainStats) {
    match ledger.submit_score(report) {
        Ok(()) => stats.delivered += 1,
        Err(e) => {
            warn!("{} dropped after failed delivery: {e}", report.session_id);
            stats.failed += 1;
        }
    }
}
