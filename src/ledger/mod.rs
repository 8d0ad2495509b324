//! Score delivery: the submission gate and the ledger seam.
//!
//! - [`SubmissionGate`]: refuses anything but a single submission from `Result`
//! - [`ScoreLedger`]: the external score-recording collaborator
//! - [`RecordingLedger`]: in-memory ledger for tests and offline play
//! - [`outbox`]: channel-backed ledger for fire-and-forget delivery

mod gate;
mod outbox;
mod sink;

pub use gate::{Delivery, SubmissionGate};
pub use outbox::{outbox, DrainStats, OutboxLedger, OutboxWorker};
pub use sink::{LedgerError, RecordingLedger, ScoreLedger, ScoreReport};
