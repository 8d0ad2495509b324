//! At-most-once score submission.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::sink::{ScoreLedger, ScoreReport};
use crate::core::{Result, SessionError};
use crate::stage::Stage;

/// Outcome of the single delivery attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delivery {
    Delivered,
    /// The ledger refused or was unreachable. Not retried.
    Failed,
}

/// Guards the `submitted` flag for one session.
///
/// The flag flips before delivery is attempted, so a failing or slow
/// ledger can never lead to a second send.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionGate {
    submitted: bool,
}

impl SubmissionGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Send `report` to `ledger` once.
    ///
    /// Contract errors (`NotTerminal`, `AlreadySubmitted`, `Unscored`) come
    /// back as `Err` before anything is sent. Ledger failures do not: they
    /// are logged and reported as `Ok(Delivery::Failed)`.
    pub fn submit<L: ScoreLedger + ?Sized>(
        &mut self,
        stage: Stage,
        report: Option<ScoreReport>,
        ledger: &L,
    ) -> Result<Delivery> {
        if stage != Stage::Result {
            return Err(SessionError::NotTerminal { stage });
        }
        if self.submitted {
            return Err(SessionError::AlreadySubmitted);
        }
        let report = report.ok_or(SessionError::Unscored)?;

        self.submitted = true;

        match ledger.submit_score(&report) {
            Ok(()) => {
                info!(
                    "{} submitted score {} for {:?}",
                    report.session_id, report.score, report.level_label
                );
                Ok(Delivery::Delivered)
            }
            Err(e) => {
                warn!(
                    "{} score delivery failed, not retrying: {e}",
                    report.session_id
                );
                Ok(Delivery::Failed)
            }
        }
    }
}
