//! Session contract errors.
//!
//! Every variant here is a caller using the API out of order. None of them
//! is something a player should ever see: the presentation layer treats an
//! `Err` as a defect to fix, not a message to render.
//!
//! Ledger delivery failures live in [`crate::ledger::LedgerError`] and are
//! swallowed by the submission gate, so they never surface here.

use thiserror::Error;

use crate::stage::Stage;

/// Errors raised by the stage controller, clock, scorer and submission gate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// `to` is not the direct successor of the current stage.
    #[error("illegal stage transition {from} -> {to}")]
    IllegalTransition { from: Stage, to: Stage },

    /// Pause requested outside `Playing` / `Quiz`.
    #[error("cannot pause during {stage}")]
    InvalidPauseContext { stage: Stage },

    /// Resume requested while not paused.
    #[error("session is not paused")]
    NotPaused,

    /// Clock started twice for the same session.
    #[error("clock already started")]
    AlreadyStarted,

    /// Clock mutated after it was frozen on entering `Result`.
    #[error("clock is frozen")]
    ClockFrozen,

    /// Score computed twice for the same session.
    #[error("session already scored")]
    AlreadyScored,

    /// Submission attempted before reaching `Result`.
    #[error("cannot submit during {stage}, session is not terminal")]
    NotTerminal { stage: Stage },

    /// Submission attempted twice for the same session.
    #[error("score already submitted")]
    AlreadySubmitted,

    /// Submission attempted without a computed score.
    #[error("no score to submit")]
    Unscored,

    /// Signal value is NaN or infinite.
    #[error("signal `{name}` has non-finite value")]
    InvalidSignal { name: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_both_stages() {
        let err = SessionError::IllegalTransition {
            from: Stage::Intro,
            to: Stage::Result,
        };
        assert_eq!(err.to_string(), "illegal stage transition Intro -> Result");
    }

    #[test]
    fn test_display_pause_context() {
        let err = SessionError::InvalidPauseContext { stage: Stage::Outro };
        assert_eq!(err.to_string(), "cannot pause during Outro");
    }
}
