//! Stage graph and its controller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Result, SessionError};

/// A phase of a session's lifecycle.
///
/// The forward graph is `Intro → Playing → Outro → Quiz → Result`.
/// `Paused` sits beside it and is only reachable from `Playing` or `Quiz`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Intro,
    Playing,
    Outro,
    Quiz,
    Result,
    Paused,
}

impl Stage {
    /// The one stage `advance` may move to from here.
    #[must_use]
    pub const fn successor(self) -> Option<Stage> {
        match self {
            Stage::Intro => Some(Stage::Playing),
            Stage::Playing => Some(Stage::Outro),
            Stage::Outro => Some(Stage::Quiz),
            Stage::Quiz => Some(Stage::Result),
            Stage::Result | Stage::Paused => None,
        }
    }

    /// Stages that may be paused.
    #[must_use]
    pub const fn is_pausable(self) -> bool {
        matches!(self, Stage::Playing | Stage::Quiz)
    }

    /// Stages during which display ticks run.
    #[must_use]
    pub const fn is_timed(self) -> bool {
        self.is_pausable()
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Stage::Result)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Intro => "Intro",
            Stage::Playing => "Playing",
            Stage::Outro => "Outro",
            Stage::Quiz => "Quiz",
            Stage::Result => "Result",
            Stage::Paused => "Paused",
        };
        f.write_str(name)
    }
}

/// A stage transition that actually happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageChange {
    pub from: Stage,
    pub to: Stage,
}

/// Owns the current stage and enforces the graph.
///
/// ## Example
///
/// ```
/// use lesson_session::stage::{Stage, StageController};
///
/// let mut stages = StageController::new();
/// stages.advance(Stage::Playing).unwrap();
/// stages.pause().unwrap();
/// assert_eq!(stages.current(), Stage::Paused);
/// assert_eq!(stages.effective_stage(), Stage::Playing);
///
/// // Cannot skip ahead while paused, or at all.
/// assert!(stages.advance(Stage::Outro).is_err());
/// stages.resume().unwrap();
/// assert!(stages.advance(Stage::Result).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct StageController {
    current: Stage,
    resume_to: Option<Stage>,
    history: SmallVec<[StageChange; 8]>,
}

impl StageController {
    /// A controller at `Intro`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Stage::Intro,
            resume_to: None,
            history: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Stage {
        self.current
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.resume_to.is_some()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }

    /// The stage the session is logically in: the pre-pause stage while
    /// paused, otherwise the current one.
    #[must_use]
    pub fn effective_stage(&self) -> Stage {
        self.resume_to.unwrap_or(self.current)
    }

    /// Every transition since creation or the last restart, oldest first.
    #[must_use]
    pub fn history(&self) -> &[StageChange] {
        &self.history
    }

    /// Move to the direct successor of the current stage.
    ///
    /// Returns `Ok(None)` for `Result → Result`, which is accepted and
    /// changes nothing.
    pub fn advance(&mut self, to: Stage) -> Result<Option<StageChange>> {
        let from = self.current;

        if from == Stage::Result && to == Stage::Result {
            return Ok(None);
        }

        if self.is_paused() || from.successor() != Some(to) {
            return Err(SessionError::IllegalTransition { from, to });
        }

        Ok(Some(self.set(to)))
    }

    /// Enter `Paused`, remembering where to resume.
    pub fn pause(&mut self) -> Result<StageChange> {
        if !self.current.is_pausable() {
            return Err(SessionError::InvalidPauseContext {
                stage: self.current,
            });
        }

        self.resume_to = Some(self.current);
        Ok(self.set(Stage::Paused))
    }

    /// Leave `Paused` for the stage it interrupted.
    pub fn resume(&mut self) -> Result<StageChange> {
        let to = self.resume_to.take().ok_or(SessionError::NotPaused)?;
        Ok(self.set(to))
    }

    /// Back to `Intro`. Always succeeds; the caller starts a new session.
    pub fn restart(&mut self) -> StageChange {
        let change = StageChange {
            from: self.current,
            to: Stage::Intro,
        };
        self.current = Stage::Intro;
        self.resume_to = None;
        self.history.clear();
        change
    }

    fn set(&mut self, to: Stage) -> StageChange {
        let change = StageChange {
            from: self.current,
            to,
        };
        self.current = to;
        self.history.push(change);
        change
    }
}

impl Default for StageController {
    fn default() -> Self {
        Self::new()
    }
}
