//! # lesson-session
//!
//! A session engine for timed educational lesson games.
//!
//! Every game in a lesson run follows the same lifecycle: an intro, a timed
//! play stage, an outro, a short quiz and a result screen. This crate owns
//! that lifecycle so individual games only describe their level label and
//! scoring rubric.
//!
//! ## Design Principles
//!
//! 1. **One Session, One Owner**: Each component owns exactly one part of the
//!    session. Only the [`SessionEngine`] composes them.
//!
//! 2. **Time Is Injected**: All timing reads go through [`TimeSource`], so
//!    tests drive the clock by hand.
//!
//! 3. **Score Once, Submit Once**: The score is computed on the frozen clock
//!    and handed to the [`ScoreLedger`] at most once per session.
//!
//! ## Modules
//!
//! - `core`: Session ids, signals, time sources, configuration, errors
//! - `stage`: Stage controller and transition rules
//! - `clock`: Pause-aware elapsed time and display ticks
//! - `scoring`: Score formulas and the write-once scorer
//! - `ledger`: Submission gate and score delivery
//! - `engine`: The session engine that wires it all together
//! - `lessons`: Per-game configuration and stock rubrics

pub mod core;
pub mod stage;
pub mod clock;
pub mod scoring;
pub mod ledger;
pub mod engine;
pub mod lessons;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, ManualTime, MonotonicTime, PerformanceSignals, Result, SessionError, SessionId,
    TimeSource,
};

pub use crate::stage::{Stage, StageChange, StageController};

pub use crate::clock::{ActiveClock, TickToken};

pub use crate::scoring::{LinearFormula, ScoreFormula, Scorer};

pub use crate::ledger::{Delivery, LedgerError, RecordingLedger, ScoreLedger, ScoreReport, SubmissionGate};

pub use crate::engine::{SessionEngine, SessionEvent, SessionResource, SessionSnapshot, Tick};

pub use crate::lessons::{LessonCatalog, LessonConfig};
