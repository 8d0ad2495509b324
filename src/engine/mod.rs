//! Session engine: wires stage controller, clock, scorer and submission
//! gate into the per-game lifecycle.
//!
//! ## Ordering
//!
//! Entering `Playing` starts the clock. Pause and resume go to the stage
//! controller first, then the clock. Entering `Result` cancels ticks,
//! freezes the clock, computes the score and submits it, always in that
//! order. A restart replaces the session wholesale, so nothing from the
//! previous play-through (ticks, score, submitted flag) can leak into the
//! new one.

mod event;
mod resource;
mod session;
mod session_engine;

pub use event::{SessionEvent, Tick};
pub use resource::SessionResource;
pub use session::{Session, SessionSnapshot};
pub use session_engine::SessionEngine;
