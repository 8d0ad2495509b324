//! Core types shared by every component: ids, signals, time, config, errors.
//!
//! Nothing in here knows about a particular lesson game. Games plug in
//! their formulas and signal names through [`crate::lessons`].

pub mod config;
pub mod error;
pub mod session_id;
pub mod signals;
pub mod time;

pub use config::{EngineConfig, DEFAULT_TICK_INTERVAL_MS};
pub use error::{Result, SessionError};
pub use session_id::{SessionId, SessionIdGen};
pub use signals::PerformanceSignals;
pub use time::{ManualTime, MonotonicTime, TimeSource};
