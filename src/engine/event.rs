//! Notifications for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::SessionId;
use crate::ledger::Delivery;
use crate::stage::StageChange;

/// Something that happened to the mounted session.
///
/// Pause and resume show up as `StageChanged` into or out of `Paused`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    StageChanged {
        session_id: SessionId,
        change: StageChange,
    },
    Scored {
        session_id: SessionId,
        score: u32,
        elapsed_ms: u64,
    },
    Submitted {
        session_id: SessionId,
        delivery: Delivery,
    },
    Restarted {
        previous: SessionId,
        current: SessionId,
    },
}

/// Display refresh for the running timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    pub session_id: SessionId,
    pub elapsed_ms: u64,
    /// Countdown left, for lessons with a time limit.
    pub remaining_ms: Option<u64>,
    /// The countdown has reached zero. The game decides what happens next.
    pub expired: bool,
}
