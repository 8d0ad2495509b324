//! Display tick schedule.
//!
//! Ticks only exist to refresh the on-screen timer. They are armed while
//! the session is `Playing` or `Quiz` and cancelled everywhere else, and
//! every arm/cancel bumps a generation so callbacks scheduled by the host
//! before a pause or restart are recognised as stale.

use serde::{Deserialize, Serialize};

use crate::core::SessionId;

/// Proof that a host timer was scheduled for a specific armed period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickToken {
    pub session_id: SessionId,
    pub generation: u32,
}

#[derive(Clone, Debug)]
pub struct TickSchedule {
    interval_ms: u64,
    next_due: Option<u64>,
    generation: u32,
}

impl TickSchedule {
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due: None,
            generation: 0,
        }
    }

    /// Start ticking from `now`; invalidates earlier tokens.
    pub fn arm(&mut self, session_id: SessionId, now: u64) -> TickToken {
        self.generation = self.generation.wrapping_add(1);
        self.next_due = Some(now + self.interval_ms);
        TickToken {
            session_id,
            generation: self.generation,
        }
    }

    /// Stop ticking; invalidates every outstanding token.
    pub fn cancel(&mut self) {
        if self.next_due.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// True once per elapsed interval. Missed intervals collapse into one
    /// tick; the cadence stays anchored to when the schedule was armed.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let missed = (now - due) / self.interval_ms;
                self.next_due = Some(due + (missed + 1) * self.interval_ms);
                true
            }
            _ => false,
        }
    }

    /// Token for the current armed period, if any.
    #[must_use]
    pub fn token(&self, session_id: SessionId) -> Option<TickToken> {
        self.next_due.map(|_| TickToken {
            session_id,
            generation: self.generation,
        })
    }

    /// Whether a host callback carrying `token` should still run.
    #[must_use]
    pub fn accepts(&self, session_id: SessionId, token: TickToken) -> bool {
        self.is_armed() && token.session_id == session_id && token.generation == self.generation
    }
}
