//! Active elapsed time, excluding paused intervals.

use serde::{Deserialize, Serialize};

use crate::core::{Result, SessionError};

/// Pause-aware stopwatch for one session.
///
/// Elapsed time is a pure function of four numbers: `started_at`,
/// `paused_at`, `accumulated_pause_ms` and the caller's `now`. Nothing here
/// reads a clock, so readings are reproducible.
///
/// ## Example
///
/// ```
/// use lesson_session::clock::ActiveClock;
///
/// let mut clock = ActiveClock::new();
/// clock.start(0).unwrap();
/// clock.on_pause(10_000).unwrap();
/// clock.on_resume(15_000).unwrap();
/// assert_eq!(clock.elapsed_ms(20_000), 15_000);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveClock {
    started_at: Option<u64>,
    paused_at: Option<u64>,
    accumulated_pause_ms: u64,
    frozen_ms: Option<u64>,
}

impl ActiveClock {
    /// A clock that has not started.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start time. Only once per session.
    pub fn start(&mut self, now: u64) -> Result<()> {
        if self.started_at.is_some() {
            return Err(SessionError::AlreadyStarted);
        }
        self.started_at = Some(now);
        Ok(())
    }

    /// Record the start of a pause. Repeated pauses keep the first one.
    pub fn on_pause(&mut self, now: u64) -> Result<()> {
        self.ensure_not_frozen()?;

        if self.started_at.is_some() && self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
        Ok(())
    }

    /// Close the current pause and bank its length.
    pub fn on_resume(&mut self, now: u64) -> Result<()> {
        self.ensure_not_frozen()?;

        let paused_at = self.paused_at.take().ok_or(SessionError::NotPaused)?;
        self.accumulated_pause_ms += now.saturating_sub(paused_at);
        Ok(())
    }

    /// Active time at `now`. Zero before start, pinned while paused,
    /// constant once frozen.
    #[must_use]
    pub fn elapsed_ms(&self, now: u64) -> u64 {
        if let Some(frozen) = self.frozen_ms {
            return frozen;
        }

        let Some(started_at) = self.started_at else {
            return 0;
        };

        let end = match self.paused_at {
            Some(paused_at) => paused_at.min(now),
            None => now,
        };

        end.saturating_sub(started_at)
            .saturating_sub(self.accumulated_pause_ms)
    }

    /// Fix the final elapsed time. Later calls return the same value.
    pub fn freeze(&mut self, now: u64) -> u64 {
        if let Some(frozen) = self.frozen_ms {
            return frozen;
        }

        let elapsed = self.elapsed_ms(now);
        self.frozen_ms = Some(elapsed);
        elapsed
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen_ms.is_some()
    }

    /// Total banked pause time, not counting a pause still open.
    #[must_use]
    pub fn accumulated_pause_ms(&self) -> u64 {
        self.accumulated_pause_ms
    }

    fn ensure_not_frozen(&self) -> Result<()> {
        if self.frozen_ms.is_some() {
            Err(SessionError::ClockFrozen)
        } else {
            Ok(())
        }
    }
}
