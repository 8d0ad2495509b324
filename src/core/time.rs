//! Time sources.
//!
//! The clock itself is a pure function of millisecond timestamps; the engine
//! reads "now" from a [`TimeSource`] so that hosts can plug in a monotonic
//! wall clock and tests can step time by hand.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Supplies the current time in milliseconds.
///
/// Values must be monotonic non-decreasing for a given source.
pub trait TimeSource {
    fn now_ms(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Milliseconds since the source was created, from `Instant`.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven time. Clones share the same reading.
///
/// ```
/// use lesson_session::core::{ManualTime, TimeSource};
///
/// let time = ManualTime::new();
/// let handle = time.clone();
/// handle.advance_secs(3);
/// assert_eq!(time.now_ms(), 3_000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualTime {
    now: Arc<AtomicU64>,
}

impl ManualTime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a given reading.
    #[must_use]
    pub fn starting_at(ms: u64) -> Self {
        let time = Self::new();
        time.set(ms);
        time
    }

    pub fn set(&self, ms: u64) {
        self.now.store(ms, Ordering::SeqCst);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance_ms(secs * 1_000);
    }
}

impl TimeSource for ManualTime {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_time_shared_between_clones() {
        let time = ManualTime::starting_at(500);
        let other = time.clone();

        other.advance_ms(250);
        assert_eq!(time.now_ms(), 750);

        time.set(10);
        assert_eq!(other.now_ms(), 10);
    }

    #[test]
    fn test_monotonic_time_non_decreasing() {
        let time = MonotonicTime::new();
        let a = time.now_ms();
        let b = time.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_reference_and_arc_sources() {
        let time = ManualTime::starting_at(42);
        assert_eq!((&time).now_ms(), 42);
        assert_eq!(Arc::new(time).now_ms(), 42);
    }
}
