//! Session clock and display ticks.
//!
//! - [`ActiveClock`]: elapsed play time with paused intervals removed
//! - [`TickSchedule`]: once-per-interval refresh, cancelled outside timed stages

mod active;
mod ticker;

pub use active::ActiveClock;
pub use ticker::{TickSchedule, TickToken};
