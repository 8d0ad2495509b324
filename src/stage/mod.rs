//! Stage controller: the legal lifecycle of a session.
//!
//! Every lesson game walks the same path, `Intro → Playing → Outro → Quiz →
//! Result`, with an orthogonal `Paused` state available during `Playing`
//! and `Quiz`. The controller is a leaf; the engine listens to the
//! [`StageChange`] values it returns to drive the clock and ticks.

mod controller;

pub use controller::{Stage, StageChange, StageController};
