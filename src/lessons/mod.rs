//! Lesson games as configuration.
//!
//! A lesson game contributes only a level label, a formula and an optional
//! countdown; the session engine does the rest. See [`presets`] for the
//! stock rubrics.

mod catalog;
pub mod presets;

pub use catalog::{LessonCatalog, LessonConfig, LessonSpec};
