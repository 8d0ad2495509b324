//! Stock rubrics for the platform's lesson families.
//!
//! These are product defaults, not part of the engine contract: a game is
//! free to register its own formula instead.

use crate::scoring::LinearFormula;

use super::catalog::{LessonCatalog, LessonConfig};

/// Signal names the stock rubrics read.
pub mod signals {
    pub const MOVES: &str = "moves";
    pub const MISTAKES: &str = "mistakes";
    pub const WRONG_ANSWERS: &str = "wrongAnswers";
    pub const CORRECT_ANSWERS: &str = "correctAnswers";
}

/// Sorting race: a 1000-point time bonus that drains 10 per second, minus
/// 5 per swap.
#[must_use]
pub fn sorting_race() -> LinearFormula {
    LinearFormula::new(1000.0, 1000)
        .per_second(-10.0)
        .weight(signals::MOVES, -5.0)
}

/// Variables: 100 points, minus 1 per second and 10 per mistake.
#[must_use]
pub fn variables() -> LinearFormula {
    LinearFormula::new(100.0, 100)
        .per_second(-1.0)
        .weight(signals::MISTAKES, -10.0)
}

/// Queue builder: 150 points, minus 1 per second and 15 per mistake.
#[must_use]
pub fn queue_builder() -> LinearFormula {
    LinearFormula::new(150.0, 150)
        .per_second(-1.0)
        .weight(signals::MISTAKES, -15.0)
}

/// Stack tower: 150 points, minus 2 per move and 15 per mistake. Untimed.
#[must_use]
pub fn stack_tower() -> LinearFormula {
    LinearFormula::new(150.0, 150)
        .weight(signals::MOVES, -2.0)
        .weight(signals::MISTAKES, -15.0)
}

/// Debugging quiz: 100 points, minus 2 per second and 10 per wrong answer,
/// plus 5 per correct answer.
#[must_use]
pub fn debugging_quiz() -> LinearFormula {
    LinearFormula::new(100.0, 100)
        .per_second(-2.0)
        .weight(signals::WRONG_ANSWERS, -10.0)
        .weight(signals::CORRECT_ANSWERS, 5.0)
}

/// A catalog with every stock lesson under its default label.
#[must_use]
pub fn default_catalog() -> LessonCatalog {
    let mut catalog = LessonCatalog::new();
    catalog.register(LessonConfig::new("Variables", variables()));
    catalog.register(LessonConfig::new("Sorting", sorting_race()).with_time_limit_ms(100_000));
    catalog.register(LessonConfig::new("Queues", queue_builder()).with_time_limit_ms(150_000));
    catalog.register(LessonConfig::new("Stacks", stack_tower()));
    catalog.register(LessonConfig::new("Debugging", debugging_quiz()).with_time_limit_ms(50_000));
    catalog
}
