//! Lesson catalog integration tests: loading lessons from JSON and
//! mounting them in an engine.

use lesson_session::core::{EngineConfig, ManualTime};
use lesson_session::engine::SessionEngine;
use lesson_session::ledger::RecordingLedger;
use lesson_session::lessons::presets::{self, signals};
use lesson_session::lessons::{LessonCatalog, LessonSpec};
use lesson_session::scoring::ScoreFormula;
use lesson_session::stage::Stage;

const CATALOG_JSON: &str = r#"[
    {
        "level_label": "Level 8",
        "formula": { "base": 100.0, "per_second": -2.0, "max": 100 },
        "time_limit_ms": 50000
    },
    {
        "level_label": "Level 5",
        "formula": {
            "base": 150.0,
            "weights": [{ "signal": "mistakes", "weight": -15.0 }],
            "max": 150
        }
    }
]"#;

// =============================================================================
// Catalog Tests
// =============================================================================

/// Lessons deserialize with optional fields defaulted.
#[test]
fn test_catalog_from_json() {
    let specs: Vec<LessonSpec> = serde_json::from_str(CATALOG_JSON).unwrap();
    let catalog = LessonCatalog::from_specs(specs);

    assert_eq!(catalog.labels(), vec!["Level 5", "Level 8"]);

    let level_8 = catalog.get("Level 8").unwrap();
    assert_eq!(level_8.time_limit_ms, Some(50_000));
    assert_eq!(level_8.formula.max(), 100);

    let level_5 = catalog.get("Level 5").unwrap();
    assert_eq!(level_5.time_limit_ms, None);
}

/// A lesson loaded from JSON scores like the hand-built one.
#[test]
fn test_json_lesson_plays() {
    let specs: Vec<LessonSpec> = serde_json::from_str(CATALOG_JSON).unwrap();
    let catalog = LessonCatalog::from_specs(specs);
    let lesson = catalog.get("Level 5").unwrap().clone();

    let time = ManualTime::new();
    let ledger = RecordingLedger::new();
    let mut engine = SessionEngine::new(EngineConfig::default(), lesson, time.clone(), ledger.clone());

    engine.advance(Stage::Playing).unwrap();
    engine.record_signal(signals::MISTAKES, 3.0).unwrap();
    time.advance_secs(90);
    for stage in [Stage::Outro, Stage::Quiz, Stage::Result] {
        engine.advance(stage).unwrap();
    }

    assert_eq!(engine.score(), Some(105));
    assert_eq!(ledger.reports()[0].level_label, "Level 5");
}

/// Every stock lesson is registered and playable.
#[test]
fn test_default_catalog_mounts() {
    let catalog = presets::default_catalog();
    assert_eq!(catalog.len(), 5);

    for label in catalog.labels() {
        let lesson = catalog.get(label).unwrap().clone();
        let ledger = RecordingLedger::new();
        let mut engine =
            SessionEngine::new(EngineConfig::default(), lesson, ManualTime::new(), ledger.clone());

        for stage in [Stage::Playing, Stage::Outro, Stage::Quiz, Stage::Result] {
            engine.advance(stage).unwrap();
        }

        let max = catalog.get(label).unwrap().formula.max();
        assert_eq!(engine.score(), Some(max), "{label}");
        assert_eq!(ledger.reports().len(), 1, "{label}");
    }
}

/// Sorting race: the time bonus drains and moves cost points.
#[test]
fn test_sorting_race_rubric() {
    let catalog = presets::default_catalog();
    let lesson = catalog.get("Sorting").unwrap().clone();
    let time = ManualTime::new();
    let mut engine =
        SessionEngine::new(EngineConfig::default(), lesson, time.clone(), RecordingLedger::new());

    engine.advance(Stage::Playing).unwrap();
    engine.record_signal(signals::MOVES, 12.0).unwrap();
    time.advance_secs(30);
    engine.pause().unwrap();
    time.advance_secs(600);
    engine.resume().unwrap();
    for stage in [Stage::Outro, Stage::Quiz, Stage::Result] {
        engine.advance(stage).unwrap();
    }

    // 1000 - 10 * 30 - 5 * 12
    assert_eq!(engine.score(), Some(640));
}
