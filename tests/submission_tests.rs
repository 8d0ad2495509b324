//! Score delivery integration tests: the gate, failing ledgers and the
//! channel-backed outbox.

use std::thread;

use lesson_session::core::{EngineConfig, ManualTime, SessionError, SessionId};
use lesson_session::engine::{SessionEngine, SessionEvent};
use lesson_session::ledger::{
    outbox, Delivery, DrainStats, LedgerError, RecordingLedger, ScoreLedger, ScoreReport,
    SubmissionGate,
};
use lesson_session::lessons::{presets, LessonConfig};
use lesson_session::stage::Stage;

fn report(score: u32) -> ScoreReport {
    ScoreReport {
        session_id: SessionId::new(11),
        level_label: "Level 4".into(),
        score,
    }
}

fn play_through<L: ScoreLedger>(engine: &mut SessionEngine<ManualTime, L>) {
    for stage in [Stage::Playing, Stage::Outro, Stage::Quiz, Stage::Result] {
        engine.advance(stage).unwrap();
    }
}

// =============================================================================
// Gate Tests
// =============================================================================

/// The gate refuses non-terminal stages before anything else.
#[test]
fn test_gate_requires_result() {
    let ledger = RecordingLedger::new();
    let mut gate = SubmissionGate::new();

    assert_eq!(
        gate.submit(Stage::Quiz, Some(report(10)), &ledger),
        Err(SessionError::NotTerminal { stage: Stage::Quiz })
    );
    assert!(!gate.is_submitted());
    assert_eq!(ledger.attempts(), 0);
}

/// An unscored session cannot be submitted.
#[test]
fn test_gate_requires_score() {
    let ledger = RecordingLedger::new();
    let mut gate = SubmissionGate::new();

    assert_eq!(
        gate.submit(Stage::Result, None, &ledger),
        Err(SessionError::Unscored)
    );
    assert!(!gate.is_submitted());
}

/// A second submit fails and the ledger sees one attempt.
#[test]
fn test_gate_at_most_once() {
    let ledger = RecordingLedger::new();
    let mut gate = SubmissionGate::new();

    assert_eq!(
        gate.submit(Stage::Result, Some(report(10)), &ledger),
        Ok(Delivery::Delivered)
    );
    assert_eq!(
        gate.submit(Stage::Result, Some(report(10)), &ledger),
        Err(SessionError::AlreadySubmitted)
    );
    assert_eq!(ledger.attempts(), 1);
}

/// Rejected deliveries are reported, not raised.
#[test]
fn test_gate_swallows_rejection() {
    let ledger = RecordingLedger::failing(LedgerError::Rejected {
        status: 503,
        reason: "maintenance".into(),
    });
    let mut gate = SubmissionGate::new();

    assert_eq!(
        gate.submit(Stage::Result, Some(report(10)), &ledger),
        Ok(Delivery::Failed)
    );
    assert!(gate.is_submitted());
}

// =============================================================================
// Outbox Tests
// =============================================================================

/// The engine enqueues; a worker delivers to the real ledger later.
#[test]
fn test_engine_through_outbox() {
    let (sender, worker) = outbox();
    let time = ManualTime::new();
    let lesson = LessonConfig::new("Level 1", presets::variables());
    let mut engine = SessionEngine::new(EngineConfig::default(), lesson, time, sender);

    play_through(&mut engine);
    assert!(engine.is_submitted());
    assert_eq!(worker.pending(), 1);

    let remote = RecordingLedger::new();
    assert_eq!(
        worker.drain(&remote),
        DrainStats {
            delivered: 1,
            failed: 0,
        }
    );
    assert_eq!(remote.reports()[0].level_label, "Level 1");
    assert_eq!(remote.reports()[0].score, 100);
}

/// Worker-side failures are counted and never reach the session.
#[test]
fn test_outbox_worker_failures_counted() {
    let (sender, worker) = outbox();
    let time = ManualTime::new();
    let lesson = LessonConfig::new("Level 1", presets::variables());
    let mut engine = SessionEngine::new(EngineConfig::default(), lesson, time, sender);

    play_through(&mut engine);

    let remote = RecordingLedger::failing(LedgerError::Unavailable("timeout".into()));
    let stats = worker.drain(&remote);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.delivered, 0);

    let delivered = engine.drain_events().into_iter().any(|event| {
        matches!(
            event,
            SessionEvent::Submitted {
                delivery: Delivery::Delivered,
                ..
            }
        )
    });
    assert!(delivered);
}

/// With the worker gone the submission fails quietly.
#[test]
fn test_outbox_disconnected() {
    let (sender, worker) = outbox();
    drop(worker);

    let time = ManualTime::new();
    let lesson = LessonConfig::new("Level 1", presets::variables());
    let mut engine = SessionEngine::new(EngineConfig::default(), lesson, time, sender);

    play_through(&mut engine);

    assert!(engine.is_submitted());
    assert!(engine.drain_events().contains(&SessionEvent::Submitted {
        session_id: engine.session_id(),
        delivery: Delivery::Failed,
    }));
}

/// A worker thread drains until every sender is gone.
#[test]
fn test_outbox_worker_thread() {
    let (sender, worker) = outbox();
    let remote = RecordingLedger::new();

    let handle = {
        let remote = remote.clone();
        thread::spawn(move || worker.run(&remote))
    };

    for score in [10, 20, 30] {
        sender.submit_score(&report(score)).unwrap();
    }
    drop(sender);

    let stats = handle.join().unwrap();
    assert_eq!(stats.delivered, 3);
    let scores: Vec<u32> = remote.reports().iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![10, 20, 30]);
}
