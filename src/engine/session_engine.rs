//! Composition root: one engine per mounted lesson game.

use log::{debug, info, trace};
use smallvec::SmallVec;

use super::event::{SessionEvent, Tick};
use super::resource::{ResourceSet, SessionResource};
use super::session::{Session, SessionSnapshot};
use crate::clock::TickToken;
use crate::core::{EngineConfig, Result, SessionIdGen, SessionId, TimeSource};
use crate::ledger::{ScoreLedger, ScoreReport};
use crate::lessons::LessonConfig;
use crate::stage::{Stage, StageChange};

/// Drives a [`Session`] through its lifecycle for one lesson game.
///
/// The presentation layer calls `advance`, `pause`, `resume`, `restart`
/// and `record_signal`, polls `elapsed_ms`/`tick` for display, and drains
/// events. On reaching `Result` the engine freezes the clock, scores and
/// submits, in that order, exactly once.
///
/// ## Example
///
/// ```
/// use lesson_session::core::{EngineConfig, ManualTime};
/// use lesson_session::engine::SessionEngine;
/// use lesson_session::ledger::RecordingLedger;
/// use lesson_session::lessons::LessonConfig;
/// use lesson_session::scoring::LinearFormula;
/// use lesson_session::stage::Stage;
///
/// let time = ManualTime::new();
/// let ledger = RecordingLedger::new();
/// let lesson = LessonConfig::new("Level 8", LinearFormula::new(100.0, 100).per_second(-2.0));
/// let mut engine = SessionEngine::new(EngineConfig::default(), lesson, time.clone(), ledger.clone());
///
/// engine.advance(Stage::Playing).unwrap();
/// time.advance_secs(40);
/// for stage in [Stage::Outro, Stage::Quiz, Stage::Result] {
///     engine.advance(stage).unwrap();
/// }
///
/// assert_eq!(engine.score(), Some(20));
/// assert_eq!(ledger.reports()[0].level_label, "Level 8");
/// ```
pub struct SessionEngine<T, L> {
    config: EngineConfig,
    lesson: LessonConfig,
    time: T,
    ledger: L,
    ids: SessionIdGen,
    session: Session,
    events: SmallVec<[SessionEvent; 4]>,
    resources: ResourceSet,
}

impl<T: TimeSource, L: ScoreLedger> SessionEngine<T, L> {
    /// Mount a game: creates the first session at `Intro`.
    pub fn new(config: EngineConfig, lesson: LessonConfig, time: T, ledger: L) -> Self {
        let mut ids = match config.id_seed {
            Some(seed) => SessionIdGen::seeded(seed),
            None => SessionIdGen::from_entropy(),
        };
        let session = Session::new(ids.next_id(), config.tick_interval_ms);
        info!("{} mounted for {:?}", session.id, lesson.level_label);

        Self {
            config,
            lesson,
            time,
            ledger,
            ids,
            session,
            events: SmallVec::new(),
            resources: ResourceSet::default(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session.id
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.session.stage()
    }

    #[must_use]
    pub fn lesson(&self) -> &LessonConfig {
        &self.lesson
    }

    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Active play time now. Safe to call on every frame.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.session.elapsed_ms(self.time.now_ms())
    }

    /// Final score, once `Result` has been reached.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.session.score()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.session.is_submitted()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session
            .snapshot(self.time.now_ms(), &self.lesson.level_label)
    }

    // === Lifecycle ===

    /// Move to the next stage. Entering `Result` a second time is a no-op.
    pub fn advance(&mut self, to: Stage) -> Result<()> {
        let now = self.time.now_ms();
        let Some(change) = self.session.stages.advance(to).inspect_err(log_contract)? else {
            return Ok(());
        };
        self.stage_changed(change);

        let id = self.session.id;
        match change.to {
            Stage::Playing => {
                self.session.clock.start(now).inspect_err(log_contract)?;
                self.session.ticks.arm(id, now);
                info!("{id} started");
            }
            Stage::Quiz => {
                self.session.ticks.arm(id, now);
            }
            Stage::Outro => self.session.ticks.cancel(),
            Stage::Result => self.finish(now)?,
            Stage::Intro | Stage::Paused => {}
        }
        Ok(())
    }

    /// Pause during `Playing` or `Quiz`. Stops the clock and the ticks.
    pub fn pause(&mut self) -> Result<()> {
        let now = self.time.now_ms();
        let change = self.session.stages.pause().inspect_err(log_contract)?;
        self.session.clock.on_pause(now).inspect_err(log_contract)?;
        self.session.ticks.cancel();
        self.stage_changed(change);
        Ok(())
    }

    /// Resume where the pause interrupted; the paused interval is not counted.
    pub fn resume(&mut self) -> Result<()> {
        let now = self.time.now_ms();
        let change = self.session.stages.resume().inspect_err(log_contract)?;
        self.session.clock.on_resume(now).inspect_err(log_contract)?;
        self.session.ticks.arm(self.session.id, now);
        self.stage_changed(change);
        Ok(())
    }

    /// Discard the current session and start a fresh one at `Intro`.
    ///
    /// Always succeeds. Returns the new session id.
    pub fn restart(&mut self) -> SessionId {
        let previous = self.session.id;
        self.session.ticks.cancel();
        self.resources.release_all();

        let change = self.session.stages.restart();
        self.stage_changed(change);

        let current = self.ids.next_id();
        self.session = Session::new(current, self.config.tick_interval_ms);
        self.events.push(SessionEvent::Restarted { previous, current });
        info!("{previous} restarted as {current}");
        current
    }

    /// Add to a performance signal (`moves`, `mistakes`, ...).
    pub fn record_signal(&mut self, name: &str, value: f64) -> Result<f64> {
        let total = self
            .session
            .signals
            .record(name, value)
            .inspect_err(log_contract)?;
        trace!("{} {name} = {total}", self.session.id);
        Ok(total)
    }

    // === Ticks ===

    /// Poll the display tick. `Some` at most once per interval while
    /// `Playing` or `Quiz`.
    pub fn tick(&mut self) -> Option<Tick> {
        let now = self.time.now_ms();
        if !self.session.ticks.poll(now) {
            return None;
        }
        Some(self.make_tick(now))
    }

    /// Token to hand to a host timer, if ticks are running.
    #[must_use]
    pub fn timer_token(&self) -> Option<TickToken> {
        self.session.ticks.token(self.session.id)
    }

    /// Host timer callback. Stale tokens (paused, finished or restarted
    /// since) yield `None` and touch nothing.
    pub fn on_timer(&mut self, token: TickToken) -> Option<Tick> {
        if !self.session.ticks.accepts(self.session.id, token) {
            trace!("{} ignoring stale timer {:?}", self.session.id, token);
            return None;
        }
        Some(self.make_tick(self.time.now_ms()))
    }

    // === Events and resources ===

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    /// Hand a resource to the running session; released on restart or teardown.
    pub fn attach_resource<R: SessionResource + 'static>(&mut self, resource: R) {
        self.resources.attach(Box::new(resource));
    }

    /// Number of resources currently held.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Unmount: cancel ticks and release resources. Same as dropping.
    pub fn teardown(self) {}

    // === Internals ===

    fn finish(&mut self, now: u64) -> Result<()> {
        let session = &mut self.session;
        session.ticks.cancel();

        let elapsed_ms = session.clock.freeze(now);
        let score = session
            .scorer
            .compute(elapsed_ms, &session.signals, self.lesson.formula.as_ref())
            .inspect_err(log_contract)?;
        info!("{} scored {score} in {elapsed_ms} ms", session.id);
        self.events.push(SessionEvent::Scored {
            session_id: session.id,
            score,
            elapsed_ms,
        });

        let report = ScoreReport {
            session_id: session.id,
            level_label: self.lesson.level_label.clone(),
            score,
        };
        let delivery = session
            .gate
            .submit(session.stages.current(), Some(report), &self.ledger)
            .inspect_err(log_contract)?;
        self.events.push(SessionEvent::Submitted {
            session_id: session.id,
            delivery,
        });
        Ok(())
    }

    fn make_tick(&self, now: u64) -> Tick {
        let elapsed_ms = self.session.elapsed_ms(now);
        let remaining_ms = self
            .lesson
            .time_limit_ms
            .map(|limit| limit.saturating_sub(elapsed_ms));
        trace!("{} tick {elapsed_ms} ms", self.session.id);

        Tick {
            session_id: self.session.id,
            elapsed_ms,
            remaining_ms,
            expired: remaining_ms == Some(0),
        }
    }

    fn stage_changed(&mut self, change: StageChange) {
        debug!("{} {} -> {}", self.session.id, change.from, change.to);
        self.events.push(SessionEvent::StageChanged {
            session_id: self.session.id,
            change,
        });
    }
}

impl<T, L> Drop for SessionEngine<T, L> {
    fn drop(&mut self) {
        self.session.ticks.cancel();
        self.resources.release_all();
    }
}

fn log_contract(e: &crate::core::SessionError) {
    debug!("session contract violation: {e}");
}
