//! Event-thread driver and single-worker correction dispatch.
//!
//! The event side (`Engine::handle`) never blocks: it buffers keys, evaluates
//! finished words and hands every screen-changing job to a worker thread.
//! At most one fix, undo or force-fix runs at a time; while it does, key
//! events and toggles are dropped. A direction-only pass runs beside typing.

use std::{
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::{
    buffer::WordBuffer,
    classifier::Classifier,
    decision::{self, Decider, MIN_WORD_KEYS, Verdict},
    effects::{EffectResult, Executor},
    keys::{self, Boundary, KeyClass, PhysicalKey},
    lang::Language,
    lexicon::Lexicon,
    line_state::{BoundaryPlan, LineContext, LineEvent, LineState, WordOutcome},
    lists::UserLists,
    outcome::SkipReason,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EngineOptions {
    /// Busy period after a fix so the injected input cannot re-enter.
    pub block_delay: Duration,
    /// Pause between consecutive effects.
    pub settle_delay: Duration,
    /// Wait before undo / force-fix touch the screen.
    pub hotkey_release_delay: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            block_delay: Duration::from_millis(2000),
            settle_delay: Duration::from_millis(50),
            hotkey_release_delay: Duration::from_millis(300),
        }
    }
}

impl EngineOptions {
    /// No pauses at all. Replays and tests.
    pub const fn immediate() -> Self {
        Self {
            block_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
            hotkey_release_delay: Duration::ZERO,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Signal {
    KeyDown(PhysicalKey),
    /// Both Alt+Shift modifiers released after being held together.
    Toggle,
    Override(Language),
    /// Unlock, logon or resume from sleep.
    SessionReset,
    /// Foreground window changed to the given id.
    FocusChanged(u64),
    PointerClick,
    UndoOrForceFix,
}

/// The last automatic correction, kept until the next word starts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixRecord {
    /// What was on screen before the fix, trailing punctuation included.
    pub original_screen: String,
    /// Screen word without trailing punctuation; this is what undo ignores.
    pub screen_word: String,
    pub corrected: String,
    pub original_language: Language,
    pub target_language: Language,
    pub boundary: Boundary,
}

/// The last word that was left alone, eligible for force-fix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnfixedRecord {
    pub keys: Vec<PhysicalKey>,
    pub was_first_word_of_line: bool,
    pub epoch: u64,
    pub boundary: Boundary,
}

/// State touched by both the event side and the worker.
#[derive(Debug, Default)]
pub(crate) struct Shared {
    pub(crate) line: LineState,
    pub(crate) lists: UserLists,
    pub(crate) last_fix: Option<FixRecord>,
    pub(crate) last_unfixed: Option<UnfixedRecord>,
}

pub(crate) fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

#[must_use = "guard must be kept alive to prevent reentry"]
pub(crate) struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    pub(crate) fn try_acquire(flag: &Arc<AtomicBool>) -> Result<Self, SkipReason> {
        if flag.swap(true, Ordering::AcqRel) {
            return Err(SkipReason::Reentry);
        }
        Ok(Self {
            flag: Arc::clone(flag),
        })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Handles a worker thread needs.
#[derive(Clone)]
pub(crate) struct Worker {
    pub(crate) executor: Arc<dyn Executor>,
    pub(crate) shared: Arc<Mutex<Shared>>,
    pub(crate) options: EngineOptions,
}

pub(crate) fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

struct FixJob {
    original_screen: String,
    screen_word: String,
    corrected: String,
    original_language: Language,
    target: Language,
    first_word: bool,
    epoch: u64,
    boundary: Boundary,
}

impl Worker {
    pub(crate) fn state(&self) -> MutexGuard<'_, Shared> {
        lock(&self.shared)
    }

    pub(crate) fn settle(&self) {
        pause(self.options.settle_delay);
    }

    /// Aligns the line with `epoch` unless it is gone or already aligned.
    pub(crate) fn align_if_current(
        &self,
        target: Language,
        wake_first: bool,
        epoch: u64,
        ended_line: bool,
    ) -> EffectResult {
        let current = self.state().line.can_align(epoch, ended_line);
        if !current {
            tracing::trace!(%target, epoch, "alignment skipped: line moved on");
            return Ok(());
        }
        self.executor.set_alignment(target, wake_first)?;
        self.state().line.apply(LineEvent::DirectionSet { epoch });
        tracing::trace!(%target, epoch, "line aligned");
        Ok(())
    }

    fn run_fix(&self, job: FixJob) -> EffectResult {
        self.executor
            .delete_characters(job.original_screen.chars().count() + 1)?;
        self.settle();
        self.executor.switch_layout(job.target)?;
        self.state()
            .line
            .apply(LineEvent::LayoutSwitched(job.target));
        self.settle();
        self.executor
            .type_text(&format!("{}{}", job.corrected, job.boundary.as_text()))?;

        self.state().last_fix = Some(FixRecord {
            original_screen: job.original_screen.clone(),
            screen_word: job.screen_word,
            corrected: job.corrected.clone(),
            original_language: job.original_language,
            target_language: job.target,
            boundary: job.boundary,
        });
        tracing::info!(from = %job.original_screen, to = %job.corrected, "word fixed");

        if job.first_word {
            self.settle();
            self.align_if_current(job.target, false, job.epoch, job.boundary.ends_line())?;
        }
        pause(self.options.block_delay);
        Ok(())
    }
}

pub struct Engine {
    decider: Decider,
    pub(crate) worker: Worker,
    pub(crate) busy: Arc<AtomicBool>,
    pub(crate) buffer: WordBuffer,
    focus: Option<u64>,
}

impl Engine {
    pub fn new(
        lexicon: Arc<Lexicon>,
        lists: UserLists,
        executor: Arc<dyn Executor>,
        options: EngineOptions,
    ) -> Self {
        let shared = Shared {
            line: LineState::new(Language::English),
            lists,
            ..Shared::default()
        };
        Self {
            decider: Decider::new(Classifier::new(lexicon)),
            worker: Worker {
                executor,
                shared: Arc::new(Mutex::new(shared)),
                options,
            },
            busy: Arc::new(AtomicBool::new(false)),
            buffer: WordBuffer::new(),
            focus: None,
        }
    }

    /// Feeds one input signal. Returns the worker spawned for it, if any.
    pub fn handle(&mut self, signal: Signal) -> Option<JoinHandle<()>> {
        match signal {
            Signal::KeyDown(key) => self.on_key(key),
            Signal::Toggle => {
                if self.is_busy() {
                    tracing::trace!("toggle ignored: worker busy");
                    return None;
                }
                self.buffer.clear();
                self.state().line.apply(LineEvent::Toggle);
                None
            }
            Signal::Override(lang) => {
                self.state().line.apply(LineEvent::Override(lang));
                None
            }
            Signal::SessionReset => {
                self.buffer.clear();
                self.state().line.apply(LineEvent::SessionReset);
                None
            }
            Signal::FocusChanged(id) => {
                if self.focus.replace(id) != Some(id) {
                    self.reset_line("focus changed");
                }
                None
            }
            Signal::PointerClick => {
                self.reset_line("pointer click");
                None
            }
            Signal::UndoOrForceFix => match self.undo_or_force_fix() {
                Ok(handle) => Some(handle),
                Err(reason) => {
                    tracing::debug!(reason = %reason, "undo/force-fix skipped");
                    None
                }
            },
        }
    }

    pub fn tracked_language(&self) -> Language {
        self.state().line.tracked()
    }

    pub fn line_context(&self) -> LineContext {
        self.state().line.context()
    }

    pub fn last_fix(&self) -> Option<FixRecord> {
        self.state().last_fix.clone()
    }

    pub fn last_unfixed(&self) -> Option<UnfixedRecord> {
        self.state().last_unfixed.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        self.state().lists.ignored.contains(word)
    }

    pub fn learned_language(&self, key_text: &str) -> Option<Language> {
        self.state().lists.learned.get(key_text)
    }

    /// Latin rendering of the word being typed.
    pub fn buffered_text(&self) -> String {
        self.buffer.text()
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, Shared> {
        self.worker.state()
    }

    fn on_key(&mut self, key: PhysicalKey) -> Option<JoinHandle<()>> {
        if self.is_busy() {
            self.buffer.clear();
            return None;
        }
        match key.class() {
            KeyClass::Char(_) => {
                if self.buffer.is_empty() {
                    self.forget_last_word();
                }
                self.buffer.append(key);
                None
            }
            KeyClass::Backspace => {
                if self.buffer.is_empty() {
                    self.forget_last_word();
                }
                self.buffer.backspace();
                None
            }
            KeyClass::Navigation => {
                self.buffer.clear();
                self.forget_last_word();
                None
            }
            KeyClass::Boundary(boundary) => self.on_boundary(boundary),
            KeyClass::Other => None,
        }
    }

    /// The previous word is no longer adjacent to the caret.
    fn forget_last_word(&self) {
        let mut state = self.state();
        state.last_fix = None;
        state.last_unfixed = None;
    }

    fn reset_line(&mut self, cause: &'static str) {
        if !self.buffer.is_empty() {
            tracing::debug!(cause, keys = %self.buffer.text(), "word discarded");
        }
        self.buffer.clear();
        let mut state = self.state();
        state.line.apply(LineEvent::LineBreak);
        state.last_fix = None;
        state.last_unfixed = None;
    }

    fn on_boundary(&mut self, boundary: Boundary) -> Option<JoinHandle<()>> {
        let keys = self.buffer.take();
        if keys.len() < MIN_WORD_KEYS {
            self.forget_last_word();
            if boundary == Boundary::Enter {
                self.state().line.apply(LineEvent::LineBreak);
            }
            return None;
        }

        let text = keys::key_text(&keys);
        let mut state = self.state();
        let tracked = state.line.tracked();
        let screen = keys::screen_text(&text, tracked);
        let verdict = match self.decider.evaluate(&keys, tracked, &state.lists) {
            // Nothing to gain from retyping identical text.
            Verdict::Fix { corrected, .. } if corrected == screen => {
                Verdict::NoFix(SkipReason::NoChangeAfterConvert)
            }
            verdict => verdict,
        };
        let outcome = match &verdict {
            Verdict::Fix { .. } => WordOutcome::Fixed,
            Verdict::NoFix(_) => WordOutcome::Unfixed {
                detected: if state.line.context().is_first_word_of_line {
                    self.decider.detect_language(&keys, tracked)
                } else {
                    None
                },
            },
        };
        let plan = state.line.complete_word(outcome, boundary);
        tracing::debug!(
            keys = %text,
            %screen,
            %tracked,
            ?verdict,
            first_word = plan.first_word,
            "word evaluated"
        );
        state.last_fix = None;

        match verdict {
            Verdict::Fix { corrected, target } => {
                state.last_unfixed = None;
                drop(state);
                let corrected = if plan.first_word && target == Language::English {
                    capitalize_first(&corrected)
                } else {
                    corrected
                };
                let (core, _) = decision::split_trailing_punct(&text);
                let job = FixJob {
                    screen_word: keys::screen_text(core, tracked),
                    original_screen: screen,
                    corrected,
                    original_language: tracked,
                    target,
                    first_word: plan.first_word,
                    epoch: plan.epoch,
                    boundary,
                };
                self.dispatch("fix", move |worker| worker.run_fix(job)).ok()
            }
            Verdict::NoFix(_) => {
                drop(state);
                let aligned = plan.align.and_then(|target| {
                    let BoundaryPlan {
                        epoch, ended_line, ..
                    } = plan;
                    self.launch("align", move |worker| {
                        worker.settle();
                        worker.align_if_current(target, true, epoch, ended_line)
                    })
                    .ok()
                });
                self.state().last_unfixed = Some(UnfixedRecord {
                    keys,
                    was_first_word_of_line: plan.first_word && aligned.is_none(),
                    epoch: plan.epoch,
                    boundary,
                });
                aligned
            }
        }
    }

    fn dispatch<F>(&self, task: &'static str, job: F) -> Result<JoinHandle<()>, SkipReason>
    where
        F: FnOnce(&Worker) -> EffectResult + Send + 'static,
    {
        let guard = BusyGuard::try_acquire(&self.busy).inspect_err(|reason| {
            tracing::trace!(task, reason = %reason, "dispatch skipped");
        })?;
        self.spawn(guard, task, job)
    }

    /// Runs `job` on a worker that holds `guard` until it returns.
    pub(crate) fn spawn<F>(
        &self,
        guard: BusyGuard,
        task: &'static str,
        job: F,
    ) -> Result<JoinHandle<()>, SkipReason>
    where
        F: FnOnce(&Worker) -> EffectResult + Send + 'static,
    {
        self.launch(task, move |worker| {
            let _guard = guard;
            job(worker)
        })
    }

    /// Runs `job` on a worker without taking the busy flag.
    fn launch<F>(&self, task: &'static str, job: F) -> Result<JoinHandle<()>, SkipReason>
    where
        F: FnOnce(&Worker) -> EffectResult + Send + 'static,
    {
        let worker = self.worker.clone();
        thread::Builder::new()
            .name(format!("switcher-{task}"))
            .spawn(move || {
                match job(&worker) {
                    Ok(()) => tracing::trace!(task, "worker finished"),
                    Err(err) => tracing::warn!(task, error = %err, "worker aborted"),
                }
            })
            .map_err(|err| {
                tracing::error!(task, error = %err, "worker spawn failed");
                SkipReason::WorkerUnavailable
            })
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
