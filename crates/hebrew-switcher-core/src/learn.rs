//! Undo of the last fix and force-fix of the last unfixed word.
//!
//! Both are user-triggered through one hotkey and both teach the engine:
//! undo adds the screen word to the ignore list, force-fix records a learned
//! word. Persistence failures are logged; the in-memory lists change anyway.

use std::thread::JoinHandle;

use crate::{
    decision,
    effects::EffectResult,
    engine::{BusyGuard, Engine, FixRecord, Worker, pause},
    keys::{self, Boundary},
    lang::Language,
    line_state::LineEvent,
    outcome::SkipReason,
};

struct ForceFixJob {
    learned_keys: String,
    screen: String,
    corrected: String,
    target: Language,
    was_first: bool,
    epoch: u64,
    boundary: Boundary,
}

impl Engine {
    /// Undo when a fix is pending, otherwise force-fix the last unfixed word.
    pub fn undo_or_force_fix(&mut self) -> Result<JoinHandle<()>, SkipReason> {
        let has_fix = self.state().last_fix.is_some();
        if has_fix { self.undo() } else { self.force_fix() }
    }

    pub fn undo(&mut self) -> Result<JoinHandle<()>, SkipReason> {
        let guard = BusyGuard::try_acquire(&self.busy)?;
        let record = {
            let mut state = self.state();
            let record = state.last_fix.take();
            if record.is_some() {
                state.last_unfixed = None;
            }
            record
        }
        .ok_or(SkipReason::NothingToUndo)?;

        self.buffer.clear();
        self.spawn(guard, "undo", move |worker| worker.run_undo(record))
    }

    pub fn force_fix(&mut self) -> Result<JoinHandle<()>, SkipReason> {
        let guard = BusyGuard::try_acquire(&self.busy)?;
        let (record, tracked) = {
            let mut state = self.state();
            (state.last_unfixed.take(), state.line.tracked())
        };
        let record = record.ok_or(SkipReason::NothingToForceFix)?;

        self.buffer.clear();
        let text = keys::key_text(&record.keys);
        let (core, punct) = decision::split_trailing_punct(&text);
        let target = tracked.opposite();
        let job = ForceFixJob {
            learned_keys: core.to_lowercase(),
            screen: keys::screen_text(&text, tracked),
            corrected: keys::render_as(core, target) + punct,
            target,
            was_first: record.was_first_word_of_line,
            epoch: record.epoch,
            boundary: record.boundary,
        };
        self.spawn(guard, "force-fix", move |worker| worker.run_force_fix(job))
    }
}

impl Worker {
    fn run_undo(&self, fix: FixRecord) -> EffectResult {
        self.state().lists.ignored.insert(&fix.screen_word);
        if let Err(err) = self.executor.persist_ignored_word(&fix.screen_word) {
            tracing::warn!(word = %fix.screen_word, error = %err, "ignored word not persisted");
        }

        pause(self.options.hotkey_release_delay);
        self.executor
            .delete_characters(fix.corrected.chars().count() + 1)?;
        self.settle();
        self.executor.switch_layout(fix.original_language)?;
        self.state()
            .line
            .apply(LineEvent::LayoutSwitched(fix.original_language));
        self.settle();

        let epoch = {
            let mut state = self.state();
            state.line.apply(LineEvent::DirectionCleared);
            state.line.epoch()
        };
        self.align_if_current(fix.original_language, false, epoch, false)?;
        self.settle();
        self.executor
            .type_text(&format!("{}{}", fix.original_screen, fix.boundary.as_text()))?;
        tracing::info!(restored = %fix.original_screen, ignored = %fix.screen_word, "fix undone");
        Ok(())
    }

    fn run_force_fix(&self, job: ForceFixJob) -> EffectResult {
        self.state().lists.learned.insert(&job.learned_keys, job.target);
        if let Err(err) = self
            .executor
            .persist_learned_word(&job.learned_keys, job.target)
        {
            tracing::warn!(word = %job.learned_keys, error = %err, "learned word not persisted");
        }

        pause(self.options.hotkey_release_delay);
        self.executor.delete_characters(job.screen.chars().count() + 1)?;
        self.settle();
        self.executor.switch_layout(job.target)?;
        self.state().line.apply(LineEvent::LayoutSwitched(job.target));
        self.settle();
        self.executor
            .type_text(&format!("{}{}", job.corrected, job.boundary.as_text()))?;
        tracing::info!(word = %job.learned_keys, to = %job.corrected, target = %job.target, "word force-fixed");

        if job.was_first {
            self.settle();
            self.align_if_current(job.target, true, job.epoch, job.boundary.ends_line())?;
        }
        Ok(())
    }
}
