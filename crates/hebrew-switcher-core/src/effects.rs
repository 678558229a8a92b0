//! Side effects the engine requests from the outside world.

use crate::{lang::Language, outcome::EffectError};

pub type EffectResult = Result<(), EffectError>;

/// Performs screen edits, layout switches, alignment and persistence.
///
/// Called only from worker threads, one worker at a time. Each method is a
/// single request; implementations may block for as long as the target
/// application needs to settle.
pub trait Executor: Send + Sync {
    /// Sends `count` backspaces.
    fn delete_characters(&self, count: usize) -> EffectResult;

    fn switch_layout(&self, target: Language) -> EffectResult;

    fn type_text(&self, text: &str) -> EffectResult;

    /// Sets paragraph direction for `target`. With `wake_first` the editor is
    /// nudged (space + backspace) before the direction chord is sent.
    fn set_alignment(&self, target: Language, wake_first: bool) -> EffectResult;

    fn persist_learned_word(&self, key_text: &str, target: Language) -> EffectResult;

    fn persist_ignored_word(&self, word: &str) -> EffectResult;
}
