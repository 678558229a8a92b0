//! Replays a typed script through the engine and prints the requested effects.
//!
//! Script text is typed key by key; space, tab and newline are word
//! boundaries. Braces inject the other signals inline:
//!
//! ```text
//! {toggle} {english} {hebrew} {reset} {click} {undo}
//! {focus <id>} {backspace} {left}
//! ```

use std::{
    fmt,
    io::Write,
    sync::{Mutex, PoisonError},
};

use hebrew_switcher_core::{
    EffectError, EffectResult, Engine, Executor, Language, PhysicalKey, Signal,
};

use crate::storage::WordStore;

const VK_LEFT: u32 = 0x25;

pub fn parse_script(script: &str) -> Result<Vec<Signal>, String> {
    let mut signals = Vec::new();
    for (idx, line) in script.split_inclusive('\n').enumerate() {
        let line_no = idx + 1;
        let mut rest = line;
        while let Some(ch) = rest.chars().next() {
            if ch == '{' {
                let end = rest
                    .find('}')
                    .ok_or_else(|| format!("line {line_no}: unclosed directive"))?;
                signals.push(parse_directive(rest[1..end].trim(), line_no)?);
                rest = &rest[end + 1..];
                continue;
            }
            rest = &rest[ch.len_utf8()..];
            if ch == '\r' {
                continue;
            }
            let key = PhysicalKey::from_latin(ch)
                .ok_or_else(|| format!("line {line_no}: no key types {ch:?}"))?;
            signals.push(Signal::KeyDown(key));
        }
    }
    Ok(signals)
}

fn parse_directive(directive: &str, line_no: usize) -> Result<Signal, String> {
    let (name, arg) = directive
        .split_once(char::is_whitespace)
        .map_or((directive, ""), |(name, arg)| (name, arg.trim()));
    let signal = match name {
        "toggle" => Signal::Toggle,
        "english" => Signal::Override(Language::English),
        "hebrew" => Signal::Override(Language::Hebrew),
        "reset" => Signal::SessionReset,
        "click" => Signal::PointerClick,
        "undo" => Signal::UndoOrForceFix,
        "backspace" => Signal::KeyDown(PhysicalKey::BACKSPACE),
        "left" => Signal::KeyDown(PhysicalKey(VK_LEFT)),
        "focus" => {
            let id = arg
                .parse()
                .map_err(|_| format!("line {line_no}: focus needs a window id, got {arg:?}"))?;
            Signal::FocusChanged(id)
        }
        other => return Err(format!("line {line_no}: unknown directive '{{{other}}}'")),
    };
    Ok(signal)
}

/// Feeds every signal and waits for each worker before the next one.
pub fn run(engine: &mut Engine, signals: impl IntoIterator<Item = Signal>) {
    for signal in signals {
        let Some(handle) = engine.handle(signal) else {
            continue;
        };
        if handle.join().is_err() {
            tracing::error!(?signal, "worker panicked");
        }
    }
}

/// Writes one line per effect. Persists learned and ignored words when a
/// store is attached.
pub struct ConsoleExecutor<W> {
    out: Mutex<W>,
    store: Option<WordStore>,
}

impl<W: Write + Send> ConsoleExecutor<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            store: None,
        }
    }

    pub fn with_store(out: W, store: WordStore) -> Self {
        Self {
            out: Mutex::new(out),
            store: Some(store),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, line: fmt::Arguments<'_>, on_error: EffectError) -> EffectResult {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{line}").map_err(|err| {
            tracing::warn!(error = %err, "effect output failed");
            on_error
        })
    }

    fn persist(&self, what: &str, write: impl FnOnce(&WordStore) -> std::io::Result<()>) -> EffectResult {
        let Some(store) = &self.store else {
            return Ok(());
        };
        write(store).map_err(|err| {
            tracing::warn!(what, error = %err, "persist failed");
            EffectError::PersistFailed
        })
    }
}

impl<W: Write + Send> Executor for ConsoleExecutor<W> {
    fn delete_characters(&self, count: usize) -> EffectResult {
        self.emit(format_args!("delete {count}"), EffectError::KeyInjectionFailed)
    }

    fn switch_layout(&self, target: Language) -> EffectResult {
        self.emit(format_args!("layout {target}"), EffectError::LayoutSwitchFailed)
    }

    fn type_text(&self, text: &str) -> EffectResult {
        self.emit(format_args!("type {text:?}"), EffectError::KeyInjectionFailed)
    }

    fn set_alignment(&self, target: Language, wake_first: bool) -> EffectResult {
        let wake = if wake_first { " (wake)" } else { "" };
        self.emit(
            format_args!("align {target}{wake}"),
            EffectError::AlignmentFailed,
        )
    }

    fn persist_learned_word(&self, key_text: &str, target: Language) -> EffectResult {
        self.emit(
            format_args!("learn {key_text:?} {target}"),
            EffectError::PersistFailed,
        )?;
        self.persist("learned", |store| store.append_learned(key_text, target))
    }

    fn persist_ignored_word(&self, word: &str) -> EffectResult {
        self.emit(format_args!("ignore {word:?}"), EffectError::PersistFailed)?;
        self.persist("ignored", |store| store.append_ignored(word))
    }
}
