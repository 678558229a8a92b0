//! Plain-text word lists kept next to the config file.
//!
//! A missing or unreadable file is an empty list; only the built-in words
//! remain. Lines are trimmed; blank lines and `#` comments are skipped.
//! Appends go straight to disk, one line each.

use std::{
    collections::HashSet,
    fs::{self, OpenOptions},
    io::{self, Write as _},
    path::PathBuf,
};

use hebrew_switcher_core::{IgnoreSet, Language, LearnedWords, UserLists};

pub const HEBREW_WORDS_FILE: &str = "hebrew_words.txt";
pub const ENGLISH_WORDS_FILE: &str = "english_words.txt";
pub const IGNORE_WORDS_FILE: &str = "ignore_words.txt";
pub const LEARNED_WORDS_FILE: &str = "learned_words.txt";

#[derive(Debug, Clone)]
pub struct WordStore {
    dir: PathBuf,
}

impl WordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load_hebrew_words(&self) -> HashSet<String> {
        let words: HashSet<String> = self
            .read(HEBREW_WORDS_FILE)
            .map(|text| word_lines(&text).map(str::to_string).collect())
            .unwrap_or_default();
        tracing::debug!(count = words.len(), "hebrew dictionary loaded");
        words
    }

    /// `None` when no readable English list is installed.
    pub fn load_english_words(&self) -> Option<HashSet<String>> {
        self.read(ENGLISH_WORDS_FILE).map(|text| {
            let words: HashSet<String> = word_lines(&text).map(str::to_lowercase).collect();
            tracing::debug!(count = words.len(), "english word list loaded");
            words
        })
    }

    pub fn load_user_lists(&self) -> UserLists {
        let ignored: IgnoreSet = self
            .read(IGNORE_WORDS_FILE)
            .map(|text| word_lines(&text).collect())
            .unwrap_or_default();

        let learned: LearnedWords = self
            .read(LEARNED_WORDS_FILE)
            .map(|text| {
                word_lines(&text)
                    .filter_map(|line| {
                        let entry = parse_learned_line(line);
                        if entry.is_none() {
                            tracing::warn!(%line, "malformed learned word skipped");
                        }
                        entry
                    })
                    .collect()
            })
            .unwrap_or_default();

        tracing::debug!(
            ignored = ignored.len(),
            learned = learned.len(),
            "user lists loaded"
        );
        UserLists::new(ignored, learned)
    }

    pub fn append_learned(&self, key_text: &str, target: Language) -> io::Result<()> {
        self.append(LEARNED_WORDS_FILE, &format!("{key_text},{target}"))
    }

    pub fn append_ignored(&self, word: &str) -> io::Result<()> {
        self.append(IGNORE_WORDS_FILE, word)
    }

    fn read(&self, name: &str) -> Option<String> {
        match fs::read_to_string(self.dir.join(name)) {
            Ok(text) => Some(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::trace!(file = name, "word list not found");
                None
            }
            Err(err) => {
                tracing::warn!(file = name, error = %err, "word list unreadable, skipped");
                None
            }
        }
    }

    fn append(&self, name: &str, line: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(name))?;
        writeln!(file, "{line}")
    }
}

fn word_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// `keys,language`, e.g. `akuo,hebrew`.
pub fn parse_learned_line(line: &str) -> Option<(String, Language)> {
    let (keys, target) = line.split_once(',')?;
    let keys = keys.trim();
    if keys.is_empty() {
        return None;
    }
    let target = target.trim().parse().ok()?;
    Some((keys.to_lowercase(), target))
}
