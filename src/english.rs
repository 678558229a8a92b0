//! English word oracles for the classifier.

use std::collections::HashSet;

use hebrew_switcher_core::EnglishOracle;
use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};

use crate::{config::Config, storage::WordStore};

const MIN_ENGLISH_CONFIDENCE: f64 = 0.5;

/// Exact lookup in an installed English word list.
#[derive(Debug, Default)]
pub struct WordListOracle {
    words: HashSet<String>,
}

impl WordListOracle {
    pub fn new(words: HashSet<String>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

impl EnglishOracle for WordListOracle {
    fn check(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

/// Statistical fallback: English against the other common Latin-script languages.
pub struct LinguaOracle {
    detector: LanguageDetector,
}

impl LinguaOracle {
    pub fn new() -> Self {
        let detector = LanguageDetectorBuilder::from_languages(&[
            Language::English,
            Language::French,
            Language::German,
            Language::Italian,
            Language::Spanish,
        ])
        .build();
        Self { detector }
    }

    pub fn english_confidence(&self, word: &str) -> f64 {
        self.detector
            .compute_language_confidence_values(word)
            .iter()
            .find(|(lang, _)| *lang == Language::English)
            .map_or(0.0, |(_, value)| *value)
    }
}

impl Default for LinguaOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishOracle for LinguaOracle {
    fn check(&self, word: &str) -> bool {
        let confidence = self.english_confidence(word);
        tracing::trace!(%word, confidence, "english confidence");
        confidence >= MIN_ENGLISH_CONFIDENCE
    }
}

/// Word list if installed, then the detector if enabled, else none.
pub fn build_oracle(store: &WordStore, cfg: &Config) -> Option<Box<dyn EnglishOracle>> {
    if let Some(words) = store.load_english_words() {
        tracing::debug!(count = words.len(), "english oracle: word list");
        return Some(Box::new(WordListOracle::new(words)));
    }
    if cfg.use_language_detector {
        tracing::debug!("english oracle: language detector");
        return Some(Box::new(LinguaOracle::new()));
    }
    tracing::debug!("english oracle: none, vowel heuristic");
    None
}
