use std::sync::Arc;

use crate::lexicon::{self, Lexicon};

const MIN_VOWEL_RATIO: f64 = 0.15;
const MAX_VOWEL_RATIO: f64 = 0.6;

/// Per-language word validity checks. Pure; safe to call on the event thread.
#[derive(Debug, Clone)]
pub struct Classifier {
    lexicon: Arc<Lexicon>,
}

impl Classifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Contractions are only accepted from the curated list; other words must be
    /// alphabetic and pass the oracle, or the vowel-ratio heuristic without one.
    #[must_use]
    pub fn is_valid_english(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let lower = word.to_lowercase();
        if lower.contains('\'') {
            return lexicon::is_common_short_english(&lower);
        }

        if !lower.chars().all(char::is_alphabetic) {
            return false;
        }

        match self.lexicon.english_oracle() {
            Some(oracle) => oracle.check(&lower),
            None => vowel_ratio_plausible(&lower),
        }
    }

    /// Large dictionary first, then the built-in lists.
    #[must_use]
    pub fn is_valid_hebrew(&self, text: &str) -> bool {
        self.lexicon.hebrew_dictionary().contains(text)
            || lexicon::is_common_hebrew(text)
            || lexicon::is_short_hebrew(text)
    }

    /// Allow-list for English words of three letters or fewer.
    #[must_use]
    pub fn is_short_english(&self, word: &str) -> bool {
        lexicon::is_common_short_english(word)
    }

    /// Allow-list for Hebrew words of three letters or fewer.
    #[must_use]
    pub fn is_short_hebrew(&self, text: &str) -> bool {
        lexicon::is_short_hebrew(text) || lexicon::is_common_hebrew(text)
    }
}

fn vowel_ratio_plausible(word: &str) -> bool {
    let len = word.chars().count();
    if len == 0 {
        return false;
    }
    let vowels = word
        .chars()
        .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = vowels as f64 / len as f64;
    (MIN_VOWEL_RATIO..=MAX_VOWEL_RATIO).contains(&ratio)
}
