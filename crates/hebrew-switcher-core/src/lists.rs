//! User-owned word lists: the only mutable knowledge the engine has.

use std::collections::{HashMap, HashSet};

use crate::lang::Language;

/// Words exempted from correction. Every insert stores the word as given and lowercased.
#[derive(Debug, Default, Clone)]
pub struct IgnoreSet {
    words: HashSet<String>,
}

impl IgnoreSet {
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_string());
        self.words.insert(word.to_lowercase());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

/// Key text (lowercased) the user force-fixed, with the language it belongs to.
#[derive(Debug, Default, Clone)]
pub struct LearnedWords {
    words: HashMap<String, Language>,
}

impl LearnedWords {
    pub fn insert(&mut self, key_text: &str, target: Language) {
        self.words.insert(key_text.to_lowercase(), target);
    }

    pub fn get(&self, key_text: &str) -> Option<Language> {
        self.words.get(&key_text.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Language)> for LearnedWords {
    fn from_iter<I: IntoIterator<Item = (S, Language)>>(iter: I) -> Self {
        let mut learned = Self::default();
        for (keys, target) in iter {
            learned.insert(keys.as_ref(), target);
        }
        learned
    }
}

/// Ignore set and learned words, owned by one engine instance.
#[derive(Debug, Default, Clone)]
pub struct UserLists {
    pub ignored: IgnoreSet,
    pub learned: LearnedWords,
}

impl UserLists {
    pub fn new(ignored: IgnoreSet, learned: LearnedWords) -> Self {
        Self { ignored, learned }
    }
}
