//! Turns a finished word into a verdict.
//!
//! Rules apply in strict priority order: length, digits, learned words,
//! ignore list, then the per-language checks. Short words (three keys or
//! fewer) are only corrected into a curated allow-list, even when the full
//! dictionary would also accept them.

use crate::{
    classifier::Classifier,
    keys::{self, PhysicalKey},
    lang::Language,
    lists::UserLists,
    outcome::SkipReason,
};

pub const MIN_WORD_KEYS: usize = 2;
pub const SHORT_WORD_MAX_KEYS: usize = 3;

const TRAILING_PUNCT: [char; 6] = [',', '.', '!', '?', ';', ':'];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    NoFix(SkipReason),
    Fix { corrected: String, target: Language },
}

impl Verdict {
    pub fn is_fix(&self) -> bool {
        matches!(self, Verdict::Fix { .. })
    }
}

/// Splits trailing `,.!?;:` off key text: `(core, punctuation)`.
#[must_use]
pub fn split_trailing_punct(key_text: &str) -> (&str, &str) {
    let core = key_text.trim_end_matches(TRAILING_PUNCT);
    (core, &key_text[core.len()..])
}

#[derive(Debug, Clone)]
pub struct Decider {
    classifier: Classifier,
}

impl Decider {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    #[tracing::instrument(level = "trace", skip(self, keys, lists))]
    pub fn evaluate(&self, keys: &[PhysicalKey], tracked: Language, lists: &UserLists) -> Verdict {
        let text = keys::key_text(keys);
        let (core, punct) = split_trailing_punct(&text);

        if core.chars().count() < MIN_WORD_KEYS {
            return Verdict::NoFix(SkipReason::TooShort);
        }
        if core.chars().any(|c| c.is_ascii_digit()) {
            return Verdict::NoFix(SkipReason::HasDigit);
        }

        let english = core.to_lowercase();
        if let Some(target) = lists.learned.get(&english) {
            let corrected = keys::render_as(core, target) + punct;
            tracing::trace!(%corrected, %target, "learned word");
            return Verdict::Fix { corrected, target };
        }

        let screen = keys::screen_text(core, tracked);
        let hebrew = keys::to_hebrew(core);
        let ignored = &lists.ignored;
        if ignored.contains(&screen)
            || ignored.contains(&screen.to_lowercase())
            || ignored.contains(core)
            || ignored.contains(&english)
        {
            return Verdict::NoFix(SkipReason::Ignored);
        }

        let short = core.chars().count() <= SHORT_WORD_MAX_KEYS;
        let c = &self.classifier;
        let (corrected, target) = match tracked {
            Language::Hebrew => {
                if c.is_valid_hebrew(&hebrew) {
                    return Verdict::NoFix(SkipReason::AlreadyCorrect);
                }
                if short {
                    if !c.is_short_english(&english) {
                        return Verdict::NoFix(SkipReason::ShortNotCommon);
                    }
                } else if !c.is_valid_english(&english) {
                    return Verdict::NoFix(SkipReason::NotRecognized);
                }
                (english, Language::English)
            }
            Language::English => {
                if c.is_valid_english(&english) {
                    return Verdict::NoFix(SkipReason::AlreadyCorrect);
                }
                if ignored.contains(&hebrew) {
                    return Verdict::NoFix(SkipReason::Ignored);
                }
                if short {
                    if !c.is_short_hebrew(&hebrew) {
                        return Verdict::NoFix(SkipReason::ShortNotCommon);
                    }
                } else if !c.is_valid_hebrew(&hebrew) {
                    return Verdict::NoFix(SkipReason::NotRecognized);
                }
                (hebrew, Language::Hebrew)
            }
        };

        Verdict::Fix {
            corrected: corrected + punct,
            target,
        }
    }

    /// Language of a word that needs no correction, for setting line direction.
    ///
    /// Only confirms the tracked language; `None` when the word is not a
    /// recognised word in it.
    #[must_use]
    pub fn detect_language(&self, keys: &[PhysicalKey], tracked: Language) -> Option<Language> {
        let text = keys::key_text(keys);
        let (core, _) = split_trailing_punct(&text);
        if core.chars().count() < MIN_WORD_KEYS {
            return None;
        }

        let valid = match tracked {
            Language::Hebrew => self.classifier.is_valid_hebrew(&keys::to_hebrew(core)),
            Language::English => self.classifier.is_valid_english(&core.to_lowercase()),
        };
        valid.then_some(tracked)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use super::*;
    use crate::{
        keys::keys_from_text,
        lexicon::{EnglishOracle, Lexicon},
        lists::{IgnoreSet, LearnedWords},
    };

    fn decider() -> Decider {
        Decider::new(Classifier::new(Arc::new(Lexicon::builtin())))
    }

    struct Words(&'static [&'static str]);

    impl EnglishOracle for Words {
        fn check(&self, word: &str) -> bool {
            self.0.iter().any(|w| *w == word)
        }
    }

    fn decider_with_hebrew(words: &[&str]) -> Decider {
        let dict: HashSet<String> = words.iter().map(|w| (*w).to_string()).collect();
        let oracle = Words(&["hello", "the", "world"]);
        Decider::new(Classifier::new(Arc::new(Lexicon::new(
            dict,
            Some(Box::new(oracle)),
        ))))
    }

    fn eval(d: &Decider, text: &str, tracked: Language) -> Verdict {
        d.evaluate(&keys_from_text(text), tracked, &UserLists::default())
    }

    fn fix(corrected: &str, target: Language) -> Verdict {
        Verdict::Fix {
            corrected: corrected.to_string(),
            target,
        }
    }

    #[test]
    fn punctuation_is_split_from_the_end_only() {
        assert_eq!(split_trailing_punct("hello,."), ("hello", ",."));
        assert_eq!(split_trailing_punct("a.b"), ("a.b", ""));
        assert_eq!(split_trailing_punct(",,"), ("", ",,"));
    }

    #[test]
    fn fewer_than_two_keys_after_stripping_is_no_fix() {
        let d = decider();
        for text in ["", "a", "t,", "v.;", ",.", "x:"] {
            for tracked in [Language::English, Language::Hebrew] {
                assert_eq!(
                    eval(&d, text, tracked),
                    Verdict::NoFix(SkipReason::TooShort),
                    "{text:?} under {tracked}"
                );
            }
        }
    }

    #[test]
    fn digits_are_never_touched() {
        let d = decider_with_hebrew(&["ש1ום"]);
        let mut lists = UserLists::default();
        lists.learned.insert("a1uo", Language::Hebrew);
        for text in ["a1uo", "2the", "abc9"] {
            assert_eq!(
                d.evaluate(&keys_from_text(text), Language::English, &lists),
                Verdict::NoFix(SkipReason::HasDigit)
            );
        }
    }

    #[test]
    fn learned_word_overrides_every_other_rule() {
        let d = decider();
        let mut lists = UserLists::default();
        // "hello" is valid English, and it is also in the ignore list.
        lists.learned.insert("hello", Language::Hebrew);
        lists.ignored.insert("hello");
        let verdict = d.evaluate(&keys_from_text("hello"), Language::English, &lists);
        assert_eq!(verdict, fix(&keys::to_hebrew("hello"), Language::Hebrew));
    }

    #[test]
    fn learned_english_target_lowercases_and_keeps_punctuation() {
        let d = decider();
        let lists = UserLists::new(
            IgnoreSet::default(),
            [("xq", Language::English)].into_iter().collect::<LearnedWords>(),
        );
        let verdict = d.evaluate(&keys_from_text("XQ!"), Language::Hebrew, &lists);
        // '!' has no key of its own, so only the letters arrive.
        assert_eq!(verdict, fix("xq", Language::English));
        let verdict = d.evaluate(&keys_from_text("xq,"), Language::Hebrew, &lists);
        assert_eq!(verdict, fix("xq,", Language::English));
    }

    #[test]
    fn ignore_list_matches_screen_word_and_raw_keys() {
        let d = decider();
        let mut lists = UserLists::default();
        lists.ignored.insert("שלום");
        assert_eq!(
            d.evaluate(&keys_from_text("akuo"), Language::Hebrew, &lists),
            Verdict::NoFix(SkipReason::Ignored)
        );
        // Hebrew rendering is checked too when English is tracked.
        assert_eq!(
            d.evaluate(&keys_from_text("akuo"), Language::English, &lists),
            Verdict::NoFix(SkipReason::Ignored)
        );

        let mut lists = UserLists::default();
        lists.ignored.insert("ThE");
        assert_eq!(
            d.evaluate(&keys_from_text("the"), Language::Hebrew, &lists),
            Verdict::NoFix(SkipReason::Ignored)
        );
    }

    #[test]
    fn shalom_typed_in_english_is_fixed_to_hebrew() {
        let d = decider();
        assert_eq!(eval(&d, "akuo", Language::English), fix("שלום", Language::Hebrew));
    }

    #[test]
    fn heuristic_alone_accepts_shalom_as_english() {
        // Without an oracle the vowel ratio of "shalom" looks English.
        let d = decider();
        assert_eq!(
            eval(&d, "shalom", Language::English),
            Verdict::NoFix(SkipReason::AlreadyCorrect)
        );
    }

    #[test]
    fn word_in_injected_dictionary_is_fixed_to_hebrew() {
        let hebrew = keys::to_hebrew("shalom");
        let d = decider_with_hebrew(&[hebrew.as_str()]);
        assert_eq!(eval(&d, "shalom", Language::English), fix(&hebrew, Language::Hebrew));
    }

    #[test]
    fn short_english_only_from_allow_list() {
        let d = decider();
        assert_eq!(eval(&d, "the", Language::Hebrew), fix("the", Language::English));
        assert_eq!(
            eval(&d, "zzz", Language::Hebrew),
            Verdict::NoFix(SkipReason::ShortNotCommon)
        );
    }

    #[test]
    fn short_hebrew_only_from_allow_lists() {
        let d = decider();
        // "kt" -> "לא"
        assert_eq!(eval(&d, "kt", Language::English), fix("לא", Language::Hebrew));
        // Valid in the full dictionary but not in the curated lists.
        let d = decider_with_hebrew(&[keys::to_hebrew("qxz").as_str()]);
        assert_eq!(
            eval(&d, "qxz", Language::English),
            Verdict::NoFix(SkipReason::ShortNotCommon)
        );
    }

    #[test]
    fn valid_word_in_tracked_language_is_left_alone() {
        let d = decider();
        assert_eq!(
            eval(&d, "hello", Language::English),
            Verdict::NoFix(SkipReason::AlreadyCorrect)
        );
        assert_eq!(
            eval(&d, "akuo", Language::Hebrew),
            Verdict::NoFix(SkipReason::AlreadyCorrect)
        );
    }

    #[test]
    fn hebrew_tracked_long_word_falls_back_to_english_check() {
        let d = decider();
        assert_eq!(eval(&d, "hello,", Language::Hebrew), fix("hello,", Language::English));
        assert_eq!(
            eval(&d, "akuo", Language::English),
            fix("שלום", Language::Hebrew)
        );
        assert_eq!(
            eval(&d, "qqqqq", Language::Hebrew),
            Verdict::NoFix(SkipReason::NotRecognized)
        );
    }

    #[test]
    fn corrected_word_is_not_flagged_again() {
        let d = decider();
        for (text, tracked) in [
            ("akuo", Language::English),
            ("the", Language::Hebrew),
            ("hello", Language::Hebrew),
            ("kt", Language::English),
        ] {
            let Verdict::Fix { target, .. } = eval(&d, text, tracked) else {
                panic!("{text} under {tracked} should be fixed");
            };
            assert!(!eval(&d, text, target).is_fix(), "{text} re-flagged under {target}");
        }
    }

    #[test]
    fn detect_language_only_confirms_tracked_language() {
        let d = decider();
        let keys = keys_from_text("hello");
        assert_eq!(d.detect_language(&keys, Language::English), Some(Language::English));
        assert_eq!(d.detect_language(&keys, Language::Hebrew), None);
        let keys = keys_from_text("akuo.");
        assert_eq!(d.detect_language(&keys, Language::Hebrew), Some(Language::Hebrew));
        assert_eq!(d.detect_language(&keys_from_text("a"), Language::English), None);
    }
}
