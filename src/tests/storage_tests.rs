use std::fs;

use hebrew_switcher_core::Language;
use tracing_test::traced_test;

use super::support::unique_temp_dir;
use crate::storage::{
    ENGLISH_WORDS_FILE, HEBREW_WORDS_FILE, IGNORE_WORDS_FILE, LEARNED_WORDS_FILE, WordStore, parse_learned_line,
};

#[test]
fn missing_files_load_as_empty_lists() {
    let store = WordStore::new(unique_temp_dir("storage-missing"));

    assert!(store.load_hebrew_words().is_empty());
    assert_eq!(store.load_english_words(), None);
    let lists = store.load_user_lists();
    assert!(lists.ignored.is_empty());
    assert!(lists.learned.is_empty());
}

#[test]
fn word_files_skip_blank_lines_and_comments() {
    let dir = unique_temp_dir("storage-load");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(HEBREW_WORDS_FILE), "שלום\n\n  תודה  \n").unwrap();
    fs::write(dir.join(IGNORE_WORDS_FILE), "# names\nNASA\n\nakuo\n").unwrap();
    let store = WordStore::new(&dir);

    let hebrew = store.load_hebrew_words();
    assert_eq!(hebrew.len(), 2);
    assert!(hebrew.contains("תודה"));

    let lists = store.load_user_lists();
    assert!(lists.ignored.contains("NASA"));
    assert!(lists.ignored.contains("nasa"));
    assert!(lists.ignored.contains("akuo"));
    assert!(!lists.ignored.contains("# names"));

    let _ = fs::remove_dir_all(dir);
}

#[traced_test]
#[test]
fn unreadable_files_fall_back_to_empty_lists() {
    let dir = unique_temp_dir("storage-cp1255");
    fs::create_dir_all(&dir).unwrap();
    // "שלום" saved as Windows-1255.
    let legacy = [0xF9, 0xEC, 0xE5, 0xED, b'\n'];
    fs::write(dir.join(HEBREW_WORDS_FILE), legacy).unwrap();
    fs::write(dir.join(ENGLISH_WORDS_FILE), legacy).unwrap();
    fs::write(dir.join(IGNORE_WORDS_FILE), legacy).unwrap();
    fs::write(dir.join(LEARNED_WORDS_FILE), "akuo,hebrew\n").unwrap();
    let store = WordStore::new(&dir);

    assert!(store.load_hebrew_words().is_empty());
    assert_eq!(store.load_english_words(), None);
    let lists = store.load_user_lists();
    assert!(lists.ignored.is_empty());
    assert_eq!(lists.learned.get("akuo"), Some(Language::Hebrew));
    assert!(logs_contain("word list unreadable, skipped"));

    let _ = fs::remove_dir_all(dir);
}

#[traced_test]
#[test]
fn malformed_learned_lines_are_skipped_with_warning() {
    let dir = unique_temp_dir("storage-learned");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(LEARNED_WORDS_FILE),
        "# keys,language\nAkuo,hebrew\nbroken\nxyz,klingon\nhello, English\n",
    )
    .unwrap();
    let store = WordStore::new(&dir);

    let lists = store.load_user_lists();
    assert_eq!(lists.learned.len(), 2);
    assert_eq!(lists.learned.get("akuo"), Some(Language::Hebrew));
    assert_eq!(lists.learned.get("hello"), Some(Language::English));
    assert!(logs_contain("malformed learned word skipped"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn appended_words_load_back() {
    let dir = unique_temp_dir("storage-append");
    let store = WordStore::new(&dir);

    store.append_learned("sdfg", Language::Hebrew).unwrap();
    store.append_ignored("akuo").unwrap();
    store.append_ignored("NASA").unwrap();

    assert_eq!(
        fs::read_to_string(dir.join(LEARNED_WORDS_FILE)).unwrap(),
        "sdfg,hebrew\n"
    );
    let lists = store.load_user_lists();
    assert_eq!(lists.learned.get("sdfg"), Some(Language::Hebrew));
    assert!(lists.ignored.contains("akuo"));
    assert!(lists.ignored.contains("nasa"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn learned_line_parsing() {
    assert_eq!(
        parse_learned_line("AKUO,Hebrew"),
        Some(("akuo".to_string(), Language::Hebrew))
    );
    assert_eq!(parse_learned_line("akuo"), None);
    assert_eq!(parse_learned_line(",hebrew"), None);
    assert_eq!(parse_learned_line("akuo,russian"), None);
}
