//! Read-only word knowledge shared by the classifier.
//!
//! The large Hebrew dictionary and the English oracle are injected by the
//! loader; the curated short-word lists are built in.

use std::{collections::HashSet, fmt, sync::OnceLock};

/// External English dictionary. When absent the classifier falls back to a
/// vowel-ratio heuristic.
pub trait EnglishOracle: Send + Sync {
    /// `word` is lowercase and alphabetic.
    fn check(&self, word: &str) -> bool;
}

#[derive(Default)]
pub struct Lexicon {
    hebrew: HashSet<String>,
    english: Option<Box<dyn EnglishOracle>>,
}

impl Lexicon {
    pub fn new(hebrew: HashSet<String>, english: Option<Box<dyn EnglishOracle>>) -> Self {
        tracing::debug!(
            hebrew_words = hebrew.len(),
            english_oracle = english.is_some(),
            "lexicon loaded"
        );
        Self { hebrew, english }
    }

    /// Lexicon with only the built-in lists.
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn hebrew_dictionary(&self) -> &HashSet<String> {
        &self.hebrew
    }

    pub fn english_oracle(&self) -> Option<&dyn EnglishOracle> {
        self.english.as_deref()
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("hebrew_words", &self.hebrew.len())
            .field("english_oracle", &self.english.is_some())
            .finish()
    }
}

/// Short English words (2-3 letters) and contractions trusted for correction.
#[must_use]
pub fn is_common_short_english(word: &str) -> bool {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| COMMON_SHORT_ENGLISH.iter().copied().collect())
        .contains(word)
}

#[must_use]
pub fn is_short_hebrew(word: &str) -> bool {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| SHORT_HEBREW.iter().copied().collect())
        .contains(word)
}

/// Built-in general Hebrew vocabulary, used with or without the large dictionary.
#[must_use]
pub fn is_common_hebrew(word: &str) -> bool {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| COMMON_HEBREW.iter().copied().collect())
        .contains(word)
}

const COMMON_SHORT_ENGLISH: &[&str] = &[
    "hi", "no", "ok", "go", "yes", "the", "and", "but", "for", "not",
    "you", "all", "can", "had", "her", "was", "one", "our", "out", "are",
    "has", "his", "how", "its", "may", "new", "now", "old", "see", "two",
    "way", "who", "boy", "did", "get", "him", "let", "put", "say", "she",
    "too", "use", "me", "my", "we", "he", "it", "is", "in", "on",
    "so", "to", "up", "us", "an", "as", "at", "be", "by", "do",
    "if", "or", "i'm", "i'd", "i'll", "i've", "don't", "can't", "won't", "didn't",
    "doesn't", "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't", "couldn't", "wouldn't", "shouldn't",
    "let's", "that's", "what's", "there's", "here's", "who's", "it's", "he's", "she's", "we're",
    "they're", "you're", "you've", "you'd", "you'll", "we've", "we'd", "we'll", "they've", "they'd",
    "they'll",
];

const SHORT_HEBREW: &[&str] = &[
    "אם", "אל", "אז", "או", "אף", "בו", "בה", "בי", "בך", "גם", "גב", "דם",
    "דר", "הם", "הן", "הו", "וו", "זה", "זו", "זא", "חם", "חי", "טו", "יד",
    "כה", "כי", "לא", "לב", "לה", "לו", "לי", "לך", "מה", "מי", "מן", "נא",
    "נו", "סו", "עד", "על", "עם", "פה", "פי", "צו", "צט", "קם", "רב", "רע",
    "שם", "תו", "תן", "אב", "אח", "בן", "בת", "גן", "דג", "דף", "הר", "וד",
    "זב", "חג", "חן", "טל", "יא", "כד", "כף", "לח", "מד", "מט", "נד", "נח",
    "סף", "עז", "פח", "צב", "קו", "רם", "שד", "שק", "תל", "גמר", "זאת", "חבר",
    "טוב", "יום", "כאן", "למה", "מאד", "נכח", "סוף", "עוד", "פעם", "צאת", "קצת", "רגע",
    "שוב", "תוך", "היי", "כן",
];

const COMMON_HEBREW: &[&str] = &[
    "לא", "את", "אני", "זה", "אתה", "מה", "הוא", "לי", "על", "כן",
    "לך", "של", "יש", "בסדר", "אבל", "כל", "שלי", "טוב", "עם", "היא",
    "אם", "רוצה", "שלך", "היה", "אנחנו", "הם", "אותך", "יודע", "אז", "רק",
    "אותו", "יכול", "אותי", "יותר", "הזה", "אל", "כאן", "או", "למה", "שאני",
    "כך", "אחד", "עכשיו", "משהו", "להיות", "היי", "תודה", "כמו", "אין", "איך",
    "זאת", "נכון", "שלום", "פה", "הזאת", "שם", "בבקשה", "כבר", "לעשות", "עוד",
    "מי", "שלו", "תראה", "לו", "ממש", "צריך", "ואני", "שהוא", "הייתי", "קצת",
    "אמר", "אנשים", "אחת", "ידעתי", "אוהב", "בא", "לנו", "לפני", "ככה", "שאתה",
    "אפשר", "מאוד", "הנה", "אמרתי", "אותה", "בו", "זמן", "הכל", "חושב", "בית",
    "שום", "טובה", "ובא", "אתם", "לדבר", "בואו", "בטח", "אולי", "כמה", "דבר",
    "שזה", "היום", "חייב", "הרבה", "הוה", "אמא", "לראות", "פעם", "כזה", "בדיוק",
    "יפה", "הולך", "הלילה", "יהיה", "קרה", "מישהו", "ביותר", "רגע", "להם", "קורה",
    "אלוהים", "ילד", "שנה", "עושה", "מדבר", "איפה", "בטוח", "חיים", "ילדים", "אומר",
    "שהיא", "עליו", "שוב", "מקום", "אבא", "לקחת", "חשבתי", "ראית", "דרך", "יודעת",
    "שני", "עלי", "להגיד", "מר", "שאנחנו", "אהיה", "בה", "הי", "איתו", "וזה",
    "שלה", "סליחה", "בן", "כלום", "תן", "יכולה", "עבודה", "אדם", "הביתה", "ואתה",
    "ראש", "עליי", "בחיים", "ללכת", "לעזאזל", "ישר", "גדול", "אחי", "לכם", "שלנו",
    "הייתה", "יודעים", "אלה", "חשוב", "הראש", "לחזור", "אצל", "תהיה", "רואה", "מצטער",
    "עושים", "למצוא", "ואז", "מוכן", "היית", "לתת", "כדי", "חדש", "תמיד", "ראיתי",
    "כסף", "לפה", "לעולם", "פשוט", "ולא", "בנות", "בעיה", "עדיין", "יום", "לגבי",
    "כאילו", "לאן", "חברים", "שלהם", "האמת", "לכל", "רע", "סוף", "תעשה", "שהם",
    "ממני", "מותק", "מספיק", "קח", "לשם", "לילה", "הדבר", "מזה", "לקרות", "עצמי",
    "העולם", "לה", "ביום", "בחור", "אליך", "נראה", "ולך", "ימים", "קשה", "לכאן",
    "הבית", "בוא", "מהר", "באמת", "מבין", "מאמין", "חדשות", "נהדר", "אחרת", "חכה",
    "ואת", "בי", "להביא", "גברת", "שעה", "תגיד", "מכיר", "אוכל", "עזוב", "קדימה",
    "שאת", "אליו", "מעולם", "שלושה", "בוקר", "לומר", "תוכל", "רציתי", "סתם", "טיפש",
    "הדרך", "מילה", "שמעתי", "בך", "ממך", "מגיע", "מוזר", "לעזור", "בשביל", "חבל",
    "לזה", "האיש", "אמרת", "יקר", "כולם", "לדעת", "בגלל", "הבן", "עליך", "תראי",
    "מנסה", "מרגיש", "שאם", "משנה", "צריכה", "הזו", "לבד", "בחוץ", "אדוני", "לעבוד",
    "עצור", "בעל", "חי", "לפחות", "אהבה", "רוצים", "סיפור", "למעלה", "הבחור", "שנים",
    "מקווה", "בלי", "בשבילך", "מכאן", "בתוך", "לשמוע", "מעט", "חזק", "שיהיה", "מדי",
    "עשית", "אחרי", "שלא", "וגם", "מת", "בפנים", "נגיד", "אישה", "לבוא", "בכל",
    "להרוג", "תקשיב", "שמע", "משחק", "גבר", "כלב", "להתראות", "מיד", "חכי", "הילד",
    "נו", "תשמע", "שוטר", "הילדים", "מעולה", "חבר", "סיבה", "הלו", "נוכל", "מחר",
    "עצמך", "בחורה", "לעבור", "הערב", "מים", "הבא", "שמח", "מתי", "לספר", "הייתם",
    "אשתי", "דקות", "לכה", "קטן", "צודק", "יוצא", "נעים", "דברים", "לצאת", "נתן",
    "בשלב", "אכפת", "אחר", "תעשי", "קרוב", "הו", "רב", "מחכה", "שעות", "בעלי",
    "ידי", "חוץ", "ואם", "בראש", "אותם", "הבחורה", "הולכים", "קטנה", "תפסיק", "אי",
    "אוי", "כולנו", "יקרה", "משם", "אמור", "נשמה", "רצית", "אלא", "לב", "עולם",
    "חייבים", "הבאה", "עליה", "חושבת", "כרגע", "להבין", "למטה", "בעיות", "גרוע", "מאז",
    "מפה", "שקרה", "אמרה", "מתכוון", "מהם", "הכי", "מוכנים", "לעצמך", "בחזרה", "הדברים",
    "אחרים", "שכל", "להיכנס", "אלי", "רעיון", "כעת", "אגיד", "דקה", "אלינו", "הצילו",
    "בעיר", "לדאוג", "ידע", "לשים", "בוודאי", "האקדח", "תנו", "עולה", "שאוכל", "היד",
    "זוז", "יד", "כלבה", "עובדת", "ראה", "נמצאת", "כשהוא", "אופן", "שמה", "נוסף",
    "הפה", "דוקטור", "תרצה", "במקרה", "הטלפון", "שמך", "צעיר", "לשבת", "מכיוון", "הקטנה",
    "שניכם", "לתפוס", "תלך", "בהצלחה", "יין", "חכו", "קשור", "אנא", "ככל", "דין",
    "בנו", "למישהו", "השנה", "הלוואי", "בעצמי", "לרגע", "קר", "ממנה", "ישנה", "בעצמך",
    "האל", "שש", "תוריד", "התיק", "איכפת", "אחורה", "יעשה", "אכן", "מעמד", "לירות",
    "מבקש", "החרא", "בשעה", "לבן", "לבחור", "עדיף", "נזוז", "אילו", "ואל", "כזאת",
    "יקירתי", "מישהי", "איתם", "חם", "זוזו", "שים", "לטפל", "מול", "לכו", "הפנים",
    "אליה", "בסוף", "בשקט", "לכולם", "מידע", "אהבתי", "לברוח", "נשק", "תחשוב", "ספק",
];
