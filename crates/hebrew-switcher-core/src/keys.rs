//! Physical key identities and the two layouts they render in.
//!
//! Keys are tracked by virtual-key code so that the word the user meant can be
//! reconstructed regardless of which layout the OS had active. The Latin
//! rendering of a key sequence ("key text") is the canonical form used by the
//! rest of the engine: it is what the learned-words map is keyed by.

use crate::lang::Language;

const VK_BACK: u32 = 0x08;
const VK_TAB: u32 = 0x09;
const VK_RETURN: u32 = 0x0D;
const VK_SPACE: u32 = 0x20;
const VK_END: u32 = 0x23;
const VK_DOWN: u32 = 0x28;

const VK_DIGIT_0: u32 = 0x30;
const VK_LETTER_A: u32 = 0x41;

// OEM keys on a US keyboard and the character they produce unshifted.
const OEM_KEYS: [(u32, char); 11] = [
    (0xBA, ';'),
    (0xBB, '='),
    (0xBC, ','),
    (0xBD, '-'),
    (0xBE, '.'),
    (0xBF, '/'),
    (0xC0, '`'),
    (0xDB, '['),
    (0xDC, '\\'),
    (0xDD, ']'),
    (0xDE, '\''),
];

// Same physical keys: US QWERTY vs. standard Israeli layout.
const LATIN_KEYS: &str = "qwertyuiopasdfghjkl;zxcvbnm,./";
const HEBREW_KEYS: &str = "/'קראטוןםפשדגכעיחלךףזסבהנמצתץ.";

fn map_by_table(ch: char, from: &str, to: &str) -> Option<char> {
    from.chars().zip(to.chars()).find(|(f, _)| *f == ch).map(|(_, t)| t)
}

/// Character produced by the key under the Israeli layout; unmapped keys pass through.
#[must_use]
pub fn hebrew_char(latin: char) -> char {
    let lower = latin.to_ascii_lowercase();
    map_by_table(lower, LATIN_KEYS, HEBREW_KEYS).unwrap_or(lower)
}

/// Renders key text as it appears when typed under the Israeli layout.
#[must_use]
pub fn to_hebrew(key_text: &str) -> String {
    key_text.chars().map(hebrew_char).collect()
}

/// Renders key text in `language`, the form a correction types back.
#[must_use]
pub fn render_as(key_text: &str, language: Language) -> String {
    match language {
        Language::English => key_text.to_lowercase(),
        Language::Hebrew => to_hebrew(key_text),
    }
}

/// What the screen currently shows for `key_text` while `tracked` is active.
#[must_use]
pub fn screen_text(key_text: &str, tracked: Language) -> String {
    match tracked {
        Language::English => key_text.to_string(),
        Language::Hebrew => to_hebrew(key_text),
    }
}

/// Key that ends a word.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Boundary {
    #[default]
    Space,
    Tab,
    Enter,
}

impl Boundary {
    pub const fn ends_line(self) -> bool {
        matches!(self, Boundary::Enter)
    }

    /// Text the boundary key leaves on screen.
    pub const fn as_text(self) -> &'static str {
        match self {
            Boundary::Space => " ",
            Boundary::Tab => "\t",
            Boundary::Enter => "\n",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyClass {
    /// Key that contributes to the current word, with its Latin character.
    Char(char),
    Boundary(Boundary),
    Backspace,
    /// Arrows, Home and End: the caret moved away from the word.
    Navigation,
    Other,
}

/// Layout-independent identity of a physical key (Windows virtual-key code).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PhysicalKey(pub u32);

impl PhysicalKey {
    pub const SPACE: Self = Self(VK_SPACE);
    pub const TAB: Self = Self(VK_TAB);
    pub const ENTER: Self = Self(VK_RETURN);
    pub const BACKSPACE: Self = Self(VK_BACK);

    /// Character the key produces on the US layout, unshifted.
    #[must_use]
    pub fn latin(self) -> Option<char> {
        let vk = self.0;
        match vk {
            0x41..=0x5A => char::from_u32(vk - VK_LETTER_A + u32::from(b'a')),
            0x30..=0x39 => char::from_digit(vk - VK_DIGIT_0, 10),
            _ => OEM_KEYS.iter().find(|(code, _)| *code == vk).map(|(_, ch)| *ch),
        }
    }

    /// Reverse lookup: the key that produces `ch` on the US layout.
    ///
    /// Uppercase letters map to the same key as lowercase; whitespace maps to
    /// the matching boundary key.
    #[must_use]
    pub fn from_latin(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Self::SPACE),
            '\t' => Some(Self::TAB),
            '\n' => Some(Self::ENTER),
            'a'..='z' | 'A'..='Z' => Some(Self(u32::from(ch.to_ascii_uppercase()))),
            '0'..='9' => Some(Self(u32::from(ch))),
            _ => OEM_KEYS
                .iter()
                .find(|(_, c)| *c == ch)
                .map(|(code, _)| Self(*code)),
        }
    }

    #[must_use]
    pub fn class(self) -> KeyClass {
        match self.0 {
            VK_SPACE => KeyClass::Boundary(Boundary::Space),
            VK_TAB => KeyClass::Boundary(Boundary::Tab),
            VK_RETURN => KeyClass::Boundary(Boundary::Enter),
            VK_BACK => KeyClass::Backspace,
            VK_END..=VK_DOWN => KeyClass::Navigation,
            _ => self.latin().map_or(KeyClass::Other, KeyClass::Char),
        }
    }
}

/// Latin rendering of a key sequence; keys without one are skipped.
#[must_use]
pub fn key_text(keys: &[PhysicalKey]) -> String {
    keys.iter().filter_map(|k| k.latin()).collect()
}

/// Keys that would type `text` on the US layout.
#[must_use]
pub fn keys_from_text(text: &str) -> Vec<PhysicalKey> {
    text.chars().filter_map(PhysicalKey::from_latin).collect()
}
