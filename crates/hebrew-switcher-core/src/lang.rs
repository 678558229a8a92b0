use std::{fmt, str::FromStr};

/// Keyboard language the engine believes is producing characters on screen.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Language {
    #[default]
    English,
    Hebrew,
}

impl Language {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Language::English => Language::Hebrew,
            Language::Hebrew => Language::English,
        }
    }

    /// Stable lowercase name, also used as the learned-words file tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hebrew => "hebrew",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "hebrew" => Ok(Language::Hebrew),
            other => Err(format!("unknown language '{other}'")),
        }
    }
}
