use std::fmt;

/// Why a word or a request produced no correction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    TooShort,
    HasDigit,
    Ignored,
    AlreadyCorrect,
    ShortNotCommon,
    NotRecognized,
    NoChangeAfterConvert,
    Reentry,
    NothingToUndo,
    NothingToForceFix,
    WorkerUnavailable,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::TooShort => "too_short",
            SkipReason::HasDigit => "has_digit",
            SkipReason::Ignored => "ignored",
            SkipReason::AlreadyCorrect => "already_correct",
            SkipReason::ShortNotCommon => "short_not_common",
            SkipReason::NotRecognized => "not_recognized",
            SkipReason::NoChangeAfterConvert => "no_change_after_convert",
            SkipReason::Reentry => "reentry",
            SkipReason::NothingToUndo => "nothing_to_undo",
            SkipReason::NothingToForceFix => "nothing_to_force_fix",
            SkipReason::WorkerUnavailable => "worker_unavailable",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by an [`Executor`](crate::effects::Executor) effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EffectError {
    KeyInjectionFailed,
    LayoutSwitchFailed,
    AlignmentFailed,
    PersistFailed,
}

impl EffectError {
    pub fn as_str(self) -> &'static str {
        match self {
            EffectError::KeyInjectionFailed => "key_injection_failed",
            EffectError::LayoutSwitchFailed => "layout_switch_failed",
            EffectError::AlignmentFailed => "alignment_failed",
            EffectError::PersistFailed => "persist_failed",
        }
    }
}

impl fmt::Display for EffectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for EffectError {}
