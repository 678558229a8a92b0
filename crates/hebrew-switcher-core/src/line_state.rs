//! Tracked language and per-line context.
//!
//! Every change goes through [`LineState::apply`] or, for finished words,
//! [`LineState::complete_word`]. Each line carries an epoch so that a worker
//! started on one line cannot mark direction on the next.

use crate::{keys::Boundary, lang::Language};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LineContext {
    pub is_first_word_of_line: bool,
    pub direction_set_for_line: bool,
}

impl Default for LineContext {
    fn default() -> Self {
        Self {
            is_first_word_of_line: true,
            direction_set_for_line: false,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LineEvent {
    /// Paired modifier chord: flip the tracked language.
    Toggle,
    /// Explicit "force English/Hebrew" command.
    Override(Language),
    /// A worker switched the layout to this language.
    LayoutSwitched(Language),
    /// Unlock, logon or resume from sleep.
    SessionReset,
    /// Enter, focus change or pointer click.
    LineBreak,
    /// Alignment was applied on the line with this epoch.
    DirectionSet { epoch: u64 },
    /// Undo is about to re-apply alignment on the current line.
    DirectionCleared,
}

/// How a finished word was resolved by the decision engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WordOutcome {
    Fixed,
    Unfixed { detected: Option<Language> },
}

/// What the engine should do after a word boundary.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BoundaryPlan {
    pub first_word: bool,
    /// Epoch of the line the word belongs to.
    pub epoch: u64,
    /// The word ended its line with Enter.
    pub ended_line: bool,
    /// Direction-only pass: language to align the line to.
    pub align: Option<Language>,
}

#[derive(Debug, Default, Clone)]
pub struct LineState {
    tracked: Language,
    line: LineContext,
    epoch: u64,
}

impl LineState {
    pub fn new(tracked: Language) -> Self {
        Self {
            tracked,
            ..Self::default()
        }
    }

    pub fn tracked(&self) -> Language {
        self.tracked
    }

    pub fn context(&self) -> LineContext {
        self.line
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether alignment planned for the line with `epoch` may still run.
    /// A line ended by Enter stays alignable until the next line break.
    pub fn can_align(&self, epoch: u64, ended_line: bool) -> bool {
        if ended_line {
            self.epoch == epoch.wrapping_add(1)
        } else {
            self.epoch == epoch && !self.line.direction_set_for_line
        }
    }

    pub fn apply(&mut self, event: LineEvent) {
        let before = self.tracked;
        match event {
            LineEvent::Toggle => self.tracked = self.tracked.opposite(),
            LineEvent::Override(lang) | LineEvent::LayoutSwitched(lang) => self.tracked = lang,
            LineEvent::SessionReset => self.tracked = Language::English,
            LineEvent::LineBreak => {
                self.line = LineContext::default();
                self.epoch = self.epoch.wrapping_add(1);
            }
            LineEvent::DirectionSet { epoch } => {
                if epoch == self.epoch {
                    self.line.direction_set_for_line = true;
                }
            }
            LineEvent::DirectionCleared => self.line.direction_set_for_line = false,
        }
        if before != self.tracked {
            tracing::debug!(?event, from = %before, to = %self.tracked, "tracked language changed");
        }
    }

    /// Consumes the first-word flag for a finished word and plans the
    /// direction-only pass. An Enter boundary then starts a new line; the
    /// plan still belongs to the line that ended.
    pub fn complete_word(&mut self, outcome: WordOutcome, boundary: Boundary) -> BoundaryPlan {
        let first_word = self.line.is_first_word_of_line;
        let align = match outcome {
            WordOutcome::Unfixed { detected } if first_word && !self.line.direction_set_for_line => {
                detected
            }
            _ => None,
        };
        let plan = BoundaryPlan {
            first_word,
            epoch: self.epoch,
            ended_line: boundary == Boundary::Enter,
            align,
        };

        self.line.is_first_word_of_line = false;
        if boundary == Boundary::Enter {
            self.apply(LineEvent::LineBreak);
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_word_without_direction() {
        let s = LineState::new(Language::English);
        assert_eq!(s.context(), LineContext::default());
        assert!(s.context().is_first_word_of_line);
        assert!(!s.context().direction_set_for_line);
    }

    #[test]
    fn toggle_flips_language_but_not_line() {
        let mut s = LineState::new(Language::English);
        s.complete_word(WordOutcome::Fixed, Boundary::Space);
        s.apply(LineEvent::Toggle);
        assert_eq!(s.tracked(), Language::Hebrew);
        assert!(!s.context().is_first_word_of_line);
        s.apply(LineEvent::Toggle);
        assert_eq!(s.tracked(), Language::English);
    }

    #[test]
    fn session_reset_forces_english() {
        let mut s = LineState::new(Language::Hebrew);
        s.apply(LineEvent::SessionReset);
        assert_eq!(s.tracked(), Language::English);
    }

    #[test]
    fn first_unfixed_word_with_detected_language_requests_alignment() {
        let mut s = LineState::new(Language::Hebrew);
        let plan = s.complete_word(
            WordOutcome::Unfixed {
                detected: Some(Language::Hebrew),
            },
            Boundary::Space,
        );
        assert!(plan.first_word);
        assert_eq!(plan.align, Some(Language::Hebrew));

        let plan = s.complete_word(
            WordOutcome::Unfixed {
                detected: Some(Language::Hebrew),
            },
            Boundary::Space,
        );
        assert!(!plan.first_word);
        assert_eq!(plan.align, None);
    }

    #[test]
    fn fixed_first_word_does_not_plan_direction_only_pass() {
        let mut s = LineState::new(Language::English);
        let plan = s.complete_word(WordOutcome::Fixed, Boundary::Space);
        assert!(plan.first_word);
        assert_eq!(plan.align, None);
    }

    #[test]
    fn direction_is_set_at_most_once_per_line() {
        let mut s = LineState::new(Language::English);
        let epoch = s.epoch();
        s.apply(LineEvent::DirectionSet { epoch });
        assert!(s.context().direction_set_for_line);

        s.apply(LineEvent::LineBreak);
        assert!(!s.context().direction_set_for_line);
        assert!(s.context().is_first_word_of_line);

        // Stale epoch from the previous line is ignored.
        s.apply(LineEvent::DirectionSet { epoch });
        assert!(!s.context().direction_set_for_line);
    }

    #[test]
    fn enter_boundary_plans_for_old_line_then_breaks() {
        let mut s = LineState::new(Language::English);
        let before = s.epoch();
        let plan = s.complete_word(
            WordOutcome::Unfixed {
                detected: Some(Language::English),
            },
            Boundary::Enter,
        );
        assert!(plan.first_word);
        assert!(plan.ended_line);
        assert_eq!(plan.align, Some(Language::English));
        assert_eq!(plan.epoch, before);
        assert_ne!(s.epoch(), before);
        assert!(s.context().is_first_word_of_line);
    }

    #[test]
    fn ended_line_stays_alignable_until_next_break() {
        let mut s = LineState::new(Language::English);
        let plan = s.complete_word(WordOutcome::Fixed, Boundary::Enter);
        assert!(s.can_align(plan.epoch, plan.ended_line));
        assert!(!s.can_align(plan.epoch, false));

        // Marking the ended line leaves the new one untouched.
        s.apply(LineEvent::DirectionSet { epoch: plan.epoch });
        assert!(!s.context().direction_set_for_line);

        s.apply(LineEvent::LineBreak);
        assert!(!s.can_align(plan.epoch, plan.ended_line));
    }

    #[test]
    fn open_line_aligns_once() {
        let mut s = LineState::new(Language::English);
        let plan = s.complete_word(WordOutcome::Fixed, Boundary::Space);
        assert!(!plan.ended_line);
        assert!(s.can_align(plan.epoch, plan.ended_line));
        s.apply(LineEvent::DirectionSet { epoch: plan.epoch });
        assert!(!s.can_align(plan.epoch, plan.ended_line));
    }
}
