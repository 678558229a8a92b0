//! Hebrew/English wrong-layout detection and correction.
//!
//! Platform-free: input arrives as [`engine::Signal`]s and every screen or
//! disk change goes through an [`effects::Executor`].

pub mod buffer;
pub mod classifier;
pub mod decision;
pub mod effects;
pub mod engine;
pub mod keys;
pub mod lang;
mod learn;
pub mod lexicon;
pub mod line_state;
pub mod lists;
pub mod outcome;

pub use effects::{EffectResult, Executor};
pub use engine::{Engine, EngineOptions, FixRecord, Signal, UnfixedRecord};
pub use keys::{Boundary, PhysicalKey};
pub use lang::Language;
pub use lexicon::{EnglishOracle, Lexicon};
pub use lists::{IgnoreSet, LearnedWords, UserLists};
pub use outcome::{EffectError, SkipReason};
