//! Core value types for the motivator
//!
//! - Mood / MoodCategory: the closed taxonomy and its tier groupings
//! - MotivationEvent: stimuli classified by the emotion core
//! - MutationCommand: direct cool-down and reset instructions

mod event;
mod mood;
mod mutation;

pub use event::*;
pub use mood::*;
pub use mutation::*;

/// Lowercase, trim and fold `-` into `_` so tags parse from either spelling
pub(crate) fn normalize_tag(s: &str) -> String {
    s.trim().to_lowercase().replace('-', "_")
}
