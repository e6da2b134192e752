//! Mutation commands issued outside the normal event path

use super::{normalize_tag, MoodLadder};
use crate::error::MotivatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a mutation does to the negative intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    /// Step the intensity down by one, floored at zero
    CoolDown,
    /// Clear the intensity
    Reset,
}

impl MutationKind {
    /// Stable snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::CoolDown => "cool_down",
            MutationKind::Reset => "reset",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MutationKind {
    type Err = MotivatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "cool_down" | "cooldown" => Ok(MutationKind::CoolDown),
            "reset" => Ok(MutationKind::Reset),
            _ => Err(MotivatorError::parse(format!("unknown mutation '{}'", s))),
        }
    }
}

/// An instruction consumed once by [`crate::EmotionCore::mutate_mood`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MutationCommand {
    /// Cool down or reset
    pub kind: MutationKind,

    /// Ladder the command targets
    pub scope: MoodLadder,
}

impl MutationCommand {
    /// Create a command
    pub fn new(kind: MutationKind, scope: MoodLadder) -> Self {
        Self { kind, scope }
    }

    /// Cool the negative ladder down one step
    pub fn cool_down() -> Self {
        Self::new(MutationKind::CoolDown, MoodLadder::Negative)
    }

    /// Clear the negative ladder
    pub fn reset() -> Self {
        Self::new(MutationKind::Reset, MoodLadder::Negative)
    }
}

impl fmt::Display for MutationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.scope)
    }
}
