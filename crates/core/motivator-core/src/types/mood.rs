//! Mood Taxonomy
//!
//! A flat set of displayable moods, each owned by exactly one category.
//! Categories are the tiers the engine reasons about; moods inside a
//! category are synonyms that only add visual and textual variety.
//!
//! Two ladders share the CALM floor:
//! - negative: CALM < MILD_NEGATIVE < FRUSTRATED < ENRAGED
//! - positive: CALM < RELIEVED < POSITIVE

use super::normalize_tag;
use crate::error::MotivatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single displayable emotional label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// At rest, nothing pending
    Calm,
    /// Caught off guard by a failure
    Shocked,
    /// Let down by a failure
    Disappointed,
    /// Repeated failures have piled up
    Frustrated,
    /// Terminal tier of the negative ladder
    Enraged,
    /// A success after a run of failures
    Relieved,
    /// A plain success
    Happy,
    /// A plain success, louder
    Excited,
}

impl Mood {
    /// Every mood, in declaration order
    pub const ALL: [Mood; 8] = [
        Mood::Calm,
        Mood::Shocked,
        Mood::Disappointed,
        Mood::Frustrated,
        Mood::Enraged,
        Mood::Relieved,
        Mood::Happy,
        Mood::Excited,
    ];

    /// The category this mood belongs to
    pub fn category(&self) -> MoodCategory {
        match self {
            Mood::Calm => MoodCategory::Calm,
            Mood::Shocked | Mood::Disappointed => MoodCategory::MildNegative,
            Mood::Frustrated => MoodCategory::Frustrated,
            Mood::Enraged => MoodCategory::Enraged,
            Mood::Relieved => MoodCategory::Relieved,
            Mood::Happy | Mood::Excited => MoodCategory::Positive,
        }
    }

    /// Stable snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Shocked => "shocked",
            Mood::Disappointed => "disappointed",
            Mood::Frustrated => "frustrated",
            Mood::Enraged => "enraged",
            Mood::Relieved => "relieved",
            Mood::Happy => "happy",
            Mood::Excited => "excited",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = MotivatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = normalize_tag(s);
        Mood::ALL
            .iter()
            .copied()
            .find(|mood| mood.as_str() == tag)
            .ok_or_else(|| MotivatorError::parse(format!("unknown mood '{}'", s)))
    }
}

/// Which side of CALM a category sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodLadder {
    /// Mild negative, frustrated, enraged
    Negative,
    /// Relieved, happy/excited
    Positive,
}

impl fmt::Display for MoodLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoodLadder::Negative => "negative",
            MoodLadder::Positive => "positive",
        })
    }
}

impl FromStr for MoodLadder {
    type Err = MotivatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "negative" => Ok(MoodLadder::Negative),
            "positive" => Ok(MoodLadder::Positive),
            _ => Err(MotivatorError::parse(format!("unknown mood ladder '{}'", s))),
        }
    }
}

/// A tier grouping synonymous moods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodCategory {
    /// The shared floor of both ladders
    Calm,
    /// First step on the negative ladder
    MildNegative,
    /// Escalated negative tier
    Frustrated,
    /// Terminal negative tier
    Enraged,
    /// A negative streak was just broken by a success
    Relieved,
    /// Happy or excited
    Positive,
}

const CALM_MOODS: &[Mood] = &[Mood::Calm];
const MILD_NEGATIVE_MOODS: &[Mood] = &[Mood::Shocked, Mood::Disappointed];
const FRUSTRATED_MOODS: &[Mood] = &[Mood::Frustrated];
const ENRAGED_MOODS: &[Mood] = &[Mood::Enraged];
const RELIEVED_MOODS: &[Mood] = &[Mood::Relieved];
const POSITIVE_MOODS: &[Mood] = &[Mood::Happy, Mood::Excited];

impl MoodCategory {
    /// Every category, in ladder order
    pub const ALL: [MoodCategory; 6] = [
        MoodCategory::Calm,
        MoodCategory::MildNegative,
        MoodCategory::Frustrated,
        MoodCategory::Enraged,
        MoodCategory::Relieved,
        MoodCategory::Positive,
    ];

    /// The ordered, non-empty set of moods in this category
    pub fn members(&self) -> &'static [Mood] {
        match self {
            MoodCategory::Calm => CALM_MOODS,
            MoodCategory::MildNegative => MILD_NEGATIVE_MOODS,
            MoodCategory::Frustrated => FRUSTRATED_MOODS,
            MoodCategory::Enraged => ENRAGED_MOODS,
            MoodCategory::Relieved => RELIEVED_MOODS,
            MoodCategory::Positive => POSITIVE_MOODS,
        }
    }

    /// The ladder this category belongs to, `None` for CALM
    pub fn ladder(&self) -> Option<MoodLadder> {
        match self {
            MoodCategory::Calm => None,
            MoodCategory::MildNegative | MoodCategory::Frustrated | MoodCategory::Enraged => {
                Some(MoodLadder::Negative)
            }
            MoodCategory::Relieved | MoodCategory::Positive => Some(MoodLadder::Positive),
        }
    }

    /// Whether `mood` is one of this category's members
    pub fn contains(&self, mood: Mood) -> bool {
        self.members().contains(&mood)
    }

    /// Stable snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodCategory::Calm => "calm",
            MoodCategory::MildNegative => "mild_negative",
            MoodCategory::Frustrated => "frustrated",
            MoodCategory::Enraged => "enraged",
            MoodCategory::Relieved => "relieved",
            MoodCategory::Positive => "positive",
        }
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodCategory {
    type Err = MotivatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = normalize_tag(s);
        MoodCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == tag)
            .ok_or_else(|| MotivatorError::parse(format!("unknown mood category '{}'", s)))
    }
}
