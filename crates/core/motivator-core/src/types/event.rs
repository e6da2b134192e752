//! Motivation events pushed into the emotion core

use super::normalize_tag;
use crate::error::MotivatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of activity produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotivationEventType {
    /// The user has been away; always calms regardless of category
    Idle,
    /// The host application or project opened
    Startup,
    /// A task finished
    Task,
    /// A test run finished
    Test,
}

impl MotivationEventType {
    /// Every event type
    pub const ALL: [MotivationEventType; 4] = [
        MotivationEventType::Idle,
        MotivationEventType::Startup,
        MotivationEventType::Task,
        MotivationEventType::Test,
    ];

    /// Whether this is the special idle type
    pub fn is_idle(&self) -> bool {
        matches!(self, MotivationEventType::Idle)
    }

    /// Stable snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            MotivationEventType::Idle => "idle",
            MotivationEventType::Startup => "startup",
            MotivationEventType::Task => "task",
            MotivationEventType::Test => "test",
        }
    }
}

impl fmt::Display for MotivationEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotivationEventType {
    type Err = MotivatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = normalize_tag(s);
        MotivationEventType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| MotivatorError::parse(format!("unknown event type '{}'", s)))
    }
}

/// Valence of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotivationEventCategory {
    /// Neither good nor bad news
    Neutral,
    /// Something succeeded
    Positive,
    /// Something failed
    Negative,
}

impl MotivationEventCategory {
    /// Every event category
    pub const ALL: [MotivationEventCategory; 3] = [
        MotivationEventCategory::Neutral,
        MotivationEventCategory::Positive,
        MotivationEventCategory::Negative,
    ];

    /// Stable snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            MotivationEventCategory::Neutral => "neutral",
            MotivationEventCategory::Positive => "positive",
            MotivationEventCategory::Negative => "negative",
        }
    }
}

impl fmt::Display for MotivationEventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MotivationEventCategory {
    type Err = MotivatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = normalize_tag(s);
        MotivationEventCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == tag)
            .ok_or_else(|| MotivatorError::parse(format!("unknown event category '{}'", s)))
    }
}

/// An incoming stimulus, consumed once by [`crate::EmotionCore::derive_mood`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationEvent {
    /// Activity that produced the event
    #[serde(rename = "type")]
    pub event_type: MotivationEventType,

    /// Good, bad or neutral news
    pub category: MotivationEventCategory,

    /// Optional human-readable title shown alongside the mood
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MotivationEvent {
    /// Create an untitled event
    pub fn new(event_type: MotivationEventType, category: MotivationEventCategory) -> Self {
        Self {
            event_type,
            category,
            title: None,
        }
    }

    /// Attach a title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// An idle event; the category is irrelevant to derivation
    pub fn idle() -> Self {
        Self::new(MotivationEventType::Idle, MotivationEventCategory::Neutral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_idle_is_idle() {
        let idle: Vec<_> = MotivationEventType::ALL
            .iter()
            .filter(|kind| kind.is_idle())
            .collect();
        assert_eq!(idle, vec![&MotivationEventType::Idle]);
    }

    #[test]
    fn test_event_json_shape() {
        let event = MotivationEvent::new(MotivationEventType::Test, MotivationEventCategory::Negative)
            .with_title("3 tests failed");
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["type"], "test");
        assert_eq!(value["category"], "negative");
        assert_eq!(value["title"], "3 tests failed");

        let untitled: MotivationEvent =
            serde_json::from_str(r#"{"type":"task","category":"positive"}"#).unwrap();
        assert_eq!(untitled.title, None);
    }

    #[test]
    fn test_parse_event_tags() {
        assert_eq!("TASK".parse::<MotivationEventType>().unwrap(), MotivationEventType::Task);
        assert_eq!(
            " negative ".parse::<MotivationEventCategory>().unwrap(),
            MotivationEventCategory::Negative
        );
        assert!("build".parse::<MotivationEventType>().is_err());
    }
}
