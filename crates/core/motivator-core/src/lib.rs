//! Motivator Core
//!
//! The mood-derivation engine behind a motivator personality: a stream of
//! categorized life-cycle events goes in, one mood comes out per event.
//!
//! # Overview
//!
//! - **Mood taxonomy**: a closed set of moods, each owned by one
//!   [`MoodCategory`]. Categories are tiers; their members are synonyms picked
//!   at random for variety.
//!
//! - **EmotionCore**: the stateful classifier. Negative events climb
//!   mild-negative, frustrated and enraged, with each step past the threshold
//!   gated by [`EmotionConfig::probability_of_frustration`]. Positive, neutral
//!   and idle events clear the ladder. [`MutationCommand`]s cool it down or
//!   reset it directly.
//!
//! - **RandomSource**: every draw the engine makes goes through this trait so
//!   deterministic sources can stand in for tests and golden traces.
//!
//! # Example Usage
//!
//! ```rust
//! use motivator_core::{
//!     EmotionConfig, EmotionCore, MoodCategory, MotivationEvent, MotivationEventCategory,
//!     MotivationEventType, MutationCommand,
//! };
//!
//! let config = EmotionConfig::default()
//!     .with_events_before_frustration(2)
//!     .with_probability_of_frustration(100);
//! let mut core = EmotionCore::new(config);
//!
//! let failed = MotivationEvent::new(MotivationEventType::Test, MotivationEventCategory::Negative);
//! assert_eq!(core.derive_mood(&failed).category(), MoodCategory::MildNegative);
//! assert_eq!(core.derive_mood(&failed).category(), MoodCategory::MildNegative);
//! assert_eq!(core.derive_mood(&failed).category(), MoodCategory::Frustrated);
//!
//! assert_eq!(core.mutate_mood(&MutationCommand::reset()).category(), MoodCategory::Calm);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Settings surface: defaults, JSON and environment loading
pub mod config;
/// Error types
pub mod error;
/// Injectable randomness
pub mod random;
/// The emotion core engine
pub mod services;
/// Moods, events and mutation commands
pub mod types;

pub use config::{load_env, load_env_from_path, EmotionConfig};
pub use error::{MotivatorError, Result};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use services::*;
pub use types::*;
