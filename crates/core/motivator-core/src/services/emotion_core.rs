//! Emotion Core
//!
//! The stateful mood classifier. Holds a single negative-intensity counter
//! along with the last tier it reported on the negative ladder:
//!
//! - NEGATIVE events climb the negative ladder. Crossing the threshold only
//!   opens the door; each step past it is gated by a percentage roll, and the
//!   final step into rage by a coin-flip once FRUSTRATED has been reported.
//! - POSITIVE, NEUTRAL and idle events clear the counter.
//! - COOL_DOWN steps the counter down and re-reads the tier without any draw,
//!   capped at the tier last reported, so cooling never climbs.
//! - RESET clears the counter.

use crate::config::EmotionConfig;
use crate::random::{RandomSource, ThreadRandom};
use crate::types::*;

/// Percentage rolls are drawn from `[ROLL_MIN, ROLL_MAX]`
const ROLL_MIN: u32 = 1;
const ROLL_MAX: u32 = 100;

/// Coin-flip outcome that escalates FRUSTRATED to ENRAGED
const ESCALATE: usize = 1;

/// Rung of the negative ladder, ordered from calm up to rage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum NegativeTier {
    Calm,
    Mild,
    Frustrated,
    Enraged,
}

impl NegativeTier {
    fn category(self) -> MoodCategory {
        match self {
            NegativeTier::Calm => MoodCategory::Calm,
            NegativeTier::Mild => MoodCategory::MildNegative,
            NegativeTier::Frustrated => MoodCategory::Frustrated,
            NegativeTier::Enraged => MoodCategory::Enraged,
        }
    }
}

/// Stateful mood engine; one instance per simulated personality
///
/// Calls take `&mut self`; share an instance across threads behind a mutex so
/// each call is one critical section.
#[derive(Debug)]
pub struct EmotionCore<R = ThreadRandom> {
    config: EmotionConfig,
    random: R,
    negative_intensity: u32,
    /// Last tier reported while the counter was live; CALM once cleared
    tier: NegativeTier,
}

impl EmotionCore<ThreadRandom> {
    /// Create an engine drawing from the thread-local generator
    pub fn new(config: EmotionConfig) -> Self {
        Self::with_random(config, ThreadRandom)
    }
}

impl<R: RandomSource> EmotionCore<R> {
    /// Create an engine with an injected random source
    pub fn with_random(config: EmotionConfig, random: R) -> Self {
        Self {
            config,
            random,
            negative_intensity: 0,
            tier: NegativeTier::Calm,
        }
    }

    /// Configuration supplied at construction
    pub fn config(&self) -> &EmotionConfig {
        &self.config
    }

    /// Current count of unresolved negative stimulus
    pub fn negative_intensity(&self) -> u32 {
        self.negative_intensity
    }

    /// Classify an incoming event into a mood, updating the counter first
    pub fn derive_mood(&mut self, event: &MotivationEvent) -> Mood {
        let mood = if event.event_type.is_idle() {
            self.calm_down()
        } else {
            match event.category {
                MotivationEventCategory::Neutral => self.calm_down(),
                MotivationEventCategory::Positive => self.celebrate(),
                MotivationEventCategory::Negative => self.escalate(),
            }
        };

        tracing::debug!(
            event_type = %event.event_type,
            category = %event.category,
            intensity = self.negative_intensity,
            tier = ?self.tier,
            mood = %mood,
            "Derived mood"
        );

        mood
    }

    /// Apply a cool-down or reset command
    pub fn mutate_mood(&mut self, command: &MutationCommand) -> Mood {
        let mood = match command.kind {
            MutationKind::Reset => self.calm_down(),
            MutationKind::CoolDown => {
                if command.scope == MoodLadder::Negative {
                    self.negative_intensity = self.negative_intensity.saturating_sub(1);
                }
                self.tier = self.cooled_tier().min(self.tier);
                self.pick(self.tier.category())
            }
        };

        tracing::debug!(
            kind = %command.kind,
            scope = %command.scope,
            intensity = self.negative_intensity,
            tier = ?self.tier,
            mood = %mood,
            "Mutated mood"
        );

        mood
    }

    fn calm_down(&mut self) -> Mood {
        self.negative_intensity = 0;
        self.tier = NegativeTier::Calm;
        self.pick(MoodCategory::Calm)
    }

    fn celebrate(&mut self) -> Mood {
        let previous = std::mem::take(&mut self.negative_intensity);
        self.tier = NegativeTier::Calm;
        if previous > 0 {
            self.pick(MoodCategory::Relieved)
        } else {
            self.pick(MoodCategory::Positive)
        }
    }

    fn escalate(&mut self) -> Mood {
        self.negative_intensity = self.negative_intensity.saturating_add(1);
        self.tier = self.escalated_tier();
        self.pick(self.tier.category())
    }

    fn escalated_tier(&self) -> NegativeTier {
        let intensity = self.negative_intensity;
        let threshold = self.config.events_before_frustration;

        if !self.config.allow_frustration || intensity <= threshold {
            return NegativeTier::Mild;
        }

        let roll = self.random.next_in_range(ROLL_MIN, ROLL_MAX);
        tracing::trace!(roll, probability = self.config.probability_of_frustration, "Frustration roll");
        if roll > self.config.probability_of_frustration {
            return NegativeTier::Mild;
        }

        // A won roll from below FRUSTRATED lands on it, never past it.
        if self.tier < NegativeTier::Frustrated || intensity <= self.rage_floor() {
            return NegativeTier::Frustrated;
        }

        let flip = self.random.next_index(2);
        tracing::trace!(flip, "Rage coin-flip");
        if flip == ESCALATE {
            NegativeTier::Enraged
        } else {
            NegativeTier::Frustrated
        }
    }

    /// Highest intensity at which an escalation still lands on FRUSTRATED
    ///
    /// The frustrated band is as wide as the threshold itself, and at least
    /// one event wide so a zero threshold still passes through FRUSTRATED.
    fn rage_floor(&self) -> u32 {
        let threshold = self.config.events_before_frustration;
        threshold.saturating_add(threshold.max(1))
    }

    /// Tier read straight off the counter, with no draws
    ///
    /// Holds FRUSTRATED down to the threshold itself, one step lower than
    /// the event path enters it, and ENRAGED above the frustrated band. The
    /// caller caps the reading at the last reported tier.
    fn cooled_tier(&self) -> NegativeTier {
        let intensity = self.negative_intensity;
        if intensity == 0 {
            NegativeTier::Calm
        } else if !self.config.frustration_possible()
            || intensity < self.config.events_before_frustration
        {
            NegativeTier::Mild
        } else if intensity <= self.rage_floor() {
            NegativeTier::Frustrated
        } else {
            NegativeTier::Enraged
        }
    }

    fn pick(&self, category: MoodCategory) -> Mood {
        let members = category.members();
        if members.len() == 1 {
            return members[0];
        }
        let index = self.random.next_index(members.len());
        tracing::trace!(%category, index, "Picked mood");
        members[index % members.len()]
    }
}
