//! Trace script parsing
//!
//! One step per line:
//!
//! ```text
//! # comment
//! negative task
//! positive          # type defaults to task
//! neutral startup
//! idle
//! cool-down         # ladder defaults to negative
//! reset positive
//! ```

use anyhow::{bail, Context, Result};
use motivator_core::{
    MoodLadder, MotivationEvent, MotivationEventCategory, MotivationEventType, MutationCommand,
    MutationKind,
};
use std::fmt;
use std::str::FromStr;

/// A single scripted input for the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Run through `derive_mood`
    Event(MotivationEvent),
    /// Run through `mutate_mood`
    Mutation(MutationCommand),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Event(event) if event.event_type.is_idle() => f.write_str("idle"),
            Step::Event(event) => write!(f, "{} {}", event.category, event.event_type),
            Step::Mutation(command) => write!(f, "{}", command),
        }
    }
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (head, rest) = match words.split_first() {
            Some(split) => split,
            None => bail!("empty step"),
        };
        if rest.len() > 1 {
            bail!("too many words in step '{}'", line);
        }
        let arg = rest.first().copied();

        if head.eq_ignore_ascii_case("idle") {
            if arg.is_some() {
                bail!("idle takes no arguments");
            }
            return Ok(Step::Event(MotivationEvent::idle()));
        }

        if let Ok(kind) = head.parse::<MutationKind>() {
            let scope = match arg {
                Some(word) => word.parse::<MoodLadder>()?,
                None => MoodLadder::Negative,
            };
            return Ok(Step::Mutation(MutationCommand::new(kind, scope)));
        }

        let category = head
            .parse::<MotivationEventCategory>()
            .with_context(|| format!("'{}' is not an event category or mutation", head))?;
        let event_type = match arg {
            Some(word) => word.parse::<MotivationEventType>()?,
            None => MotivationEventType::Task,
        };
        Ok(Step::Event(MotivationEvent::new(event_type, category)))
    }
}

/// Parse a whole script, skipping blank lines and comments
///
/// Returns each step with its 1-based line number.
pub fn parse_script(source: &str) -> Result<Vec<(usize, Step)>> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let step = line
            .parse::<Step>()
            .with_context(|| format!("line {}: {}", index + 1, raw.trim()))?;
        steps.push((index + 1, step));
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events() {
        assert_eq!(
            "negative test".parse::<Step>().unwrap(),
            Step::Event(MotivationEvent::new(
                MotivationEventType::Test,
                MotivationEventCategory::Negative
            ))
        );
        assert_eq!(
            "positive".parse::<Step>().unwrap(),
            Step::Event(MotivationEvent::new(
                MotivationEventType::Task,
                MotivationEventCategory::Positive
            ))
        );
        assert_eq!("IDLE".parse::<Step>().unwrap(), Step::Event(MotivationEvent::idle()));
    }

    #[test]
    fn test_parse_mutations() {
        assert_eq!(
            "cool-down".parse::<Step>().unwrap(),
            Step::Mutation(MutationCommand::cool_down())
        );
        assert_eq!(
            "reset positive".parse::<Step>().unwrap(),
            Step::Mutation(MutationCommand::new(MutationKind::Reset, MoodLadder::Positive))
        );
    }

    #[test]
    fn test_rejects_unknown_tags() {
        assert!("grumpy".parse::<Step>().is_err());
        assert!("negative build".parse::<Step>().is_err());
        assert!("idle now".parse::<Step>().is_err());
        assert!("negative task twice".parse::<Step>().is_err());
    }

    #[test]
    fn test_parse_script_skips_comments() {
        let script = "# warm up\n\nnegative task\n  reset   # clear\n";
        let steps = parse_script(script).unwrap();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].0, 3);
        assert_eq!(steps[1], (4, Step::Mutation(MutationCommand::reset())));
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = parse_script("negative\nsulk\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_bundled_trace_parses() {
        let steps = parse_script(include_str!("../traces/cool_down.trace")).unwrap();

        assert_eq!(steps.len(), 10);
        assert_eq!(steps[2].1, Step::Mutation(MutationCommand::cool_down()));
        assert_eq!(steps[8].1, Step::Event(MotivationEvent::idle()));
    }

    #[test]
    fn test_display_round_trips() {
        for line in ["idle", "negative test", "cool_down negative", "reset positive"] {
            let step: Step = line.parse().unwrap();
            assert_eq!(step.to_string(), line);
        }
    }
}
