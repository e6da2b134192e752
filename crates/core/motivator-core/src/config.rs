//! Emotion configuration and environment loading
//!
//! The emotion core takes an [`EmotionConfig`] by value and never reads
//! process state. Everything in this module is for the caller's settings
//! surface: defaults, JSON files, `.env` files and environment variables.

use crate::{MotivatorError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Environment variable for [`EmotionConfig::events_before_frustration`]
pub const ENV_EVENTS_BEFORE_FRUSTRATION: &str = "MOTIVATOR_EVENTS_BEFORE_FRUSTRATION";
/// Environment variable for [`EmotionConfig::probability_of_frustration`]
pub const ENV_PROBABILITY_OF_FRUSTRATION: &str = "MOTIVATOR_PROBABILITY_OF_FRUSTRATION";
/// Environment variable for [`EmotionConfig::allow_frustration`]
pub const ENV_ALLOW_FRUSTRATION: &str = "MOTIVATOR_ALLOW_FRUSTRATION";

/// Parameters for the escalation ladder
///
/// Values are not checked by the engine. A probability above 100 behaves like
/// 100; call [`EmotionConfig::validate`] at the settings boundary to reject it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionConfig {
    /// Consecutive negative events tolerated before frustration can set in
    pub events_before_frustration: u32,

    /// Chance, in percent, that a negative event past the threshold escalates
    pub probability_of_frustration: u32,

    /// Gate for the whole frustration path
    pub allow_frustration: bool,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            events_before_frustration: 5,
            probability_of_frustration: 75,
            allow_frustration: true,
        }
    }
}

impl EmotionConfig {
    /// Set the escalation threshold
    pub fn with_events_before_frustration(mut self, events: u32) -> Self {
        self.events_before_frustration = events;
        self
    }

    /// Set the escalation probability, in percent
    pub fn with_probability_of_frustration(mut self, percent: u32) -> Self {
        self.probability_of_frustration = percent;
        self
    }

    /// Enable or disable the frustration path
    pub fn with_allow_frustration(mut self, allow: bool) -> Self {
        self.allow_frustration = allow;
        self
    }

    /// Whether escalation past mild-negative is possible at all
    pub fn frustration_possible(&self) -> bool {
        self.allow_frustration && self.probability_of_frustration > 0
    }

    /// Reject values outside their documented ranges
    pub fn validate(&self) -> Result<()> {
        if self.probability_of_frustration > 100 {
            return Err(MotivatorError::validation(format!(
                "probability_of_frustration must be within 0..=100, got {}",
                self.probability_of_frustration
            )));
        }
        Ok(())
    }

    /// Parse from a JSON document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MotivatorError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), ?config, "Loaded emotion configuration");
        Ok(config)
    }

    /// Defaults overridden by `MOTIVATOR_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    ///
    /// Unparseable values fall back to the default, with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            events_before_frustration: parse_or(
                &lookup,
                ENV_EVENTS_BEFORE_FRUSTRATION,
                defaults.events_before_frustration,
            ),
            probability_of_frustration: parse_or(
                &lookup,
                ENV_PROBABILITY_OF_FRUSTRATION,
                defaults.probability_of_frustration,
            ),
            allow_frustration: lookup(ENV_ALLOW_FRUSTRATION)
                .and_then(|v| {
                    let parsed = parse_bool(&v);
                    if parsed.is_none() {
                        tracing::warn!(key = ENV_ALLOW_FRUSTRATION, value = %v, "Ignoring unparseable boolean");
                    }
                    parsed
                })
                .unwrap_or(defaults.allow_frustration),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparseable integer");
            default
        }),
        None => default,
    }
}

/// Parse the usual boolean spellings
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Load environment variables from a `.env` file in the current or a parent directory
///
/// A missing file is not an error.
pub fn load_env() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::info!("Loaded environment from: {}", path.display());
            Ok(())
        }
        Err(dotenvy::Error::LineParse(line, pos)) => Err(MotivatorError::config(format!(
            "Failed to parse .env file at line {}, position {}",
            line, pos
        ))),
        Err(dotenvy::Error::Io(_)) => {
            tracing::warn!("No .env file found - using system environment variables only");
            Ok(())
        }
        Err(e) => Err(MotivatorError::config(format!(
            "Failed to load .env file: {}",
            e
        ))),
    }
}

/// Load environment variables from a specific file
pub fn load_env_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    match dotenvy::from_path(path.as_ref()) {
        Ok(()) => {
            tracing::info!("Loaded environment from: {}", path.as_ref().display());
            Ok(())
        }
        Err(e) => Err(MotivatorError::config(format!(
            "Failed to load {} environment file: {}",
            path.as_ref().display(),
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EmotionConfig::default();
        assert_eq!(config.events_before_frustration, 5);
        assert_eq!(config.probability_of_frustration, 75);
        assert!(config.allow_frustration);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = EmotionConfig::from_lookup(lookup_from(&[
            (ENV_EVENTS_BEFORE_FRUSTRATION, "2"),
            (ENV_PROBABILITY_OF_FRUSTRATION, " 40 "),
            (ENV_ALLOW_FRUSTRATION, "off"),
        ]));

        assert_eq!(config.events_before_frustration, 2);
        assert_eq!(config.probability_of_frustration, 40);
        assert!(!config.allow_frustration);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = EmotionConfig::from_lookup(lookup_from(&[
            (ENV_EVENTS_BEFORE_FRUSTRATION, "many"),
            (ENV_ALLOW_FRUSTRATION, "maybe"),
        ]));

        assert_eq!(config, EmotionConfig::default());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("sometimes"), None);
    }

    #[test]
    fn test_validate_rejects_out_of_range_probability() {
        let config = EmotionConfig::default().with_probability_of_frustration(101);
        assert!(matches!(config.validate(), Err(MotivatorError::Validation(_))));
    }

    #[test]
    fn test_frustration_possible() {
        assert!(EmotionConfig::default().frustration_possible());
        assert!(!EmotionConfig::default().with_allow_frustration(false).frustration_possible());
        assert!(!EmotionConfig::default()
            .with_probability_of_frustration(0)
            .frustration_possible());
    }

    #[test]
    fn test_json_partial_document_keeps_defaults() {
        let config = EmotionConfig::from_json_str(r#"{"events_before_frustration": 1}"#).unwrap();
        assert_eq!(config.events_before_frustration, 1);
        assert_eq!(config.probability_of_frustration, 75);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"events_before_frustration": 3, "probability_of_frustration": 100, "allow_frustration": false}}"#
        )
        .unwrap();

        let config = EmotionConfig::from_json_file(file.path()).unwrap();
        assert_eq!(
            config,
            EmotionConfig::default()
                .with_events_before_frustration(3)
                .with_probability_of_frustration(100)
                .with_allow_frustration(false)
        );
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = EmotionConfig::from_json_file("/no/such/motivator.json");
        assert!(matches!(result, Err(MotivatorError::Config(_))));
    }

    #[test]
    fn test_load_env_from_missing_path() {
        assert!(load_env_from_path("/no/such/.env").is_err());
    }

    #[test]
    fn test_load_env_from_path_exports_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# motivator overrides").unwrap();
        writeln!(file, "MOTIVATOR_TEST_LOADED_THRESHOLD=3").unwrap();

        load_env_from_path(file.path()).unwrap();

        assert_eq!(
            std::env::var("MOTIVATOR_TEST_LOADED_THRESHOLD").as_deref(),
            Ok("3")
        );
    }

    #[test]
    fn test_load_env_from_path_rejects_bad_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NOT A VALID LINE").unwrap();

        let result = load_env_from_path(file.path());
        assert!(matches!(result, Err(MotivatorError::Config(_))));
    }
}
