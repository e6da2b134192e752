//! Error types for the motivator core
//!
//! Mood derivation itself never fails. These errors belong to the surfaces
//! around the engine: loading settings and parsing tags from text.

use thiserror::Error;

/// Main error type for motivator operations
#[derive(Debug, Error)]
pub enum MotivatorError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration was loaded but holds values outside their contract
    #[error("Validation error: {0}")]
    Validation(String),

    /// An unknown tag was found while parsing text input
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MotivatorError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Convenient Result type using MotivatorError
pub type Result<T> = std::result::Result<T, MotivatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MotivatorError::config("missing file").to_string(),
            "Configuration error: missing file"
        );
        assert_eq!(
            MotivatorError::parse("unknown mood 'sleepy'").to_string(),
            "Parse error: unknown mood 'sleepy'"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.json")?)
        }

        assert!(matches!(open(), Err(MotivatorError::Io(_))));
    }
}
