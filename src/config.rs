// In: src/config.rs

//! The single source of truth for ese-core's fixed strings and runtime settings.
//!
//! The literals returned across the host boundary live here as named constants
//! so no call site repeats them. `LoggingConfig` is built once at the boundary
//! (from Python keyword arguments or a JSON document) and passed down by
//! reference.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::EseError;

//==================================================================================
// I. Boundary Constants
//==================================================================================

/// Returned verbatim by `hello()`.
pub const GREETING: &str = "Hello from ESE Rust Core! High-Performance Module Active.";

/// The `status` field of every successful analysis.
pub const STATUS_PROCESSED: &str = "processed_in_rust_native";

/// Message carried by the `InvalidArgument` error.
pub const INVALID_ARGUMENT_MESSAGE: &str = "String expected";

//==================================================================================
// II. Logging Configuration
//==================================================================================

/// Settings for the optional `env_logger` backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace` (case-insensitive).
    pub level: String,
    /// Append log lines to this file instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_file: None,
        }
    }
}

impl LoggingConfig {
    /// Parses `level` into a `log::LevelFilter`.
    pub fn level_filter(&self) -> Result<LevelFilter, EseError> {
        LevelFilter::from_str(self.level.trim()).map_err(|_| {
            EseError::InvalidConfig(format!(
                "Unknown log level '{}'. Must be one of off, error, warn, info, debug, trace.",
                self.level
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let config = LoggingConfig {
            level: " DEBUG ".to_string(),
            log_file: None,
        };
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
            log_file: None,
        };
        let err = config.level_filter().unwrap_err();
        assert!(matches!(err, EseError::InvalidConfig(_)));
        assert!(err.to_string().contains("chatty"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"log_file": "ese.log"}"#).unwrap();
        assert_eq!(config.level, "info");
        assert_eq!(config.log_file.as_deref(), Some("ese.log"));
    }

    #[test]
    fn test_status_and_greeting_are_distinct_literals() {
        assert_ne!(GREETING, STATUS_PROCESSED);
        assert!(!STATUS_PROCESSED.contains(char::is_whitespace));
    }
}
