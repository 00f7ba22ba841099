//! Configuration error types
//!
//! The simulation itself has no fault paths; only loading settings and
//! tuning from disk can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading or validating a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_names_field() {
        let err = ConfigError::Invalid {
            field: "orb_spawn_interval",
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid value for `orb_spawn_interval`: must be positive"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = parse.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
