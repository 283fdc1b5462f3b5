//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Transport errors ──────────────────────────────────────────────────────────

/// Errors raised by the management transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The controller could not be reached or the connection broke
    /// mid-request.
    #[error("{0}")]
    Io(String),

    /// The controller answered, but not with a management envelope.
    #[error("invalid management response: {0}")]
    Protocol(String),
}

// ── Version command errors ────────────────────────────────────────────────────

/// The version command's single hard-failure path.
///
/// Application-level failures (a `failed` envelope, a missing result payload)
/// degrade into report content instead of raising.
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Failed to get the release info: {0}")]
    ReleaseFetch(TransportError),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_error_carries_the_exact_prefix() {
        let err = VersionError::ReleaseFetch(TransportError::Io("connection refused".to_string()));
        assert_eq!(
            err.to_string(),
            "Failed to get the release info: connection refused"
        );
    }

    #[test]
    fn test_protocol_error_names_the_response() {
        let err = TransportError::Protocol("expected value at line 1".to_string());
        assert!(err.to_string().contains("invalid management response"));
    }
}
