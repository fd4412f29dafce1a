//! Error type shared by the harness.

use std::io;

/// Errors produced while configuring or reporting experiments.
///
/// Running an experiment never fails: empty inputs and zero run counts are
/// valid degenerate cases. Only malformed configuration and reporter sinks
/// can produce an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value was rejected at construction time.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable explanation.
        reason: String,
    },

    /// Writing a report to its sink failed.
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),

    /// Serializing a report failed.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Whether this is a configuration rejection.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Error::InvalidConfiguration { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
