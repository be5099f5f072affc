//! Domain error types for upload validation
//!
//! Rejections are structured internally for logging/debugging; the exact
//! user-facing wording lives in [`crate::responses`] and is produced by
//! [`Rejection::user_message`].

use thiserror::Error;

use crate::responses;

/// Why an upload failed validation.
///
/// Every variant is an expected outcome of checking a file, not a fault:
/// the host process carries on and the user picks another file to retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("no upload restriction configured for field {field}")]
    ConfigurationMissing { field: String },

    #[error("no upload control found for field {field}")]
    ControlNotFound { field: String },

    #[error("extension {extension:?} not in the allowed set")]
    ExtensionRejected {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("file size {actual_bytes} bytes reaches limit {limit_mb} MB")]
    SizeExceeded { limit_mb: f64, actual_bytes: u64 },

    /// Rejection raised by a caller-supplied check. The payload is shown
    /// to the user verbatim.
    #[error("check rejected: {0}")]
    CheckRejected(String),
}

impl Rejection {
    /// Get the message shown to the user for this rejection.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Rejection::ConfigurationMissing { field } => responses::no_restriction(field),
            Rejection::ControlNotFound { .. } => responses::MSG_CONTROL_NOT_FOUND.to_string(),
            Rejection::ExtensionRejected { allowed, .. } => responses::extension_rejected(allowed),
            Rejection::SizeExceeded { limit_mb, .. } => responses::size_exceeded(*limit_mb),
            Rejection::CheckRejected(message) => message.clone(),
        }
    }
}

/// Errors raised while loading the policy configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot expand {placeholder}: {reason}")]
    Placeholder { placeholder: String, reason: String },
}
