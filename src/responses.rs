//! Canonical message texts.
//!
//! Contains the user-facing rejection messages shown when an upload fails
//! validation. Wording is part of the product surface; change with care.

/// Shown when the field has no control on the current surface.
pub const MSG_CONTROL_NOT_FOUND: &str = "Could not find upload button.";

// Templates for messages with an interpolated part
pub const MSG_NO_RESTRICTION_PREFIX: &str = "No matching file restriction configuration for type ";
pub const MSG_EXTENSION_PREFIX: &str = "Uploaded file can only be ";
pub const MSG_SIZE_PREFIX: &str = "Uploaded file must be smaller than ";
pub const MSG_SIZE_SUFFIX: &str = " MB.";

/// Message for a field with no (or an incomplete) policy entry.
#[must_use]
pub fn no_restriction(field: &str) -> String {
    format!("{MSG_NO_RESTRICTION_PREFIX}{field}.")
}

/// Message listing the accepted extensions, comma-joined in table order.
#[must_use]
pub fn extension_rejected(allowed: &[String]) -> String {
    format!("{MSG_EXTENSION_PREFIX}{}.", allowed.join(","))
}

/// Message for a file at or over the size ceiling. The limit renders with
/// Rust's shortest-decimal formatting, so `50.0` prints as `50`.
#[must_use]
pub fn size_exceeded(limit_mb: f64) -> String {
    format!("{MSG_SIZE_PREFIX}{limit_mb}{MSG_SIZE_SUFFIX}")
}
