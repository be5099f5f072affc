//! Policy-driven validation of files chosen for upload.
//!
//! A policy table maps each upload field to the filename extensions it
//! accepts and a maximum size in decimal megabytes. The validator reads a
//! field's currently selected file through an injected control handle and
//! returns a [`Verdict`]; the [`verify::Verifier`] adapter turns rejections
//! into a user notification and clears the offending selection.

pub mod checks;
pub mod cli;
pub mod config;
pub mod control;
pub mod error;
pub mod logging;
pub mod notify;
pub mod responses;
pub mod validate;
pub mod verify;

/// A file currently selected in an upload control.
///
/// The default value models an empty selection: no name, zero bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

/// Outcome of validating one upload field.
///
/// `message` is empty exactly when `success` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub success: bool,
    pub message: String,
}

impl Verdict {
    /// Verdict for an accepted upload.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            success: true,
            message: String::new(),
        }
    }

    /// Verdict for a rejected upload, carrying the user-facing message.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Extract the extension used for policy matching.
///
/// The whole name is lowercased and the part after the last `.` is taken.
/// A name without a dot yields the entire lowercased name; a trailing dot
/// yields the empty string.
#[must_use]
pub fn file_extension(name: &str) -> String {
    let lowered = name.to_lowercase();
    match lowered.rsplit_once('.') {
        Some((_, extension)) => extension.to_string(),
        None => lowered,
    }
}
