//! Extension validation check
//!
//! Validates that the selected file's name carries an allowed extension.

use super::{CheckContext, UploadCheck};
use crate::error::Rejection;
use crate::file_extension;

/// Check that matches the file extension against the field's allowed set.
///
/// An empty selection has an empty name and therefore an empty extension,
/// so it fails here unless the policy literally allows "". That keeps "no
/// file chosen" on the same rejection path a browser control produces.
pub struct ExtensionCheck;

impl UploadCheck for ExtensionCheck {
    fn validate(&self, ctx: &CheckContext<'_>) -> Result<(), Rejection> {
        let extension = file_extension(&ctx.file.name);
        if ctx.policy.extensions.iter().any(|e| *e == extension) {
            return Ok(());
        }
        Err(Rejection::ExtensionRejected {
            extension,
            allowed: ctx.policy.extensions.clone(),
        })
    }

    fn name(&self) -> &'static str {
        "ExtensionCheck"
    }
}
