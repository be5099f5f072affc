//! Size validation check
//!
//! Validates that the selected file stays under the configured ceiling.

use super::{CheckContext, UploadCheck};
use crate::error::Rejection;

/// Bytes per decimal megabyte. Limits are decimal (1e6), not binary.
pub const BYTES_PER_MB: f64 = 1_000_000.0;

/// Check that enforces the per-field size ceiling.
pub struct SizeCheck;

impl UploadCheck for SizeCheck {
    fn validate(&self, ctx: &CheckContext<'_>) -> Result<(), Rejection> {
        let size_mb = ctx.file.size_bytes as f64 / BYTES_PER_MB;
        // The ceiling is exclusive: a file of exactly the limit is rejected.
        if size_mb < ctx.policy.max_upload_mb {
            return Ok(());
        }
        Err(Rejection::SizeExceeded {
            limit_mb: ctx.policy.max_upload_mb,
            actual_bytes: ctx.file.size_bytes,
        })
    }

    fn name(&self) -> &'static str {
        "SizeCheck"
    }
}
