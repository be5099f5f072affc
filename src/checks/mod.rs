//! Upload validation checks
//!
//! This module provides a composable check system for upload validation.
//! Each check implements the `UploadCheck` trait and can be combined into
//! a chain that must all pass for an upload to be accepted.

use crate::SelectedFile;
use crate::config::UploadPolicy;
use crate::error::Rejection;

pub mod extension;
pub mod factory;
pub mod size;

/// Everything a check may inspect for one validation pass.
pub struct CheckContext<'a> {
    pub policy: &'a UploadPolicy,
    pub file: &'a SelectedFile,
}

/// Trait for upload validation checks
pub trait UploadCheck: Send + Sync {
    /// Validate the selected file according to this check's rules
    ///
    /// Returns Ok(()) if the upload passes, Err with the rejection if not.
    fn validate(&self, ctx: &CheckContext<'_>) -> Result<(), Rejection>;

    /// Get a descriptive name for this check (for logging/debugging)
    fn name(&self) -> &'static str;
}

/// A chain of checks that all must pass for validation to succeed
pub struct CheckChain {
    checks: Vec<Box<dyn UploadCheck>>,
}

impl CheckChain {
    /// Create a new empty check chain
    #[must_use]
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Add a check to the chain
    #[must_use]
    pub fn add_check(mut self, check: Box<dyn UploadCheck>) -> Self {
        self.checks.push(check);
        self
    }

    /// Run all checks in the chain, returning on first failure
    pub fn validate(&self, ctx: &CheckContext<'_>) -> Result<(), Rejection> {
        for check in &self.checks {
            check.validate(ctx)?;
        }
        Ok(())
    }

    /// Get a list of check names in the chain
    #[must_use]
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }
}

impl Default for CheckChain {
    /// Create the default chain: extension match, then size ceiling
    fn default() -> Self {
        Self::new()
            .add_check(Box::new(extension::ExtensionCheck))
            .add_check(Box::new(size::SizeCheck))
    }
}
