//! Check factory for creating check chains from configuration
//!
//! This module parses the configured check list and creates custom chains
//! that can be used instead of the default chain.

use super::{CheckChain, UploadCheck};
use std::error::Error;

/// Errors that can occur when creating checks from configuration
#[derive(Debug, Clone)]
pub enum CheckFactoryError {
    /// Unknown check name
    UnknownCheck(String),
}

impl std::fmt::Display for CheckFactoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckFactoryError::UnknownCheck(name) => {
                write!(f, "Unknown check: {name}")
            }
        }
    }
}

impl Error for CheckFactoryError {}

/// Create a check instance by name
pub fn create_check(name: &str) -> Result<Box<dyn UploadCheck>, CheckFactoryError> {
    match name {
        "ExtensionCheck" => Ok(Box::new(super::extension::ExtensionCheck)),
        "SizeCheck" => Ok(Box::new(super::size::SizeCheck)),
        _ => Err(CheckFactoryError::UnknownCheck(name.to_string())),
    }
}

/// Create a check chain from a list of check names
///
/// If the list is empty, returns the default chain. Otherwise, creates a
/// custom chain with the named checks in order.
pub fn create_check_chain(names: &[String]) -> Result<CheckChain, CheckFactoryError> {
    if names.is_empty() {
        // If no check configuration is provided, use the default chain
        return Ok(CheckChain::default());
    }

    let mut chain = CheckChain::new();
    for name in names {
        let check = create_check(name)?;
        chain = chain.add_check(check);
    }
    Ok(chain)
}
