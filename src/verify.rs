//! Verification entry point for a UI surface
//!
//! Couples the pure validator to its consequences: on rejection the user
//! is notified and the control's selection is cleared, so the rejected
//! file cannot ride along on a later submit unnoticed.

use std::sync::Arc;

use crate::Verdict;
use crate::checks::CheckChain;
use crate::checks::factory::{CheckFactoryError, create_check_chain};
use crate::config::Config;
use crate::control::DynControlHost;
use crate::notify::DynNotifier;
use crate::validate::validate_upload_with_checks;

/// Bundles the capabilities needed to run verification passes.
pub struct Verifier {
    config: Arc<Config>,
    host: DynControlHost,
    notifier: DynNotifier,
    checks: CheckChain,
}

impl Verifier {
    /// Create a verifier with the default check chain.
    #[must_use]
    pub fn new(config: Arc<Config>, host: DynControlHost, notifier: DynNotifier) -> Self {
        Self {
            config,
            host,
            notifier,
            checks: CheckChain::default(),
        }
    }

    /// Create a verifier whose chain comes from the configured check list.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration names an unknown check.
    pub fn from_config(
        config: Arc<Config>,
        host: DynControlHost,
        notifier: DynNotifier,
    ) -> Result<Self, CheckFactoryError> {
        let checks = create_check_chain(&config.checks)?;
        Ok(Self {
            config,
            host,
            notifier,
            checks,
        })
    }

    /// Replace the check chain.
    #[must_use]
    pub fn with_checks(mut self, checks: CheckChain) -> Self {
        self.checks = checks;
        self
    }

    /// Validate the field's selected file and apply the UI consequences.
    ///
    /// Acceptance is a no-op apart from a diagnostic log line. On
    /// rejection the user is notified first, then the control's selection
    /// is cleared (when the control exists at all).
    pub fn verify(&self, field: &str) -> Verdict {
        let verdict =
            validate_upload_with_checks(&self.config, self.host.as_ref(), field, &self.checks);

        if verdict.success {
            tracing::info!(field = %field, "upload accepted");
        } else {
            tracing::info!(field = %field, message = %verdict.message, "upload rejected");
            self.notifier.notify(&verdict.message);
            if let Some(control) = self.host.control(field) {
                control.clear_selection();
            }
        }

        verdict
    }
}
