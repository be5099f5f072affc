//! Upload validation flow
//!
//! `validate_upload` is the pure decision: policy lookup, control lookup,
//! then the check chain against the live selection. It has no side
//! effects; callers decide how to surface the verdict.

use crate::Verdict;
use crate::checks::{CheckChain, CheckContext};
use crate::config::Config;
use crate::control::ControlHost;
use crate::error::Rejection;

/// Validate the field's selected file with the default check chain.
#[must_use]
pub fn validate_upload(cfg: &Config, host: &dyn ControlHost, field: &str) -> Verdict {
    validate_upload_with_checks(cfg, host, field, &CheckChain::default())
}

/// Validate the field's selected file with a custom check chain.
///
/// Policy and control lookups always run first; the chain only sees
/// fields that have a complete policy entry and a live control.
#[must_use]
pub fn validate_upload_with_checks(
    cfg: &Config,
    host: &dyn ControlHost,
    field: &str,
    checks: &CheckChain,
) -> Verdict {
    match run_checks(cfg, host, field, checks) {
        Ok(()) => Verdict::pass(),
        Err(rejection) => Verdict::fail(rejection.user_message()),
    }
}

fn run_checks(
    cfg: &Config,
    host: &dyn ControlHost,
    field: &str,
    checks: &CheckChain,
) -> Result<(), Rejection> {
    let Some(policy) = cfg.restriction_for(field).and_then(|r| r.policy()) else {
        return Err(Rejection::ConfigurationMissing {
            field: field.to_string(),
        });
    };

    let Some(control) = host.control(field) else {
        return Err(Rejection::ControlNotFound {
            field: field.to_string(),
        });
    };

    // An empty selection behaves like a file with an empty name: it is
    // rejected by the extension check, not reported separately.
    let file = control.selected_file().unwrap_or_default();

    let ctx = CheckContext {
        policy: &policy,
        file: &file,
    };
    checks.validate(&ctx)
}
