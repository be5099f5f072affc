//! Caller-supplied checks combined with the built-in chain.

use std::sync::Arc;

use preflight::checks::{CheckChain, CheckContext, UploadCheck};
use preflight::config::Config;
use preflight::error::Rejection;
use preflight::verify::Verifier;

use crate::utils::{CapturingNotifier, MockControl, host_with};

/// Flags names that smuggle a second extension, e.g. `invoice.pdf.exe`.
struct DoubleExtensionCheck;

impl UploadCheck for DoubleExtensionCheck {
    fn validate(&self, ctx: &CheckContext<'_>) -> Result<(), Rejection> {
        if let Some((stem, _)) = ctx.file.name.rsplit_once('.') {
            if stem.contains('.') {
                return Err(Rejection::CheckRejected(
                    "Uploaded file name must not contain more than one extension.".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "DoubleExtensionCheck"
    }
}

#[test]
fn custom_check_extends_the_default_chain() {
    let chain = CheckChain::default().add_check(Box::new(DoubleExtensionCheck));
    assert_eq!(
        chain.check_names(),
        ["ExtensionCheck", "SizeCheck", "DoubleExtensionCheck"]
    );

    let control = MockControl::with_file("photo.tar.png", 1_000);
    let host = host_with("backgroundImage", control.clone());
    let notifier = CapturingNotifier::new();
    let verifier = Verifier::new(
        Arc::new(Config::default()),
        Arc::new(host),
        notifier.clone(),
    )
    .with_checks(chain);

    let verdict = verifier.verify("backgroundImage");

    assert!(!verdict.success);
    assert_eq!(
        verdict.message,
        "Uploaded file name must not contain more than one extension."
    );
    assert_eq!(notifier.messages(), [verdict.message.clone()]);
    assert!(control.was_cleared());
}

#[test]
fn custom_check_passes_plain_names_through() {
    let chain = CheckChain::default().add_check(Box::new(DoubleExtensionCheck));
    let control = MockControl::with_file("photo.png", 1_000);
    let host = host_with("backgroundImage", control.clone());
    let notifier = CapturingNotifier::new();
    let verifier = Verifier::new(
        Arc::new(Config::default()),
        Arc::new(host),
        notifier.clone(),
    )
    .with_checks(chain);

    let verdict = verifier.verify("backgroundImage");

    assert!(verdict.success);
    assert!(notifier.messages().is_empty());
    assert!(!control.was_cleared());
}
