use std::sync::Arc;

/// Capability for presenting a message to the user.
pub trait Notifier: Send + Sync {
    /// Present a message. Implementations may block until acknowledged.
    fn notify(&self, message: &str);
}

pub type DynNotifier = Arc<dyn Notifier>;

/// Notifier that prints to stderr, for terminal use.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}
