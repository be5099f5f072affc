#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use preflight::SelectedFile;
use preflight::control::{ControlRegistry, DynControl, UploadControl};
use preflight::notify::Notifier;

/// Upload control with a canned selection that records clears.
pub struct MockControl {
    selection: Mutex<Option<SelectedFile>>,
    cleared: AtomicBool,
}

impl MockControl {
    /// Create a control whose selection is a file with the given name and size.
    pub fn with_file(name: &str, size_bytes: u64) -> Arc<Self> {
        Arc::new(Self {
            selection: Mutex::new(Some(SelectedFile {
                name: name.to_string(),
                size_bytes,
            })),
            cleared: AtomicBool::new(false),
        })
    }

    /// Create a control with nothing selected.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            selection: Mutex::new(None),
            cleared: AtomicBool::new(false),
        })
    }

    pub fn was_cleared(&self) -> bool {
        self.cleared.load(Ordering::SeqCst)
    }
}

impl UploadControl for MockControl {
    fn selected_file(&self) -> Option<SelectedFile> {
        self.selection.lock().unwrap().clone()
    }

    fn clear_selection(&self) {
        *self.selection.lock().unwrap() = None;
        self.cleared.store(true, Ordering::SeqCst);
    }
}

/// Notifier that records every message for later assertions.
#[derive(Default)]
pub struct CapturingNotifier {
    messages: Mutex<Vec<String>>,
}

impl CapturingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for CapturingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Build a registry holding a single control under the given field.
pub fn host_with(field: &str, control: DynControl) -> ControlRegistry {
    let mut registry = ControlRegistry::new();
    registry.register(field, control);
    registry
}
