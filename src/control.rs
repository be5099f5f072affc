//! Upload control access
//!
//! The validator never touches a UI surface directly. A [`ControlHost`]
//! resolves field identifiers to [`UploadControl`] handles, and a control
//! reports (or clears) its current selection. Hosts and controls are
//! injected, so the validation flow is testable with canned selections.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::SelectedFile;

/// A single upload control.
pub trait UploadControl: Send + Sync {
    /// The file currently selected in the control, if any. Read live at
    /// call time; never cached by the validator.
    fn selected_file(&self) -> Option<SelectedFile>;

    /// Drop the current selection so a rejected file is not resubmitted.
    fn clear_selection(&self);
}

/// Resolves a field identifier to its upload control.
pub trait ControlHost: Send + Sync {
    /// Look up the control for a field. `None` means the field has no
    /// control on the current surface.
    fn control(&self, field: &str) -> Option<DynControl>;
}

pub type DynControl = Arc<dyn UploadControl>;
pub type DynControlHost = Arc<dyn ControlHost>;

/// In-memory control host backed by a map of field identifiers.
#[derive(Default)]
pub struct ControlRegistry {
    controls: HashMap<String, DynControl>,
}

impl ControlRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            controls: HashMap::new(),
        }
    }

    /// Register a control under a field identifier, replacing any previous
    /// control for that field.
    pub fn register(&mut self, field: impl Into<String>, control: DynControl) {
        self.controls.insert(field.into(), control);
    }
}

impl ControlHost for ControlRegistry {
    fn control(&self, field: &str) -> Option<DynControl> {
        self.controls.get(field).cloned()
    }
}

/// Upload control backed by a path on disk.
///
/// The selection is re-read from the filesystem on every call, so the
/// reported size matches the file's state at validation time. Clearing
/// forgets the path without touching the file itself.
pub struct FsControl {
    path: Mutex<Option<PathBuf>>,
}

impl FsControl {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Mutex::new(Some(path)),
        }
    }
}

impl UploadControl for FsControl {
    fn selected_file(&self) -> Option<SelectedFile> {
        let guard = self.path.lock().ok()?;
        let path = guard.as_ref()?;
        let meta = std::fs::metadata(path).ok()?;
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(SelectedFile {
            name,
            size_bytes: meta.len(),
        })
    }

    fn clear_selection(&self) {
        if let Ok(mut guard) = self.path.lock() {
            *guard = None;
        }
    }
}
