//! Shared call log for cross-collaborator ordering assertions

use std::sync::{Arc, Mutex};

/// Records collaborator invocations in arrival order
///
/// Each mock appends a short label when one of its methods is invoked. A test
/// that hands the same log to all three mocks can then assert the relative
/// order of calls across collaborators.
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label
    pub fn push(&self, label: &str) {
        self.entries.lock().unwrap().push(label.to_string());
    }

    /// Snapshot of all recorded labels, in arrival order
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Position of the first occurrence of a label
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .position(|entry| entry == label)
    }
}
