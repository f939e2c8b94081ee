//! Mock implementation of the audit collaborator

use account_core::audit::AuditService;
use account_core::error::{CollaboratorError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::CallLog;

/// Mock audit collaborator with configurable behavior
///
/// Captures every `(operation, detail)` pair so tests can inspect the
/// recorded trail.
pub struct MockAuditService {
    state: Arc<Mutex<State>>,
    call_log: Option<CallLog>,
}

#[derive(Default)]
struct State {
    entries: Vec<(String, String)>,
    failure: Option<String>,
}

impl MockAuditService {
    /// Create a mock that accepts every entry
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            call_log: None,
        }
    }

    /// Attach a shared call log for cross-collaborator ordering assertions
    pub fn with_call_log(mut self, log: CallLog) -> Self {
        self.call_log = Some(log);
        self
    }

    /// Configure `record` to fail with an audit error
    pub fn fail(&self, message: &str) {
        self.state.lock().unwrap().failure = Some(message.to_string());
    }

    /// Captured `(operation, detail)` pairs, in call order
    pub fn entries(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().entries.clone()
    }

    /// Number of `record` calls observed
    pub fn record_count(&self) -> usize {
        self.state.lock().unwrap().entries.len()
    }
}

impl Default for MockAuditService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditService for MockAuditService {
    async fn record(&self, operation: &str, detail: &str) -> Result<()> {
        if let Some(log) = &self.call_log {
            log.push("audit.record");
        }
        let mut state = self.state.lock().unwrap();
        state
            .entries
            .push((operation.to_string(), detail.to_string()));
        match &state.failure {
            Some(message) => Err(CollaboratorError::audit(message).into()),
            None => Ok(()),
        }
    }
}
