//! Mock implementation of the notification collaborator

use account_core::error::{CollaboratorError, Result};
use account_core::model::Account;
use account_core::notification::NotificationService;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::CallLog;

/// Mock notification collaborator with configurable behavior
///
/// Records the exact account value each delivery was invoked with, so tests
/// can assert the orchestrator passed the pre-save or mutated value.
pub struct MockNotificationService {
    state: Arc<Mutex<State>>,
    call_log: Option<CallLog>,
}

#[derive(Default)]
struct State {
    created: Vec<Account>,
    deactivated: Vec<Account>,
    created_failure: Option<String>,
    deactivated_failure: Option<String>,
}

impl MockNotificationService {
    /// Create a mock that accepts every delivery
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

    /// Configure `notify_created` to fail with a notification error
    pub fn fail_created(&self, message: &str) {
        self.state.lock().unwrap().created_failure = Some(message.to_string());
    }

    /// Configure `notify_deactivated` to fail with a notification error
    pub fn fail_deactivated(&self, message: &str) {
        self.state.lock().unwrap().deactivated_failure = Some(message.to_string());
    }

    /// Accounts passed to `notify_created`, in call order
    pub fn created_notifications(&self) -> Vec<Account> {
        self.state.lock().unwrap().created.clone()
    }

    /// Accounts passed to `notify_deactivated`, in call order
    pub fn deactivated_notifications(&self) -> Vec<Account> {
        self.state.lock().unwrap().deactivated.clone()
    }

    /// Number of `notify_created` calls observed
    pub fn created_count(&self) -> usize {
        self.state.lock().unwrap().created.len()
    }

    /// Number of `notify_deactivated` calls observed
    pub fn deactivated_count(&self) -> usize {
        self.state.lock().unwrap().deactivated.len()
    }
}

impl Default for MockNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationService for MockNotificationService {
    async fn notify_created(&self, account: &Account) -> Result<()> {
        if let Some(log) = &self.call_log {
            log.push("notification.created");
        }
        let mut state = self.state.lock().unwrap();
        state.created.push(account.clone());
        match &state.created_failure {
            Some(message) => Err(CollaboratorError::notification(message).into()),
            None => Ok(()),
        }
    }

    async fn notify_deactivated(&self, account: &Account) -> Result<()> {
        if let Some(log) = &self.call_log {
            log.push("notification.deactivated");
        }
        let mut state = self.state.lock().unwrap();
        state.deactivated.push(account.clone());
        match &state.deactivated_failure {
            Some(message) => Err(CollaboratorError::notification(message).into()),
            None => Ok(()),
        }
    }
}
