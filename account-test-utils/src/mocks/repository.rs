//! Mock implementation of the storage collaborator

use account_core::error::{CollaboratorError, Result};
use account_core::model::Account;
use account_core::repository::AccountRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::CallLog;

/// Mock storage collaborator with configurable behavior
///
/// Every call is recorded so tests can assert exact interaction counts and
/// captured arguments, and each method can be configured to fail.
///
/// # Examples
///
/// ```rust
/// use account_test_utils::MockAccountRepository;
/// use account_core::model::Account;
///
/// let repository = MockAccountRepository::new();
/// repository.assign_id_on_save(1);
/// repository.insert(Account::with_id(7, "Jaime Vega", "jaime@ejemplo.com"));
/// ```
pub struct MockAccountRepository {
    state: Arc<Mutex<State>>,
    call_log: Option<CallLog>,
}

#[derive(Default)]
struct State {
    stored: HashMap<i64, Account>,
    assigned_id: Option<i64>,
    save_failure: Option<String>,
    find_failure: Option<String>,
    save_delay: Option<Duration>,
    saved: Vec<Account>,
    find_by_id_calls: Vec<i64>,
    delete_calls: Vec<i64>,
    find_all_calls: usize,
    exists_calls: Vec<i64>,
}

impl MockAccountRepository {
    /// Create a mock with default behavior: empty store, `save` echoes its
    /// argument back unchanged
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

    /// Preload an account so `find_by_id`/`find_all`/`exists_by_id` see it
    ///
    /// # Panics
    ///
    /// Panics if the account has no identifier.
    pub fn insert(&self, account: Account) {
        let id = account.id.expect("preloaded account needs an id");
        self.state.lock().unwrap().stored.insert(id, account);
    }

    /// Configure `save` to assign this identifier to unsaved accounts
    pub fn assign_id_on_save(&self, id: i64) {
        self.state.lock().unwrap().assigned_id = Some(id);
    }

    /// Configure `save` to fail with a storage error
    pub fn fail_save(&self, message: &str) {
        self.state.lock().unwrap().save_failure = Some(message.to_string());
    }

    /// Configure `find_by_id` to fail with a storage error
    pub fn fail_find(&self, message: &str) {
        self.state.lock().unwrap().find_failure = Some(message.to_string());
    }

    /// Configure `save` to sleep before completing, simulating a slow backend
    pub fn delay_save(&self, delay: Duration) {
        self.state.lock().unwrap().save_delay = Some(delay);
    }

    /// Accounts captured by `save`, in call order
    pub fn saved_accounts(&self) -> Vec<Account> {
        self.state.lock().unwrap().saved.clone()
    }

    /// Number of `save` calls observed
    pub fn save_count(&self) -> usize {
        self.state.lock().unwrap().saved.len()
    }

    /// Number of `find_by_id` calls observed
    pub fn find_by_id_count(&self) -> usize {
        self.state.lock().unwrap().find_by_id_calls.len()
    }

    /// Number of `delete` calls observed
    pub fn delete_count(&self) -> usize {
        self.state.lock().unwrap().delete_calls.len()
    }

    /// Number of `find_all` calls observed
    pub fn find_all_count(&self) -> usize {
        self.state.lock().unwrap().find_all_calls
    }

    /// Number of `exists_by_id` calls observed
    pub fn exists_count(&self) -> usize {
        self.state.lock().unwrap().exists_calls.len()
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        if let Some(log) = &self.call_log {
            log.push("storage.find_by_id");
        }
        let mut state = self.state.lock().unwrap();
        state.find_by_id_calls.push(id);
        if let Some(message) = &state.find_failure {
            return Err(CollaboratorError::storage(message).into());
        }
        Ok(state.stored.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>> {
        let mut state = self.state.lock().unwrap();
        state.find_all_calls += 1;
        let mut accounts: Vec<Account> = state.stored.values().cloned().collect();
        accounts.sort_by_key(|account| account.id);
        Ok(accounts)
    }

    async fn save(&self, account: &Account) -> Result<Account> {
        if let Some(log) = &self.call_log {
            log.push("storage.save");
        }
        let delay = {
            let mut state = self.state.lock().unwrap();
            state.saved.push(account.clone());
            state.save_delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.save_failure {
            return Err(CollaboratorError::storage(message).into());
        }
        let mut stored = account.clone();
        if stored.id.is_none() {
            stored.id = state.assigned_id;
        }
        if let Some(id) = stored.id {
            state.stored.insert(id, stored.clone());
        }
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if let Some(log) = &self.call_log {
            log.push("storage.delete");
        }
        let mut state = self.state.lock().unwrap();
        state.delete_calls.push(id);
        state.stored.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        state.exists_calls.push(id);
        Ok(state.stored.contains_key(&id))
    }
}
