//! Storage collaborator contract and the in-memory reference implementation

use crate::error::Result;
use crate::model::Account;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// Trait for storage collaborator implementations
///
/// The orchestrator is built against this full contract even though its
/// current operations never call `delete`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Look up an account by identifier
    ///
    /// Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>>;

    /// All stored accounts, as an ordered sequence
    async fn find_all(&self) -> Result<Vec<Account>>;

    /// Persist an account, assigning an identifier when it has none
    ///
    /// The returned value is authoritative and may differ from the input.
    async fn save(&self, account: &Account) -> Result<Account>;

    /// Remove an account; unknown identifiers are ignored
    async fn delete(&self, id: i64) -> Result<()>;

    /// Existence check without materializing the account
    async fn exists_by_id(&self, id: i64) -> Result<bool>;
}

/// In-memory storage backend
///
/// Identifiers are assigned from a monotonic counter; saving an account that
/// already carries an identifier upserts it and keeps the counter ahead of it.
pub struct MemoryAccountRepository {
    accounts: RwLock<HashMap<i64, Account>>,
    next_id: AtomicI64,
}

impl MemoryAccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>> {
        let mut accounts: Vec<Account> = self.accounts.read().await.values().cloned().collect();
        accounts.sort_by_key(|account| account.id);
        Ok(accounts)
    }

    async fn save(&self, account: &Account) -> Result<Account> {
        let mut stored = account.clone();
        let id = match stored.id {
            Some(id) => {
                self.next_id.fetch_max(id + 1, Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        stored.id = Some(id);
        self.accounts.write().await.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.accounts.write().await.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.accounts.read().await.contains_key(&id))
    }
}
