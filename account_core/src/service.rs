//! Account orchestration service
//!
//! Sequences validation and collaborator calls for the account lifecycle
//! operations. There is no rollback: a failing step stops the sequence and
//! leaves the effects of earlier steps in place.

use crate::audit::{AuditService, OP_CREATE_ACCOUNT, OP_DEACTIVATE_ACCOUNT};
use crate::error::{Result, ValidationError};
use crate::model::Account;
use crate::notification::NotificationService;
use crate::repository::AccountRepository;
use log::debug;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Orchestrator for account lifecycle operations
///
/// Collaborators are injected once at construction and never rebound.
/// Cloning is cheap and shares the same collaborators, which is what the
/// detached creation path relies on.
#[derive(Clone)]
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
    notifier: Arc<dyn NotificationService>,
    audit: Arc<dyn AuditService>,
}

impl AccountService {
    /// Create a new account service
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        notifier: Arc<dyn NotificationService>,
        audit: Arc<dyn AuditService>,
    ) -> Self {
        Self {
            repository,
            notifier,
            audit,
        }
    }

    /// Create an account: validate, persist, notify, audit, in that order
    ///
    /// Validation happens before any side effect; an email without `@` fails
    /// with [`ValidationError::InvalidEmail`] and no collaborator is touched.
    /// A notification failure aborts the audit step but leaves the account
    /// persisted. Returns the value produced by the storage collaborator,
    /// which may carry an assigned identifier.
    pub async fn create(&self, account: Account) -> Result<Account> {
        if !account.has_valid_email() {
            return Err(ValidationError::invalid_email(&account.email).into());
        }

        debug!("Creating account for {}", account.email);
        let saved = self.repository.save(&account).await?;
        self.notifier.notify_created(&account).await?;
        self.audit
            .record(
                OP_CREATE_ACCOUNT,
                &format!("Account created: {} ({})", account.name, account.email),
            )
            .await?;
        Ok(saved)
    }

    /// Run [`create`](Self::create) on a detached task and return its handle
    ///
    /// The handle resolves exactly once, with the same result or failure the
    /// synchronous path would produce; validation also runs inside the task,
    /// so every failure surfaces on the handle rather than on the scheduling
    /// caller. The task is not cancellable: dropping the handle detaches it
    /// and the operation runs to completion.
    pub fn spawn_create(&self, account: Account) -> JoinHandle<Result<Account>> {
        let service = self.clone();
        tokio::spawn(async move { service.create(account).await })
    }

    /// Look up an account; absence is `Ok(None)`, never an error
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Account>> {
        self.repository.find_by_id(id).await
    }

    /// All stored accounts, in the repository's order
    pub async fn get_all(&self) -> Result<Vec<Account>> {
        self.repository.find_all().await
    }

    /// Deactivate an account: flip the flag, persist, notify, audit
    ///
    /// An unknown identifier is a defined no-op: no mutation, no
    /// notification, no audit entry, no error. The notification and audit
    /// steps see the mutated (inactive) account.
    pub async fn deactivate(&self, id: i64) -> Result<()> {
        let Some(mut account) = self.repository.find_by_id(id).await? else {
            debug!("Deactivation skipped, account {id} not found");
            return Ok(());
        };

        account.active = false;
        self.repository.save(&account).await?;
        self.notifier.notify_deactivated(&account).await?;
        self.audit
            .record(
                OP_DEACTIVATE_ACCOUNT,
                &format!("Account deactivated: {}", account.name),
            )
            .await?;
        Ok(())
    }
}
