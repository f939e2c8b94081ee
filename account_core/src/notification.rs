//! Notification collaborator contract

use crate::error::Result;
use crate::model::Account;
use async_trait::async_trait;
use log::info;

/// Trait for notification collaborator implementations
///
/// Calls are fire-and-forget from the orchestrator's perspective: it never
/// interprets a success value, only propagates errors.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Deliver the account-created notification
    async fn notify_created(&self, account: &Account) -> Result<()>;

    /// Deliver the account-deactivated notification
    async fn notify_deactivated(&self, account: &Account) -> Result<()>;
}

/// Delivery backend that only logs
///
/// Useful when embedding the core without a real delivery channel.
#[derive(Debug, Default)]
pub struct LogNotificationService;

#[async_trait]
impl NotificationService for LogNotificationService {
    async fn notify_created(&self, account: &Account) -> Result<()> {
        info!("Sending registration notification to {}", account.email);
        Ok(())
    }

    async fn notify_deactivated(&self, account: &Account) -> Result<()> {
        info!("Sending deactivation notification to {}", account.email);
        Ok(())
    }
}
