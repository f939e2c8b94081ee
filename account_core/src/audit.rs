//! Audit collaborator contract

use crate::error::Result;
use async_trait::async_trait;
use log::info;

/// Audit operation name for account creation
///
/// The Spanish operation names are kept as-is; existing audit consumers key
/// on them.
pub const OP_CREATE_ACCOUNT: &str = "CREAR_USUARIO";

/// Audit operation name for account deactivation
pub const OP_DEACTIVATE_ACCOUNT: &str = "DESACTIVAR_USUARIO";

/// Trait for audit collaborator implementations
///
/// The sink is append-only; the orchestrator never reads entries back.
#[async_trait]
pub trait AuditService: Send + Sync {
    /// Append a named operation with free-text detail
    async fn record(&self, operation: &str, detail: &str) -> Result<()>;
}

/// Append-only sink that writes entries to the log
#[derive(Debug, Default)]
pub struct LogAuditService;

#[async_trait]
impl AuditService for LogAuditService {
    async fn record(&self, operation: &str, detail: &str) -> Result<()> {
        info!(target: "audit", "{operation}: {detail}");
        Ok(())
    }
}
