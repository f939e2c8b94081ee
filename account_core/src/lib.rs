//! Account Lifecycle Core Library
//!
//! This is the core library for account lifecycle orchestration: it creates
//! and deactivates accounts, sequencing validation, persistence, notification,
//! and audit over three pluggable collaborators.

pub mod audit;
pub mod error;
pub mod model;
pub mod notification;
pub mod repository;
pub mod service;

// Re-export main types
pub use audit::{AuditService, LogAuditService, OP_CREATE_ACCOUNT, OP_DEACTIVATE_ACCOUNT};
pub use error::{CollaboratorError, Error, Result, ValidationError};
pub use model::Account;
pub use notification::{LogNotificationService, NotificationService};
pub use repository::{AccountRepository, MemoryAccountRepository};
pub use service::AccountService;
