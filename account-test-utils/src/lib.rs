//! Test utilities for the account lifecycle core
//!
//! This crate provides mock collaborator implementations, a shared call log
//! for cross-collaborator ordering assertions, and an account builder.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::AccountBuilder;
pub use mocks::{CallLog, MockAccountRepository, MockAuditService, MockNotificationService};
