//! Error types for the account lifecycle core
//!
//! Errors are split into two categories: validation errors raised locally by
//! the orchestrator before any side effect, and collaborator errors surfaced
//! by storage, notification, or audit. The orchestrator never catches, wraps,
//! or retries a collaborator error; it propagates it unchanged.

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the account lifecycle core
#[derive(Error, Debug)]
pub enum Error {
    /// Input validation errors, raised before any collaborator is touched
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failures surfaced by a collaborator, propagated unchanged
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// Validation errors raised locally by the orchestrator
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Email failed the single format check (must contain `@`)
    #[error("Invalid email: {email:?}")]
    InvalidEmail { email: String },
}

impl ValidationError {
    /// Create an invalid email error
    pub fn invalid_email(email: &str) -> Self {
        Self::InvalidEmail {
            email: email.to_string(),
        }
    }
}

/// Failures produced by collaborator implementations
#[derive(Error, Debug)]
pub enum CollaboratorError {
    /// Storage collaborator failure
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Notification collaborator failure
    #[error("Notification error: {message}")]
    Notification { message: String },

    /// Audit collaborator failure
    #[error("Audit error: {message}")]
    Audit { message: String },
}

impl CollaboratorError {
    /// Create a storage error
    pub fn storage(message: &str) -> Self {
        Self::Storage {
            message: message.to_string(),
        }
    }

    /// Create a notification error
    pub fn notification(message: &str) -> Self {
        Self::Notification {
            message: message.to_string(),
        }
    }

    /// Create an audit error
    pub fn audit(message: &str) -> Self {
        Self::Audit {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_email_error_names_the_offending_value() {
        let error = ValidationError::invalid_email("no-at-sign.com");
        assert!(error.to_string().contains("Invalid email"));
        assert!(error.to_string().contains("no-at-sign.com"));
    }

    #[test]
    fn collaborator_errors_name_their_source() {
        assert!(
            CollaboratorError::storage("connection reset")
                .to_string()
                .starts_with("Storage error")
        );
        assert!(
            CollaboratorError::notification("smtp refused")
                .to_string()
                .starts_with("Notification error")
        );
        assert!(
            CollaboratorError::audit("sink unavailable")
                .to_string()
                .starts_with("Audit error")
        );
    }

    #[test]
    fn sub_errors_convert_into_the_top_level_error() {
        let error: Error = ValidationError::invalid_email("x").into();
        assert!(matches!(error, Error::Validation(_)));

        let error: Error = CollaboratorError::storage("down").into();
        assert!(matches!(error, Error::Collaborator(_)));
    }
}
