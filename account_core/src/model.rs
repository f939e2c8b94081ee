//! Account entity definition

use serde::{Deserialize, Serialize};

/// An account tracked by the lifecycle core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Identifier, `None` until the storage collaborator assigns one
    pub id: Option<i64>,
    /// Display name, never validated by the core
    pub name: String,
    /// Contact address; the creation path requires it to contain `@`
    pub email: String,
    /// Accounts start active; `deactivate` is the only transition out
    pub active: bool,
}

impl Account {
    /// Create an unsaved, active account
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            active: true,
        }
    }

    /// Create an account with a caller-assigned identifier
    pub fn with_id(id: i64, name: &str, email: &str) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, email)
        }
    }

    /// The single format check the core performs anywhere
    pub fn has_valid_email(&self) -> bool {
        self.email.contains('@')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_starts_active_and_unsaved() {
        let account = Account::new("Jaime Vega", "jaime@ejemplo.com");
        assert!(account.active);
        assert_eq!(account.id, None);
    }

    #[test]
    fn with_id_keeps_the_caller_assigned_identifier() {
        let account = Account::with_id(7, "Jaime Vega", "jaime@ejemplo.com");
        assert_eq!(account.id, Some(7));
        assert!(account.active);
    }

    #[test]
    fn email_check_requires_an_at_sign() {
        assert!(Account::new("A", "a@b").has_valid_email());
        assert!(!Account::new("A", "no-at-sign.com").has_valid_email());
        assert!(!Account::new("A", "").has_valid_email());
    }

    #[test]
    fn account_serializes_round_trip() {
        let account = Account::with_id(1, "Jaime Vega", "jaime@ejemplo.com");
        let json = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }
}
