//! Builder for account test fixtures

use account_core::model::Account;

/// Builder for creating account test data
pub struct AccountBuilder {
    id: Option<i64>,
    name: Option<String>,
    email: Option<String>,
    active: bool,
}

impl AccountBuilder {
    /// Create a new account builder
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            email: None,
            active: true,
        }
    }

    /// Set the identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the display name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Set the email address
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Mark the account as already deactivated
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Build the account
    pub fn build(self) -> Account {
        Account {
            id: self.id,
            name: self.name.unwrap_or_else(|| "Jaime Vega".to_string()),
            email: self.email.unwrap_or_else(|| "jaime@ejemplo.com".to_string()),
            active: self.active,
        }
    }
}

impl Default for AccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}
