use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::outbound::AccountResolver;
use crate::common::errors::{DomainError, Result};
use crate::domain::entities::account::Account;

/// In-memory account directory. Stands in for the identity collaborator:
/// it answers lookups by email and by id and accepts registrations, and
/// nothing more.
pub struct DirectoryAccountResolver {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl DirectoryAccountResolver {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Registers an account. Email addresses are unique; registering an
    /// address twice is rejected.
    pub async fn register(&self, email: String, name: String) -> Result<Account> {
        let mut accounts = self.accounts.write().await;

        let normalized = email.trim().to_lowercase();
        if normalized.is_empty() || !normalized.contains('@') {
            return Err(DomainError::validation_error(
                "Account",
                format!("Invalid email address: {}", email),
            ));
        }
        if accounts.values().any(|account| account.email == normalized) {
            return Err(DomainError::validation_error(
                "Account",
                format!("Email already registered: {}", normalized),
            ));
        }

        let account = Account::new(normalized, name);
        accounts.insert(account.id, account.clone());
        Ok(account)
    }
}

impl Default for DirectoryAccountResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountResolver for DirectoryAccountResolver {
    async fn resolve_email(&self, email: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        let normalized = email.trim().to_lowercase();
        Ok(accounts
            .values()
            .find(|account| account.email == normalized)
            .cloned())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_email_case_insensitively() {
        let directory = DirectoryAccountResolver::new();
        let account = directory
            .register("Jane@Example.com".to_string(), "Jane".to_string())
            .await
            .unwrap();

        let found = directory.resolve_email("jane@example.com").await.unwrap();
        assert_eq!(found.map(|a| a.id), Some(account.id));
        assert!(directory
            .resolve_email("nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn rejects_duplicate_registration() {
        let directory = DirectoryAccountResolver::new();
        directory
            .register("jane@example.com".to_string(), "Jane".to_string())
            .await
            .unwrap();

        let err = directory
            .register("jane@example.com".to_string(), "Other".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.kind, crate::common::errors::ErrorKind::InvalidInput);
    }
}
