use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::Account;

/// DTO for account registration requests (in-memory directory stand-in;
/// real identity management is an external collaborator)
#[derive(Debug, Deserialize)]
pub struct RegisterAccountDto {
    pub email: String,
    pub name: String,
}

/// DTO for account responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
        }
    }
}
