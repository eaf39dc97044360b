use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The minimum the engine knows about an account: enough to resolve
/// grantees and label comment authors. Credentials and sessions belong to
/// the identity collaborator, not this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl Account {
    pub fn new(email: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
        }
    }
}
