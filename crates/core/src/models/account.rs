use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A money account owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: Uuid,

    /// Owner of the account
    pub user_id: Uuid,

    /// Display name (1 to 100 characters)
    pub name: String,

    /// Current balance; may be negative for credit accounts
    #[serde(default)]
    pub balance: f64,

    /// When the account was opened, if known
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Account {
    pub fn new(user_id: Uuid, name: impl Into<String>, balance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            balance,
            created_at: None,
        }
    }
}
