use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming into an account
    Income,
    /// Money leaving an account
    Expense,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

/// A single income or expense record on an account.
///
/// `amount` is always a positive magnitude; the direction lives in
/// `transaction_type`. Use [`Transaction::signed_amount`] for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: Uuid,

    /// Account this transaction was booked on
    pub account_id: Uuid,

    /// Magnitude of the transaction (always positive)
    pub amount: f64,

    /// Income or expense
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Optional free-text description (max 200 characters)
    #[serde(default)]
    pub description: Option<String>,

    /// When the transaction happened (timezone-naive, treated as UTC)
    #[serde(alias = "date")]
    pub created_at: NaiveDateTime,
}

impl Transaction {
    pub fn new(
        account_id: Uuid,
        amount: f64,
        transaction_type: TransactionType,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            amount,
            transaction_type,
            description: None,
            created_at,
        }
    }

    /// Create a transaction with a description attached.
    pub fn with_description(
        account_id: Uuid,
        amount: f64,
        transaction_type: TransactionType,
        created_at: NaiveDateTime,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::new(account_id, amount, transaction_type, created_at)
        }
    }

    /// Amount with the sign the dashboard shows: expenses are negative.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    #[must_use]
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }
}
