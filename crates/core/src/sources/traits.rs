use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::account::Account;
use crate::models::transaction::{Transaction, TransactionType};

/// Narrows the transactions a data source returns.
/// Every `None` field matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub account_id: Option<Uuid>,
    pub transaction_type: Option<TransactionType>,
    /// Inclusive lower bound on the transaction date
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the transaction date
    pub to: Option<NaiveDate>,
}

impl TransactionFilter {
    /// Filter that matches every transaction.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter that matches a single transaction type.
    pub fn of_type(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type: Some(transaction_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn matches(&self, tx: &Transaction) -> bool {
        let date = tx.created_at.date();
        self.account_id.map_or(true, |id| tx.account_id == id)
            && self.transaction_type.map_or(true, |t| tx.transaction_type == t)
            && self.from.map_or(true, |from| date >= from)
            && self.to.map_or(true, |to| date <= to)
    }
}

/// Read access to a user's accounts and transactions.
///
/// Implemented by the storage layer of the hosting service. The analysis
/// code only ever reads a snapshot through this trait; it never writes.
#[async_trait]
pub trait FinanceDataSource: Send + Sync {
    /// All accounts owned by `user_id`.
    async fn accounts_for_user(&self, user_id: Uuid) -> Result<Vec<Account>, CoreError>;

    /// Transactions on accounts owned by `user_id` that pass `filter`.
    async fn transactions_for_user(
        &self,
        user_id: Uuid,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, CoreError>;
}
