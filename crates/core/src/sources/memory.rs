use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::account::Account;
use crate::models::transaction::Transaction;
use crate::services::validation_service::ValidationService;

use super::traits::{FinanceDataSource, TransactionFilter};

/// In-memory data source.
///
/// Holds accounts and their transactions; a transaction belongs to the user
/// who owns its account. Useful for embedding the analysis in tools that
/// already have the data loaded, and for tests.
pub struct InMemorySource {
    accounts: Vec<Account>,
    transactions: HashMap<Uuid, Vec<Transaction>>,
    validation: ValidationService,
}

impl InMemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            transactions: HashMap::new(),
            validation: ValidationService::new(),
        }
    }

    /// Add an account after validating it. Account ids must be unique.
    pub fn add_account(&mut self, account: Account) -> Result<(), CoreError> {
        self.validation.validate_account(&account)?;
        if self.transactions.contains_key(&account.id) {
            return Err(CoreError::ValidationError(format!(
                "account {} already exists",
                account.id
            )));
        }
        self.transactions.entry(account.id).or_default();
        self.accounts.push(account);
        Ok(())
    }

    /// Add a transaction to an existing account after validating it.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), CoreError> {
        self.validation.validate_transaction(&transaction)?;
        let list = self
            .transactions
            .get_mut(&transaction.account_id)
            .ok_or_else(|| CoreError::AccountNotFound(transaction.account_id.to_string()))?;
        list.push(transaction);
        Ok(())
    }

    /// Total number of stored transactions across all accounts.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.transactions.values().map(Vec::len).sum()
    }

    fn owned_accounts(&self, user_id: Uuid) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(move |a| a.user_id == user_id)
    }
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FinanceDataSource for InMemorySource {
    async fn accounts_for_user(&self, user_id: Uuid) -> Result<Vec<Account>, CoreError> {
        Ok(self.owned_accounts(user_id).cloned().collect())
    }

    async fn transactions_for_user(
        &self,
        user_id: Uuid,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, CoreError> {
        Ok(self
            .owned_accounts(user_id)
            .filter_map(|a| self.transactions.get(&a.id))
            .flatten()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }
}
