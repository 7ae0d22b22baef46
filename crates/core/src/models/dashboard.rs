use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Account;
use super::analytics::round_to;
use super::transaction::Transaction;

/// Account entry as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            balance: account.balance,
        }
    }
}

/// Everything the main dashboard page renders in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    /// Sum of all account balances
    pub net_worth: f64,

    /// Income booked in the current month
    pub monthly_income: f64,

    /// Expenses booked in the current month
    pub monthly_expense: f64,

    /// All of the user's accounts
    pub accounts: Vec<AccountSummary>,

    /// Most recent transactions, newest first
    pub recent_transactions: Vec<Transaction>,
}

impl DashboardData {
    /// Round the money totals for display. Account balances and the
    /// transaction list are passed through as stored.
    #[must_use]
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            net_worth: round_to(self.net_worth, decimals),
            monthly_income: round_to(self.monthly_income, decimals),
            monthly_expense: round_to(self.monthly_expense, decimals),
            accounts: self.accounts.clone(),
            recent_transactions: self.recent_transactions.clone(),
        }
    }
}
