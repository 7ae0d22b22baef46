use crate::errors::CoreError;
use crate::models::account::Account;
use crate::models::settings::AnalysisSettings;
use crate::models::transaction::Transaction;

/// Maximum length of a transaction description.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Maximum length of an account name.
pub const MAX_ACCOUNT_NAME_LEN: usize = 100;

/// Largest accepted transaction amount. Sums of any realistic number of
/// such amounts stay far inside the finite `f64` range.
pub const MAX_TRANSACTION_AMOUNT: f64 = 1e15;

/// Input checks run at the API boundary, ahead of any analysis.
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    /// A transaction must carry a finite, strictly positive amount no larger
    /// than [`MAX_TRANSACTION_AMOUNT`] and a description of at most 200 characters.
    pub fn validate_transaction(&self, tx: &Transaction) -> Result<(), CoreError> {
        if !tx.amount.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "transaction amount must be a finite number, got {}",
                tx.amount
            )));
        }
        if tx.amount <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "transaction amount must be positive, got {}",
                tx.amount
            )));
        }
        if tx.amount > MAX_TRANSACTION_AMOUNT {
            return Err(CoreError::ValidationError(format!(
                "transaction amount must not exceed {MAX_TRANSACTION_AMOUNT:e}, got {}",
                tx.amount
            )));
        }
        if let Some(description) = &tx.description {
            let len = description.chars().count();
            if len > MAX_DESCRIPTION_LEN {
                return Err(CoreError::ValidationError(format!(
                    "description is {len} characters, maximum is {MAX_DESCRIPTION_LEN}"
                )));
            }
        }
        Ok(())
    }

    pub fn validate_account(&self, account: &Account) -> Result<(), CoreError> {
        let name = account.name.trim();
        if name.is_empty() {
            return Err(CoreError::ValidationError(
                "account name must not be empty".into(),
            ));
        }
        let len = name.chars().count();
        if len > MAX_ACCOUNT_NAME_LEN {
            return Err(CoreError::ValidationError(format!(
                "account name is {len} characters, maximum is {MAX_ACCOUNT_NAME_LEN}"
            )));
        }
        if !account.balance.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "account balance must be a finite number, got {}",
                account.balance
            )));
        }
        Ok(())
    }

    /// Interpret the `months` query parameter of the forecast endpoint.
    ///
    /// A missing or blank value falls back to the configured default.
    pub fn parse_horizon(
        &self,
        raw: Option<&str>,
        settings: &AnalysisSettings,
    ) -> Result<u32, CoreError> {
        let horizon = match raw.map(str::trim) {
            None | Some("") => settings.default_horizon,
            Some(value) => value
                .parse::<u32>()
                .map_err(|_| CoreError::ValidationError("Invalid months parameter".into()))?,
        };
        self.validate_horizon(horizon, settings)?;
        Ok(horizon)
    }

    pub fn validate_horizon(&self, horizon: u32, settings: &AnalysisSettings) -> Result<(), CoreError> {
        if horizon == 0 || horizon > settings.max_horizon {
            return Err(CoreError::ValidationError(format!(
                "months must be between 1 and {}, got {horizon}",
                settings.max_horizon
            )));
        }
        Ok(())
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}
