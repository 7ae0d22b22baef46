use thiserror::Error;

/// Unified error type for the entire finance-forecast-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Analysis ────────────────────────────────────────────────────
    #[error("No data available to compute statistics")]
    EmptyInput,

    #[error("Insufficient history to forecast: need at least 2 months, found {found}")]
    InsufficientHistory { found: usize },

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    // ── Data source (external storage collaborator) ─────────────────
    #[error("Data source error: {0}")]
    DataSource(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// True for errors the dashboard assembler degrades to an empty/zero
    /// result instead of surfacing to the caller.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CoreError::EmptyInput | CoreError::InsufficientHistory { .. }
        )
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            CoreError::Serialization(e.to_string())
        } else {
            CoreError::Deserialization(e.to_string())
        }
    }
}
