use serde::{Deserialize, Serialize};

use super::month::MonthKey;

/// Income and expense totals for one calendar month.
///
/// Derived from the transaction set on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// The month these totals cover
    pub month: MonthKey,

    /// Sum of income amounts booked in this month
    pub total_income: f64,

    /// Sum of expense amounts booked in this month
    pub total_expense: f64,

    /// Number of income transactions in this month
    pub income_count: usize,

    /// Number of expense transactions in this month
    pub expense_count: usize,
}

impl MonthlyBucket {
    /// Income minus expense for the month.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.total_income - self.total_expense
    }
}

/// Descriptive statistics over a series of transaction amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsData {
    /// Number of values the statistics were computed over
    pub count: usize,

    /// Arithmetic mean
    pub mean: f64,

    /// Middle value (average of the two middle values for even counts)
    pub median: f64,

    /// Largest value
    pub max: f64,

    /// Smallest value
    pub min: f64,

    /// Population standard deviation (divisor N)
    pub std_dev: f64,
}

impl StatsData {
    /// The "no data" payload returned when a user has no transactions.
    pub fn zeroed() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            median: 0.0,
            max: 0.0,
            min: 0.0,
            std_dev: 0.0,
        }
    }

    /// Copy with every figure rounded to `decimals` places for display.
    #[must_use]
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            count: self.count,
            mean: round_to(self.mean, decimals),
            median: round_to(self.median, decimals),
            max: round_to(self.max, decimals),
            min: round_to(self.min, decimals),
            std_dev: round_to(self.std_dev, decimals),
        }
    }
}

/// Round to `decimals` places, exact ties going to the even neighbour
/// (`0.125` → `0.12`). Values too large to scale are returned unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(15) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}
