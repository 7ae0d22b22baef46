use serde::{Deserialize, Serialize};

use super::analytics::round_to;
use super::month::MonthKey;

/// Total income observed in one past month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub month: MonthKey,
    pub income: f64,
}

/// Predicted income for one future month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: MonthKey,
    pub predicted_income: f64,
}

/// Response of the forecast endpoint: the history the model was fitted on
/// and the months it projects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastData {
    /// Past months with income, oldest first
    pub history: Vec<HistoryPoint>,

    /// Future months, oldest first, starting the month after the last history point
    pub forecast: Vec<ForecastPoint>,
}

impl ForecastData {
    #[must_use]
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            history: self
                .history
                .iter()
                .map(|p| HistoryPoint {
                    month: p.month,
                    income: round_to(p.income, decimals),
                })
                .collect(),
            forecast: self
                .forecast
                .iter()
                .map(|p| ForecastPoint {
                    month: p.month,
                    predicted_income: round_to(p.predicted_income, decimals),
                })
                .collect(),
        }
    }
}

/// Least-squares line `y = intercept + slope * x` over index positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Value of the line at index `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
