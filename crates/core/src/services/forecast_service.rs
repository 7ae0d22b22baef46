use tracing::debug;

use crate::errors::CoreError;
use crate::models::forecast::{ForecastPoint, HistoryPoint, LinearFit};

/// Projects future monthly income with an ordinary least-squares line.
///
/// The regression runs over index positions `0..n` of the history, not over
/// calendar distance: a history with gap months is treated as evenly spaced.
pub struct ForecastService {
    /// Floor predictions at zero (negative income is not meaningful)
    clamp_negative: bool,
}

impl ForecastService {
    pub fn new() -> Self {
        Self {
            clamp_negative: true,
        }
    }

    /// Forecaster that optionally leaves negative predictions unclamped.
    pub fn with_clamping(clamp_negative: bool) -> Self {
        Self { clamp_negative }
    }

    /// Fit `y = a + b·x` over `x = 0, 1, ..., n-1`.
    ///
    /// - `b = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²`
    /// - `a = ȳ - b·x̄`
    pub fn fit_linear(&self, values: &[f64]) -> Result<LinearFit, CoreError> {
        let n = values.len();
        if n < 2 {
            return Err(CoreError::InsufficientHistory { found: n });
        }

        let x_mean = (n - 1) as f64 / 2.0;
        let y_mean = values.iter().sum::<f64>() / n as f64;

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        for (i, y) in values.iter().enumerate() {
            let dx = i as f64 - x_mean;
            sxy += dx * (y - y_mean);
            sxx += dx * dx;
        }

        if sxx == 0.0 {
            return Err(CoreError::InsufficientHistory { found: n });
        }

        let slope = sxy / sxx;
        Ok(LinearFit {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// Predict income for the `horizon` months following the last history point.
    ///
    /// `history` must be ordered oldest first. Returns exactly `horizon`
    /// points labelled with consecutive calendar months.
    pub fn forecast(
        &self,
        history: &[HistoryPoint],
        horizon: u32,
    ) -> Result<Vec<ForecastPoint>, CoreError> {
        if horizon == 0 {
            return Err(CoreError::ValidationError(
                "forecast horizon must be at least 1 month".into(),
            ));
        }
        if let Some(bad) = history.iter().find(|p| !p.income.is_finite()) {
            return Err(CoreError::ValidationError(format!(
                "history income for {} is not finite",
                bad.month
            )));
        }

        let values: Vec<f64> = history.iter().map(|p| p.income).collect();
        let fit = self.fit_linear(&values)?;
        let last_index = (values.len() - 1) as f64;
        // fit_linear guarantees at least two points
        let last_month = history[history.len() - 1].month;

        debug!(
            slope = fit.slope,
            intercept = fit.intercept,
            points = values.len(),
            horizon,
            "fitted income regression"
        );

        Ok((1..=horizon)
            .map(|k| {
                let raw = fit.predict(last_index + f64::from(k));
                let predicted_income = if self.clamp_negative { raw.max(0.0) } else { raw };
                ForecastPoint {
                    month: last_month.advance(k),
                    predicted_income,
                }
            })
            .collect())
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new()
    }
}
