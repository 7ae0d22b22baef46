use crate::errors::CoreError;
use crate::models::analytics::StatsData;

/// Descriptive statistics over a series of amounts.
///
/// All figures are computed in `f64` without rounding; display rounding is
/// applied by the caller at the API boundary.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Compute count, mean, median, extrema and population standard deviation.
    ///
    /// Fails with `EmptyInput` when `values` is empty and with a validation
    /// error when any value is NaN or infinite.
    pub fn compute_stats(&self, values: &[f64]) -> Result<StatsData, CoreError> {
        if values.is_empty() {
            return Err(CoreError::EmptyInput);
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(CoreError::ValidationError(format!(
                "statistics input must be finite, got {bad}"
            )));
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = mean_of(&sorted);

        Ok(StatsData {
            count,
            mean,
            median: median_of_sorted(&sorted),
            max: sorted[count - 1],
            min: sorted[0],
            std_dev: population_std_dev(&sorted, mean),
        })
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Arithmetic mean of finite values. Falls back to dividing before
/// summing when the plain sum overflows.
fn mean_of(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}

/// Median of a non-empty, ascending slice.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return sorted[mid];
    }
    let (lo, hi) = (sorted[mid - 1], sorted[mid]);
    let midpoint = (lo + hi) / 2.0;
    if midpoint.is_finite() {
        midpoint
    } else {
        lo / 2.0 + hi / 2.0
    }
}

/// `sqrt(mean((x - mean)^2))`. When the squared deviations overflow, the
/// values are scaled by their largest magnitude first.
fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let n = values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    if variance.is_finite() {
        return variance.sqrt();
    }

    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 {
        return 0.0;
    }
    let scaled_mean = mean / scale;
    let scaled_variance = values
        .iter()
        .map(|v| (v / scale - scaled_mean).powi(2))
        .sum::<f64>()
        / n;
    scale * scaled_variance.sqrt()
}
