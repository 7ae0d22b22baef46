use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::account::Account;
use crate::models::analytics::StatsData;
use crate::models::dashboard::{AccountSummary, DashboardData};
use crate::models::forecast::ForecastData;
use crate::models::month::MonthKey;
use crate::models::settings::AnalysisSettings;
use crate::models::transaction::Transaction;
use crate::services::aggregation_service::AggregationService;
use crate::services::forecast_service::ForecastService;
use crate::services::stats_service::StatsService;

/// Builds the dashboard, forecast and statistics payloads from a snapshot
/// of one user's accounts and transactions.
///
/// Pure composition of the aggregation, statistics and forecast services.
/// Missing data never fails a request: no transactions yields zeroed stats,
/// and too little income history yields an empty forecast.
pub struct AnalyticsService {
    aggregation_service: AggregationService,
    stats_service: StatsService,
    forecast_service: ForecastService,
    recent_limit: usize,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self::with_settings(&AnalysisSettings::default())
    }

    pub fn with_settings(settings: &AnalysisSettings) -> Self {
        Self {
            aggregation_service: AggregationService::new(),
            stats_service: StatsService::new(),
            forecast_service: ForecastService::with_clamping(settings.clamp_negative_forecast),
            recent_limit: settings.recent_transactions_limit,
        }
    }

    /// Income history plus a `horizon`-month projection.
    ///
    /// Expense transactions are ignored. With fewer than two income months
    /// the forecast list is empty and the history is returned as-is. The
    /// same applies when monthly totals or predictions leave the finite
    /// `f64` range.
    pub fn build_forecast(
        &self,
        transactions: &[Transaction],
        horizon: u32,
    ) -> Result<ForecastData, CoreError> {
        let buckets = self.aggregation_service.aggregate_monthly(transactions);
        let history = self.aggregation_service.income_history(&buckets);

        if history.iter().any(|p| !p.income.is_finite()) {
            warn!(months = history.len(), "monthly income overflowed, forecast skipped");
            return Ok(ForecastData {
                history,
                forecast: Vec::new(),
            });
        }

        let mut forecast = match self.forecast_service.forecast(&history, horizon) {
            Ok(points) => points,
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, months = history.len(), "forecast skipped");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        if forecast.iter().any(|p| !p.predicted_income.is_finite()) {
            warn!(months = history.len(), horizon, "prediction overflowed, forecast skipped");
            forecast.clear();
        }

        Ok(ForecastData { history, forecast })
    }

    /// Statistics over every transaction amount, zeroed when there are none.
    pub fn build_stats(&self, transactions: &[Transaction]) -> Result<StatsData, CoreError> {
        let amounts: Vec<f64> = transactions.iter().map(|t| t.amount).collect();
        match self.stats_service.compute_stats(&amounts) {
            Ok(stats) => Ok(stats),
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "no transactions, returning zeroed stats");
                Ok(StatsData::zeroed())
            }
            Err(e) => Err(e),
        }
    }

    /// Net worth, current-month totals, accounts and recent activity.
    ///
    /// `today` decides which month counts as current.
    pub fn build_dashboard(
        &self,
        accounts: &[Account],
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> DashboardData {
        let net_worth = accounts.iter().fold(0.0, |acc, a| acc + a.balance);

        let buckets = self.aggregation_service.aggregate_monthly(transactions);
        let (monthly_income, monthly_expense) = self
            .aggregation_service
            .bucket_for(&buckets, MonthKey::from_date(today))
            .map_or((0.0, 0.0), |b| (b.total_income, b.total_expense));

        DashboardData {
            net_worth,
            monthly_income,
            monthly_expense,
            accounts: accounts.iter().map(AccountSummary::from).collect(),
            recent_transactions: self.recent_transactions(transactions),
        }
    }

    /// Newest transactions first; ties on timestamp keep input order.
    fn recent_transactions(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
            .into_iter()
            .take(self.recent_limit)
            .cloned()
            .collect()
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
