pub mod errors;
pub mod models;
pub mod services;
pub mod sources;

use chrono::NaiveDate;
use models::{
    analytics::StatsData,
    chart::ChartPoint,
    dashboard::DashboardData,
    forecast::ForecastData,
    settings::AnalysisSettings,
    transaction::TransactionType,
};
use services::{
    analytics_service::AnalyticsService, chart_service::ChartService,
    validation_service::ValidationService,
};
use sources::traits::{FinanceDataSource, TransactionFilter};
use tracing::{debug, info};
use uuid::Uuid;

use errors::CoreError;

/// Main entry point for the finance analysis core.
///
/// Serves the three analysis operations (dashboard, forecast, stats) for
/// any user of the wrapped data source. Holds no per-user state, so one
/// instance can be shared across concurrent requests.
#[must_use]
pub struct FinanceAnalyzer<S: FinanceDataSource> {
    source: S,
    settings: AnalysisSettings,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
    validation_service: ValidationService,
}

impl<S: FinanceDataSource> std::fmt::Debug for FinanceAnalyzer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceAnalyzer")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl<S: FinanceDataSource> FinanceAnalyzer<S> {
    /// Create an analyzer with default settings.
    pub fn new(source: S) -> Self {
        Self::build(source, AnalysisSettings::default())
    }

    /// Create an analyzer with custom settings. The settings are validated first.
    pub fn with_settings(source: S, settings: AnalysisSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(source, settings))
    }

    // ── Analysis ────────────────────────────────────────────────────

    /// `GET /analysis/dashboard`
    ///
    /// `today` selects the month reported as `monthly_income` / `monthly_expense`.
    pub async fn dashboard(&self, user_id: Uuid, today: NaiveDate) -> Result<DashboardData, CoreError> {
        let accounts = self.source.accounts_for_user(user_id).await?;
        let transactions = self
            .source
            .transactions_for_user(user_id, &TransactionFilter::all())
            .await?;

        info!(
            %user_id,
            accounts = accounts.len(),
            transactions = transactions.len(),
            "building dashboard"
        );

        let data = self
            .analytics_service
            .build_dashboard(&accounts, &transactions, today);
        Ok(match self.settings.display_decimals {
            Some(places) => data.rounded(places),
            None => data,
        })
    }

    /// `GET /analysis/forecast?months=<horizon>`
    pub async fn forecast(&self, user_id: Uuid, horizon: u32) -> Result<ForecastData, CoreError> {
        self.validation_service
            .validate_horizon(horizon, &self.settings)?;

        let income = self
            .source
            .transactions_for_user(user_id, &TransactionFilter::of_type(TransactionType::Income))
            .await?;

        debug!(%user_id, transactions = income.len(), horizon, "building forecast");

        let data = self.analytics_service.build_forecast(&income, horizon)?;
        Ok(match self.settings.display_decimals {
            Some(places) => data.rounded(places),
            None => data,
        })
    }

    /// Forecast driven by the raw `months` query parameter.
    /// A missing parameter uses the configured default horizon.
    pub async fn forecast_from_query(
        &self,
        user_id: Uuid,
        months: Option<&str>,
    ) -> Result<ForecastData, CoreError> {
        let horizon = self.validation_service.parse_horizon(months, &self.settings)?;
        self.forecast(user_id, horizon).await
    }

    /// `GET /analysis/stats` over the amounts of all of the user's transactions.
    pub async fn stats(&self, user_id: Uuid) -> Result<StatsData, CoreError> {
        let transactions = self
            .source
            .transactions_for_user(user_id, &TransactionFilter::all())
            .await?;

        debug!(%user_id, transactions = transactions.len(), "building stats");

        let stats = self.analytics_service.build_stats(&transactions)?;
        Ok(match self.settings.display_decimals {
            Some(places) => stats.rounded(places),
            None => stats,
        })
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Forecast laid out as one continuous chart series.
    pub async fn forecast_chart(&self, user_id: Uuid, horizon: u32) -> Result<Vec<ChartPoint>, CoreError> {
        let data = self.forecast(user_id, horizon).await?;
        Ok(self.chart_service.build_forecast_chart(&data))
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Get current settings.
    #[must_use]
    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// The wrapped data source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(source: S, settings: AnalysisSettings) -> Self {
        Self {
            analytics_service: AnalyticsService::with_settings(&settings),
            chart_service: ChartService::new(),
            validation_service: ValidationService::new(),
            source,
            settings,
        }
    }
}
