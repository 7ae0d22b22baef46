use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Tunables for the analysis endpoints.
///
/// Every field has a default, so a partial JSON document only needs to
/// name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Forecast horizon used when the caller does not pass `months`.
    pub default_horizon: u32,

    /// Largest horizon a caller may request.
    pub max_horizon: u32,

    /// How many transactions the dashboard lists as recent activity.
    pub recent_transactions_limit: usize,

    /// Floor predicted income at zero.
    pub clamp_negative_forecast: bool,

    /// Decimal places applied to payloads at the API boundary.
    /// `None` returns raw, unrounded values.
    pub display_decimals: Option<u32>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            default_horizon: 3,
            max_horizon: 120,
            recent_transactions_limit: 5,
            clamp_negative_forecast: true,
            display_decimals: Some(2),
        }
    }
}

impl AnalysisSettings {
    /// Parse settings from a JSON document, falling back to defaults for
    /// missing fields.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject combinations the analysis code cannot honour.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_horizon == 0 {
            return Err(CoreError::ValidationError(
                "max_horizon must be at least 1".into(),
            ));
        }
        if self.default_horizon == 0 || self.default_horizon > self.max_horizon {
            return Err(CoreError::ValidationError(format!(
                "default_horizon must be between 1 and {}, got {}",
                self.max_horizon, self.default_horizon
            )));
        }
        Ok(())
    }
}
