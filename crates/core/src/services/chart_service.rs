use crate::models::chart::ChartPoint;
use crate::models::forecast::ForecastData;

/// Generates chart-ready series from analysis payloads.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Lay history and forecast out on one month axis.
    ///
    /// When both series are present the last history point also carries its
    /// income as a `forecast` value, so the two lines join. The payload itself
    /// is only read.
    pub fn build_forecast_chart(&self, data: &ForecastData) -> Vec<ChartPoint> {
        let mut points: Vec<ChartPoint> = data
            .history
            .iter()
            .map(|p| ChartPoint {
                month: p.month,
                history: Some(p.income),
                forecast: None,
            })
            .collect();

        if !data.forecast.is_empty() {
            if let Some(last) = points.last_mut() {
                last.forecast = last.history;
            }
        }

        points.extend(data.forecast.iter().map(|p| ChartPoint {
            month: p.month,
            history: None,
            forecast: Some(p.predicted_income),
        }));

        points
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
