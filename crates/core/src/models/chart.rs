use serde::{Deserialize, Serialize};

use super::month::MonthKey;

/// A single point of the combined history/forecast income chart.
///
/// The core lines the two series up on one month axis; the frontend just
/// draws the `history` and `forecast` lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: MonthKey,

    /// Observed income, present for past months
    pub history: Option<f64>,

    /// Predicted income, present for future months (and the joining point)
    pub forecast: Option<f64>,
}
