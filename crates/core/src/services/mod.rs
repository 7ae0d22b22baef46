pub mod aggregation_service;
pub mod analytics_service;
pub mod chart_service;
pub mod forecast_service;
pub mod stats_service;
pub mod validation_service;
