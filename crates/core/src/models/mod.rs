pub mod account;
pub mod analytics;
pub mod chart;
pub mod dashboard;
pub mod forecast;
pub mod month;
pub mod settings;
pub mod transaction;
