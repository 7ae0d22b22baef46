use chrono::{Datelike, NaiveDate, NaiveDateTime};
use finance_forecast_core::errors::CoreError;
use finance_forecast_core::models::account::Account;
use finance_forecast_core::models::analytics::{round_to, MonthlyBucket, StatsData};
use finance_forecast_core::models::chart::ChartPoint;
use finance_forecast_core::models::dashboard::{AccountSummary, DashboardData};
use finance_forecast_core::models::forecast::{ForecastData, ForecastPoint, HistoryPoint, LinearFit};
use finance_forecast_core::models::month::MonthKey;
use finance_forecast_core::models::settings::AnalysisSettings;
use finance_forecast_core::models::transaction::{Transaction, TransactionType};
use uuid::Uuid;

fn dt(y: i32, m: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn mk(y: i32, m: u32) -> MonthKey {
    MonthKey::new(y, m).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  MonthKey
// ═══════════════════════════════════════════════════════════════════

mod month_key {
    use super::*;

    #[test]
    fn display_pads_month() {
        assert_eq!(mk(2025, 1).to_string(), "2025-01");
        assert_eq!(mk(2025, 12).to_string(), "2025-12");
    }

    #[test]
    fn rejects_month_out_of_range() {
        assert!(matches!(MonthKey::new(2025, 0), Err(CoreError::ValidationError(_))));
        assert!(matches!(MonthKey::new(2025, 13), Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn from_datetime_truncates_to_month() {
        let ts = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(MonthKey::from_datetime(ts), mk(2024, 2));
    }

    #[test]
    fn advance_within_year() {
        assert_eq!(mk(2025, 3).advance(2), mk(2025, 5));
    }

    #[test]
    fn advance_crosses_year_boundary() {
        assert_eq!(mk(2025, 11).advance(1), mk(2025, 12));
        assert_eq!(mk(2025, 12).advance(1), mk(2026, 1));
        assert_eq!(mk(2025, 12).advance(13), mk(2027, 1));
    }

    #[test]
    fn advance_zero_is_identity() {
        assert_eq!(mk(2025, 6).advance(0), mk(2025, 6));
    }

    #[test]
    fn advance_many_years() {
        assert_eq!(mk(2000, 1).advance(120), mk(2010, 1));
    }

    #[test]
    fn ordering_is_chronological() {
        let mut months = vec![mk(2025, 2), mk(2024, 12), mk(2025, 1), mk(2023, 7)];
        months.sort();
        assert_eq!(months, vec![mk(2023, 7), mk(2024, 12), mk(2025, 1), mk(2025, 2)]);
    }

    #[test]
    fn parse_valid_label() {
        let key: MonthKey = "2025-07".parse().unwrap();
        assert_eq!(key.year(), 2025);
        assert_eq!(key.month(), 7);
    }

    #[test]
    fn parse_rejects_malformed_labels() {
        for bad in ["2025-7", "25-07", "2025/07", "2025-13", "abcd-ef", "", "2025-07-01"] {
            assert!(bad.parse::<MonthKey>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn five_digit_year_round_trips() {
        let key = mk(9999, 12).advance(1);
        assert_eq!(key, mk(10000, 1));
        assert_eq!(key.to_string(), "10000-01");
        assert_eq!("10000-01".parse::<MonthKey>().unwrap(), key);
    }

    #[test]
    fn negative_year_round_trips() {
        let key = mk(-5, 3);
        assert_eq!(key.to_string(), "-0005-03");
        assert_eq!("-0005-03".parse::<MonthKey>().unwrap(), key);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(serde_json::from_str::<MonthKey>(&json).unwrap(), key);
    }

    #[test]
    fn parse_rejects_non_canonical_years() {
        for bad in ["02025-07", "-0000-01", "-005-03", "+2025-07", "2025--07"] {
            assert!(bad.parse::<MonthKey>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn year_range_follows_chrono() {
        assert_eq!(MonthKey::MIN.first_day(), Some(NaiveDate::MIN));
        assert_eq!(MonthKey::MAX.year(), NaiveDate::MAX.year());
        assert!(MonthKey::MAX.first_day().is_some());
        assert!(matches!(MonthKey::new(300_000, 1), Err(CoreError::ValidationError(_))));
        assert!(matches!(MonthKey::new(-300_000, 1), Err(CoreError::ValidationError(_))));
        assert!("300000-01".parse::<MonthKey>().is_err());
    }

    #[test]
    fn advance_saturates_at_max() {
        assert_eq!(MonthKey::MAX.advance(1), MonthKey::MAX);
        assert_eq!(mk(262_143, 11).advance(5), MonthKey::MAX);
        assert_eq!(MonthKey::MIN.advance(u32::MAX), MonthKey::MAX);
    }

    #[test]
    fn first_day() {
        assert_eq!(mk(2025, 2).first_day(), NaiveDate::from_ymd_opt(2025, 2, 1));
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&mk(2025, 4)).unwrap();
        assert_eq!(json, "\"2025-04\"");
        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mk(2025, 4));
    }

    #[test]
    fn deserialize_rejects_bad_label() {
        let result: Result<MonthKey, _> = serde_json::from_str("\"2025-00\"");
        assert!(result.is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Transaction
// ═══════════════════════════════════════════════════════════════════

mod transaction {
    use super::*;

    #[test]
    fn type_display() {
        assert_eq!(TransactionType::Income.to_string(), "income");
        assert_eq!(TransactionType::Expense.to_string(), "expense");
    }

    #[test]
    fn type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TransactionType::Income).unwrap(), "\"income\"");
        assert_eq!(serde_json::to_string(&TransactionType::Expense).unwrap(), "\"expense\"");
    }

    #[test]
    fn new_has_unique_ids() {
        let account = Uuid::new_v4();
        let a = Transaction::new(account, 10.0, TransactionType::Income, dt(2025, 1, 1));
        let b = Transaction::new(account, 10.0, TransactionType::Income, dt(2025, 1, 1));
        assert_ne!(a.id, b.id);
        assert!(a.description.is_none());
    }

    #[test]
    fn with_description() {
        let tx = Transaction::with_description(
            Uuid::new_v4(),
            42.5,
            TransactionType::Expense,
            dt(2025, 1, 3),
            "Groceries",
        );
        assert_eq!(tx.description.as_deref(), Some("Groceries"));
        assert_eq!(tx.amount, 42.5);
    }

    #[test]
    fn signed_amount_negates_expenses() {
        let account = Uuid::new_v4();
        let income = Transaction::new(account, 100.0, TransactionType::Income, dt(2025, 1, 1));
        let expense = Transaction::new(account, 40.0, TransactionType::Expense, dt(2025, 1, 1));
        assert_eq!(income.signed_amount(), 100.0);
        assert_eq!(expense.signed_amount(), -40.0);
        assert!(income.is_income());
        assert!(!expense.is_income());
    }

    #[test]
    fn serializes_type_field_name() {
        let tx = Transaction::new(Uuid::new_v4(), 5.0, TransactionType::Expense, dt(2025, 3, 9));
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["created_at"], "2025-03-09T12:00:00");
        assert!(value.get("transaction_type").is_none());
    }

    #[test]
    fn deserializes_date_alias() {
        let json = r#"{
            "id": "6f1c2a58-6f0e-4a43-9a0f-0c8a8f6d1b11",
            "account_id": "0b7b5e1e-2c7f-4c33-8e62-7f1c1d2b9a00",
            "amount": 1250.0,
            "type": "income",
            "description": "Salary",
            "date": "2025-01-31T09:30:00"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.transaction_type, TransactionType::Income);
        assert_eq!(tx.created_at, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap().and_hms_opt(9, 30, 0).unwrap());
        assert_eq!(tx.description.as_deref(), Some("Salary"));
    }

    #[test]
    fn missing_description_defaults_to_none() {
        let json = r#"{
            "id": "6f1c2a58-6f0e-4a43-9a0f-0c8a8f6d1b11",
            "account_id": "0b7b5e1e-2c7f-4c33-8e62-7f1c1d2b9a00",
            "amount": 3.0,
            "type": "expense",
            "created_at": "2025-01-31T09:30:00"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(tx.description.is_none());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let json = r#"{
            "id": "6f1c2a58-6f0e-4a43-9a0f-0c8a8f6d1b11",
            "account_id": "0b7b5e1e-2c7f-4c33-8e62-7f1c1d2b9a00",
            "amount": 3.0,
            "type": "transfer",
            "created_at": "2025-01-31T09:30:00"
        }"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Account
// ═══════════════════════════════════════════════════════════════════

mod account {
    use super::*;

    #[test]
    fn new_sets_fields() {
        let user = Uuid::new_v4();
        let acc = Account::new(user, "Checking", 1500.0);
        assert_eq!(acc.user_id, user);
        assert_eq!(acc.name, "Checking");
        assert_eq!(acc.balance, 1500.0);
        assert!(acc.created_at.is_none());
    }

    #[test]
    fn balance_defaults_to_zero() {
        let json = r#"{
            "id": "6f1c2a58-6f0e-4a43-9a0f-0c8a8f6d1b11",
            "user_id": "0b7b5e1e-2c7f-4c33-8e62-7f1c1d2b9a00",
            "name": "Savings"
        }"#;
        let acc: Account = serde_json::from_str(json).unwrap();
        assert_eq!(acc.balance, 0.0);
    }

    #[test]
    fn summary_drops_owner() {
        let acc = Account::new(Uuid::new_v4(), "Card", -250.0);
        let summary = AccountSummary::from(&acc);
        assert_eq!(summary.id, acc.id);
        assert_eq!(summary.name, "Card");
        assert_eq!(summary.balance, -250.0);
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("user_id").is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Analytics payloads
// ═══════════════════════════════════════════════════════════════════

mod payloads {
    use super::*;

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(8.164965809, 2), 8.16);
        assert_eq!(round_to(2.345, 0), 2.0);
        assert_eq!(round_to(-1.236, 2), -1.24);
        assert_eq!(round_to(100.0, 2), 100.0);
    }

    #[test]
    fn round_to_exact_ties_go_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(-0.125, 2), -0.12);
    }

    #[test]
    fn round_to_leaves_unscalable_values_alone() {
        assert_eq!(round_to(1e308, 2), 1e308);
        assert_eq!(round_to(f64::MAX, 2), f64::MAX);
        assert_eq!(round_to(-1e308, 2), -1e308);
    }

    #[test]
    fn stats_rounded_keeps_huge_values_finite() {
        let stats = StatsData {
            count: 2,
            mean: 1e308,
            median: 1e308,
            max: 1e308,
            min: 1e308,
            std_dev: 0.0,
        };
        let rounded = stats.rounded(2);
        assert_eq!(rounded.max, 1e308);
        assert!(rounded.mean.is_finite());
    }

    #[test]
    fn stats_zeroed() {
        let stats = StatsData::zeroed();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn stats_rounded_keeps_count() {
        let stats = StatsData {
            count: 3,
            mean: 20.004,
            median: 19.996,
            max: 30.0,
            min: 10.0,
            std_dev: 8.16496580927726,
        };
        let rounded = stats.rounded(2);
        assert_eq!(rounded.count, 3);
        assert_eq!(rounded.mean, 20.0);
        assert_eq!(rounded.median, 20.0);
        assert_eq!(rounded.std_dev, 8.16);
    }

    #[test]
    fn stats_json_field_names() {
        let value = serde_json::to_value(StatsData::zeroed()).unwrap();
        for key in ["count", "mean", "median", "max", "min", "std_dev"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn bucket_net() {
        let bucket = MonthlyBucket {
            month: mk(2025, 1),
            total_income: 1000.0,
            total_expense: 400.0,
            income_count: 2,
            expense_count: 5,
        };
        assert_eq!(bucket.net(), 600.0);
    }

    #[test]
    fn forecast_json_shape() {
        let data = ForecastData {
            history: vec![HistoryPoint { month: mk(2025, 1), income: 100.0 }],
            forecast: vec![ForecastPoint { month: mk(2025, 2), predicted_income: 150.0 }],
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["history"][0]["month"], "2025-01");
        assert_eq!(value["history"][0]["income"], 100.0);
        assert_eq!(value["forecast"][0]["month"], "2025-02");
        assert_eq!(value["forecast"][0]["predicted_income"], 150.0);
    }

    #[test]
    fn forecast_rounded() {
        let data = ForecastData {
            history: vec![HistoryPoint { month: mk(2025, 1), income: 100.456 }],
            forecast: vec![ForecastPoint { month: mk(2025, 2), predicted_income: 133.3333 }],
        };
        let rounded = data.rounded(2);
        assert_eq!(rounded.history[0].income, 100.46);
        assert_eq!(rounded.forecast[0].predicted_income, 133.33);
        assert_eq!(rounded.forecast[0].month, mk(2025, 2));
    }

    #[test]
    fn forecast_default_is_empty() {
        let data = ForecastData::default();
        assert!(data.history.is_empty());
        assert!(data.forecast.is_empty());
    }

    #[test]
    fn linear_fit_predict() {
        let fit = LinearFit { slope: 100.0, intercept: 100.0 };
        assert_eq!(fit.predict(0.0), 100.0);
        assert_eq!(fit.predict(2.0), 300.0);
    }

    #[test]
    fn dashboard_rounded_totals() {
        let data = DashboardData {
            net_worth: 1234.5678,
            monthly_income: 10.005,
            monthly_expense: 3.333,
            accounts: Vec::new(),
            recent_transactions: Vec::new(),
        };
        let rounded = data.rounded(2);
        assert_eq!(rounded.net_worth, 1234.57);
        assert_eq!(rounded.monthly_expense, 3.33);
    }

    #[test]
    fn dashboard_json_field_names() {
        let data = DashboardData {
            net_worth: 0.0,
            monthly_income: 0.0,
            monthly_expense: 0.0,
            accounts: Vec::new(),
            recent_transactions: Vec::new(),
        };
        let value = serde_json::to_value(&data).unwrap();
        for key in ["net_worth", "monthly_income", "monthly_expense", "accounts", "recent_transactions"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn chart_point_serializes_nulls() {
        let point = ChartPoint { month: mk(2025, 5), history: Some(10.0), forecast: None };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["history"], 10.0);
        assert!(value["forecast"].is_null());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  AnalysisSettings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = AnalysisSettings::default();
        assert_eq!(s.default_horizon, 3);
        assert_eq!(s.max_horizon, 120);
        assert_eq!(s.recent_transactions_limit, 5);
        assert!(s.clamp_negative_forecast);
        assert_eq!(s.display_decimals, Some(2));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn from_json_partial_document() {
        let s = AnalysisSettings::from_json(r#"{ "default_horizon": 6 }"#).unwrap();
        assert_eq!(s.default_horizon, 6);
        assert_eq!(s.max_horizon, 120);
        assert_eq!(s.recent_transactions_limit, 5);
    }

    #[test]
    fn from_json_null_decimals_disables_rounding() {
        let s = AnalysisSettings::from_json(r#"{ "display_decimals": null }"#).unwrap();
        assert_eq!(s.display_decimals, None);
    }

    #[test]
    fn from_json_rejects_malformed() {
        let result = AnalysisSettings::from_json("{ not json");
        assert!(matches!(result, Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn from_json_rejects_inconsistent_horizons() {
        let result = AnalysisSettings::from_json(r#"{ "default_horizon": 12, "max_horizon": 6 }"#);
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn validate_rejects_zero_max() {
        let s = AnalysisSettings {
            max_horizon: 0,
            ..AnalysisSettings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_default() {
        let s = AnalysisSettings {
            default_horizon: 0,
            ..AnalysisSettings::default()
        };
        assert!(s.validate().is_err());
    }
}
