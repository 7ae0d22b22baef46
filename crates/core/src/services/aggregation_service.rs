use std::collections::BTreeMap;

use crate::models::analytics::MonthlyBucket;
use crate::models::forecast::HistoryPoint;
use crate::models::month::MonthKey;
use crate::models::transaction::{Transaction, TransactionType};

/// Groups raw transactions into per-month income/expense totals.
///
/// Pure business logic: no I/O, no state. Months without any transaction
/// are left out of the result rather than filled with zeros.
pub struct AggregationService;

/// Amounts collected for one month before summing.
#[derive(Default)]
struct MonthAmounts {
    income: Vec<f64>,
    expense: Vec<f64>,
}

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate transactions into one bucket per populated calendar month,
    /// oldest month first.
    ///
    /// The result does not depend on the order of `transactions`: amounts are
    /// summed in sorted order so floating point totals are reproducible.
    pub fn aggregate_monthly(&self, transactions: &[Transaction]) -> Vec<MonthlyBucket> {
        let mut by_month: BTreeMap<MonthKey, MonthAmounts> = BTreeMap::new();

        for tx in transactions {
            let amounts = by_month
                .entry(MonthKey::from_datetime(tx.created_at))
                .or_default();
            match tx.transaction_type {
                TransactionType::Income => amounts.income.push(tx.amount),
                TransactionType::Expense => amounts.expense.push(tx.amount),
            }
        }

        by_month
            .into_iter()
            .map(|(month, mut amounts)| MonthlyBucket {
                month,
                total_income: sorted_sum(&mut amounts.income),
                total_expense: sorted_sum(&mut amounts.expense),
                income_count: amounts.income.len(),
                expense_count: amounts.expense.len(),
            })
            .collect()
    }

    /// Find the bucket for a given month, if it has any transactions.
    pub fn bucket_for<'a>(
        &self,
        buckets: &'a [MonthlyBucket],
        month: MonthKey,
    ) -> Option<&'a MonthlyBucket> {
        buckets
            .binary_search_by_key(&month, |b| b.month)
            .ok()
            .map(|idx| &buckets[idx])
    }

    /// Income series used to fit the forecast.
    /// Only months with at least one income transaction contribute a point.
    pub fn income_history(&self, buckets: &[MonthlyBucket]) -> Vec<HistoryPoint> {
        buckets
            .iter()
            .filter(|b| b.income_count > 0)
            .map(|b| HistoryPoint {
                month: b.month,
                income: b.total_income,
            })
            .collect()
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_sum(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    values.iter().fold(0.0, |acc, v| acc + v)
}
