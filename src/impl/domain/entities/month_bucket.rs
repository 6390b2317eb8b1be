use std::fmt;

use rust_decimal::Decimal;
use serde_derive::Serialize;

use super::{payment::Payment, work_day::WorkDay};

/// Calendar month identifier. `month` is 1-based (January = 1); ordering is
/// chronological.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

/// Work-days and payments of a single calendar month, with their totals.
///
/// Built fresh on every aggregation pass and never changed afterwards; the
/// totals are computed once in `MonthBucket::new`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBucket {
    #[serde(flatten)]
    pub key: MonthKey,
    #[serde(rename = "workdays")]
    pub work_days: Vec<WorkDay>,
    pub payments: Vec<Payment>,
    pub total_salary: Decimal,
    pub total_bonus: Decimal,
    pub total_income: Decimal,
    pub total_paid: Decimal,
    pub days_count: usize,
    /// `total_salary - total_paid`. Bonuses are excluded.
    pub monthly_balance: Decimal,
}

/// A month bucket annotated with the running balance of every month up to
/// and including it. Positive values are owed to the user, negative values
/// are an overpayment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancedMonth {
    #[serde(flatten)]
    pub bucket: MonthBucket,
    pub cumulative_balance: Decimal,
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
