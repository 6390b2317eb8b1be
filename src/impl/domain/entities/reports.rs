use rust_decimal::Decimal;
use serde_derive::{Deserialize, Serialize};

use super::{month_bucket::MonthKey, work_day::WorkDay};

// Report payloads.
// ---

/// One calendar month of a year-at-a-glance view. Months without records are
/// zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummaryEntry {
    #[serde(flatten)]
    pub key: MonthKey,
    pub days_count: usize,
    pub total_salary: Decimal,
    pub total_bonus: Decimal,
    pub total_income: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualReport {
    pub year: i32,
    pub total_days: usize,
    pub total_salary: Decimal,
    pub total_bonus: Decimal,
    pub total_income: Decimal,
    pub average_monthly_income: Decimal,
    pub monthly_details: Vec<MonthlySummaryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyDetailedReport {
    #[serde(flatten)]
    pub key: MonthKey,
    pub days_count: usize,
    pub total_salary: Decimal,
    pub total_bonus: Decimal,
    pub total_income: Decimal,
    /// Sorted by date.
    #[serde(rename = "workdays")]
    pub work_days: Vec<WorkDay>,
}

/// Balance as of a given month: what was owed before it, plus what the month
/// itself added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentMonthSummary {
    #[serde(flatten)]
    pub key: MonthKey,
    pub previous_debt: Decimal,
    pub current_month_salary: Decimal,
    pub current_month_bonus: Decimal,
    pub current_month_paid: Decimal,
    pub current_month_balance: Decimal,
    pub current_balance: Decimal,
}

/// All-time totals over the full history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStatistics {
    pub total_days: usize,
    /// Salary plus bonus.
    pub total_earned: Decimal,
    pub total_salary: Decimal,
    pub total_bonus: Decimal,
    pub total_paid: Decimal,
    pub salary_balance: Decimal,
}

// Report options.
// ---

/// Divisor used for `AnnualReport::average_monthly_income`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AverageBasis {
    /// Months of the year with at least one work-day.
    #[default]
    MonthsWithData,
    /// Always 12.
    CalendarYear,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct AverageIncomePolicy {
    #[serde(default)]
    pub basis: AverageBasis,
    /// Decimal places of the average, rounded half away from zero.
    #[serde(default = "default_average_scale")]
    pub scale: u32,
}

fn default_average_scale() -> u32 {
    2
}

impl Default for AverageIncomePolicy {
    fn default() -> Self {
        Self {
            basis: AverageBasis::default(),
            scale: default_average_scale(),
        }
    }
}
