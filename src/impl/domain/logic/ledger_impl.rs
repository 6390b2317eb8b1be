use chrono::NaiveDate;
use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::entities::{
    AnnualReport, AverageIncomePolicy, BalancedMonth, CurrentMonthSummary, LedgerStatistics,
    MonthKey, MonthlyDetailedReport, MonthlySummaryEntry, Payment, SalaryLedger, SalaryRecords,
    UserId, WorkDay,
};

use super::{
    cumulative_balance::{compute_cumulative, fill_gaps},
    monthly_grouper::group,
    report_projector::ReportProjector,
};

impl SalaryLedger {
    /// Groups both record streams by month and folds the cumulative balance.
    /// Pure: the result depends only on the given records.
    pub fn build(user_id: UserId, work_days: &[WorkDay], payments: &[Payment]) -> Self {
        let months = compute_cumulative(group(work_days, payments));
        tracing::debug!(
            user = %user_id,
            work_days = work_days.len(),
            payments = payments.len(),
            months = months.len(),
            "aggregated salary ledger"
        );
        Self {
            user_id,
            months,
            average_policy: AverageIncomePolicy::default(),
        }
    }

    pub fn from_records(records: &SalaryRecords) -> Self {
        Self::build(
            records.user_id.clone(),
            &records.work_days,
            &records.payments,
        )
    }

    pub fn with_average_policy(mut self, average_policy: AverageIncomePolicy) -> Self {
        self.average_policy = average_policy;
        self
    }

    fn projector(&self) -> ReportProjector<'_> {
        ReportProjector::new(&self.months, self.average_policy)
    }

    /// Cumulative balance after the latest month, 0 for an empty history.
    pub fn current_balance(&self) -> Decimal {
        self.months
            .last()
            .map_or(Decimal::ZERO, |m| m.cumulative_balance)
    }

    pub fn months_newest_first(&self) -> impl Iterator<Item = &BalancedMonth> {
        self.months.iter().rev()
    }

    /// Same fold, with empty months inserted between the first and last month
    /// that has records.
    pub fn continuous_months(&self) -> Vec<BalancedMonth> {
        let buckets = self
            .months
            .iter()
            .map(|m| (m.bucket.key, m.bucket.clone()))
            .collect();
        compute_cumulative(fill_gaps(buckets))
    }

    pub fn monthly_summary(&self, year: i32) -> Vec<MonthlySummaryEntry> {
        self.projector().monthly_summary(year)
    }

    pub fn annual_report(&self, year: i32) -> AnnualReport {
        self.projector().annual_report(year)
    }

    /// `month` is 1-based.
    pub fn monthly_detailed_report(
        &self,
        year: i32,
        month: u32,
    ) -> Result<MonthlyDetailedReport, ServerError> {
        Ok(self
            .projector()
            .monthly_detailed_report(MonthKey::new(year, month)?))
    }

    /// Balance up to and including the month of `as_of`.
    pub fn current_month_summary(&self, as_of: NaiveDate) -> CurrentMonthSummary {
        self.projector().current_month_summary(MonthKey::of(as_of))
    }

    pub fn statistics(&self) -> LedgerStatistics {
        self.projector().statistics()
    }
}
