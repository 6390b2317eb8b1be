use rust_decimal::{Decimal, RoundingStrategy};

use crate::entities::{
    AnnualReport, AverageBasis, AverageIncomePolicy, BalancedMonth, CurrentMonthSummary,
    LedgerStatistics, MonthKey, MonthlyDetailedReport, MonthlySummaryEntry,
};

/// Read-only views over the output of the cumulative balance fold. Periods
/// without records yield zeroed reports.
///
/// `months` must be ascending by month with unique keys, as produced by
/// `compute_cumulative`.
pub struct ReportProjector<'a> {
    months: &'a [BalancedMonth],
    average_policy: AverageIncomePolicy,
}

impl<'a> ReportProjector<'a> {
    pub fn new(months: &'a [BalancedMonth], average_policy: AverageIncomePolicy) -> Self {
        Self {
            months,
            average_policy,
        }
    }

    fn month(&self, key: MonthKey) -> Option<&'a BalancedMonth> {
        self.months
            .binary_search_by_key(&key, |m| m.bucket.key)
            .ok()
            .map(|i| &self.months[i])
    }

    /// January through December of `year`.
    pub fn monthly_summary(&self, year: i32) -> Vec<MonthlySummaryEntry> {
        MonthKey::months_of_year(year)
            .map(|key| match self.month(key) {
                Some(m) => MonthlySummaryEntry {
                    key,
                    days_count: m.bucket.days_count,
                    total_salary: m.bucket.total_salary,
                    total_bonus: m.bucket.total_bonus,
                    total_income: m.bucket.total_income,
                },
                None => MonthlySummaryEntry {
                    key,
                    days_count: 0,
                    total_salary: Decimal::ZERO,
                    total_bonus: Decimal::ZERO,
                    total_income: Decimal::ZERO,
                },
            })
            .collect()
    }

    pub fn annual_report(&self, year: i32) -> AnnualReport {
        let monthly_details = self.monthly_summary(year);
        let total_days = monthly_details.iter().map(|e| e.days_count).sum();
        let total_salary: Decimal = monthly_details.iter().map(|e| e.total_salary).sum();
        let total_bonus: Decimal = monthly_details.iter().map(|e| e.total_bonus).sum();
        let total_income: Decimal = monthly_details.iter().map(|e| e.total_income).sum();

        let divisor = match self.average_policy.basis {
            AverageBasis::MonthsWithData => {
                monthly_details.iter().filter(|e| e.days_count > 0).count()
            }
            AverageBasis::CalendarYear => monthly_details.len(),
        };
        let average_monthly_income = if divisor == 0 {
            Decimal::ZERO
        } else {
            (total_income / Decimal::from(divisor)).round_dp_with_strategy(
                self.average_policy.scale,
                RoundingStrategy::MidpointAwayFromZero,
            )
        };

        AnnualReport {
            year,
            total_days,
            total_salary,
            total_bonus,
            total_income,
            average_monthly_income,
            monthly_details,
        }
    }

    pub fn monthly_detailed_report(&self, key: MonthKey) -> MonthlyDetailedReport {
        let Some(m) = self.month(key) else {
            return MonthlyDetailedReport {
                key,
                days_count: 0,
                total_salary: Decimal::ZERO,
                total_bonus: Decimal::ZERO,
                total_income: Decimal::ZERO,
                work_days: Vec::new(),
            };
        };
        let mut work_days = m.bucket.work_days.clone();
        work_days.sort_by_key(|d| d.work_date);
        MonthlyDetailedReport {
            key,
            days_count: m.bucket.days_count,
            total_salary: m.bucket.total_salary,
            total_bonus: m.bucket.total_bonus,
            total_income: m.bucket.total_income,
            work_days,
        }
    }

    /// Balance up to and including `as_of`. Months after `as_of` are ignored.
    pub fn current_month_summary(&self, as_of: MonthKey) -> CurrentMonthSummary {
        let previous_debt = self
            .months
            .iter()
            .take_while(|m| m.bucket.key < as_of)
            .last()
            .map_or(Decimal::ZERO, |m| m.cumulative_balance);
        let current = self.month(as_of).map(|m| &m.bucket);
        let current_month_salary = current.map_or(Decimal::ZERO, |b| b.total_salary);
        let current_month_bonus = current.map_or(Decimal::ZERO, |b| b.total_bonus);
        let current_month_paid = current.map_or(Decimal::ZERO, |b| b.total_paid);
        let current_month_balance = current.map_or(Decimal::ZERO, |b| b.monthly_balance);

        CurrentMonthSummary {
            key: as_of,
            previous_debt,
            current_month_salary,
            current_month_bonus,
            current_month_paid,
            current_month_balance,
            current_balance: previous_debt + current_month_balance,
        }
    }

    pub fn statistics(&self) -> LedgerStatistics {
        let buckets = self.months.iter().map(|m| &m.bucket);
        let total_days = buckets.clone().map(|b| b.days_count).sum();
        let total_salary: Decimal = buckets.clone().map(|b| b.total_salary).sum();
        let total_bonus: Decimal = buckets.clone().map(|b| b.total_bonus).sum();
        let total_paid: Decimal = buckets.map(|b| b.total_paid).sum();

        LedgerStatistics {
            total_days,
            total_earned: total_salary + total_bonus,
            total_salary,
            total_bonus,
            total_paid,
            salary_balance: self
                .months
                .last()
                .map_or(Decimal::ZERO, |m| m.cumulative_balance),
        }
    }
}
