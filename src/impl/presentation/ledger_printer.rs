use iso_currency::Currency;
use rust_decimal::Decimal;

use crate::entities::{
    AnnualReport, CurrentMonthSummary, DataWarning, LedgerStatistics, MonthlyDetailedReport,
    SalaryLedger,
};

use super::utils::{format_amount, section_header};

pub(crate) struct LedgerPrinter {
    currency: Currency,
}

impl LedgerPrinter {
    pub(crate) fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Month-by-month ledger, newest first.
    pub(crate) fn print_months(&self, ledger: &SalaryLedger) -> String {
        let mut output = String::new();
        output.push_str(&section_header(&format!("Months ({})", ledger.user_id)));
        if ledger.months.is_empty() {
            output.push_str("(no records)\n");
            return output;
        }
        output.push_str(&format!(
            "{:<8} {:>5} {:>18} {:>18} {:>18} {:>18} {:>18}\n",
            "month", "days", "salary", "bonus", "paid", "balance", "cumulative"
        ));
        for month in ledger.months_newest_first() {
            let bucket = &month.bucket;
            output.push_str(&format!(
                "{:<8} {:>5} {:>18} {:>18} {:>18} {:>18} {:>18}\n",
                bucket.key.to_string(),
                bucket.days_count,
                self.amount(bucket.total_salary),
                self.amount(bucket.total_bonus),
                self.amount(bucket.total_paid),
                self.amount(bucket.monthly_balance),
                self.amount(month.cumulative_balance),
            ));
        }
        output.push('\n');
        output.push_str(&self.balance_line("Current balance", ledger.current_balance()));
        output
    }

    pub(crate) fn print_annual_report(&self, report: &AnnualReport) -> String {
        let mut output = String::new();
        output.push_str(&section_header(&format!("Annual report {}", report.year)));
        output.push_str(&format!(
            "{:<16} {:>5} {:>18} {:>18} {:>18}\n",
            "month", "days", "salary", "bonus", "income"
        ));
        for entry in &report.monthly_details {
            output.push_str(&format!(
                "{:<16} {:>5} {:>18} {:>18} {:>18}\n",
                entry.key.label(),
                entry.days_count,
                self.amount(entry.total_salary),
                self.amount(entry.total_bonus),
                self.amount(entry.total_income),
            ));
        }
        output.push_str(&format!(
            "{:<16} {:>5} {:>18} {:>18} {:>18}\n\n",
            "total",
            report.total_days,
            self.amount(report.total_salary),
            self.amount(report.total_bonus),
            self.amount(report.total_income),
        ));
        output.push_str(&self.balance_line(
            "Average monthly income",
            report.average_monthly_income,
        ));
        output
    }

    pub(crate) fn print_monthly_detailed_report(&self, report: &MonthlyDetailedReport) -> String {
        let mut output = String::new();
        output.push_str(&section_header(&report.key.label()));
        for work_day in &report.work_days {
            output.push_str(&format!(
                "{} ({}) {}\n",
                work_day.work_date, work_day.id, work_day.description
            ));
            output.push_str(&format!("    {:30} {:>20}\n", "salary", self.amount(work_day.salary)));
            if !work_day.bonus.is_zero() {
                output.push_str(&format!("    {:30} {:>20}\n", "bonus", self.amount(work_day.bonus)));
            }
        }
        if !report.work_days.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{:<24} {:>20}\n", "Days", report.days_count));
        output.push_str(&self.balance_line("Salary", report.total_salary));
        output.push_str(&self.balance_line("Bonus", report.total_bonus));
        output.push_str(&self.balance_line("Income", report.total_income));
        output
    }

    pub(crate) fn print_current_month_summary(&self, summary: &CurrentMonthSummary) -> String {
        let mut output = String::new();
        output.push_str(&section_header(&format!("Balance as of {}", summary.key.label())));
        output.push_str(&self.balance_line("Previous debt", summary.previous_debt));
        output.push_str(&self.balance_line("Salary this month", summary.current_month_salary));
        output.push_str(&self.balance_line("Bonus this month", summary.current_month_bonus));
        output.push_str(&self.balance_line("Paid this month", summary.current_month_paid));
        output.push_str(&self.balance_line("Month balance", summary.current_month_balance));
        output.push_str(&self.balance_line("Current balance", summary.current_balance));
        output
    }

    pub(crate) fn print_statistics(&self, statistics: &LedgerStatistics) -> String {
        let mut output = String::new();
        output.push_str(&section_header("Statistics"));
        output.push_str(&format!("{:<24} {:>20}\n", "Days worked", statistics.total_days));
        output.push_str(&self.balance_line("Total earned", statistics.total_earned));
        output.push_str(&self.balance_line("Salary", statistics.total_salary));
        output.push_str(&self.balance_line("Bonus", statistics.total_bonus));
        output.push_str(&self.balance_line("Paid", statistics.total_paid));
        output.push_str(&self.balance_line("Salary balance", statistics.salary_balance));
        output
    }

    pub(crate) fn print_warnings(&self, warnings: &[DataWarning]) -> String {
        if warnings.is_empty() {
            return String::new();
        }
        let mut output = String::new();
        output.push_str(&section_header("Warnings"));
        for warning in warnings {
            output.push_str(&format!("; {}\n", warning));
        }
        output
    }

    fn balance_line(&self, label: &str, amount: Decimal) -> String {
        format!("{:<24} {:>20}\n", label, self.amount(amount))
    }

    fn amount(&self, amount: Decimal) -> String {
        format_amount(amount, self.currency)
    }
}
