use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    domain::usecases::ledger_usecase::{LedgerUsecase as _, LedgerUsecaseImpl},
    entities::{DataWarning, RecordFormat, SalaryLedger, UserId},
    ledger_config::LedgerConfig,
    presentation::ledger_printer::LedgerPrinter,
};

pub type Report = String;

/// Entry point for loading a user's records and rendering reports from them.
pub struct SalaryLedgerUtil {
    ledger_usecase: LedgerUsecaseImpl,
    printer: LedgerPrinter,
}

impl SalaryLedgerUtil {
    pub fn new(config: &LedgerConfig) -> Result<Self, ServerError> {
        Ok(Self {
            ledger_usecase: LedgerUsecaseImpl::new(config.ingest_policy(), config.average_policy()),
            printer: LedgerPrinter::new(config.currency()?),
        })
    }

    pub async fn from_csv_strings(
        &self,
        user_id: &UserId,
        work_days_csv: &str,
        payments_csv: &str,
    ) -> Result<(SalaryLedger, Vec<DataWarning>), ServerError> {
        self.ledger_usecase
            .from_csv_strings(user_id, work_days_csv, payments_csv)
            .await
    }

    pub async fn from_json_strings(
        &self,
        user_id: &UserId,
        work_days_json: &str,
        payments_json: &str,
    ) -> Result<(SalaryLedger, Vec<DataWarning>), ServerError> {
        self.ledger_usecase
            .from_json_strings(user_id, work_days_json, payments_json)
            .await
    }

    pub async fn from_files<T>(
        &self,
        user_id: &UserId,
        work_days_path: T,
        payments_path: T,
        format: RecordFormat,
    ) -> Result<(SalaryLedger, Vec<DataWarning>), ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.ledger_usecase
            .from_files(user_id, work_days_path, payments_path, format)
            .await
    }

    // Rendering.
    // ---

    pub fn render_months(&self, ledger: &SalaryLedger) -> Report {
        self.printer.print_months(ledger)
    }

    pub fn render_annual_report(&self, ledger: &SalaryLedger, year: i32) -> Report {
        self.printer
            .print_annual_report(&ledger.annual_report(year))
    }

    /// `month` is 1-based.
    pub fn render_monthly_detailed_report(
        &self,
        ledger: &SalaryLedger,
        year: i32,
        month: u32,
    ) -> Result<Report, ServerError> {
        Ok(self
            .printer
            .print_monthly_detailed_report(&ledger.monthly_detailed_report(year, month)?))
    }

    pub fn render_current_month_summary(&self, ledger: &SalaryLedger, as_of: NaiveDate) -> Report {
        self.printer
            .print_current_month_summary(&ledger.current_month_summary(as_of))
    }

    pub fn render_statistics(&self, ledger: &SalaryLedger) -> Report {
        self.printer.print_statistics(&ledger.statistics())
    }

    pub fn render_warnings(&self, warnings: &[DataWarning]) -> Report {
        self.printer.print_warnings(warnings)
    }
}
