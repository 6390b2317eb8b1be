use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{RecordFormat, SalaryRecords, UserId};

/// Read access to one user's work-day and payment streams.
#[async_trait]
pub trait RecordsRepository: Send + Sync {
    fn from_csv_strings(
        &self,
        user_id: &UserId,
        work_days_csv: &str,
        payments_csv: &str,
    ) -> Result<SalaryRecords, ServerError>;

    fn from_json_strings(
        &self,
        user_id: &UserId,
        work_days_json: &str,
        payments_json: &str,
    ) -> Result<SalaryRecords, ServerError>;

    async fn from_files<P>(
        &self,
        user_id: &UserId,
        work_days_path: P,
        payments_path: P,
        format: RecordFormat,
    ) -> Result<SalaryRecords, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
