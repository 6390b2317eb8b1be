use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::{
            payments_datasource::PaymentsDatasourceImpl,
            work_days_datasource::WorkDaysDatasourceImpl,
        },
        models::ingest_policy::IngestPolicy,
        repositories::records_repository_impl::RecordsRepositoryImpl,
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{AverageIncomePolicy, DataWarning, RecordFormat, SalaryLedger, SalaryRecords, UserId},
};

#[async_trait]
pub trait LedgerUsecase: Send + Sync {
    async fn from_csv_strings(
        &self,
        user_id: &UserId,
        work_days_csv: &str,
        payments_csv: &str,
    ) -> Result<(SalaryLedger, Vec<DataWarning>), ServerError>;

    async fn from_json_strings(
        &self,
        user_id: &UserId,
        work_days_json: &str,
        payments_json: &str,
    ) -> Result<(SalaryLedger, Vec<DataWarning>), ServerError>;

    async fn from_files<P>(
        &self,
        user_id: &UserId,
        work_days_path: P,
        payments_path: P,
        format: RecordFormat,
    ) -> Result<(SalaryLedger, Vec<DataWarning>), ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LedgerUsecaseImpl<
    R1 = RecordsRepositoryImpl<WorkDaysDatasourceImpl, PaymentsDatasourceImpl>, // Default.
> where
    R1: RecordsRepository,
{
    records_repository: R1,
    average_policy: AverageIncomePolicy,
}

impl<R1: RecordsRepository> LedgerUsecaseImpl<R1> {
    fn aggregate(&self, records: SalaryRecords) -> (SalaryLedger, Vec<DataWarning>) {
        let ledger = SalaryLedger::from_records(&records).with_average_policy(self.average_policy);
        (ledger, records.warnings)
    }
}

#[async_trait]
impl<R1> LedgerUsecase for LedgerUsecaseImpl<R1>
where
    R1: RecordsRepository,
{
    async fn from_csv_strings(
        &self,
        user_id: &UserId,
        work_days_csv: &str,
        payments_csv: &str,
    ) -> Result<(SalaryLedger, Vec<DataWarning>), ServerError> {
        let records = self
            .records_repository
            .from_csv_strings(user_id, work_days_csv, payments_csv)?;
        Ok(self.aggregate(records))
    }

    async fn from_json_strings(
        &self,
        user_id: &UserId,
        work_days_json: &str,
        payments_json: &str,
    ) -> Result<(SalaryLedger, Vec<DataWarning>), ServerError> {
        let records = self
            .records_repository
            .from_json_strings(user_id, work_days_json, payments_json)?;
        Ok(self.aggregate(records))
    }

    async fn from_files<P>(
        &self,
        user_id: &UserId,
        work_days_path: P,
        payments_path: P,
        format: RecordFormat,
    ) -> Result<(SalaryLedger, Vec<DataWarning>), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let records = self
            .records_repository
            .from_files(user_id, work_days_path, payments_path, format)
            .await?;
        Ok(self.aggregate(records))
    }
}

impl LedgerUsecaseImpl {
    pub(crate) fn new(policy: IngestPolicy, average_policy: AverageIncomePolicy) -> Self {
        LedgerUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(policy),
            average_policy,
        }
    }
}
