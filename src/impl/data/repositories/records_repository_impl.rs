use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::{
            payments_datasource::{PaymentsDatasource, PaymentsDatasourceImpl},
            work_days_datasource::{WorkDaysDatasource, WorkDaysDatasourceImpl},
        },
        models::{ingest_policy::IngestPolicy, raw_record_model::ParsedRecords},
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{Payment, RecordFormat, SalaryRecords, UserId, WorkDay},
    errors::ReadError,
};

pub(crate) struct RecordsRepositoryImpl<DS1, DS2>
where
    DS1: WorkDaysDatasource,
    DS2: PaymentsDatasource,
{
    work_days_datasource: DS1,
    payments_datasource: DS2,
}

impl<DS1, DS2> RecordsRepositoryImpl<DS1, DS2>
where
    DS1: WorkDaysDatasource,
    DS2: PaymentsDatasource,
{
    fn combine(
        user_id: &UserId,
        work_days: ParsedRecords<WorkDay>,
        payments: ParsedRecords<Payment>,
    ) -> SalaryRecords {
        let mut warnings = work_days.warnings;
        warnings.extend(payments.warnings);
        for warning in &warnings {
            tracing::warn!(user = %user_id, "{}", warning);
        }
        tracing::info!(
            user = %user_id,
            work_days = work_days.records.len(),
            payments = payments.records.len(),
            warnings = warnings.len(),
            "loaded salary records"
        );
        SalaryRecords {
            user_id: user_id.clone(),
            work_days: work_days.records,
            payments: payments.records,
            warnings,
        }
    }
}

#[async_trait]
impl<DS1, DS2> RecordsRepository for RecordsRepositoryImpl<DS1, DS2>
where
    DS1: WorkDaysDatasource,
    DS2: PaymentsDatasource,
{
    fn from_csv_strings(
        &self,
        user_id: &UserId,
        work_days_csv: &str,
        payments_csv: &str,
    ) -> Result<SalaryRecords, ServerError> {
        Ok(Self::combine(
            user_id,
            self.work_days_datasource.from_csv_string(work_days_csv)?,
            self.payments_datasource.from_csv_string(payments_csv)?,
        ))
    }

    fn from_json_strings(
        &self,
        user_id: &UserId,
        work_days_json: &str,
        payments_json: &str,
    ) -> Result<SalaryRecords, ServerError> {
        Ok(Self::combine(
            user_id,
            self.work_days_datasource.from_json_string(work_days_json)?,
            self.payments_datasource.from_json_string(payments_json)?,
        ))
    }

    async fn from_files<P>(
        &self,
        user_id: &UserId,
        work_days_path: P,
        payments_path: P,
        format: RecordFormat,
    ) -> Result<SalaryRecords, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let work_days = tokio::fs::read_to_string(work_days_path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        let payments = tokio::fs::read_to_string(payments_path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        match format {
            RecordFormat::Csv => self.from_csv_strings(user_id, &work_days, &payments),
            RecordFormat::Json => self.from_json_strings(user_id, &work_days, &payments),
        }
    }
}

impl RecordsRepositoryImpl<WorkDaysDatasourceImpl, PaymentsDatasourceImpl> {
    pub(crate) fn new(policy: IngestPolicy) -> Self {
        RecordsRepositoryImpl {
            work_days_datasource: WorkDaysDatasourceImpl::new(policy.clone()),
            payments_datasource: PaymentsDatasourceImpl::new(policy),
        }
    }
}
