use fractic_server_error::ServerError;

use crate::{
    data::models::{
        ingest_policy::IngestPolicy,
        raw_record_model::{cell, ParsedRecords, RawWorkDayModel, WorkDayJsonModel},
    },
    entities::WorkDay,
    errors::{InvalidCsv, InvalidJson},
};

pub(crate) trait WorkDaysDatasource: Send + Sync {
    /// Columns: `id,work_date,salary,bonus,description`, with a header row.
    fn from_csv_string(&self, s: &str) -> Result<ParsedRecords<WorkDay>, ServerError>;

    /// Array of record-store work-day objects.
    fn from_json_string(&self, s: &str) -> Result<ParsedRecords<WorkDay>, ServerError>;
}

pub(crate) struct WorkDaysDatasourceImpl {
    policy: IngestPolicy,
}

impl WorkDaysDatasourceImpl {
    pub(crate) fn new(policy: IngestPolicy) -> Self {
        Self { policy }
    }

    fn collect(
        &self,
        raw: impl Iterator<Item = Result<RawWorkDayModel, ServerError>>,
    ) -> Result<ParsedRecords<WorkDay>, ServerError> {
        let mut parsed = ParsedRecords::default();
        for (row, r) in raw.enumerate() {
            if let Some(work_day) = r?.into_entity(row, &self.policy, &mut parsed.warnings)? {
                parsed.records.push(work_day);
            }
        }
        tracing::debug!(
            records = parsed.records.len(),
            warnings = parsed.warnings.len(),
            "parsed work-day records"
        );
        Ok(parsed)
    }
}

impl WorkDaysDatasource for WorkDaysDatasourceImpl {
    fn from_csv_string(&self, s: &str) -> Result<ParsedRecords<WorkDay>, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes());
        self.collect(reader.records().map(|r| {
            r.map_err(|e| InvalidCsv::with_debug(&e)).map(|r| {
                // Extract from CSV record.
                RawWorkDayModel {
                    id: r.get(0).and_then(cell),
                    work_date: r.get(1).and_then(cell),
                    salary: r.get(2).and_then(cell),
                    bonus: r.get(3).and_then(cell),
                    description: r.get(4).and_then(cell),
                }
            })
        }))
    }

    fn from_json_string(&self, s: &str) -> Result<ParsedRecords<WorkDay>, ServerError> {
        let models: Vec<WorkDayJsonModel> =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("work-day", &e))?;
        self.collect(models.into_iter().map(|m| Ok(m.into())))
    }
}
