use fractic_server_error::ServerError;

use crate::{
    data::models::{
        ingest_policy::IngestPolicy,
        raw_record_model::{cell, ParsedRecords, PaymentJsonModel, RawPaymentModel},
    },
    entities::Payment,
    errors::{InvalidCsv, InvalidJson},
};

pub(crate) trait PaymentsDatasource: Send + Sync {
    /// Columns: `id,payment_date,amount,description`, with a header row.
    fn from_csv_string(&self, s: &str) -> Result<ParsedRecords<Payment>, ServerError>;

    /// Array of record-store payment objects.
    fn from_json_string(&self, s: &str) -> Result<ParsedRecords<Payment>, ServerError>;
}

pub(crate) struct PaymentsDatasourceImpl {
    policy: IngestPolicy,
}

impl PaymentsDatasourceImpl {
    pub(crate) fn new(policy: IngestPolicy) -> Self {
        Self { policy }
    }

    fn collect(
        &self,
        raw: impl Iterator<Item = Result<RawPaymentModel, ServerError>>,
    ) -> Result<ParsedRecords<Payment>, ServerError> {
        let mut parsed = ParsedRecords::default();
        for (row, r) in raw.enumerate() {
            if let Some(payment) = r?.into_entity(row, &self.policy, &mut parsed.warnings)? {
                parsed.records.push(payment);
            }
        }
        tracing::debug!(
            records = parsed.records.len(),
            warnings = parsed.warnings.len(),
            "parsed payment records"
        );
        Ok(parsed)
    }
}

impl PaymentsDatasource for PaymentsDatasourceImpl {
    fn from_csv_string(&self, s: &str) -> Result<ParsedRecords<Payment>, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes());
        self.collect(reader.records().map(|r| {
            r.map_err(|e| InvalidCsv::with_debug(&e)).map(|r| {
                // Extract from CSV record.
                RawPaymentModel {
                    id: r.get(0).and_then(cell),
                    payment_date: r.get(1).and_then(cell),
                    amount: r.get(2).and_then(cell),
                    description: r.get(3).and_then(cell),
                }
            })
        }))
    }

    fn from_json_string(&self, s: &str) -> Result<ParsedRecords<Payment>, ServerError> {
        let models: Vec<PaymentJsonModel> =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("payment", &e))?;
        self.collect(models.into_iter().map(|m| Ok(m.into())))
    }
}
