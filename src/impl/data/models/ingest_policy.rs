use rust_decimal::Decimal;

/// How the ingestion boundary treats records it cannot take at face value.
#[derive(Debug, Clone, Default)]
pub(crate) struct IngestPolicy {
    /// Salary assumed for work-days that carry none.
    pub(crate) default_salary: Option<Decimal>,
    /// Fail the whole load on the first unparsable date instead of skipping
    /// the record and reporting it.
    pub(crate) fail_on_invalid_dates: bool,
}
