use std::fmt;

use serde_derive::Serialize;

use super::{payment::Payment, user::UserId, work_day::WorkDay};

/// Both record streams of one user, as read from the record store, plus any
/// data-quality issues found while reading them.
#[derive(Debug, Clone)]
pub struct SalaryRecords {
    pub user_id: UserId,
    pub work_days: Vec<WorkDay>,
    pub payments: Vec<Payment>,
    pub warnings: Vec<DataWarning>,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    WorkDay,
    Payment,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataIssue {
    /// The record was excluded from aggregation.
    InvalidDate { raw: String },
    /// Aggregated as 0.
    MalformedAmount { field: String, raw: String },
    /// Aggregated as 0.
    NegativeAmount { field: String, raw: String },
    /// Above the largest amount a single record may carry. Aggregated as 0.
    AmountOutOfRange { field: String, raw: String },
    /// No salary given and no default salary configured. Aggregated as 0.
    MissingSalary,
}

/// A record that was read but could not be taken at face value. Distinguishes
/// e.g. a malformed amount (counted as 0) from a legitimate zero.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataWarning {
    pub record_type: RecordType,
    pub record_id: String,
    pub issue: DataIssue,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::WorkDay => "work-day",
            RecordType::Payment => "payment",
        }
    }
}

impl DataWarning {
    pub fn skips_record(&self) -> bool {
        matches!(self.issue, DataIssue::InvalidDate { .. })
    }
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.record_type.as_str();
        let id = &self.record_id;
        match &self.issue {
            DataIssue::InvalidDate { raw } => {
                write!(f, "{kind} '{id}': invalid date '{raw}', record skipped")
            }
            DataIssue::MalformedAmount { field, raw } => {
                write!(f, "{kind} '{id}': malformed {field} '{raw}', counted as 0")
            }
            DataIssue::NegativeAmount { field, raw } => {
                write!(f, "{kind} '{id}': negative {field} '{raw}', counted as 0")
            }
            DataIssue::AmountOutOfRange { field, raw } => {
                write!(f, "{kind} '{id}': {field} '{raw}' out of range, counted as 0")
            }
            DataIssue::MissingSalary => write!(f, "{kind} '{id}': missing salary, counted as 0"),
        }
    }
}

/// Encoding of the record-store exports.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum RecordFormat {
    /// Header row, then `id,work_date,salary,bonus,description` or
    /// `id,payment_date,amount,description`.
    #[default]
    Csv,
    /// Arrays of camelCase objects as returned by the record store API.
    Json,
}
