use fractic_server_error::ServerError;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::entities::{DataIssue, DataWarning, Payment, RecordType, WorkDay};

use super::{
    ingest_policy::IngestPolicy, iso_date_model::ISODateModel,
    money_amount_model::MoneyAmountModel,
};

const DEFAULT_WORK_DAY_DESCRIPTION: &str = "Work day";
const DEFAULT_PAYMENT_DESCRIPTION: &str = "Payment";

/// Largest amount accepted on a single record (10^15). Keeps every sum the
/// engine forms far below the `Decimal` range.
fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000_000, 0)
}

/// Records read from one source, and the issues found in them.
#[derive(Debug)]
pub(crate) struct ParsedRecords<T> {
    pub(crate) records: Vec<T>,
    pub(crate) warnings: Vec<DataWarning>,
}

impl<T> Default for ParsedRecords<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Unvalidated work-day fields, as text. Blank cells are `None`.
#[derive(Debug, Default)]
pub(crate) struct RawWorkDayModel {
    pub(crate) id: Option<String>,
    pub(crate) work_date: Option<String>,
    pub(crate) salary: Option<String>,
    pub(crate) bonus: Option<String>,
    pub(crate) description: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct RawPaymentModel {
    pub(crate) id: Option<String>,
    pub(crate) payment_date: Option<String>,
    pub(crate) amount: Option<String>,
    pub(crate) description: Option<String>,
}

// Record-store JSON.
// ---

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WorkDayJsonModel {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    work_date: Value,
    #[serde(default)]
    salary: Value,
    #[serde(default)]
    bonus: Value,
    #[serde(default)]
    description: Value,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentJsonModel {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    payment_date: Value,
    #[serde(default)]
    amount: Value,
    #[serde(default)]
    description: Value,
}

impl From<WorkDayJsonModel> for RawWorkDayModel {
    fn from(m: WorkDayJsonModel) -> Self {
        Self {
            id: json_cell(m.id),
            work_date: json_cell(m.work_date),
            salary: json_cell(m.salary),
            bonus: json_cell(m.bonus),
            description: json_cell(m.description),
        }
    }
}

impl From<PaymentJsonModel> for RawPaymentModel {
    fn from(m: PaymentJsonModel) -> Self {
        Self {
            id: json_cell(m.id),
            payment_date: json_cell(m.payment_date),
            amount: json_cell(m.amount),
            description: json_cell(m.description),
        }
    }
}

fn json_cell(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => cell(&s),
        other => Some(other.to_string()),
    }
}

/// Trimmed cell text, `None` when blank.
pub(crate) fn cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// Validation.
// ---

impl RawWorkDayModel {
    /// `Ok(None)` when the record is skipped (reported in `warnings`).
    pub(crate) fn into_entity(
        self,
        row: usize,
        policy: &IngestPolicy,
        warnings: &mut Vec<DataWarning>,
    ) -> Result<Option<WorkDay>, ServerError> {
        let id = self.id.unwrap_or_else(|| row_id(row));
        let Some(work_date) = parse_date(
            self.work_date.as_deref(),
            RecordType::WorkDay,
            &id,
            policy,
            warnings,
        )?
        else {
            return Ok(None);
        };

        let mut note = |issue: DataIssue| {
            warnings.push(DataWarning {
                record_type: RecordType::WorkDay,
                record_id: id.clone(),
                issue,
            })
        };
        let salary = match parse_amount(self.salary.as_deref(), "salary", &mut note) {
            Some(salary) => salary,
            None => policy.default_salary.unwrap_or_else(|| {
                note(DataIssue::MissingSalary);
                Decimal::ZERO
            }),
        };
        let bonus = parse_amount(self.bonus.as_deref(), "bonus", &mut note).unwrap_or_default();

        Ok(Some(WorkDay {
            id,
            work_date,
            salary,
            bonus,
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_WORK_DAY_DESCRIPTION.to_string()),
        }))
    }
}

impl RawPaymentModel {
    /// `Ok(None)` when the record is skipped (reported in `warnings`).
    pub(crate) fn into_entity(
        self,
        row: usize,
        policy: &IngestPolicy,
        warnings: &mut Vec<DataWarning>,
    ) -> Result<Option<Payment>, ServerError> {
        let id = self.id.unwrap_or_else(|| row_id(row));
        let Some(payment_date) = parse_date(
            self.payment_date.as_deref(),
            RecordType::Payment,
            &id,
            policy,
            warnings,
        )?
        else {
            return Ok(None);
        };

        let mut note = |issue: DataIssue| {
            warnings.push(DataWarning {
                record_type: RecordType::Payment,
                record_id: id.clone(),
                issue,
            })
        };
        let amount = match parse_amount(self.amount.as_deref(), "amount", &mut note) {
            Some(amount) => amount,
            None => {
                note(DataIssue::MalformedAmount {
                    field: "amount".to_string(),
                    raw: String::new(),
                });
                Decimal::ZERO
            }
        };

        Ok(Some(Payment {
            id,
            payment_date,
            amount,
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_PAYMENT_DESCRIPTION.to_string()),
        }))
    }
}

fn row_id(row: usize) -> String {
    format!("row-{}", row + 1)
}

fn parse_date(
    raw: Option<&str>,
    record_type: RecordType,
    record_id: &str,
    policy: &IngestPolicy,
    warnings: &mut Vec<DataWarning>,
) -> Result<Option<chrono::NaiveDate>, ServerError> {
    let raw = raw.unwrap_or("");
    match ISODateModel::parse(raw, record_type, record_id) {
        Ok(date) => Ok(Some(date.into())),
        Err(e) if policy.fail_on_invalid_dates => Err(e),
        Err(_) => {
            warnings.push(DataWarning {
                record_type,
                record_id: record_id.to_string(),
                issue: DataIssue::InvalidDate {
                    raw: raw.to_string(),
                },
            });
            Ok(None)
        }
    }
}

/// `None` when the cell is blank. Malformed, negative and out-of-range amounts
/// count as 0 and are reported through `note`.
fn parse_amount(
    raw: Option<&str>,
    field: &str,
    note: &mut impl FnMut(DataIssue),
) -> Option<Decimal> {
    let raw = raw?;
    match raw.parse::<MoneyAmountModel>() {
        Ok(MoneyAmountModel(amount)) if amount.abs() > max_amount() => {
            note(DataIssue::AmountOutOfRange {
                field: field.to_string(),
                raw: raw.to_string(),
            });
            Some(Decimal::ZERO)
        }
        Ok(MoneyAmountModel(amount)) if amount.is_sign_negative() && !amount.is_zero() => {
            note(DataIssue::NegativeAmount {
                field: field.to_string(),
                raw: raw.to_string(),
            });
            Some(Decimal::ZERO)
        }
        Ok(MoneyAmountModel(amount)) => Some(amount),
        Err(_) => {
            note(DataIssue::MalformedAmount {
                field: field.to_string(),
                raw: raw.to_string(),
            });
            Some(Decimal::ZERO)
        }
    }
}
