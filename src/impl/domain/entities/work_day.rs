use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_derive::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDay {
    /// Opaque record-store identifier. Not used for aggregation.
    pub id: String,
    pub work_date: NaiveDate,
    /// Base pay for the day. Counts towards the salary obligation.
    pub salary: Decimal,
    /// Extra income for the day. Informational only, never part of the debt.
    pub bonus: Decimal,
    pub description: String,
}

impl WorkDay {
    pub fn new(
        id: impl Into<String>,
        work_date: NaiveDate,
        salary: Decimal,
        bonus: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            work_date,
            salary,
            bonus,
            description: description.into(),
        }
    }

    pub fn income(&self) -> Decimal {
        self.salary + self.bonus
    }
}
