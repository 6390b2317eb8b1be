use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_derive::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub payment_date: NaiveDate,
    pub amount: Decimal,
    pub description: String,
}

impl Payment {
    pub fn new(
        id: impl Into<String>,
        payment_date: NaiveDate,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            payment_date,
            amount,
            description: description.into(),
        }
    }
}
