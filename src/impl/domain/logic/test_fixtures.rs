use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::{Payment, WorkDay};

pub(crate) fn money(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub(crate) fn work_day(id: &str, work_date: &str, salary: &str, bonus: &str) -> WorkDay {
    WorkDay::new(id, date(work_date), money(salary), money(bonus), "Work day")
}

pub(crate) fn payment(id: &str, payment_date: &str, amount: &str) -> Payment {
    Payment::new(id, date(payment_date), money(amount), "Payment")
}
