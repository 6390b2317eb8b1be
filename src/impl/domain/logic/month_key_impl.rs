use chrono::{Datelike as _, NaiveDate};
use fractic_server_error::ServerError;

use crate::{entities::MonthKey, errors::InvalidMonth};

impl MonthKey {
    /// `month` is 1-based.
    pub fn new(year: i32, month: u32) -> Result<Self, ServerError> {
        if !(1..=12).contains(&month) {
            return Err(InvalidMonth::new(year, month));
        }
        Ok(Self { year, month })
    }

    /// Month the given calendar date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// January through December of the given year.
    pub fn months_of_year(year: i32) -> impl Iterator<Item = MonthKey> {
        (1..=12).map(move |month| MonthKey { year, month })
    }
}
