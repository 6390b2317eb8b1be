use chrono::{DateTime, NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;

use crate::{entities::RecordType, errors::InvalidDate};

/// Calendar date as sent by the record store: either a plain `YYYY-MM-DD`
/// date or an ISO date-time, of which only the date part is kept. No
/// timezone conversion is applied.
#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);

impl ISODateModel {
    pub(crate) fn parse(
        raw: &str,
        record_type: RecordType,
        record_id: &str,
    ) -> Result<Self, ServerError> {
        let s = raw.trim();
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(ISODateModel(d));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        {
            return Ok(ISODateModel(dt.date()));
        }
        DateTime::parse_from_rfc3339(s)
            .map(|dt| ISODateModel(dt.date_naive()))
            .map_err(|e| InvalidDate::with_debug(raw, record_type.as_str(), record_id, &e))
    }
}

impl Into<NaiveDate> for ISODateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}
