use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidJson, "Invalid {record_type} JSON.", { record_type: &str });
define_client_error!(
    InvalidDate,
    "Invalid date '{date}' on {record_type} record '{record_id}'.",
    { date: &str, record_type: &str, record_id: &str }
);
define_client_error!(InvalidCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });

// Reporting-related.
define_client_error!(
    InvalidMonth,
    "Invalid month {month} (expected 1-12) for year {year}.",
    { year: i32, month: u32 }
);

