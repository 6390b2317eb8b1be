//! Settings for loading and reporting, read from `config/salary_ledger.toml`
//! (section `[ledger]`) and `SALARY_LEDGER__LEDGER__*` environment variables.

use config::{Config, ConfigError, Environment, File};
use fractic_server_error::ServerError;
use iso_currency::Currency;
use rust_decimal::Decimal;
use serde_derive::Deserialize;

use crate::{
    data::models::ingest_policy::IngestPolicy,
    entities::{AverageBasis, AverageIncomePolicy},
    errors::InvalidCurrencyCode,
};

pub const DEFAULT_CONFIG_PATH: &str = "config/salary_ledger.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// ISO 4217 code. Display only; amounts are never converted.
    pub currency: String,
    pub average_basis: AverageBasis,
    pub average_scale: u32,
    /// Salary assumed for work-days recorded without one. When unset such
    /// days count as 0 and are reported.
    pub default_salary: Option<Decimal>,
    /// Reject the whole load on an unparsable date instead of skipping the
    /// record.
    pub fail_on_invalid_dates: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        let average = AverageIncomePolicy::default();
        Self {
            currency: "RUB".to_string(),
            average_basis: average.basis,
            average_scale: average.scale,
            default_salary: None,
            fail_on_invalid_dates: false,
        }
    }
}

impl LedgerConfig {
    /// Load from `config/salary_ledger.toml` (optional) and environment
    /// variables. Missing settings fall back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH, false)
    }

    pub fn load_from(path: &str, required: bool) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(Environment::with_prefix("SALARY_LEDGER").separator("__"))
            .build()?;

        match settings.get::<LedgerConfig>("ledger") {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound(_)) => Ok(LedgerConfig::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "ledger configuration could not be loaded from '{}' or environment: {}",
                path, e
            ))),
        }
    }

    pub fn currency(&self) -> Result<Currency, ServerError> {
        Currency::from_code(&self.currency).ok_or_else(|| InvalidCurrencyCode::new(&self.currency))
    }

    pub fn average_policy(&self) -> AverageIncomePolicy {
        AverageIncomePolicy {
            basis: self.average_basis,
            scale: self.average_scale,
        }
    }

    pub(crate) fn ingest_policy(&self) -> IngestPolicy {
        IngestPolicy {
            default_salary: self.default_salary,
            fail_on_invalid_dates: self.fail_on_invalid_dates,
        }
    }
}
