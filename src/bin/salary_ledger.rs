use std::{path::PathBuf, process::ExitCode};

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use fractic_server_error::ServerError;
use salary_ledger::{
    entities::{user, RecordFormat},
    ledger_config::LedgerConfig,
    util::SalaryLedgerUtil,
};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "salary-ledger",
    version,
    about = "Monthly salary totals and outstanding balance from work-day and payment records"
)]
struct Cli {
    /// Work-day records file.
    #[arg(long)]
    workdays: PathBuf,

    /// Payment records file.
    #[arg(long)]
    payments: PathBuf,

    /// Encoding of both record files.
    #[arg(long, value_enum, default_value_t = Fmt::Csv)]
    format: Fmt,

    #[arg(long, default_value = "default")]
    user: String,

    /// Settings file (defaults to config/salary_ledger.toml, if present).
    #[arg(long)]
    config: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every month with records, newest first, with cumulative balance.
    Months,
    /// Per-month totals and average monthly income for one year.
    Annual {
        #[arg(long)]
        year: i32,
    },
    /// Work-days and totals of one month.
    Month {
        #[arg(long)]
        year: i32,
        /// 1 = January.
        #[arg(long)]
        month: u32,
    },
    /// Debt carried into a month plus that month's balance.
    Current {
        /// Defaults to today.
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// All-time totals.
    Stats,
}

/// Initialize tracing with SALARY_LEDGER_LOG environment variable.
///
/// Defaults to "info" level if SALARY_LEDGER_LOG is not set. Logs go to
/// stderr so that reports on stdout can be piped.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("SALARY_LEDGER_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli, config: LedgerConfig) -> Result<String, ServerError> {
    let util = SalaryLedgerUtil::new(&config)?;
    let format = match cli.format {
        Fmt::Csv => RecordFormat::Csv,
        Fmt::Json => RecordFormat::Json,
    };
    let (ledger, warnings) = util
        .from_files(&user(cli.user), &cli.workdays, &cli.payments, format)
        .await?;

    if cli.json {
        let report = match cli.command {
            Command::Months => json!(ledger),
            Command::Annual { year } => json!(ledger.annual_report(year)),
            Command::Month { year, month } => json!(ledger.monthly_detailed_report(year, month)?),
            Command::Current { as_of } => json!(ledger.current_month_summary(
                as_of.unwrap_or_else(|| chrono::Local::now().date_naive())
            )),
            Command::Stats => json!(ledger.statistics()),
        };
        return Ok(format!("{:#}\n", json!({ "report": report, "warnings": warnings })));
    }

    let report = match cli.command {
        Command::Months => util.render_months(&ledger),
        Command::Annual { year } => util.render_annual_report(&ledger, year),
        Command::Month { year, month } => {
            util.render_monthly_detailed_report(&ledger, year, month)?
        }
        Command::Current { as_of } => util.render_current_month_summary(
            &ledger,
            as_of.unwrap_or_else(|| chrono::Local::now().date_naive()),
        ),
        Command::Stats => util.render_statistics(&ledger),
    };
    let warnings = util.render_warnings(&warnings);
    if warnings.is_empty() {
        Ok(report)
    } else {
        Ok(format!("{}\n{}", report, warnings))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => LedgerConfig::load_from(path, true),
        None => LedgerConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "could not load configuration");
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = ?e, "salary-ledger failed");
            ExitCode::FAILURE
        }
    }
}
