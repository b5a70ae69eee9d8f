use chrono::NaiveDate;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rollup_payroll::application::engine::DappEngine;
use rollup_payroll::config::Config;
use rollup_payroll::domain::ledger::PayrollLedger;
use rollup_payroll::domain::ports::{ClockBox, RollupHostBox};
use rollup_payroll::infrastructure::clock::{FixedClock, SystemClock};
use rollup_payroll::infrastructure::http::HttpRollupHost;
use rollup_payroll::logging;
use rust_decimal::Decimal;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the rollup HTTP server
    #[arg(long, env = "ROLLUP_HTTP_SERVER_URL")]
    rollup_url: String,

    /// Starting balance of the company account
    #[arg(long, default_value = "50000")]
    opening_balance: Decimal,

    /// Pin the calendar date (YYYY-MM-DD) used for the end-of-month rule
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = Config::new(&cli.rollup_url, cli.opening_balance, cli.today).into_diagnostic()?;
    info!(rollup_url = %config.rollup_url, "HTTP rollup server configured");

    let host: RollupHostBox = Box::new(HttpRollupHost::new(config.rollup_url.clone()));
    let clock: ClockBox = match config.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    let engine = DappEngine::new(host, clock, PayrollLedger::seeded(config.opening_balance));
    engine.run().await.into_diagnostic()
}
