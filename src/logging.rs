//! Process logging.
//!
//! Diagnostics go to stderr through `tracing`; the filter comes from
//! `RUST_LOG` and defaults to `info`. Payroll outcomes themselves are never
//! written here, they travel to the rollup host as notices and reports.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=rollup_payroll=debug rollup-payroll --rollup-url http://127.0.0.1:5004
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
