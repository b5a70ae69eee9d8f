use crate::domain::ledger::{Balance, DEFAULT_OPENING_BALANCE};
use crate::error::{DappError, Result};
use chrono::NaiveDate;
use reqwest::Url;
use rust_decimal::Decimal;

/// Environment variable carrying the rollup host base URL.
pub const ROLLUP_URL_ENV: &str = "ROLLUP_HTTP_SERVER_URL";

/// Validated startup settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the rollup host, without a trailing slash.
    pub rollup_url: String,
    pub opening_balance: Balance,
    /// Pins the date seen by the end-of-month rule; `None` uses the system clock.
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn new(
        rollup_url: &str,
        opening_balance: Decimal,
        today: Option<NaiveDate>,
    ) -> Result<Self> {
        let rollup_url = rollup_url.trim().trim_end_matches('/');
        if rollup_url.is_empty() {
            return Err(DappError::Config(format!("{ROLLUP_URL_ENV} is empty")));
        }

        let parsed = Url::parse(rollup_url)
            .map_err(|e| DappError::Config(format!("invalid rollup URL {rollup_url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DappError::Config(format!(
                "rollup URL must be http(s), got {:?}",
                parsed.scheme()
            )));
        }

        let opening_balance = Balance::new(opening_balance);
        if opening_balance.is_negative() {
            return Err(DappError::Config(format!(
                "opening balance must not be negative, got {opening_balance}"
            )));
        }

        Ok(Self {
            rollup_url: rollup_url.to_string(),
            opening_balance,
            today,
        })
    }

    /// Settings for `rollup_url` with the default opening balance and system clock.
    pub fn with_url(rollup_url: &str) -> Result<Self> {
        Self::new(rollup_url, DEFAULT_OPENING_BALANCE, None)
    }
}
