use super::request::{FinishStatus, RawRollupRequest};
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// The rollup host server the dapp polls and reports to.
#[async_trait]
pub trait RollupHost: Send + Sync {
    /// Signals the outcome of the previous request and asks for the next one.
    ///
    /// `None` means the host has no pending request.
    async fn finish(&self, status: FinishStatus) -> Result<Option<RawRollupRequest>>;
    async fn report(&self, payload: String) -> Result<()>;
    async fn notice(&self, payload: String) -> Result<()>;
}

/// Source of the calendar date used by the end-of-month rule.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub type RollupHostBox = Box<dyn RollupHost>;
pub type ClockBox = Box<dyn Clock>;
