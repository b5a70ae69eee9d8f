use crate::domain::ports::RollupHost;
use crate::domain::request::{FinishStatus, RawRollupRequest};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct HostState {
    pending: VecDeque<RawRollupRequest>,
    finishes: Vec<FinishStatus>,
    reports: Vec<String>,
    notices: Vec<String>,
}

/// A scripted rollup host kept entirely in memory.
///
/// Requests queued with [`push`](Self::push) are handed out one per `finish`
/// call; once the queue is empty `finish` answers "no pending request".
/// Every finish status, report and notice is recorded for inspection.
///
/// `Clone` shares the underlying state, so a test can keep a handle while the
/// engine owns a boxed copy.
#[derive(Default, Clone)]
pub struct InMemoryRollupHost {
    state: Arc<RwLock<HostState>>,
}

impl InMemoryRollupHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, request: RawRollupRequest) {
        self.state.write().await.pending.push_back(request);
    }

    pub async fn pending(&self) -> usize {
        self.state.read().await.pending.len()
    }

    pub async fn finishes(&self) -> Vec<FinishStatus> {
        self.state.read().await.finishes.clone()
    }

    pub async fn reports(&self) -> Vec<String> {
        self.state.read().await.reports.clone()
    }

    pub async fn notices(&self) -> Vec<String> {
        self.state.read().await.notices.clone()
    }
}

#[async_trait]
impl RollupHost for InMemoryRollupHost {
    async fn finish(&self, status: FinishStatus) -> Result<Option<RawRollupRequest>> {
        let mut state = self.state.write().await;
        state.finishes.push(status);
        Ok(state.pending.pop_front())
    }

    async fn report(&self, payload: String) -> Result<()> {
        self.state.write().await.reports.push(payload);
        Ok(())
    }

    async fn notice(&self, payload: String) -> Result<()> {
        self.state.write().await.notices.push(payload);
        Ok(())
    }
}
