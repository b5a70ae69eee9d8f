use crate::domain::ports::RollupHost;
use crate::domain::request::{FinishStatus, RawRollupRequest};
use crate::error::{DappError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct FinishBody {
    status: FinishStatus,
}

#[derive(Serialize)]
struct PayloadBody {
    payload: String,
}

/// `RollupHost` backed by the host's HTTP API.
///
/// Every call is a JSON `POST` under the configured base URL. Failures are
/// returned as-is; nothing is retried.
#[derive(Clone)]
pub struct HttpRollupHost {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRollupHost {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        body: &B,
    ) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.client.post(&url).json(body).send().await?;
        debug!(%url, status = %response.status(), "rollup host call");
        Ok(response)
    }

    async fn post_payload(&self, endpoint: &'static str, payload: String) -> Result<()> {
        let response = self.post(endpoint, &PayloadBody { payload }).await?;
        if !response.status().is_success() {
            return Err(DappError::HostStatus {
                endpoint,
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RollupHost for HttpRollupHost {
    async fn finish(&self, status: FinishStatus) -> Result<Option<RawRollupRequest>> {
        let response = self.post("finish", &FinishBody { status }).await?;

        match response.status() {
            StatusCode::ACCEPTED => Ok(None),
            s if s.is_success() => Ok(Some(response.json::<RawRollupRequest>().await?)),
            s => Err(DappError::HostStatus {
                endpoint: "finish",
                status: s.as_u16(),
            }),
        }
    }

    async fn report(&self, payload: String) -> Result<()> {
        self.post_payload("report", payload).await
    }

    async fn notice(&self, payload: String) -> Result<()> {
        self.post_payload("notice", payload).await
    }
}
