//! Upstream fetcher: one GET against browserless per scrape.
//!
//! - Single attempt, no retries, no caching.
//! - The whole exchange (connect, headers, body) is bounded by the timeout.
//! - Any HTTP status is accepted as long as the body decodes.

use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;

use browserless_exporter_core::error::{ExporterError, FetchError, Result};
use browserless_exporter_core::UpstreamSnapshot;

/// Anything that can produce a fresh snapshot on demand.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    fn endpoint(&self) -> &str;
    async fn fetch(&self) -> std::result::Result<UpstreamSnapshot, FetchError>;
}

/// HTTP-backed snapshot source.
#[derive(Debug, Clone)]
pub struct UpstreamFetcher {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl UpstreamFetcher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExporterError::Internal(format!("http client build failed: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    fn network_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            let reason = format!("timed out after {:?}", self.timeout);
            return FetchError::network(&self.endpoint, reason);
        }
        FetchError::network(&self.endpoint, error_chain(&e))
    }
}

#[async_trait]
impl SnapshotSource for UpstreamFetcher {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> std::result::Result<UpstreamSnapshot, FetchError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        // Non-2xx is not rejected here; a decodable body is still a snapshot.
        let status = resp.status();
        tracing::debug!(endpoint = %self.endpoint, %status, "upstream responded");

        let body = resp.bytes().await.map_err(|e| self.network_error(e))?;
        UpstreamSnapshot::decode(&body)
    }
}

/// reqwest's Display hides the root cause (e.g. "connection refused").
fn error_chain(e: &(dyn StdError + 'static)) -> String {
    let mut out = e.to_string();
    let mut cur = e.source();
    while let Some(src) = cur {
        out.push_str(": ");
        out.push_str(&src.to_string());
        cur = src.source();
    }
    out
}
