//! Page fetching.
//!
//! [`PageSource`] abstracts where an audited page comes from; [`HttpFetcher`]
//! is the network implementation.

use crate::error::{AuditError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// URL after redirects.
    pub final_url: String,
    pub status: u16,
    pub html: String,
}

/// Source of page HTML for an audit.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch `url`, failing on network errors, timeouts and non-success statuses.
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// Plain HTTP GET with a bounded timeout and no custom headers.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuditError::Config(format!("HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        debug!(url = %url, "HTTP fetch starting");
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            AuditError::from_fetch(url, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "non-success status");
            return Err(AuditError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let html = response
            .text()
            .await
            .map_err(|e| AuditError::from_fetch(url, e))?;

        debug!(url = %url, final_url = %final_url, bytes = html.len(), "HTTP fetch complete");
        Ok(FetchedPage {
            final_url,
            status: status.as_u16(),
            html,
        })
    }
}
