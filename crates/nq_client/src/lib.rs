use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use nq_core::planner::EndpointSelection;
use nq_core::{Error, NewsBackend, Result};

/// Upstream API host. The trailing slash matters for joining endpoint
/// paths.
pub const BASE_URL: &str = "https://newsapi.org/v2/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP fetcher for the upstream news API.
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    base_url: Url,
}

impl NewsClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Point the client at a different host, for tests against a local
    /// server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint_url(&self, selection: &EndpointSelection) -> Result<Url> {
        let path = selection.endpoint.path();
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl NewsBackend for NewsClient {
    async fn fetch(&self, selection: &EndpointSelection) -> Result<Value> {
        let url = self.endpoint_url(selection)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .query(&selection.params)
            .send()
            .await?
            .error_for_status()?;

        // A garbled body is a JSON error, not a transport one.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
