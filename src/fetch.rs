//! Single-attempt page fetching.
//!
//! [`PageFetcher`] is the seam between the pipeline and the network: the
//! pipeline and scrapers only ever ask for "the markup at this URL".
//! [`HttpFetcher`] is the real implementation over `reqwest`.
//!
//! There is no retry layer. A failed fetch is reported once and the caller
//! decides whether that aborts a category or just drops one article.

use crate::config::Config;
use crate::error::FetchError;
use reqwest::Client;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Trait for async page retrieval.
pub trait PageFetcher {
    /// Fetch `url` and return its body as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`PageFetcher`] backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a client with the configured User-Agent and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the client can't be constructed.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(timeout)
            .build()?;
        Ok(Self { client, timeout })
    }
}

impl fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let t0 = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                %url,
                status = status.as_u16(),
                elapsed_ms = t0.elapsed().as_millis() as u64,
                "Non-success status"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_transport(url, e))?;
        debug!(
            %url,
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(body)
    }
}
