//! Shared HTTP client with retry for transient failures.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::infrastructure::config::HttpConfig;

/// GET-only HTTP client used by the catalog and feed adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl HttpClient {
    /// Client with reqwest defaults and a single attempt per request.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &HttpConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                Client::new()
            });

        Self {
            http,
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        }
    }

    /// GET `url` and decode the JSON body.
    pub async fn get_json<T>(&self, url: &str) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        let response = self.get_with_retry(url).await?;
        Ok(response.json::<T>().await?)
    }

    /// GET `url` and return the body as text.
    pub async fn get_text(&self, url: &str) -> Result<String, CatalogError> {
        let response = self.get_with_retry(url).await?;
        Ok(response.text().await?)
    }

    /// Send a GET, retrying timeouts and connection failures.
    ///
    /// Non-success status codes are returned as errors without retrying.
    async fn get_with_retry(&self, url: &str) -> Result<Response, reqwest::Error> {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            match self.http.get(url).send().await {
                Ok(response) => {
                    debug!(url, status = %response.status(), attempt, "HTTP response");
                    return response.error_for_status();
                }
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err);
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
