//! HTTP client for the Impact Forge backend.
//!
//! Single-attempt request primitive shared by every typed endpoint. Each
//! call is bounded by a per-request timeout and resolves to exactly one
//! [`ApiError`] kind on failure; reqwest errors never cross this module's
//! boundary. The per-request deadline also covers body reads, and reqwest
//! drops the timer with the request on every exit path.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::ports::ApiError;

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Typed client over the backend's JSON API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g.
    /// `http://localhost:8000/api`) with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(path, self.http.get(self.url(path))).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(path, self.http.post(self.url(path)).json(body))
            .await
    }

    /// Run one request to completion and classify every failure.
    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!(path, timeout_ms = self.timeout.as_millis() as u64, "issuing request");

        let response = builder
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            // Best-effort body read: an unreadable body is substituted
            // with the empty string, not surfaced as its own failure.
            let body = response.text().await.unwrap_or_default();
            warn!(path, status = status.as_u16(), "request failed");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(classify)
    }
}

/// Map a transport error onto the closed taxonomy.
fn classify(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else if err.is_connect() {
        ApiError::network(format!("Connection failed: {}", err))
    } else if err.is_decode() {
        ApiError::network(format!("Malformed response body: {}", err))
    } else {
        ApiError::network(err.to_string())
    }
}
