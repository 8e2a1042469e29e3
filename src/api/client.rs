//! HTTP transport for the host-agent API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use super::types::ErrorEnvelope;

/// Errors from a single fetch attempt. Loaders never see these directly;
/// the `HostApi` surface folds them into displayable values.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success HTTP status, carrying the response body text.
    #[error("HTTP error! status: {status}, message: {body}")]
    RequestFailed { status: u16, body: String },
    /// Network-level or body-decode failure.
    #[error("transport failure: {0}")]
    TransportFailed(String),
}

/// Transport seam: fetch one endpoint by name, folding every failure into a
/// value the caller can display. Implemented by the live HTTP client and by
/// the demo/test backends.
#[async_trait]
pub trait HostApi: Send + Sync {
    /// Fetch a JSON feed; failures come back as an error-envelope value.
    async fn fetch_structured(&self, endpoint: &str) -> Value;
    /// Fetch a plain-text feed; failures come back as readable error text.
    async fn fetch_text(&self, endpoint: &str) -> String;
}

/// HTTP client for the host-agent API. One attempt per call, no retries;
/// callers that need fresh data issue a fresh call.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client against `base_url` (scheme://host:port).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(|e| ApiError::TransportFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Request URL for a named endpoint under the fixed `/api/` prefix.
    fn url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    async fn get_response(&self, endpoint: &str) -> Result<reqwest::Response, ApiError> {
        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| ApiError::TransportFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::RequestFailed { status, body });
        }

        Ok(response)
    }

    /// Single GET attempt returning decoded JSON.
    async fn get_json(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.get_response(endpoint)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::TransportFailed(e.to_string()))
    }

    /// Single GET attempt returning the raw body text.
    async fn get_text(&self, endpoint: &str) -> Result<String, ApiError> {
        self.get_response(endpoint)
            .await?
            .text()
            .await
            .map_err(|e| ApiError::TransportFailed(e.to_string()))
    }
}

#[async_trait]
impl HostApi for ApiClient {
    async fn fetch_structured(&self, endpoint: &str) -> Value {
        match self.get_json(endpoint).await {
            Ok(value) => value,
            Err(e) => {
                warn!("error fetching {}: {}", endpoint, e);
                ErrorEnvelope::new(format!("Failed to load data from {}. {}", endpoint, e))
                    .into_value()
            }
        }
    }

    async fn fetch_text(&self, endpoint: &str) -> String {
        match self.get_text(endpoint).await {
            Ok(text) => text,
            Err(e) => {
                warn!("error fetching {}: {}", endpoint, e);
                format!("Error fetching {}: {}", endpoint, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_endpoint() {
        let client = ApiClient::new("http://127.0.0.1:5000").unwrap();
        assert_eq!(client.url("cpu-info"), "http://127.0.0.1:5000/api/cpu-info");

        // A trailing slash on the base must not double up.
        let client = ApiClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(client.url("lxc"), "http://127.0.0.1:5000/api/lxc");
    }

    #[tokio::test]
    async fn structured_fetch_folds_failure_into_envelope() {
        // Nothing listens on port 9; the connection failure must come back
        // as an error-envelope value, never as a panic or Err.
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let value = client.fetch_structured("cpu-info").await;

        let error = value.get("error").and_then(Value::as_str).unwrap();
        assert!(error.starts_with("Failed to load data from cpu-info."));
    }

    #[tokio::test]
    async fn text_fetch_folds_failure_into_error_text() {
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let text = client.fetch_text("live-stats").await;
        assert!(text.starts_with("Error fetching live-stats:"));
    }
}
