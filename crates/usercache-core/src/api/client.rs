//! API client for the remote user service.
//!
//! Each call issues exactly one request. Retrying is left to the caller,
//! which for the CLI means the user running the command again.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::User;

use super::{ApiError, UserSource};

// ============================================================================
// Constants
// ============================================================================

/// Default base URL of the user service
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the user service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with the default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url = url, "GET");
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse JSON from {}: {}", url, e)))
    }
}

#[async_trait]
impl UserSource for ApiClient {
    async fn fetch_all(&self) -> Result<Vec<User>, ApiError> {
        let url = format!("{}/users", self.base_url);
        let users: Vec<User> = self.get(&url).await?;
        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    async fn fetch_by_id(&self, id: i64) -> Result<User, ApiError> {
        let url = format!("{}/users/{}", self.base_url, id);
        self.get(&url).await
    }
}
