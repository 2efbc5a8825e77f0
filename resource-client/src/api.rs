// Client for the directory backend.
// A single passthrough request helper plus the list-resources call.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use shared_types::{ApiErrorBody, ResourceList, ResourceRecord};
use thiserror::Error;

pub const DEFAULT_ERROR_DETAIL: &str = "An error occured.";
pub const RESOURCES_ENDPOINT: &str = "resources";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{detail} (HTTP {status})")]
    Status { status: StatusCode, detail: String },
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Base URL and endpoint joined by exactly one `/`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Sends `method` to `endpoint` and decodes the JSON body. Non-2xx
    /// responses become [`ApiError::Status`] carrying the backend's `detail`.
    pub async fn make_request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!(%method, %url, "api request");

        let response = self.http.request(method, &url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = error_detail(&body);
            tracing::warn!(%status, %url, %detail, "api request failed");
            return Err(ApiError::Status { status, detail });
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn fetch_resources(&self) -> Result<Vec<ResourceRecord>, ApiError> {
        let list: ResourceList = self.make_request(Method::GET, RESOURCES_ENDPOINT).await?;
        tracing::info!(count = list.resources.len(), "fetched resources");
        Ok(list.resources)
    }
}

/// `detail` from an error body, or the generic message when the body is not
/// the expected JSON.
pub fn error_detail(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| DEFAULT_ERROR_DETAIL.to_string())
}
