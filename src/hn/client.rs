//! HTTP client for search API requests.
//!
//! This module provides a low-level HTTP client wrapper that issues GET
//! requests against the configured base URL and hands back the decoded JSON
//! body, turning transport and status failures into `HnError`.

use super::HnError;
use reqwest::Method;
use serde_json::Value;

/// Makes requests to the search API and returns raw JSON bodies.
///
#[derive(Clone)]
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<Self, HnError> {
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder().build()?,
        })
    }

    /// Issue a GET request for the path with the given query parameters and
    /// return the JSON body, or an error for transport failures, non-success
    /// statuses and bodies that are not JSON.
    ///
    pub async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, HnError> {
        let request_url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        log::debug!("Requesting {} with params {:?}...", request_url, params);

        let response = self
            .http_client
            .request(Method::GET, &request_url)
            .query(params)
            .send()
            .await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            log::error!("API request failed with status {}: {}", status, message);
            return Err(HnError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let response_bytes = response.bytes().await?;
        log::debug!(
            "Received {} bytes from {}",
            response_bytes.len(),
            request_url
        );
        Ok(serde_json::from_slice::<Value>(&response_bytes)?)
    }
}
