//! Shared HTTP plumbing for the provider clients.

use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use waqt_types::WaqtError;

const USER_AGENT: &str = concat!("waqt/", env!("CARGO_PKG_VERSION"));

/// Builds a client with the given timeout.
pub fn client(timeout: Duration) -> Result<reqwest::Client, WaqtError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| WaqtError::NetworkError(format!("Failed to create HTTP client: {}", e)))
}

/// Sends a JSON GET with query parameters and decodes the body.
///
/// The status code is not checked: providers report failures inside the
/// body, so decoding is attempted either way. URLs are stripped from errors
/// since query strings carry API keys.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    params: &[(&str, &str)],
) -> Result<T, WaqtError> {
    let response = client
        .get(url)
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .query(params)
        .send()
        .await
        .map_err(|e| WaqtError::NetworkError(format!("Request to {} failed: {}", url, e.without_url())))?;

    response
        .json::<T>()
        .await
        .map_err(|e| {
            WaqtError::NetworkError(format!(
                "Failed to decode response from {}: {}",
                url,
                e.without_url()
            ))
        })
}
