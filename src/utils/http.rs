use crate::utils::error::AppError;
use std::time::Duration;

/// Builds the HTTP client shared by every external provider
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::Upstream(format!("Failed to build HTTP client: {}", e)))
}

/// Sends the request and decodes the body as JSON.
///
/// Network errors, non-2xx statuses and undecodable bodies all become
/// `AppError::Upstream`, prefixed with the provider name. The request URL
/// carries the provider's API key, so it is stripped from every message.
pub async fn fetch_json<T>(request: reqwest::RequestBuilder, source: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    let response = request
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("Failed to fetch from {}: {}", source, e.without_url())))?;

    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "{} API error: {}",
            source,
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| {
            AppError::Upstream(format!("Failed to parse {} response: {}", source, e.without_url()))
        })
}
