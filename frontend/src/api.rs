// Re-export all API modules
pub mod auth;
pub mod cache;
pub mod organizers;
pub mod tournaments;
pub mod utils;

use gloo_net::http::Response;
use log::error;
use serde::de::DeserializeOwned;
use shared::{ApiErrorBody, SharedError};

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    let base_url = Config::api_base_url();
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}

/// Transport failures never reached the server.
pub(crate) fn network_error(e: gloo_net::Error) -> SharedError {
    error!("Request failed: {}", e);
    SharedError::Network(e.to_string())
}

/// Reads a non-2xx response into an error plus whatever body the server sent.
pub(crate) async fn failure(response: Response) -> (SharedError, ApiErrorBody) {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let body = ApiErrorBody::parse(&text);
    let message = body
        .message()
        .unwrap_or_else(|| response.status_text());
    error!("API {} -> {}: {}", response.url(), status, message);
    (SharedError::from_status(status, message), body)
}

/// Decodes a 2xx body, or turns anything else into a [`SharedError`].
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SharedError> {
    if !response.ok() {
        return Err(failure(response).await.0);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| SharedError::Conversion(format!("Failed to parse response: {}", e)))
}
