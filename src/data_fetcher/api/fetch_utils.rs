//! Generic HTTP fetching utilities with status and decode error mapping

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` and returns the body text of a successful response.
///
/// Transport failures and non-2xx statuses are mapped to specific
/// [`AppError`] variants. No retries are made.
#[instrument(skip(client))]
pub(crate) async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(AppError::from_status(status_code, reason, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    Ok(response_text)
}

/// Fetches `url` and decodes the body as JSON.
pub(crate) async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    let response_text = fetch_text(client, url).await?;
    decode_json(&response_text, url)
}

/// Decodes `text` as JSON, separating empty bodies, non-JSON bodies and
/// JSON of the wrong shape.
pub(crate) fn decode_json<T: DeserializeOwned>(text: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse response: {} (URL: {})", e, url);
            let trimmed = text.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if e.is_syntax() || e.is_eof() {
                Err(AppError::api_malformed_json(e.to_string(), url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
