//! HTTP client creation and configuration utilities

use crate::config::Config;
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

/// Creates the HTTP client shared by every request of a run.
///
/// # Features
/// * Timeout from `http_timeout_seconds`
/// * Browser-like `User-Agent` from config and a JSON `Accept` header on every request
pub fn create_http_client(config: &Config) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
        AppError::config_error(format!("Invalid user agent '{}': {e}", config.user_agent))
    })?;
    headers.insert(USER_AGENT, user_agent);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Creates an HTTP client for testing with default settings
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(&Config::default()).expect("Failed to create test HTTP client")
}
