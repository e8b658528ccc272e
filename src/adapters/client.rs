//! Shared HTTP client construction for the provider adapters.
//!
//! All three providers get the same fixed header pair and timeout.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;

use crate::ports::source::SourceError;

/// Default request timeout applied to every provider call
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent with every provider request
pub const REQUEST_USER_AGENT: &str = "Mozilla/5.0";

/// Build a reqwest client with the provider header pair and timeout
pub fn build_client(timeout: Duration) -> Result<Client, SourceError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(REQUEST_USER_AGENT));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Fail on non-2xx responses with the offending URL in the error
pub fn ensure_success(response: &reqwest::Response) -> Result<(), SourceError> {
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status,
            url: response.url().to_string(),
        });
    }
    Ok(())
}
