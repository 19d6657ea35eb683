//! HTTP Client Factory
//!
//! Provides a factory function for building the reqwest client shared by providers.

use std::time::Duration;

use crate::types::{LlmError, LlmResult};

/// Connection establishment limit; the overall call deadline is applied by
/// `DeadlineClient`, not here.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a `reqwest::Client` for provider calls.
///
/// Proxy settings are taken from the standard environment variables.
pub fn build_http_client() -> LlmResult<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("resume-roaster/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| LlmError::Other {
            message: format!("Failed to build HTTP client: {}", e),
        })
}
