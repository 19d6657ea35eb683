//! LLM Provider Trait
//!
//! Defines the common interface for all LLM providers.

use async_trait::async_trait;

use super::types::{LlmError, LlmRequestOptions, LlmResponse, LlmResult, ProviderConfig};

/// Prompt used by `health_check` implementations.
pub(crate) const HEALTH_CHECK_PROMPT: &str = "Reply with the single word: ok";

/// Trait that all LLM providers must implement.
///
/// Provides a unified interface for:
/// - Single prompt completions (send_message)
/// - Health checking
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Send a prompt and get a complete response.
    ///
    /// # Arguments
    /// * `prompt` - The complete prompt text, sent as a single user turn
    /// * `request_options` - Per-request overrides
    ///
    /// # Returns
    /// Complete response from the model. A reply without text is returned
    /// with `content: None` rather than as an error.
    async fn send_message(
        &self,
        prompt: &str,
        request_options: LlmRequestOptions,
    ) -> LlmResult<LlmResponse>;

    /// Check if the provider is healthy and reachable.
    ///
    /// For API providers, this validates the API key with a tiny prompt.
    async fn health_check(&self) -> LlmResult<()> {
        self.send_message(HEALTH_CHECK_PROMPT, LlmRequestOptions::default())
            .await
            .map(|_| ())
    }

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;
}

/// Helper function to create an error for missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 => LlmError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => LlmError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => LlmError::ModelNotFound {
            model: body.to_string(),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
            retry_after: None,
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}

/// Convert a reqwest transport failure into an `LlmError`.
pub(crate) fn transport_error(err: reqwest::Error) -> LlmError {
    if err.is_timeout() {
        LlmError::NetworkError {
            message: format!("Request timed out: {}", err),
        }
    } else if err.is_connect() {
        LlmError::ProviderUnavailable {
            message: format!("Unable to reach the API: {}", err),
        }
    } else {
        LlmError::NetworkError {
            message: err.to_string(),
        }
    }
}
