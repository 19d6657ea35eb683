//! Resume Roaster LLM
//!
//! Provides a unified interface for interacting with text generation providers:
//! - Google Gemini
//! - OpenAI-compatible chat completion endpoints
//!
//! Also includes the HTTP client factory and the adapters that expose a
//! provider as the pipeline's `GenerationClient`.

use std::sync::Arc;

pub mod client;
pub mod gemini;
pub mod http_client;
pub mod openai;
pub mod provider;
pub mod types;

// Re-export main types
pub use client::{DeadlineClient, ProviderClient};
pub use gemini::GeminiProvider;
pub use http_client::build_http_client;
pub use openai::OpenAIProvider;
pub use provider::LlmProvider;
pub use types::*;

/// Create an LLM provider from a ProviderConfig.
///
/// Factory function that maps ProviderType to the concrete provider implementation.
pub fn create_provider(config: ProviderConfig) -> LlmResult<Arc<dyn LlmProvider>> {
    let provider: Arc<dyn LlmProvider> = match config.provider {
        ProviderType::Gemini => Arc::new(GeminiProvider::new(config)?),
        ProviderType::OpenAI => Arc::new(OpenAIProvider::new(config)?),
    };
    Ok(provider)
}
