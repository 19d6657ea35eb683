//! Generation Clients
//!
//! Adapters from `LlmProvider` to the pipeline's `GenerationClient` seam,
//! plus the deadline wrapper used to bound a single generation call.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, warn};

use resume_roaster_core::{CoreError, CoreResult, GenerationClient};

use crate::provider::LlmProvider;
use crate::types::{LlmError, LlmRequestOptions};

/// Exposes an `LlmProvider` as a `GenerationClient`.
///
/// One provider call per `generate`, no retries. A reply without text becomes
/// an empty string.
pub struct ProviderClient {
    provider: Arc<dyn LlmProvider>,
    request_options: LlmRequestOptions,
}

impl ProviderClient {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            request_options: LlmRequestOptions::default(),
        }
    }

    /// Set the per-request options sent with every call.
    pub fn with_request_options(mut self, request_options: LlmRequestOptions) -> Self {
        self.request_options = request_options;
        self
    }

    pub fn provider(&self) -> &Arc<dyn LlmProvider> {
        &self.provider
    }
}

#[async_trait]
impl GenerationClient for ProviderClient {
    async fn generate(&self, prompt: &str) -> CoreResult<String> {
        let started = Instant::now();
        let response = self
            .provider
            .send_message(prompt, self.request_options.clone())
            .await
            .map_err(|e| {
                warn!(
                    provider = self.provider.name(),
                    reason = %e.reason(),
                    "Generation call failed: {}",
                    e
                );
                CoreError::from(e)
            })?;

        debug!(
            provider = self.provider.name(),
            model = %response.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            response_len = response.text().len(),
            "Generation call completed"
        );

        Ok(response.content.unwrap_or_default())
    }
}

/// Bounds a `GenerationClient` call by a deadline.
///
/// Expiry is reported as `BackendError { reason: unavailable }`; the inner
/// call is dropped.
pub struct DeadlineClient<C> {
    inner: C,
    deadline: Duration,
}

impl<C: GenerationClient> DeadlineClient<C> {
    pub fn new(inner: C, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[async_trait]
impl<C: GenerationClient> GenerationClient for DeadlineClient<C> {
    async fn generate(&self, prompt: &str) -> CoreResult<String> {
        match tokio::time::timeout(self.deadline, self.inner.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    deadline_ms = self.deadline.as_millis() as u64,
                    "Generation call exceeded its deadline"
                );
                Err(LlmError::Timeout {
                    seconds: self.deadline.as_secs(),
                }
                .into())
            }
        }
    }
}
