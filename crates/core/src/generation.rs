//! Generation Client Trait
//!
//! The seam between the roast pipeline and whatever produces text. Concrete
//! backends live in the `resume-roaster-llm` crate; tests supply their own.

use async_trait::async_trait;

use crate::error::CoreResult;

/// A text-generation backend, treated as an opaque function from prompt to text.
///
/// Implementations perform at most one outbound call per invocation and never
/// retry. An empty reply is a valid output, not an error; only a failed call
/// is reported, as `CoreError::Backend`.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate raw text for a complete prompt.
    async fn generate(&self, prompt: &str) -> CoreResult<String>;
}

#[async_trait]
impl<T: GenerationClient + ?Sized> GenerationClient for std::sync::Arc<T> {
    async fn generate(&self, prompt: &str) -> CoreResult<String> {
        (**self).generate(prompt).await
    }
}
