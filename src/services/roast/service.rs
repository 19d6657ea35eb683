//! Roast Service
//!
//! Drives one request through the pipeline:
//! select prompt -> generate -> extract -> sanitize.
//!
//! Only a missing input or a backend failure stops the pipeline. Once the
//! backend has replied, a `RoastResult` is always produced.

use std::sync::Arc;

use tracing::{debug, error, info};

use resume_roaster_core::{CoreError, CoreResult, GenerationClient, RoastResult};

use super::catalog::{PromptCatalog, RandomSelector, TemplateSelector};
use super::extractor::extract;
use super::sanitizer::sanitize;

/// Pipeline position of a single roast request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoastStage {
    Idle,
    PromptSelected,
    GenerationInFlight,
    ResponseReceived,
    Done,
    Failed,
}

impl std::fmt::Display for RoastStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoastStage::Idle => "idle",
            RoastStage::PromptSelected => "prompt_selected",
            RoastStage::GenerationInFlight => "generation_in_flight",
            RoastStage::ResponseReceived => "response_received",
            RoastStage::Done => "done",
            RoastStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Stateless roast pipeline, cheap to clone and safe to share across requests.
#[derive(Clone)]
pub struct RoastService {
    catalog: Arc<PromptCatalog>,
    client: Arc<dyn GenerationClient>,
    selector: Arc<dyn TemplateSelector>,
}

impl RoastService {
    /// Create a service that picks templates uniformly at random.
    pub fn new(catalog: PromptCatalog, client: Arc<dyn GenerationClient>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            client,
            selector: Arc::new(RandomSelector),
        }
    }

    /// Replace the template selector.
    pub fn with_selector(mut self, selector: Arc<dyn TemplateSelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// Roast a resume.
    ///
    /// Returns exactly one result or one error. Backend failures are always
    /// reported; unparseable model output never is.
    pub async fn roast(&self, source_text: &str) -> CoreResult<RoastResult> {
        if source_text.trim().is_empty() {
            debug!(stage = %RoastStage::Failed, "Rejected empty resume text");
            return Err(CoreError::validation("No resume text provided"));
        }

        let (template_index, prompt) = self.catalog.select(source_text, self.selector.as_ref());
        debug!(
            stage = %RoastStage::PromptSelected,
            template_index,
            source_len = source_text.len(),
            prompt_len = prompt.len(),
            "Prompt ready"
        );

        debug!(stage = %RoastStage::GenerationInFlight, "Sending prompt to backend");
        let raw = match self.client.generate(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    stage = %RoastStage::Failed,
                    reason = err.backend_reason().map(|r| r.as_str()).unwrap_or("none"),
                    "Roast generation failed: {}",
                    err
                );
                return Err(err);
            }
        };
        debug!(
            stage = %RoastStage::ResponseReceived,
            response_len = raw.len(),
            "Backend response received"
        );

        let candidate = extract(&raw);
        let fallback_text = if candidate.parsed { "" } else { raw.as_str() };
        let result = sanitize(candidate, fallback_text);

        info!(
            stage = %RoastStage::Done,
            template_index,
            score = result.score,
            suggestions = result.suggestions.len(),
            "Roast complete"
        );
        Ok(result)
    }
}
