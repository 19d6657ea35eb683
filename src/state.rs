//! Application State
//!
//! Shared state handed to every HTTP handler: the roast pipeline and the
//! provider behind it (kept for health checks).

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use resume_roaster_llm::{
    create_provider, DeadlineClient, LlmError, LlmProvider, LlmResult, ProviderClient,
};

use crate::models::settings::AppConfig;
use crate::services::roast::RoastService;
use crate::utils::error::{AppError, AppResult};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Roast pipeline
    pub service: RoastService,
    /// Generation provider, used directly by the health route
    pub provider: Arc<dyn LlmProvider>,
    /// Deadline for any single backend call, health checks included
    pub deadline: Duration,
}

/// Deadline used until one is configured; matches the `AppConfig` default.
const DEFAULT_DEADLINE: Duration = Duration::from_secs(60);

impl AppState {
    pub fn new(service: RoastService, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            service,
            provider,
            deadline: DEFAULT_DEADLINE,
        }
    }

    /// Replace the backend call deadline.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Provider health check bounded by the call deadline.
    pub async fn health_check(&self) -> LlmResult<()> {
        match tokio::time::timeout(self.deadline, self.provider.health_check()).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    deadline_ms = self.deadline.as_millis() as u64,
                    "Health check exceeded its deadline"
                );
                Err(LlmError::Timeout {
                    seconds: self.deadline.as_secs(),
                })
            }
        }
    }

    /// Build provider -> ProviderClient -> DeadlineClient -> RoastService from configuration
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let catalog = config.prompt_catalog()?;
        let provider_config = config.provider_config().map_err(AppError::config)?;
        let provider =
            create_provider(provider_config).map_err(|e| AppError::config(e.to_string()))?;

        let deadline = Duration::from_secs(config.request_timeout_secs);
        let client = DeadlineClient::new(ProviderClient::new(provider.clone()), deadline);
        let service = RoastService::new(catalog, Arc::new(client));

        info!(
            provider = provider.name(),
            model = provider.model(),
            templates = service.catalog().len(),
            deadline_secs = config.request_timeout_secs,
            "Roast service ready"
        );

        Ok(Self::new(service, provider).with_deadline(deadline))
    }
}
