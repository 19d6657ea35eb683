//! Response Types
//!
//! Bodies returned by the HTTP surface besides the roast outcome itself,
//! which is `resume_roaster_core::RoastResponse`.

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
    pub model: String,
}

impl HealthResponse {
    /// Healthy response for the given backend
    pub fn ok(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            provider: provider.into(),
            model: model.into(),
        }
    }
}
