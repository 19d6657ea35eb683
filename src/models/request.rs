//! Request Types
//!
//! Bodies accepted by the HTTP surface.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/roast`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoastRequest {
    /// Extracted resume text. A missing field reads as empty and is rejected
    /// by the service.
    #[serde(default)]
    pub text: String,
}
