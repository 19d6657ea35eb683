//! Roast Data Model
//!
//! The transient extraction record and the guaranteed output contract.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Lowest score a roast can carry.
pub const MIN_SCORE: u8 = 1;
/// Highest score a roast can carry.
pub const MAX_SCORE: u8 = 10;

/// Best-effort record pulled out of raw model output.
///
/// Every field is optional because the model's adherence to the requested
/// format is not guaranteed. Fields of the wrong JSON shape are left `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateResult {
    pub roast: Option<String>,
    pub suggestions: Option<Vec<String>>,
    pub score: Option<f64>,
    /// Whether a structured payload was found and parsed at all
    pub parsed: bool,
}

impl CandidateResult {
    /// A candidate with every field absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no field could be read.
    pub fn is_empty(&self) -> bool {
        self.roast.is_none() && self.suggestions.is_none() && self.score.is_none()
    }
}

/// Sanitized critique returned to callers.
///
/// Invariants: `roast` is non-empty with paragraphs separated by exactly one
/// blank line, `suggestions` is non-empty with non-blank entries (first is
/// most important), and `MIN_SCORE <= score <= MAX_SCORE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastResult {
    pub roast: String,
    pub suggestions: Vec<String>,
    pub score: u8,
}

/// Error body: `{ "error": "..." }`, mutually exclusive with a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&CoreError> for ErrorResponse {
    fn from(err: &CoreError) -> Self {
        Self {
            error: err.user_message(),
        }
    }
}

/// Wire shape of a roast request outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoastResponse {
    Success(RoastResult),
    Failure(ErrorResponse),
}

impl RoastResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, RoastResponse::Success(_))
    }
}

impl From<CoreResult<RoastResult>> for RoastResponse {
    fn from(outcome: CoreResult<RoastResult>) -> Self {
        match outcome {
            Ok(result) => RoastResponse::Success(result),
            Err(err) => RoastResponse::Failure(ErrorResponse::from(&err)),
        }
    }
}
