//! Core Error Types
//!
//! Defines the error taxonomy shared by every crate in the workspace.
//! These error types are dependency-free (only thiserror + serde + std) to keep
//! the core crate lightweight.
//!
//! Only configuration, backend and input validation failures are errors.
//! Malformed model output is never an error: extraction and sanitization
//! absorb it and substitute defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a generation backend call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendReason {
    /// Credential missing, invalid or lacking permission
    Unauthenticated,
    /// Quota exhausted, network failure, server error or deadline expiry
    Unavailable,
    /// The backend refused the request or its content
    Rejected,
    /// Anything else
    Unknown,
}

impl BackendReason {
    /// Return the wire name of this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendReason::Unauthenticated => "unauthenticated",
            BackendReason::Unavailable => "unavailable",
            BackendReason::Rejected => "rejected",
            BackendReason::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for BackendReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for the roast pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Static misconfiguration (malformed template, missing credential).
    /// Fatal and never retried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The generation call itself failed
    #[error("Backend error ({reason}): {message}")]
    Backend {
        reason: BackendReason,
        message: String,
    },

    /// The request was rejected before the pipeline started
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a backend error
    pub fn backend(reason: BackendReason, msg: impl Into<String>) -> Self {
        Self::Backend {
            reason,
            message: msg.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Backend failure reason, if this is a backend error.
    pub fn backend_reason(&self) -> Option<BackendReason> {
        match self {
            CoreError::Backend { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Message suitable for showing to an end user.
    ///
    /// Backend details stay in the logs; the user only learns what kind of
    /// failure happened.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Config(msg) => msg.clone(),
            CoreError::Validation(msg) => msg.clone(),
            CoreError::Backend { reason, .. } => match reason {
                BackendReason::Unauthenticated => {
                    "Failed to generate roast. Please check your API key and try again."
                        .to_string()
                }
                BackendReason::Unavailable => {
                    "The roast generator is temporarily unavailable. Please try again later."
                        .to_string()
                }
                BackendReason::Rejected => {
                    "The roast generator declined to process this document.".to_string()
                }
                BackendReason::Unknown => {
                    "An unexpected error occurred. Please try again.".to_string()
                }
            },
        }
    }
}
