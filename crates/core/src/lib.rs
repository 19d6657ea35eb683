//! Resume Roaster Core
//!
//! Foundational traits, error types, and data model for the Resume Roaster
//! workspace. This crate has zero dependencies on application-level code
//! (HTTP server, concrete LLM providers, etc.).
//!
//! ## Module Organization
//!
//! - `error` - Error taxonomy (`CoreError`, `BackendReason`, `CoreResult`)
//! - `generation` - The `GenerationClient` backend seam
//! - `roast` - Candidate and sanitized roast records, wire responses
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/async-trait/thiserror** - keeps build times minimal
//! 2. **Trait-based abstractions** - backends are swappable and mockable
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod error;
pub mod generation;
pub mod roast;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{BackendReason, CoreError, CoreResult};

// ── Backend Seam ───────────────────────────────────────────────────────
pub use generation::GenerationClient;

// ── Data Model ─────────────────────────────────────────────────────────
pub use roast::{
    CandidateResult, ErrorResponse, RoastResponse, RoastResult, MAX_SCORE, MIN_SCORE,
};
