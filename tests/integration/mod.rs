//! Integration Tests Module
//!
//! End-to-end tests for Resume Roaster: the roast pipeline driven through
//! mock generation backends, and the HTTP routes driven through the axum
//! router.

// Roast pipeline tests (selection, extraction, sanitization, failures)
mod roast_pipeline_test;

// HTTP route tests
mod http_routes_test;
