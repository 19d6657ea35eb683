//! Resume Roaster - HTTP service library
//!
//! Turns extracted resume text into a humorous critique, improvement
//! suggestions and a 1-10 score. It includes:
//! - The roast pipeline (prompt catalog, extraction, sanitization)
//! - Configuration loading
//! - The axum HTTP surface
//! - Data models and utilities

pub mod models;
pub mod server;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use models::settings::{AppConfig, SettingsUpdate};
pub use services::roast::{PromptCatalog, RoastService};
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
