//! Services
//!
//! Business logic services for the application.
//! Services handle the core functionality and are called by the HTTP routes.

pub mod roast;

pub use roast::{PromptCatalog, RoastService};
