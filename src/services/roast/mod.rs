//! Roast Pipeline
//!
//! Turns resume text into a sanitized critique:
//! - `catalog` / `prompts` - prompt templates and their selection
//! - `extractor` - best-effort structured record from raw model output
//! - `sanitizer` - default substitution and formatting guarantees
//! - `service` - orchestration with one error taxonomy

pub mod catalog;
pub mod extractor;
pub mod prompts;
pub mod sanitizer;
pub mod service;

pub use catalog::{FixedSelector, PromptCatalog, PromptTemplate, RandomSelector, TemplateSelector};
pub use extractor::extract;
pub use sanitizer::{normalize_paragraphs, sanitize};
pub use service::{RoastService, RoastStage};
