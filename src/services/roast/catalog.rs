//! Prompt Catalog
//!
//! A fixed, read-only set of interchangeable prompt templates. One template is
//! picked per request through an injected `TemplateSelector` and the resume
//! text is substituted into it verbatim.

use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use tracing::debug;

use resume_roaster_core::{CoreError, CoreResult};

use super::prompts::{BUILTIN_PROMPTS, RESUME_PLACEHOLDER};

/// Matches anything shaped like a `{name}` placeholder.
fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{[A-Za-z_][A-Za-z0-9_]*\}").expect("placeholder pattern is valid")
    })
}

/// A validated prompt template.
///
/// Holds exactly one `{resume_text}` placeholder and no other `{name}`
/// placeholders, so rendering always yields a complete prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    /// Validate and wrap a template.
    pub fn new(text: impl Into<String>) -> CoreResult<Self> {
        let text = text.into();

        let occurrences = text.matches(RESUME_PLACEHOLDER).count();
        if occurrences != 1 {
            return Err(CoreError::config(format!(
                "Prompt template must contain exactly one {} placeholder, found {}",
                RESUME_PLACEHOLDER, occurrences
            )));
        }

        if let Some(other) = placeholder_regex()
            .find_iter(&text)
            .map(|m| m.as_str())
            .find(|m| *m != RESUME_PLACEHOLDER)
        {
            return Err(CoreError::config(format!(
                "Prompt template contains unknown placeholder {}",
                other
            )));
        }

        Ok(Self { text })
    }

    /// Substitute the source text into the placeholder.
    pub fn render(&self, source_text: &str) -> String {
        self.text.replacen(RESUME_PLACEHOLDER, source_text, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Source of template indices.
///
/// Must be safe to share across concurrent requests.
pub trait TemplateSelector: Send + Sync {
    /// Pick an index in `0..count`. `count` is always at least 1.
    fn pick(&self, count: usize) -> usize;
}

/// Uniform, independent choice per call using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl TemplateSelector for RandomSelector {
    fn pick(&self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count)
    }
}

/// Always picks the same index (wrapped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl TemplateSelector for FixedSelector {
    fn pick(&self, count: usize) -> usize {
        self.0 % count
    }
}

/// Ordered, non-empty set of prompt templates.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    templates: Vec<PromptTemplate>,
}

impl PromptCatalog {
    /// Build a catalog from raw template strings.
    ///
    /// Fails with a config error if the set is empty or any template is
    /// malformed. This is the only place template validity is checked.
    pub fn new<I, S>(templates: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates = templates
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                PromptTemplate::new(text).map_err(|e| match e {
                    CoreError::Config(msg) => {
                        CoreError::config(format!("Template #{}: {}", index, msg))
                    }
                    other => other,
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        if templates.is_empty() {
            return Err(CoreError::config("Prompt catalog has no templates"));
        }

        Ok(Self { templates })
    }

    /// The built-in catalog of three tones.
    pub fn builtin() -> Self {
        Self {
            templates: BUILTIN_PROMPTS
                .iter()
                .map(|text| PromptTemplate {
                    text: (*text).to_string(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn templates(&self) -> &[PromptTemplate] {
        &self.templates
    }

    /// Pick a template with `selector` and render it with `source_text`.
    ///
    /// Returns the chosen index alongside the complete prompt.
    pub fn select(&self, source_text: &str, selector: &dyn TemplateSelector) -> (usize, String) {
        let index = selector.pick(self.templates.len()) % self.templates.len();
        debug!(
            template_index = index,
            template_count = self.templates.len(),
            "Prompt template selected"
        );
        (index, self.templates[index].render(source_text))
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
