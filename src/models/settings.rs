//! Settings Models
//!
//! Application configuration and settings data structures.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use resume_roaster_core::CoreResult;
use resume_roaster_llm::{ProviderConfig, ProviderType};

use crate::services::roast::PromptCatalog;

/// Environment variable the original deployment used for the Gemini key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Application configuration, optionally stored in a JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generation provider: "gemini" or "openai"
    pub provider: String,
    /// Provider API key. Never written back to disk.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// Endpoint override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Output token limit
    pub max_tokens: u32,
    /// Deadline for one generation call, in seconds
    pub request_timeout_secs: u64,
    /// HTTP listen address
    pub bind_addr: String,
    /// Maximum accepted request body, in bytes
    pub max_body_bytes: usize,
    /// Replacement prompt templates; the built-in set is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_templates: Option<Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            base_url: None,
            temperature: 0.9,
            max_tokens: 2048,
            request_timeout_secs: 60,
            bind_addr: "127.0.0.1:3000".to_string(),
            max_body_bytes: 1024 * 1024,
            prompt_templates: None,
        }
    }
}

/// Settings update (partial), typically read from environment variables
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub provider: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub bind_addr: Option<String>,
}

impl SettingsUpdate {
    /// Collect overrides through `lookup` (usually `std::env::var`).
    ///
    /// `ROAST_API_KEY` wins over `GEMINI_API_KEY`. Empty values are ignored.
    /// An unparseable timeout is reported as an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let request_timeout_secs = match get("ROAST_TIMEOUT_SECS") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid ROAST_TIMEOUT_SECS: {}", raw))?,
            ),
            None => None,
        };

        Ok(Self {
            provider: get("ROAST_PROVIDER"),
            api_key: get("ROAST_API_KEY").or_else(|| get(GEMINI_API_KEY_ENV)),
            model: get("ROAST_MODEL"),
            base_url: get("ROAST_BASE_URL"),
            request_timeout_secs,
            bind_addr: get("ROAST_BIND_ADDR"),
        })
    }
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(provider) = update.provider {
            self.provider = provider;
        }
        if let Some(api_key) = update.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(base_url) = update.base_url {
            self.base_url = Some(base_url);
        }
        if let Some(timeout) = update.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        if let Some(bind_addr) = update.bind_addr {
            self.bind_addr = bind_addr;
        }
    }

    /// Parsed provider type
    pub fn provider_type(&self) -> Result<ProviderType, String> {
        self.provider.parse()
    }

    /// Provider configuration derived from these settings
    pub fn provider_config(&self) -> Result<ProviderConfig, String> {
        Ok(ProviderConfig {
            provider: self.provider_type()?,
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        })
    }

    /// Prompt catalog: the custom templates when configured, else the built-in set
    pub fn prompt_catalog(&self) -> CoreResult<PromptCatalog> {
        match &self.prompt_templates {
            Some(templates) => PromptCatalog::new(templates.iter().cloned()),
            None => Ok(PromptCatalog::builtin()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let provider = self.provider_type()?;

        if self
            .api_key
            .as_deref()
            .map_or(true, |key| key.trim().is_empty())
        {
            let hint = match provider {
                ProviderType::Gemini => GEMINI_API_KEY_ENV,
                ProviderType::OpenAI => "ROAST_API_KEY",
            };
            return Err(format!(
                "API key not configured. Please set {} in your environment variables.",
                hint
            ));
        }

        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Invalid temperature: {}. Must be between 0.0 and 2.0",
                self.temperature
            ));
        }

        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }

        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be at least 1 second".to_string());
        }

        if self.max_body_bytes == 0 {
            return Err("max_body_bytes must be greater than 0".to_string());
        }

        self.bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| format!("Invalid bind address: {}", self.bind_addr))?;

        self.prompt_catalog().map_err(|e| e.to_string())?;

        Ok(())
    }
}
