//! Gemini Provider
//!
//! Implementation of the LlmProvider trait for Google's Generative Language API.
//! Only the non-streaming `generateContent` endpoint is used.

use async_trait::async_trait;
use serde::Deserialize;

use super::provider::{missing_api_key_error, parse_http_error, transport_error, LlmProvider};
use super::types::{
    LlmError, LlmRequestOptions, LlmResponse, LlmResult, ProviderConfig,
};
use crate::http_client::build_http_client;

/// Default Generative Language API base
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Error detail reasons Gemini uses for a bad key on an HTTP 400.
const API_KEY_ERROR_REASONS: &[&str] = &["API_KEY_INVALID", "API_KEY_EXPIRED"];

/// Finish reasons that mean the candidate was withheld for policy reasons.
const BLOCKED_FINISH_REASONS: &[&str] = &["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

/// Gemini provider
pub struct GeminiProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given configuration
    pub fn new(config: ProviderConfig) -> LlmResult<Self> {
        let client = build_http_client()?;
        Ok(Self { config, client })
    }

    /// Full URL of the generateContent endpoint for the configured model
    fn endpoint(&self) -> String {
        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(GEMINI_API_BASE)
            .trim_end_matches('/');
        format!("{}/models/{}:generateContent", base, self.config.model)
    }

    /// Build the request body for the API
    fn build_request_body(
        &self,
        prompt: &str,
        request_options: &LlmRequestOptions,
    ) -> serde_json::Value {
        serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ],
            "generationConfig": {
                "temperature": request_options
                    .temperature_override
                    .unwrap_or(self.config.temperature),
                "maxOutputTokens": request_options
                    .max_tokens_override
                    .unwrap_or(self.config.max_tokens),
            }
        })
    }

    /// Convert API response to LlmResponse
    fn parse_response(&self, response: GeminiResponse) -> LlmResult<LlmResponse> {
        let candidate = match response.candidates.into_iter().next() {
            Some(candidate) => candidate,
            None => {
                if let Some(reason) = response
                    .prompt_feedback
                    .and_then(|feedback| feedback.block_reason)
                {
                    return Err(LlmError::ContentBlocked { reason });
                }
                return Ok(LlmResponse {
                    content: None,
                    model: self.config.model.clone(),
                    finish_reason: None,
                });
            }
        };

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            if let Some(reason) = candidate
                .finish_reason
                .as_deref()
                .filter(|r| BLOCKED_FINISH_REASONS.contains(r))
            {
                return Err(LlmError::ContentBlocked {
                    reason: reason.to_string(),
                });
            }
        }

        Ok(LlmResponse {
            content: if text.is_empty() { None } else { Some(text) },
            model: response
                .model_version
                .unwrap_or_else(|| self.config.model.clone()),
            finish_reason: candidate.finish_reason,
        })
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn send_message(
        &self,
        prompt: &str,
        request_options: LlmRequestOptions,
    ) -> LlmResult<LlmResponse> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| missing_api_key_error("gemini"))?;

        let body = self.build_request_body(prompt, &request_options);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(transport_error)?;

        if status != 200 {
            return Err(classify_http_error(status, &body_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&body_text).map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        self.parse_response(gemini_response)
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Map a non-200 reply. Gemini reports a bad key as 400 `INVALID_ARGUMENT`
/// with an `API_KEY_INVALID` detail reason, not as 401.
fn classify_http_error(status: u16, body: &str) -> LlmError {
    if status == 400 {
        if let Some(reason) = api_key_error_reason(body) {
            return LlmError::AuthenticationFailed {
                message: format!("gemini: {}", reason),
            };
        }
    }
    parse_http_error(status, body, "gemini")
}

fn api_key_error_reason(body: &str) -> Option<String> {
    let envelope: GeminiErrorEnvelope = serde_json::from_str(body).ok()?;
    envelope
        .error
        .details
        .into_iter()
        .filter_map(|detail| detail.reason)
        .find(|reason| API_KEY_ERROR_REASONS.contains(&reason.as_str()))
}

// Gemini API error types

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    details: Vec<GeminiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    reason: Option<String>,
}

// Gemini API response types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}
