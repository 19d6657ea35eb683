//! Roast Pipeline Integration Tests
//!
//! Drives `RoastService` end to end with mock generation clients:
//! - Structured replies, prose-wrapped replies, unusable replies
//! - Backend failures and deadline expiry
//! - Template selection coverage and concurrent use

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use resume_roaster::services::roast::sanitizer::{DEFAULT_ROAST, DEFAULT_SCORE, DEFAULT_SUGGESTIONS};
use resume_roaster::services::roast::{FixedSelector, PromptCatalog, RoastService};
use resume_roaster_core::{
    BackendReason, CoreError, CoreResult, GenerationClient, RoastResponse, MAX_SCORE, MIN_SCORE,
};
use resume_roaster_llm::DeadlineClient;

// ============================================================================
// Mock Clients
// ============================================================================

/// Replies with a fixed text and records prompts.
struct ScriptedClient {
    reply: CoreResult<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing(reason: BackendReason) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(CoreError::backend(reason, "upstream said no")),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> CoreResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}

/// Never answers within any reasonable deadline.
struct StalledClient;

#[async_trait]
impl GenerationClient for StalledClient {
    async fn generate(&self, _prompt: &str) -> CoreResult<String> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("{}".to_string())
    }
}

fn builtin_service(client: Arc<dyn GenerationClient>) -> RoastService {
    RoastService::new(PromptCatalog::builtin(), client)
}

const RESUME: &str = "Jordan Smith\nSenior Synergy Evangelist\nSkills: Microsoft Word, leveraging";

// ============================================================================
// Successful Pipelines
// ============================================================================

#[tokio::test]
async fn test_prose_wrapped_reply_is_extracted() {
    let client = ScriptedClient::replying(
        r#"Here you go: {"roast":"A","suggestions":["B"],"score":9} Thanks!"#,
    );
    let result = builtin_service(client.clone()).roast(RESUME).await.unwrap();

    assert_eq!(result.roast, "A");
    assert_eq!(result.suggestions, vec!["B"]);
    assert_eq!(result.score, 9);

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(RESUME));
    assert!(!prompts[0].contains("{resume_text}"));
}

#[tokio::test]
async fn test_fenced_reply_with_multiline_roast() {
    let reply = "```json\n{\n  \"roast\": \"Your title is a riddle.\\nYour skills list is a shrug.\\n\\n\\nBold.\",\n  \"suggestions\": [\"Use a real job title\", \"  \"],\n  \"score\": 3.5\n}\n```";
    let result = builtin_service(ScriptedClient::replying(reply))
        .roast(RESUME)
        .await
        .unwrap();

    assert_eq!(
        result.roast,
        "Your title is a riddle.\n\nYour skills list is a shrug.\n\nBold."
    );
    assert_eq!(result.suggestions, vec!["Use a real job title"]);
    assert_eq!(result.score, 4);
}

#[tokio::test]
async fn test_out_of_range_scores_are_clamped() {
    for (raw_score, expected) in [("0", 1u8), ("15", 10), ("7.6", 8), ("-2", 1)] {
        let reply = format!(r#"{{"roast": "ok", "score": {}}}"#, raw_score);
        let result = builtin_service(ScriptedClient::replying(&reply))
            .roast(RESUME)
            .await
            .unwrap();
        assert_eq!(result.score, expected, "score {}", raw_score);
    }
}

#[tokio::test]
async fn test_non_numeric_score_uses_default() {
    let result = builtin_service(ScriptedClient::replying(r#"{"roast": "ok", "score": "nine"}"#))
        .roast(RESUME)
        .await
        .unwrap();
    assert_eq!(result.score, DEFAULT_SCORE);
}

// ============================================================================
// Extraction Misses
// ============================================================================

#[tokio::test]
async fn test_reply_without_json_uses_raw_text_as_roast() {
    let result = builtin_service(ScriptedClient::replying("no json here at all"))
        .roast(RESUME)
        .await
        .unwrap();

    assert_eq!(result.roast, "no json here at all");
    assert_eq!(result.suggestions.len(), DEFAULT_SUGGESTIONS.len());
    assert_eq!(result.score, DEFAULT_SCORE);
}

#[tokio::test]
async fn test_blank_reply_hits_every_default() {
    let result = builtin_service(ScriptedClient::replying("   \n\n  "))
        .roast(RESUME)
        .await
        .unwrap();

    assert_eq!(result.roast, DEFAULT_ROAST);
    assert!(!result.suggestions.is_empty());
    assert_eq!(result.score, DEFAULT_SCORE);
}

#[tokio::test]
async fn test_garbage_fields_never_break_the_contract() {
    let replies = [
        r#"{"roast": null, "suggestions": null, "score": null}"#,
        r#"{"roast": ["list"], "suggestions": {"a": 1}, "score": true}"#,
        r#"{"unrelated": "payload"}"#,
        r#"{"roast": "", "suggestions": [""], "score": 1e308}"#,
        "{ broken json",
    ];

    for reply in replies {
        let result = builtin_service(ScriptedClient::replying(reply))
            .roast(RESUME)
            .await
            .unwrap();
        assert!(!result.roast.trim().is_empty(), "reply {}", reply);
        assert!(!result.suggestions.is_empty(), "reply {}", reply);
        assert!((MIN_SCORE..=MAX_SCORE).contains(&result.score), "reply {}", reply);
    }
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_backend_failure_is_reported_not_masked() {
    let outcome = builtin_service(ScriptedClient::failing(BackendReason::Unauthenticated))
        .roast(RESUME)
        .await;

    let err = outcome.clone().unwrap_err();
    assert_eq!(err.backend_reason(), Some(BackendReason::Unauthenticated));

    let response = RoastResponse::from(outcome);
    assert!(!response.is_success());
    let value = serde_json::to_value(&response).unwrap();
    assert!(value.get("error").is_some());
    assert!(value.get("roast").is_none());
    assert!(value.get("score").is_none());
}

#[tokio::test]
async fn test_blank_input_is_validation_error() {
    let client = ScriptedClient::replying("{}");
    let err = builtin_service(client.clone()).roast("").await.unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
    assert!(client.prompts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_deadline_expiry_is_unavailable() {
    let client = DeadlineClient::new(StalledClient, Duration::from_secs(60));
    let service = builtin_service(Arc::new(client));

    let err = service.roast(RESUME).await.unwrap_err();
    assert_eq!(err.backend_reason(), Some(BackendReason::Unavailable));
}

// ============================================================================
// Selection and Concurrency
// ============================================================================

#[tokio::test]
async fn test_every_template_is_eventually_selected() {
    let catalog = PromptCatalog::new(vec![
        "alpha {resume_text}",
        "beta {resume_text}",
        "gamma {resume_text}",
    ])
    .unwrap();
    let client = ScriptedClient::replying("{}");
    let service = RoastService::new(catalog, client.clone());

    for _ in 0..300 {
        service.roast("cv").await.unwrap();
    }

    let seen: HashSet<String> = client.prompts().into_iter().collect();
    let expected: HashSet<String> = ["alpha cv", "beta cv", "gamma cv"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn test_builtin_templates_are_all_reachable() {
    let catalog = PromptCatalog::builtin();
    for index in 0..catalog.len() {
        let client = ScriptedClient::replying("{}");
        let service = RoastService::new(PromptCatalog::builtin(), client.clone())
            .with_selector(Arc::new(FixedSelector(index)));
        service.roast(RESUME).await.unwrap();
        assert_eq!(client.prompts(), vec![catalog.templates()[index].render(RESUME)]);
    }
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let client = ScriptedClient::replying(r#"{"roast": "Shared roast", "score": 6}"#);
    let service = builtin_service(client.clone());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move { service.roast(&format!("resume number {}", i)).await })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.roast, "Shared roast");
        assert_eq!(result.score, 6);
    }
    assert_eq!(client.prompts().len(), 16);
}
