//! Result Sanitizer
//!
//! Turns a `CandidateResult` into a `RoastResult` that always satisfies the
//! output contract. Each field is handled independently; missing or unusable
//! values are replaced by fixed defaults.

use resume_roaster_core::{CandidateResult, RoastResult, MAX_SCORE, MIN_SCORE};

/// Roast used when neither the candidate nor the raw output has any text.
pub const DEFAULT_ROAST: &str = "This resume needs some serious work! It's like a blank canvas: lots of potential, but currently just... blank. Time to paint a masterpiece!";

/// Suggestions used when the candidate has none.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Add more specific achievements with numbers and metrics",
    "Remove generic buzzwords like 'synergy' and 'leverage'",
    "Improve formatting and make it easier to scan",
    "Include relevant keywords for your target industry",
    "Add a compelling summary that tells your story",
];

/// Neutral score used when the candidate has none.
pub const DEFAULT_SCORE: u8 = 5;

/// Produce the guaranteed output shape. Never fails.
///
/// `raw_fallback_text` is used as the roast body when the candidate has no
/// usable roast.
pub fn sanitize(candidate: CandidateResult, raw_fallback_text: &str) -> RoastResult {
    RoastResult {
        roast: sanitize_roast(candidate.roast.as_deref(), raw_fallback_text),
        suggestions: sanitize_suggestions(candidate.suggestions),
        score: sanitize_score(candidate.score),
    }
}

fn sanitize_roast(roast: Option<&str>, raw_fallback_text: &str) -> String {
    let body = roast
        .filter(|text| !text.trim().is_empty())
        .or_else(|| Some(raw_fallback_text).filter(|text| !text.trim().is_empty()))
        .unwrap_or(DEFAULT_ROAST);

    let normalized = normalize_paragraphs(body);
    if normalized.is_empty() {
        normalize_paragraphs(DEFAULT_ROAST)
    } else {
        normalized
    }
}

fn sanitize_suggestions(suggestions: Option<Vec<String>>) -> Vec<String> {
    let kept: Vec<String> = suggestions
        .unwrap_or_default()
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect();

    if kept.is_empty() {
        DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    } else {
        kept
    }
}

fn sanitize_score(score: Option<f64>) -> u8 {
    match score {
        Some(value) if !value.is_nan() => {
            value.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)).round() as u8
        }
        _ => DEFAULT_SCORE,
    }
}

/// Rewrite text so every line break is a paragraph break.
///
/// Line endings are unified to `\n`, trailing whitespace is dropped from each
/// line, blank lines are removed, and the remaining lines are joined with
/// exactly one blank line. The result is trimmed. Idempotent.
pub fn normalize_paragraphs(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}
