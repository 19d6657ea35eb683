//! Structured Extractor
//!
//! Pulls a `CandidateResult` out of raw model output that may wrap the JSON
//! payload in prose or markdown fences. Extraction never fails: anything that
//! cannot be read becomes an absent field.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use resume_roaster_core::CandidateResult;

/// Characters of raw output included in miss logs.
const PREVIEW_CHARS: usize = 200;

/// Extract the best-effort candidate record from raw model output.
pub fn extract(raw: &str) -> CandidateResult {
    match find_payload(raw) {
        Some(object) => {
            let candidate = candidate_from_object(&object);
            debug!(
                has_roast = candidate.roast.is_some(),
                has_suggestions = candidate.suggestions.is_some(),
                has_score = candidate.score.is_some(),
                "Structured payload extracted"
            );
            candidate
        }
        None => {
            warn!(
                raw_len = raw.len(),
                preview = %raw.chars().take(PREVIEW_CHARS).collect::<String>(),
                "No structured payload found in model output"
            );
            CandidateResult::empty()
        }
    }
}

/// Locate and parse the JSON object embedded in `raw`.
///
/// The first `{` through the last `}` is tried first. If that slice does not
/// parse (stray braces in surrounding prose), each `{` is tried in order with a
/// string-aware balanced scan.
fn find_payload(raw: &str) -> Option<Map<String, Value>> {
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            if let Some(object) = parse_object(&raw[start..=end]) {
                return Some(object);
            }
        }
    }

    // Quadratic in the number of `{` in the worst case. Output length is
    // capped by the provider's `max_tokens`, which bounds the scan.
    raw.match_indices('{').find_map(|(offset, _)| {
        let rest = &raw[offset..];
        balanced_object_len(rest).and_then(|len| parse_object(&rest[..len]))
    })
}

fn parse_object(json_str: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(json_str) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

/// Byte length of the balanced `{...}` object at the start of `text`.
///
/// Braces inside JSON strings are ignored. Returns `None` if the object never
/// closes.
fn balanced_object_len(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index + ch.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}

/// Read the three known fields; wrong shapes are treated as absent.
fn candidate_from_object(object: &Map<String, Value>) -> CandidateResult {
    let roast = object
        .get("roast")
        .and_then(Value::as_str)
        .map(str::to_string);

    let suggestions = object
        .get("suggestions")
        .and_then(Value::as_array)
        .and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        });

    let score = object.get("score").and_then(Value::as_f64);

    CandidateResult {
        roast,
        suggestions,
        score,
        parsed: true,
    }
}
