//! SSE payload parsing for the hosted generation stream
//!
//! The service replies with `data:` lines; each carries a JSON payload
//! whose candidate parts hold the next text increment. Increments are
//! append-only and never overlap.

use serde_json::Value as JsonValue;

/// Extract the text increment from one SSE line, if any.
///
/// Non-`data` lines (event names, blank keep-alives) and the `[DONE]`
/// terminator yield `None`.
pub fn chunk_text(line: &str) -> Option<String> {
    let data = line.strip_prefix("data:")?.trim_start();
    if data.is_empty() || data == "[DONE]" {
        return None;
    }
    let json: JsonValue = serde_json::from_str(data).ok()?;
    extract_text(&json)
}

/// Concatenate the text parts of the first candidate.
pub fn extract_text(json: &JsonValue) -> Option<String> {
    let parts = json
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let mut out = String::new();
    for part in parts {
        if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
            out.push_str(text);
        }
    }

    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(text: &str) -> String {
        format!(
            r#"data: {{"candidates":[{{"content":{{"parts":[{{"text":{}}}]}}}}]}}"#,
            serde_json::to_string(text).unwrap()
        )
    }

    #[test]
    fn test_chunk_text_extracts_increment() {
        assert_eq!(chunk_text(&payload("hello")), Some("hello".to_string()));
    }

    #[test]
    fn test_chunk_text_preserves_newlines() {
        assert_eq!(
            chunk_text(&payload("## Analysis\n")),
            Some("## Analysis\n".to_string())
        );
    }

    #[test]
    fn test_chunk_text_ignores_non_data_lines() {
        assert_eq!(chunk_text(""), None);
        assert_eq!(chunk_text("event: ping"), None);
        assert_eq!(chunk_text("data:"), None);
        assert_eq!(chunk_text("data: [DONE]"), None);
    }

    #[test]
    fn test_chunk_text_ignores_malformed_json() {
        assert_eq!(chunk_text("data: {not json"), None);
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let json: serde_json::Value = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"a"},{"text":"b"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(&json), Some("ab".to_string()));
    }

    #[test]
    fn test_extract_text_missing_candidates() {
        let json: serde_json::Value = serde_json::from_str(r#"{"usage":{}}"#).unwrap();
        assert_eq!(extract_text(&json), None);
    }
}
