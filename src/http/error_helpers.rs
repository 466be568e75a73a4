//! Error handling utilities for HTTP responses and error context formatting.

use crate::errors::FetchError;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Maximum characters to include from a response body in error messages
const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

/// Checks if an HTTP response is successful, returning it if so or an error otherwise.
///
/// The body of a failed response is never read; the error carries only the
/// caller's label and the status code.
///
/// # Errors
///
/// Returns [`FetchError::Status`] on any non-2xx status.
pub fn check_response(response: Response, label: &str) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            label: label.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Deserializes a response body, attaching a preview of the body on failure.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] naming `context` and quoting the first 200
/// characters of `body`.
pub fn deserialize_with_context<T: DeserializeOwned>(
    body: &str,
    context: &str,
) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| {
        FetchError::Decode(format!("{context}: {}", format_json_parse_error(body, e)))
    })
}

/// Formats JSON parsing context by including a preview of the raw JSON.
pub fn format_json_parse_error(json_str: &str, error: serde_json::Error) -> String {
    let preview = truncate_for_context(json_str, ERROR_BODY_PREVIEW_LENGTH);
    format!("JSON parse error: {} | Context: {}", error, preview)
}

/// Truncates a string to specified length, adding "..." if truncated.
///
/// Uses character-boundary-aware slicing to prevent panics on multi-byte UTF-8 characters.
pub(crate) fn truncate_for_context(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        // Largest char boundary whose character still ends at or before max_len
        let truncate_at = s
            .char_indices()
            .take_while(|(i, c)| i + c.len_utf8() <= max_len)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &s[..truncate_at])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_truncate_for_context_short_string() {
        assert_eq!(truncate_for_context("Short", 100), "Short");
    }

    #[test]
    fn test_truncate_for_context_long_string() {
        let long_str = "a".repeat(300);
        let result = truncate_for_context(&long_str, 200);
        assert_eq!(result.len(), 203); // 200 + "..."
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_for_context_exactly_at_boundary() {
        let exact = "a".repeat(200);
        assert_eq!(truncate_for_context(&exact, 200), exact);
    }

    #[test]
    fn test_truncate_for_context_utf8_boundary() {
        // 198 + 4 = 202 bytes; the emoji must not be split
        let emoji_str = "x".repeat(198) + "🎉";
        let result = truncate_for_context(&emoji_str, 200);
        assert_eq!(result.len(), 201);
        assert!(!result.contains("🎉"));
    }

    #[test]
    fn test_format_json_parse_error() {
        let html = "<!DOCTYPE html><html><body>Throttled</body></html>";
        let err = serde_json::from_str::<serde_json::Value>(html).unwrap_err();
        let result = format_json_parse_error(html, err);

        assert!(result.contains("JSON parse error"));
        assert!(result.contains("Context:"));
        assert!(result.contains("Throttled"));
    }

    #[test]
    fn test_deserialize_with_context_success() {
        let value: serde_json::Value =
            deserialize_with_context(r#"[{"name": "Spain"}]"#, "country").unwrap();
        assert_eq!(value[0]["name"], "Spain");
    }

    #[test]
    fn test_deserialize_with_context_names_context() {
        let err = deserialize_with_context::<serde_json::Value>("not json", "country search")
            .unwrap_err();
        match err {
            FetchError::Decode(message) => {
                assert!(message.starts_with("country search:"));
                assert!(message.contains("not json"));
            }
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn prop_truncate_never_exceeds_limit(s in "\\PC{0,400}", max_len in 0usize..300) {
            let result = truncate_for_context(&s, max_len);
            if s.len() <= max_len {
                prop_assert_eq!(result, s);
            } else {
                prop_assert!(result.ends_with("..."));
                prop_assert!(result.len() <= max_len + 3);
                prop_assert!(s.starts_with(result.trim_end_matches("...")));
            }
        }
    }
}
