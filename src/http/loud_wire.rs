//! Wire-level debugging via LOUD_WIRE environment variable.
//!
//! When `LOUD_WIRE` is set to any value, prints the URL of every outgoing
//! request and the raw JSON of every response to stderr with pretty
//! formatting and colors.
//!
//! # Usage
//!
//! ```bash
//! LOUD_WIRE=1 cargo run --example country_lookup
//! ```
//!
//! # Output Format
//!
//! - Green `>>>` for outgoing requests
//! - Red `<<<` for incoming responses
//! - Timestamps and request IDs for correlation
//!
//! Long JSON arrays (a name search for "a" matches most of the world) are
//! collapsed to their first few items to keep output readable.

use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Request ID counter for correlating requests with responses
static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Cached check for whether LOUD_WIRE is enabled
static ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if LOUD_WIRE debugging is enabled.
///
/// The result is cached after first check. `LOUD_WIRE` must be set before
/// the first request is made.
#[must_use]
pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("LOUD_WIRE").is_ok())
}

/// Get the next request ID for correlation.
#[must_use]
pub fn next_request_id() -> usize {
    REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Number of array items kept when printing a response.
const ARRAY_PREVIEW_ITEMS: usize = 3;

/// Maximum length of a non-JSON body before truncation.
const RAW_BODY_PREVIEW_LENGTH: usize = 1000;

/// Collapse arrays longer than [`ARRAY_PREVIEW_ITEMS`] in a JSON value.
///
/// The dropped tail is replaced by a single string item such as
/// `"... 247 more"`.
fn collapse_long_arrays(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Array(arr) => {
            if arr.len() > ARRAY_PREVIEW_ITEMS {
                let dropped = arr.len() - ARRAY_PREVIEW_ITEMS;
                arr.truncate(ARRAY_PREVIEW_ITEMS);
                arr.push(serde_json::Value::String(format!("... {dropped} more")));
            }
            for item in arr.iter_mut() {
                collapse_long_arrays(item);
            }
        }
        serde_json::Value::Object(map) => {
            for val in map.values_mut() {
                collapse_long_arrays(val);
            }
        }
        _ => {}
    }
}

/// Format the current timestamp for log output.
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Log prefix with timestamp and request ID.
fn prefix(request_id: usize) -> String {
    let ts = timestamp().dimmed();
    format!(
        "{} {} {}",
        "[LOUD_WIRE]".bold(),
        ts,
        format!("[REQ#{}]", request_id).cyan()
    )
}

/// Log an outgoing HTTP request.
pub fn log_request(request_id: usize, method: &str, url: &str) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);
    let direction = ">>>".green().bold();

    eprintln!("{prefix} {direction} {method} {url}");
}

/// Log an incoming HTTP response status.
pub fn log_response_status(request_id: usize, status: u16) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);
    let direction = "<<<".red().bold();
    let status_text = if (200..300).contains(&status) {
        format!("{status} OK").green()
    } else {
        format!("{status} ERROR").red()
    };

    eprintln!("{prefix} {direction} {status_text}");
}

/// Log an incoming HTTP response body.
pub fn log_response_body(request_id: usize, body: &str) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);

    if let Ok(mut parsed) = serde_json::from_str::<serde_json::Value>(body) {
        collapse_long_arrays(&mut parsed);
        eprintln!("{prefix} {}:", "Response".red());
        if let Ok(colored) = colored_json::to_colored_json_auto(&parsed) {
            for line in colored.lines() {
                eprintln!("{prefix} {line}");
            }
        } else if let Ok(pretty) = serde_json::to_string_pretty(&parsed) {
            for line in pretty.lines() {
                eprintln!("{prefix} {line}");
            }
        }
    } else {
        let truncated = super::error_helpers::truncate_for_context(body, RAW_BODY_PREVIEW_LENGTH);
        eprintln!("{prefix} {}: {truncated}", "Response".red());
    }
}

/// Log a transport failure (no response was received).
pub fn log_transport_error(request_id: usize, error: &reqwest::Error) {
    if !is_enabled() {
        return;
    }

    let prefix = prefix(request_id);
    let direction = "<<<".red().bold();

    eprintln!("{prefix} {direction} {} {error}", "FAILED".red().bold());
}
