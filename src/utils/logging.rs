//! Logging utilities
//!
//! Subscriber setup and helpers for keeping prompt text out of log lines

use crate::config::LoggingConfig;

/// Truncate a string with a note about original length
///
/// Cuts on a char boundary so CJK output never splits a code point.
pub fn truncate_content(s: &str, max_chars: usize) -> String {
    let total = s.chars().count();
    if total > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}... ({} chars truncated)", head, total - max_chars)
    } else {
        s.to_string()
    }
}

/// Create a filtered summary of an outbound legacy payload for logging
pub fn payload_log_summary(model_id: &str, payload: &serde_json::Value) -> serde_json::Value {
    let keys: Vec<&str> = payload
        .as_object()
        .map(|obj| obj.keys().map(String::as_str).collect())
        .unwrap_or_default();

    serde_json::json!({
        "model": model_id,
        "keys": keys,
    })
}

/// Initialize the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.clone())
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.clone())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_multibyte() {
        let text = "日本語のテキストです";
        let truncated = truncate_content(text, 3);
        assert!(truncated.starts_with("日本語..."));
        assert!(truncated.contains("7 chars truncated"));
    }

    #[test]
    fn test_truncate_short_passthrough() {
        assert_eq!(truncate_content("hello", 10), "hello");
    }

    #[test]
    fn test_payload_summary_lists_keys() {
        let payload = serde_json::json!({"prompt": "secret", "max_tokens": 10});
        let summary = payload_log_summary("mistral.mistral-7b", &payload);
        assert_eq!(summary["model"], "mistral.mistral-7b");
        assert!(summary.to_string().find("secret").is_none());
    }
}
