//! Model families
//!
//! Classifies a Bedrock model identifier once and keeps the per-family
//! legacy payload builders and response extractors together.

use crate::models::TokenUsage;
use crate::providers::InferenceParams;
use serde_json::{json, Value};

/// Anthropic messages API version accepted by Bedrock InvokeModel
pub const ANTHROPIC_BEDROCK_VERSION: &str = "bedrock-2023-05-31";

/// Provider family of a model identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    /// Claude models, messages wrapper
    Anthropic,
    /// Llama models, `prompt` + `max_gen_len`
    Llama,
    /// Mistral/Mixtral models, `prompt` + `max_tokens`
    Mistral,
    /// Cohere Command R models, `message` field
    CohereChat,
    /// Older Cohere Command models, `prompt` + `max_tokens`
    Cohere,
    /// Amazon Titan text models, `inputText` + `textGenerationConfig`
    Titan,
    /// Anything else
    Generic,
}

impl ModelFamily {
    /// Classify a model identifier
    ///
    /// Cross-region inference profile ids ("us.anthropic.claude-...") are
    /// matched by substring so the geo prefix does not matter.
    pub fn classify(model_id: &str) -> Self {
        let id = model_id.to_ascii_lowercase();

        if id.contains("anthropic.") || id.contains("claude") {
            ModelFamily::Anthropic
        } else if id.contains("meta.") || id.contains("llama") {
            ModelFamily::Llama
        } else if id.contains("mistral") || id.contains("mixtral") {
            ModelFamily::Mistral
        } else if id.contains("cohere.command-r") {
            ModelFamily::CohereChat
        } else if id.contains("cohere.") {
            ModelFamily::Cohere
        } else if id.contains("amazon.titan") {
            ModelFamily::Titan
        } else {
            ModelFamily::Generic
        }
    }

    /// Family name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::Anthropic => "anthropic",
            ModelFamily::Llama => "llama",
            ModelFamily::Mistral => "mistral",
            ModelFamily::CohereChat => "cohere-chat",
            ModelFamily::Cohere => "cohere",
            ModelFamily::Titan => "titan",
            ModelFamily::Generic => "generic",
        }
    }

    /// Build the InvokeModel request body
    pub fn build_payload(&self, prompt: &str, params: &InferenceParams) -> Value {
        match self {
            ModelFamily::Anthropic => json!({
                "anthropic_version": ANTHROPIC_BEDROCK_VERSION,
                "max_tokens": params.max_tokens,
                "temperature": params.temperature,
                "messages": [{
                    "role": "user",
                    "content": [{ "type": "text", "text": prompt }],
                }],
            }),
            ModelFamily::Llama => json!({
                "prompt": prompt,
                "max_gen_len": params.max_tokens,
                "temperature": params.temperature,
            }),
            ModelFamily::CohereChat => json!({
                "message": prompt,
                "max_tokens": params.max_tokens,
                "temperature": params.temperature,
            }),
            ModelFamily::Titan => json!({
                "inputText": prompt,
                "textGenerationConfig": {
                    "maxTokenCount": params.max_tokens,
                    "temperature": params.temperature,
                },
            }),
            ModelFamily::Mistral | ModelFamily::Cohere | ModelFamily::Generic => json!({
                "prompt": prompt,
                "max_tokens": params.max_tokens,
                "temperature": params.temperature,
            }),
        }
    }

    /// Extract generated text, trying this family's native shape first
    ///
    /// Returns `None` when no known shape carries non-blank text.
    pub fn extract_text(&self, body: &Value) -> Option<String> {
        let native = match self {
            ModelFamily::Anthropic => content_text(body.get("content")),
            ModelFamily::Llama => string_at(body, &["generation"]),
            ModelFamily::Mistral => first_item_field(body, "outputs", "text"),
            ModelFamily::CohereChat => string_at(body, &["text"]),
            ModelFamily::Cohere => first_item_field(body, "generations", "text"),
            ModelFamily::Titan => first_item_field(body, "results", "outputText"),
            ModelFamily::Generic => None,
        };

        native.or_else(|| extract_any_text(body))
    }

    /// Extract token usage; unknown shapes yield zero counters
    pub fn extract_usage(&self, body: &Value) -> TokenUsage {
        extract_usage(body)
    }
}

/// Models that cannot generate text (embeddings, rerankers)
pub fn is_non_generative(model_id: &str) -> bool {
    let id = model_id.to_ascii_lowercase();
    id.contains("rerank") || id.contains("embed")
}

/// Try every known response shape in order
pub fn extract_any_text(body: &Value) -> Option<String> {
    content_text(body.get("content"))
        .or_else(|| {
            content_text(
                body.get("output")
                    .and_then(|o| o.get("message"))
                    .and_then(|m| m.get("content")),
            )
        })
        .or_else(|| first_item_field(body, "results", "outputText"))
        .or_else(|| string_at(body, &["generation"]))
        .or_else(|| first_item_field(body, "generations", "text"))
        .or_else(|| first_item_field(body, "outputs", "text"))
        .or_else(|| string_at(body, &["text"]))
        .or_else(|| string_at(body, &["completion"]))
        .or_else(|| non_blank(body.as_str()))
}

/// Try every known usage shape in order
pub fn extract_usage(body: &Value) -> TokenUsage {
    let usage = body.get("usage");

    let pairs = [
        (
            count_at(usage, &["input_tokens"]),
            count_at(usage, &["output_tokens"]),
        ),
        (
            count_at(usage, &["inputTokens"]),
            count_at(usage, &["outputTokens"]),
        ),
        (
            count_at(usage, &["prompt_tokens"]),
            count_at(usage, &["completion_tokens"]),
        ),
        (
            count_at(Some(body), &["prompt_token_count"]),
            count_at(Some(body), &["generation_token_count"]),
        ),
        (
            count_at(Some(body), &["inputTextTokenCount"]),
            body.get("results")
                .and_then(|r| r.get(0))
                .and_then(|r| r.get("tokenCount"))
                .and_then(Value::as_u64),
        ),
        (
            count_at(Some(body), &["meta", "billed_units", "input_tokens"]),
            count_at(Some(body), &["meta", "billed_units", "output_tokens"]),
        ),
    ];

    pairs
        .into_iter()
        .find_map(|pair| match pair {
            (Some(input), Some(output)) => Some(TokenUsage::new(input, output)),
            (Some(input), None) => Some(TokenUsage::new(input, 0)),
            (None, Some(output)) => Some(TokenUsage::new(0, output)),
            (None, None) => None,
        })
        .unwrap_or_default()
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty()).map(str::to_string)
}

fn string_at(body: &Value, path: &[&str]) -> Option<String> {
    let mut current = body;
    for key in path {
        current = current.get(*key)?;
    }
    non_blank(current.as_str())
}

fn count_at(body: Option<&Value>, path: &[&str]) -> Option<u64> {
    let mut current = body?;
    for key in path {
        current = current.get(*key)?;
    }
    current.as_u64()
}

fn first_item_field(body: &Value, array: &str, field: &str) -> Option<String> {
    non_blank(
        body.get(array)
            .and_then(|a| a.get(0))
            .and_then(|item| item.get(field))
            .and_then(Value::as_str),
    )
}

/// Join the `text` entries of a content-block array
fn content_text(content: Option<&Value>) -> Option<String> {
    let blocks = content?.as_array()?;
    let text: String = blocks
        .iter()
        .filter_map(|block| block.get("text").and_then(Value::as_str))
        .collect();
    non_blank(Some(text.as_str()))
}
