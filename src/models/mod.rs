//! Data models module
//!
//! Defines the transient records passed between adapters, the calculator and the HTTP layer

use serde::{Deserialize, Serialize};

pub mod api;
pub mod metrics;

/// Token usage reported by an inference call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input token count
    pub input: u64,
    /// Output token count
    pub output: u64,
    /// Total token count
    pub total: u64,
}

impl TokenUsage {
    /// Usage with `total` derived from the two counters
    pub fn new(input: u64, output: u64) -> Self {
        Self {
            input,
            output,
            total: input + output,
        }
    }

    /// Whether the provider reported nothing at all
    pub fn is_empty(&self) -> bool {
        self.input == 0 && self.output == 0
    }
}

/// Outcome of one generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Generated text
    pub text: String,
    /// Token counters
    pub token_usage: TokenUsage,
    /// Wall-clock duration of the generation step
    pub latency_ms: f64,
}

/// Outcome of one translation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub text: String,
}

/// Foundation model summary as exposed by `/api/bedrock/models`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundationModel {
    pub model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub input_modalities: Vec<String>,
    #[serde(default)]
    pub output_modalities: Vec<String>,
    #[serde(default)]
    pub inference_types_supported: Vec<String>,
}

impl FoundationModel {
    /// Whether the model produces text output
    pub fn outputs_text(&self) -> bool {
        self.output_modalities
            .iter()
            .any(|m| m.eq_ignore_ascii_case("TEXT"))
    }
}
