//! HTTP API request and response bodies

use super::metrics::SavingsReport;
use super::{FoundationModel, TokenUsage};
use serde::{Deserialize, Serialize};

/// Validated body of `POST /api/translate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
    pub source_lang: String,
}

/// Validated body of the generation endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub text: String,
    pub language: String,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
    pub provider: String,
    pub target_lang: String,
    pub source_lang: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExampleResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub region: String,
    pub models: Vec<FoundationModel>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub output_text: String,
    pub model: String,
    pub language: String,
    pub region: String,
    /// "converse" or "invoke_model"
    pub inference_path: String,
    pub metrics: GenerateMetrics,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateMetrics {
    pub tokens: OptimizedTokens,
    pub performance: GeneratePerformance,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizedTokens {
    pub optimized: TokenUsage,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePerformance {
    pub processing_time: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTranslateResponse {
    pub generated_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub model: String,
    pub region: String,
    pub metrics: SavingsReport,
}
