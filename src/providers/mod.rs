//! Provider module
//!
//! Defines the upstream provider traits and their implementations

pub mod bedrock;
pub mod google;

use crate::models::{FoundationModel, TokenUsage, TranslationResult};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Sampling parameters applied to every generation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InferenceParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self {
            max_tokens: 512,
            temperature: 0.7,
        }
    }
}

/// Reply of the unified conversational call
#[derive(Debug, Clone, PartialEq)]
pub struct ConverseReply {
    /// Concatenated text blocks; empty when the model returned none
    pub text: String,
    /// Usage counters, when the provider reported them
    pub usage: Option<TokenUsage>,
}

/// Foundation-model inference provider
///
/// Implementations cover the unified conversational API, the legacy
/// per-model invoke API and the model catalog.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Region the provider talks to
    fn region(&self) -> &str;

    /// Unified conversational call with a single user message
    async fn converse(
        &self,
        model_id: &str,
        prompt: &str,
        params: &InferenceParams,
    ) -> Result<ConverseReply>;

    /// Legacy invoke call with a provider-specific JSON body
    ///
    /// Returns the decoded response body; a body that is not JSON comes back
    /// as `Value::String`.
    async fn invoke_model(&self, model_id: &str, body: &Value) -> Result<Value>;

    /// List the foundation model catalog
    async fn list_foundation_models(&self) -> Result<Vec<FoundationModel>>;
}

/// Machine-translation provider
#[async_trait]
pub trait Translator: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Translate `text` from `source_lang` to `target_lang`
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslationResult>;
}

pub use bedrock::BedrockProvider;
pub use google::GoogleTranslator;
