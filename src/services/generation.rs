//! Generation adapter
//!
//! Wraps the prompt in a respond-in-language instruction and runs the
//! two-step strategy: unified Converse call first, legacy InvokeModel with a
//! family-specific payload when Converse fails for any reason.

use super::family::ModelFamily;
use crate::models::{GenerationResult, TokenUsage};
use crate::providers::{InferenceParams, InferenceProvider};
use crate::utils::error::{helpers::external_api_error, AppError, AppResult};
use crate::utils::logging::{payload_log_summary, truncate_content};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Error message for legacy responses with no recognizable text
pub const UNPARSEABLE_RESPONSE: &str = "Unparseable model response";

/// Which inference API produced the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationPath {
    /// Converse succeeded
    Unified,
    /// Converse failed with `reason`; InvokeModel succeeded
    Legacy { reason: String },
}

impl GenerationPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPath::Unified => "converse",
            GenerationPath::Legacy { .. } => "invoke_model",
        }
    }

    pub fn fell_back(&self) -> bool {
        matches!(self, GenerationPath::Legacy { .. })
    }
}

/// Successful generation plus the path taken
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub result: GenerationResult,
    pub path: GenerationPath,
}

/// Generation service
#[derive(Clone)]
pub struct GenerationService {
    provider: Arc<dyn InferenceProvider>,
    params: InferenceParams,
}

impl GenerationService {
    pub fn new(provider: Arc<dyn InferenceProvider>, params: InferenceParams) -> Self {
        Self { provider, params }
    }

    /// Region of the underlying provider
    pub fn region(&self) -> &str {
        self.provider.region()
    }

    /// Generate a response to `prompt` in `language` with `model_id`
    pub async fn generate(
        &self,
        prompt: &str,
        language: &str,
        model_id: &str,
    ) -> AppResult<GenerationOutcome> {
        let family = ModelFamily::classify(model_id);
        let instruction = build_instruction(prompt, language);
        debug!(
            "Generating with {} ({} family) in {}: {}",
            model_id,
            family.as_str(),
            language,
            truncate_content(prompt, 80)
        );

        let started = Instant::now();

        let (text, token_usage, path) = match self.try_unified(model_id, &instruction).await {
            Ok((text, usage)) => (text, usage, GenerationPath::Unified),
            Err(reason) => {
                warn!("Converse failed for {}, falling back to InvokeModel: {}", model_id, reason);
                let (text, usage) = self.invoke_legacy(family, model_id, &instruction).await?;
                (text, usage, GenerationPath::Legacy { reason })
            }
        };

        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
        info!(
            "Generation completed: model={} path={} tokens={} latency={:.0}ms",
            model_id,
            path.as_str(),
            token_usage.total,
            latency_ms
        );

        Ok(GenerationOutcome {
            result: GenerationResult {
                text,
                token_usage,
                latency_ms,
            },
            path,
        })
    }

    /// Step one: Converse; any failure becomes the fallback reason
    async fn try_unified(
        &self,
        model_id: &str,
        instruction: &str,
    ) -> Result<(String, TokenUsage), String> {
        let reply = self
            .provider
            .converse(model_id, instruction, &self.params)
            .await
            .map_err(|e| format!("{:#}", e))?;

        if reply.text.trim().is_empty() {
            return Err("Converse reply carried no text".to_string());
        }

        // Converse reports its own total; keep total = input + output
        let usage = reply
            .usage
            .map(|usage| TokenUsage::new(usage.input, usage.output))
            .unwrap_or_default();

        Ok((reply.text, usage))
    }

    /// Step two: InvokeModel with the family payload
    async fn invoke_legacy(
        &self,
        family: ModelFamily,
        model_id: &str,
        instruction: &str,
    ) -> AppResult<(String, TokenUsage)> {
        let payload = family.build_payload(instruction, &self.params);
        if let Ok(summary) = serde_json::to_string(&payload_log_summary(model_id, &payload)) {
            debug!("InvokeModel payload: {}", summary);
        }

        let body = self
            .provider
            .invoke_model(model_id, &payload)
            .await
            .map_err(AppError::Provider)?;

        let text = family.extract_text(&body).ok_or_else(|| {
            warn!(
                "No text found in {} response: {}",
                model_id,
                truncate_content(&body.to_string(), 200)
            );
            external_api_error(UNPARSEABLE_RESPONSE)
        })?;

        let usage = family.extract_usage(&body);
        if usage.is_empty() {
            debug!("No token usage reported by {}", model_id);
        }

        Ok((text, usage))
    }
}

/// Human-readable name for a language code, falling back to the code itself
pub fn language_name(code: &str) -> &str {
    let primary = code.split(['-', '_']).next().unwrap_or(code);
    match primary.to_ascii_lowercase().as_str() {
        "zh" => "Chinese",
        "ja" => "Japanese",
        "ko" => "Korean",
        "pl" => "Polish",
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "ru" => "Russian",
        "ar" => "Arabic",
        "hi" => "Hindi",
        "vi" => "Vietnamese",
        "th" => "Thai",
        "tr" => "Turkish",
        _ => code,
    }
}

/// Wrap `prompt` in the respond-in-language instruction
pub fn build_instruction(prompt: &str, language: &str) -> String {
    format!(
        "Respond entirely in {}. Translate or perform the task as asked.\n\n{}",
        language_name(language),
        prompt
    )
}
