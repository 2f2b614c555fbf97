//! AWS Bedrock provider implementation
//!
//! Runtime calls (Converse, InvokeModel) go through `aws-sdk-bedrockruntime`,
//! the model catalog through `aws-sdk-bedrock`. Credentials come from the
//! default AWS provider chain.

use super::{ConverseReply, InferenceParams, InferenceProvider};
use crate::models::{FoundationModel, TokenUsage};
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_bedrockruntime::config::Region;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, ConverseOutput, InferenceConfiguration, Message,
};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Bedrock provider
pub struct BedrockProvider {
    runtime: aws_sdk_bedrockruntime::Client,
    catalog: aws_sdk_bedrock::Client,
    region: String,
}

impl BedrockProvider {
    /// Create a provider for `region`, bounding every operation by `timeout`
    pub async fn new(region: &str, timeout: Duration) -> Result<Self> {
        if region.trim().is_empty() {
            anyhow::bail!("Bedrock region cannot be empty");
        }

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(timeout)
                    .build(),
            )
            .load()
            .await;

        Ok(Self {
            runtime: aws_sdk_bedrockruntime::Client::new(&sdk_config),
            catalog: aws_sdk_bedrock::Client::new(&sdk_config),
            region: region.to_string(),
        })
    }
}

/// Decode an InvokeModel body, keeping non-JSON payloads as a bare string
pub fn decode_invoke_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

fn clamp_count(value: i32) -> u64 {
    value.max(0) as u64
}

#[async_trait]
impl InferenceProvider for BedrockProvider {
    fn name(&self) -> &str {
        "bedrock"
    }

    fn region(&self) -> &str {
        &self.region
    }

    async fn converse(
        &self,
        model_id: &str,
        prompt: &str,
        params: &InferenceParams,
    ) -> Result<ConverseReply> {
        debug!("Sending Bedrock Converse request for model: {}", model_id);

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .context("Failed to build Converse message")?;

        let inference_config = InferenceConfiguration::builder()
            .max_tokens(params.max_tokens.min(i32::MAX as u32) as i32)
            .temperature(params.temperature)
            .build();

        let response = self
            .runtime
            .converse()
            .model_id(model_id)
            .messages(message)
            .inference_config(inference_config)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Converse request failed: {}", DisplayErrorContext(&e)))?;

        let text = match response.output() {
            Some(ConverseOutput::Message(message)) => message
                .content()
                .iter()
                .filter_map(|block| block.as_text().ok())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(""),
            _ => String::new(),
        };

        let usage = response.usage().map(|usage| TokenUsage {
            input: clamp_count(usage.input_tokens()),
            output: clamp_count(usage.output_tokens()),
            total: clamp_count(usage.total_tokens()),
        });

        debug!("Bedrock Converse request completed");
        Ok(ConverseReply { text, usage })
    }

    async fn invoke_model(&self, model_id: &str, body: &Value) -> Result<Value> {
        debug!("Sending Bedrock InvokeModel request for model: {}", model_id);

        let payload = serde_json::to_vec(body).context("Failed to encode InvokeModel body")?;

        let response = self
            .runtime
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("InvokeModel request failed: {}", DisplayErrorContext(&e)))?;

        debug!("Bedrock InvokeModel request completed");
        Ok(decode_invoke_body(response.body().as_ref()))
    }

    async fn list_foundation_models(&self) -> Result<Vec<FoundationModel>> {
        debug!("Listing Bedrock foundation models in {}", self.region);

        let response = self
            .catalog
            .list_foundation_models()
            .send()
            .await
            .map_err(|e| {
                anyhow::anyhow!("ListFoundationModels request failed: {}", DisplayErrorContext(&e))
            })?;

        let models: Vec<FoundationModel> = response
            .model_summaries()
            .iter()
            .map(|summary| FoundationModel {
                model_id: summary.model_id().to_string(),
                model_name: summary.model_name().map(str::to_string),
                provider_name: summary.provider_name().map(str::to_string),
                input_modalities: summary
                    .input_modalities()
                    .iter()
                    .map(|m| m.as_str().to_string())
                    .collect(),
                output_modalities: summary
                    .output_modalities()
                    .iter()
                    .map(|m| m.as_str().to_string())
                    .collect(),
                inference_types_supported: summary
                    .inference_types_supported()
                    .iter()
                    .map(|t| t.as_str().to_string())
                    .collect(),
            })
            .collect();

        debug!("Successfully retrieved {} models", models.len());
        Ok(models)
    }
}
