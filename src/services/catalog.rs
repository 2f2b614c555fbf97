//! Model catalog
//!
//! Narrows the provider's foundation model list to models that can answer a
//! text prompt.

use super::family::is_non_generative;
use crate::models::FoundationModel;
use crate::providers::InferenceProvider;
use crate::utils::error::{AppError, AppResult};
use std::sync::Arc;
use tracing::debug;

/// Keep text-output models that are not embedders or rerankers
pub fn filter_text_models(models: Vec<FoundationModel>) -> Vec<FoundationModel> {
    models
        .into_iter()
        .filter(|model| model.outputs_text() && !is_non_generative(&model.model_id))
        .collect()
}

#[derive(Clone)]
pub struct ModelCatalog {
    provider: Arc<dyn InferenceProvider>,
}

impl ModelCatalog {
    pub fn new(provider: Arc<dyn InferenceProvider>) -> Self {
        Self { provider }
    }

    pub fn region(&self) -> &str {
        self.provider.region()
    }

    /// List generative text models
    pub async fn list_text_models(&self) -> AppResult<Vec<FoundationModel>> {
        let models = self
            .provider
            .list_foundation_models()
            .await
            .map_err(AppError::Provider)?;

        let total = models.len();
        let text_models = filter_text_models(models);
        debug!("Catalog: {} of {} models generate text", text_models.len(), total);

        Ok(text_models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(id: &str, output: &str) -> FoundationModel {
        FoundationModel {
            model_id: id.to_string(),
            model_name: None,
            provider_name: None,
            input_modalities: vec!["TEXT".to_string()],
            output_modalities: vec![output.to_string()],
            inference_types_supported: vec!["ON_DEMAND".to_string()],
        }
    }

    #[test]
    fn test_filter_text_models() {
        let models = vec![
            model("anthropic.claude-3-haiku-20240307-v1:0", "TEXT"),
            model("amazon.titan-embed-text-v1", "EMBEDDING"),
            model("cohere.embed-english-v3", "TEXT"),
            model("cohere.rerank-v3-5:0", "TEXT"),
            model("stability.sd3-large-v1:0", "IMAGE"),
        ];

        let kept = filter_text_models(models);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].model_id, "anthropic.claude-3-haiku-20240307-v1:0");
    }
}
