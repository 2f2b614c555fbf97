//! Translation adapter
//!
//! Normalizes translator failures: no text is a provider response error,
//! anything else is propagated as an unexpected failure.

use crate::providers::Translator;
use crate::utils::error::{helpers::external_api_error, AppError, AppResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Error message for translator replies without text
pub const INVALID_TRANSLATION_RESPONSE: &str = "Invalid response from translation provider.";

/// Translated text plus call duration
#[derive(Debug, Clone, PartialEq)]
pub struct TimedTranslation {
    pub text: String,
    pub latency_ms: f64,
}

/// Translation service
#[derive(Clone)]
pub struct TranslationService {
    translator: Arc<dyn Translator>,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Provider name reported to clients
    pub fn provider_name(&self) -> &str {
        self.translator.name()
    }

    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> AppResult<TimedTranslation> {
        let started = Instant::now();

        let result = self
            .translator
            .translate(text, source_lang, target_lang)
            .await
            .map_err(AppError::Provider)?;

        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        if result.text.trim().is_empty() {
            warn!("Translation provider returned no text for {} -> {}", source_lang, target_lang);
            return Err(external_api_error(INVALID_TRANSLATION_RESPONSE));
        }

        debug!("Translated {} -> {} in {:.0}ms", source_lang, target_lang, latency_ms);
        Ok(TimedTranslation {
            text: result.text,
            latency_ms,
        })
    }
}
