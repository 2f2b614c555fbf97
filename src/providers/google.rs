//! Google Translate provider implementation
//!
//! Talks to the keyless web endpoint `/translate_a/single?client=gtx`.
//! The response is a nested array whose first element lists translated
//! segments: `[[["Hello", "Hola", ...], ["world", "mundo", ...]], ...]`.

use super::Translator;
use crate::models::TranslationResult;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Name reported in `/api/translate` responses
pub const PROVIDER_NAME: &str = "google-translate";

/// Google Translate provider
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    /// Create a new translator with the given request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("lingosaver/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Build the request URL
    fn build_url(&self) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        format!("{}/translate_a/single", base_url)
    }
}

/// Concatenate the translated segments of a `translate_a/single` response
///
/// Returns an empty string when the shape is not recognized.
pub fn parse_segments(body: &Value) -> String {
    body.get(0)
        .and_then(Value::as_array)
        .map(|segments| {
            segments
                .iter()
                .filter_map(|segment| segment.get(0).and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslationResult> {
        debug!("Sending translation request: {} -> {}", source_lang, target_lang);

        let url = self.build_url();

        // The text travels in the form body; long CJK input overflows URL limits
        let response = self
            .client
            .post(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
            ])
            .form(&[("q", text)])
            .send()
            .await
            .context("Failed to send translation request")?;

        let status = response.status();

        if status.is_success() {
            let body: Value = response
                .json()
                .await
                .context("Failed to parse translation response")?;

            debug!("Translation request completed successfully");
            Ok(TranslationResult {
                text: parse_segments(&body),
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            error!("Translation request failed: {} - {}", status, error_text);
            anyhow::bail!("Translation request failed: {} - {}", status, error_text);
        }
    }
}
