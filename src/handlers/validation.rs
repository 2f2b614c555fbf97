//! Request validation
//!
//! Every check here runs before any outbound call.

use crate::models::api::{GenerationRequest, TranslateRequest};
use crate::services::family::is_non_generative;
use crate::utils::error::{helpers::validation_error, AppError, AppResult};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use tracing::warn;

/// Default source language for `/api/translate`
pub const DEFAULT_SOURCE_LANG: &str = "en";

/// Error message for bodies cut off by the request size limit
pub const BODY_TOO_LARGE: &str = "Request body exceeds the maximum allowed size.";

/// Unwrap the JSON extractor
///
/// Bodies over the size limit are a 413; every other rejection is a 400.
pub fn parse_body(payload: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Rejected oversized request body: {}", rejection.body_text());
            Err(AppError::PayloadTooLarge(BODY_TOO_LARGE.to_string()))
        }
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            Err(validation_error("Request body must be a valid JSON object."))
        }
    }
}

/// Required non-blank string field
pub fn require_string(body: &Value, field: &str) -> AppResult<String> {
    match body.get(field).and_then(Value::as_str) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(validation_error(format!(
            "Parameter \"{}\" (non-empty string) is required.",
            field
        ))),
    }
}

/// Optional string field; blank or wrong-typed values count as absent
pub fn optional_string(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Validate a `/api/translate` body
pub fn validate_translate_request(body: &Value) -> AppResult<TranslateRequest> {
    let text = require_string(body, "text")?;
    let target_lang = require_string(body, "targetLang")?;
    let source_lang =
        optional_string(body, "sourceLang").unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string());

    Ok(TranslateRequest {
        text,
        target_lang: target_lang.trim().to_string(),
        source_lang,
    })
}

/// Validate a generation body and reject non-generative models
pub fn validate_generation_request(body: &Value) -> AppResult<GenerationRequest> {
    let text = require_string(body, "text")?;
    let language = require_string(body, "language")?;
    let model = require_string(body, "model")?;
    let model = model.trim().to_string();

    if is_non_generative(&model) {
        return Err(validation_error(format!(
            "Model \"{}\" does not generate text; embedding and rerank models are not supported.",
            model
        )));
    }

    Ok(GenerationRequest {
        text,
        language: language.trim().to_string(),
        model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_string() {
        let body = json!({"text": "hello", "blank": "   ", "number": 5});
        assert_eq!(require_string(&body, "text").unwrap(), "hello");
        assert!(matches!(require_string(&body, "blank"), Err(AppError::Validation(_))));
        assert!(matches!(require_string(&body, "number"), Err(AppError::Validation(_))));
        assert!(matches!(require_string(&body, "missing"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_translate_source_default() {
        let request = validate_translate_request(&json!({"text": "hi", "targetLang": "ja"})).unwrap();
        assert_eq!(request.source_lang, "en");

        let request =
            validate_translate_request(&json!({"text": "hi", "targetLang": "ja", "sourceLang": ""})).unwrap();
        assert_eq!(request.source_lang, "en");

        let request =
            validate_translate_request(&json!({"text": "hi", "targetLang": "ja", "sourceLang": "fr"})).unwrap();
        assert_eq!(request.source_lang, "fr");
    }

    #[test]
    fn test_generation_rejects_embedding_model() {
        let body = json!({"text": "hi", "language": "ja", "model": "amazon.titan-embed-text-v2:0"});
        let error = validate_generation_request(&body).unwrap_err();
        assert!(error.to_string().contains("does not generate text"));
    }

    #[test]
    fn test_generation_field_order() {
        let error = validate_generation_request(&json!({"language": "ja"})).unwrap_err();
        assert!(error.to_string().contains("\"text\""));

        let error = validate_generation_request(&json!({"text": "hi", "language": "ja"})).unwrap_err();
        assert!(error.to_string().contains("\"model\""));
    }
}
