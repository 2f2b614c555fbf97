//! Translation handler

use crate::handlers::validation::{parse_body, validate_translate_request};
use crate::handlers::AppState;
use crate::models::api::TranslateResponse;
use crate::utils::error::AppResult;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Translate text
///
/// POST /api/translate
pub async fn handle_translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<TranslateResponse>> {
    let body = parse_body(payload)?;
    let request = validate_translate_request(&body)?;

    debug!(
        "Translate request: {} -> {}",
        request.source_lang, request.target_lang
    );

    let translation = state
        .translator
        .translate(&request.text, &request.source_lang, &request.target_lang)
        .await?;

    Ok(Json(TranslateResponse {
        translated_text: translation.text,
        provider: state.translator.provider_name().to_string(),
        target_lang: request.target_lang,
        source_lang: request.source_lang,
    }))
}
