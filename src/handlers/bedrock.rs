//! Bedrock handlers
//!
//! Model catalog, single generation, and the English-baseline comparison.

use crate::handlers::validation::{parse_body, validate_generation_request};
use crate::handlers::AppState;
use crate::models::api::*;
use crate::services::savings::{calculate, SavingsInput};
use crate::utils::error::AppResult;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Language of the baseline generation and of the back-translation
pub const BASELINE_LANG: &str = "en";

/// List text-generating foundation models
///
/// GET /api/bedrock/models
pub async fn list_models(State(state): State<Arc<AppState>>) -> AppResult<Json<ModelsResponse>> {
    let models = state.catalog.list_text_models().await?;

    Ok(Json(ModelsResponse {
        region: state.catalog.region().to_string(),
        models,
    }))
}

/// Generate in the target language
///
/// POST /api/bedrock/generate
pub async fn handle_generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<GenerateResponse>> {
    let body = parse_body(payload)?;
    let request = validate_generation_request(&body)?;
    let started = Instant::now();

    let outcome = state
        .generator
        .generate(&request.text, &request.language, &request.model)
        .await?;

    let processing_time = elapsed_ms(started);
    debug!("Generate request completed in {:.0}ms", processing_time);

    Ok(Json(GenerateResponse {
        output_text: outcome.result.text,
        model: request.model,
        language: request.language,
        region: state.generator.region().to_string(),
        inference_path: outcome.path.as_str().to_string(),
        metrics: GenerateMetrics {
            tokens: OptimizedTokens {
                optimized: outcome.result.token_usage,
            },
            performance: GeneratePerformance { processing_time },
        },
    }))
}

/// Generate in the target language and in English, translate back, compare
///
/// POST /api/bedrock/generate-translate
pub async fn handle_generate_translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<GenerateTranslateResponse>> {
    let body = parse_body(payload)?;
    let request = validate_generation_request(&body)?;
    let started = Instant::now();

    // The two generations share nothing, so they run side by side
    let (optimized, baseline) = tokio::join!(
        state
            .generator
            .generate(&request.text, &request.language, &request.model),
        state
            .generator
            .generate(&request.text, BASELINE_LANG, &request.model),
    );
    let optimized = optimized?;
    let baseline = baseline?;

    if baseline.path.fell_back() != optimized.path.fell_back() {
        warn!(
            "Inference paths differ for {}: baseline {}, optimized {}; usage comes from different APIs",
            request.model,
            baseline.path.as_str(),
            optimized.path.as_str()
        );
    }

    let translation = state
        .translator
        .translate(&optimized.result.text, &request.language, BASELINE_LANG)
        .await?;

    let processing_time = elapsed_ms(started);

    let report = calculate(&SavingsInput {
        baseline: &baseline.result,
        optimized: &optimized.result,
        pricing: state.prices.lookup(&request.model),
        input_chars: request.text.chars().count(),
        translation_cost: 0.0,
        translation_latency_ms: translation.latency_ms,
        processing_time_ms: processing_time,
    });

    info!(
        "Comparison for {} ({}): tokens {} -> {} ({}% saved), paths {}/{}",
        request.model,
        request.language,
        report.tokens.english.total,
        report.tokens.optimized.total,
        report.tokens.savings.percentage,
        baseline.path.as_str(),
        optimized.path.as_str()
    );

    Ok(Json(GenerateTranslateResponse {
        generated_text: optimized.result.text,
        translated_text: translation.text,
        source_lang: request.language,
        target_lang: BASELINE_LANG.to_string(),
        model: request.model,
        region: state.generator.region().to_string(),
        metrics: report,
    }))
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
