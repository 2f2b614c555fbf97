//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod bedrock;
pub mod health;
pub mod translate;
pub mod validation;

use crate::config::{SecurityConfig, Settings};
use crate::middleware::logging::request_logging_middleware;
use crate::providers::{BedrockProvider, GoogleTranslator, InferenceParams, InferenceProvider, Translator};
use crate::services::pricing::bedrock_prices;
use crate::services::{GenerationService, ModelCatalog, PriceTable, TranslationService};
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub generator: GenerationService,
    pub translator: TranslationService,
    pub catalog: ModelCatalog,
    pub prices: &'static PriceTable,
}

impl AppState {
    /// Wire services around the given providers
    pub fn new(
        settings: Settings,
        inference: Arc<dyn InferenceProvider>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        let params = InferenceParams {
            max_tokens: settings.generation.max_tokens,
            temperature: settings.generation.temperature,
        };

        Self {
            generator: GenerationService::new(inference.clone(), params),
            translator: TranslationService::new(translator),
            catalog: ModelCatalog::new(inference),
            prices: bedrock_prices(),
            settings,
        }
    }
}

/// Create application router backed by Bedrock and Google Translate
pub async fn create_router(settings: Settings) -> Result<Router> {
    let inference = BedrockProvider::new(&settings.bedrock.region, settings.bedrock_timeout())
        .await
        .context("Failed to create Bedrock provider")?;

    let translator = GoogleTranslator::with_timeout(
        &settings.translation.base_url,
        settings.translation_timeout(),
    )
    .context("Failed to create translation provider")?;

    info!(
        "Providers ready: {} ({}), {}",
        inference.name(),
        inference.region(),
        translator.name()
    );

    Ok(build_router(AppState::new(
        settings,
        Arc::new(inference),
        Arc::new(translator),
    )))
}

/// Assemble routes and middleware around a prepared state
pub fn build_router(state: AppState) -> Router {
    let max_request_size = state.settings.request.max_request_size;
    let cors = state
        .settings
        .security
        .cors_enabled
        .then(|| cors_layer(&state.settings.security));

    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/example", get(health::example))
        .route("/api/translate", post(translate::handle_translate))
        .route("/api/bedrock/models", get(bedrock::list_models))
        .route("/api/bedrock/generate", post(bedrock::handle_generate))
        .route(
            "/api/bedrock/generate-translate",
            post(bedrock::handle_generate_translate),
        )
        .with_state(Arc::new(state))
        .layer(RequestBodyLimitLayer::new(max_request_size))
        .layer(axum::middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http());

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// CORS layer from the configured origin list
fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if security.allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = security
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
