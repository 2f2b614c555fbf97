//! Shared test doubles
//!
//! Mock providers record every call so tests can assert that validation
//! failures never reach an upstream API.

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use lingosaver::models::{FoundationModel, TokenUsage, TranslationResult};
use lingosaver::providers::{ConverseReply, InferenceParams, InferenceProvider, Translator};
use lingosaver::{build_router, AppState, Settings};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

type ConverseFn = dyn Fn(&str, &str) -> Result<ConverseReply> + Send + Sync;
type InvokeFn = dyn Fn(&str, &Value) -> Result<Value> + Send + Sync;

/// Inference provider double
pub struct MockInference {
    converse: Box<ConverseFn>,
    invoke: Box<InvokeFn>,
    models: Vec<FoundationModel>,
    pub converse_calls: AtomicUsize,
    pub invoke_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub invoke_payloads: Mutex<Vec<Value>>,
}

impl MockInference {
    pub fn new() -> Self {
        Self {
            converse: Box::new(|_: &str, _: &str| -> Result<ConverseReply> {
                anyhow::bail!("converse not stubbed")
            }),
            invoke: Box::new(|_: &str, _: &Value| -> Result<Value> {
                anyhow::bail!("invoke not stubbed")
            }),
            models: Vec::new(),
            converse_calls: AtomicUsize::new(0),
            invoke_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            invoke_payloads: Mutex::new(Vec::new()),
        }
    }

    /// Converse answers with `text` and fixed usage
    pub fn converse_reply(self, text: &str, usage: TokenUsage) -> Self {
        let text = text.to_string();
        self.with_converse(move |_, _| {
            Ok(ConverseReply {
                text: text.clone(),
                usage: Some(usage),
            })
        })
    }

    pub fn with_converse<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> Result<ConverseReply> + Send + Sync + 'static,
    {
        self.converse = Box::new(f);
        self
    }

    pub fn with_invoke<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.invoke = Box::new(f);
        self
    }

    pub fn with_models(mut self, models: Vec<FoundationModel>) -> Self {
        self.models = models;
        self
    }

    pub fn outbound_calls(&self) -> usize {
        self.converse_calls.load(Ordering::SeqCst)
            + self.invoke_calls.load(Ordering::SeqCst)
            + self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceProvider for MockInference {
    fn name(&self) -> &str {
        "mock-bedrock"
    }

    fn region(&self) -> &str {
        "us-east-1"
    }

    async fn converse(
        &self,
        model_id: &str,
        prompt: &str,
        _params: &InferenceParams,
    ) -> Result<ConverseReply> {
        self.converse_calls.fetch_add(1, Ordering::SeqCst);
        (self.converse)(model_id, prompt)
    }

    async fn invoke_model(&self, model_id: &str, body: &Value) -> Result<Value> {
        self.invoke_calls.fetch_add(1, Ordering::SeqCst);
        self.invoke_payloads.lock().unwrap().push(body.clone());
        (self.invoke)(model_id, body)
    }

    async fn list_foundation_models(&self) -> Result<Vec<FoundationModel>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.models.clone())
    }
}

/// Translator double
pub struct MockTranslator {
    reply: Result<String, String>,
    pub calls: AtomicUsize,
    pub last_request: Mutex<Option<(String, String, String)>>,
}

impl MockTranslator {
    pub fn returning(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    fn name(&self) -> &str {
        "mock-translate"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<TranslationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((
            text.to_string(),
            source_lang.to_string(),
            target_lang.to_string(),
        ));

        match &self.reply {
            Ok(text) => Ok(TranslationResult { text: text.clone() }),
            Err(message) => anyhow::bail!("{}", message),
        }
    }
}

/// Router over the given doubles with default settings
pub fn test_app(inference: Arc<MockInference>, translator: Arc<MockTranslator>) -> Router {
    test_app_with(Settings::default(), inference, translator)
}

/// Router over the given doubles with custom settings
pub fn test_app_with(
    settings: Settings,
    inference: Arc<MockInference>,
    translator: Arc<MockTranslator>,
) -> Router {
    build_router(AppState::new(settings, inference, translator))
}

/// Send a JSON POST and decode the JSON reply
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

/// Send a GET and decode the JSON reply
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
