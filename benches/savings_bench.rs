//! Payload building, response extraction and savings calculation benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lingosaver::models::{GenerationResult, TokenUsage};
use lingosaver::providers::InferenceParams;
use lingosaver::services::family::{extract_any_text, extract_usage};
use lingosaver::services::pricing::bedrock_prices;
use lingosaver::services::{calculate, ModelFamily, SavingsInput};
use serde_json::json;

const MODELS: &[&str] = &[
    "anthropic.claude-3-haiku-20240307-v1:0",
    "meta.llama3-8b-instruct-v1:0",
    "mistral.mistral-large-2402-v1:0",
    "cohere.command-r-v1:0",
    "amazon.titan-text-express-v1",
    "ai21.jamba-instruct-v1:0",
];

fn bench_payload_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_building");
    let params = InferenceParams::default();
    let prompt = "Respond entirely in Japanese. Translate or perform the task as asked.\n\n"
        .to_string()
        + &"Summarize the quarterly report. ".repeat(20);

    for model in MODELS {
        group.bench_with_input(BenchmarkId::new("classify_and_build", model), model, |b, model| {
            b.iter(|| {
                let family = ModelFamily::classify(black_box(model));
                black_box(family.build_payload(black_box(&prompt), &params))
            })
        });
    }

    group.finish();
}

fn bench_response_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_extraction");

    let anthropic = json!({
        "content": [{"type": "text", "text": "こんにちは、世界"}],
        "usage": {"input_tokens": 40, "output_tokens": 12}
    });
    let titan = json!({
        "inputTextTokenCount": 40,
        "results": [{"outputText": "Hola mundo", "tokenCount": 9}]
    });
    let unknown = json!({"unexpected": {"nested": [1, 2, 3]}});

    group.bench_function("anthropic_native", |b| {
        b.iter(|| black_box(ModelFamily::Anthropic.extract_text(black_box(&anthropic))))
    });

    group.bench_function("titan_fallback_chain", |b| {
        b.iter(|| black_box(extract_any_text(black_box(&titan))))
    });

    group.bench_function("unknown_shape", |b| {
        b.iter(|| black_box(extract_any_text(black_box(&unknown))))
    });

    group.bench_function("usage_titan", |b| {
        b.iter(|| black_box(extract_usage(black_box(&titan))))
    });

    group.finish();
}

fn bench_savings_calculation(c: &mut Criterion) {
    let baseline = GenerationResult {
        text: "Hello there".to_string(),
        token_usage: TokenUsage::new(120, 340),
        latency_ms: 1800.0,
    };
    let optimized = GenerationResult {
        text: "你好".to_string(),
        token_usage: TokenUsage::new(120, 210),
        latency_ms: 1500.0,
    };

    c.bench_function("savings_calculate", |b| {
        b.iter(|| {
            let pricing = bedrock_prices().lookup(black_box(MODELS[0]));
            black_box(calculate(&SavingsInput {
                baseline: &baseline,
                optimized: &optimized,
                pricing,
                input_chars: 480,
                translation_cost: 0.0,
                translation_latency_ms: 250.0,
                processing_time_ms: 2100.0,
            }))
        })
    });
}

criterion_group!(
    benches,
    bench_payload_building,
    bench_response_extraction,
    bench_savings_calculation
);

criterion_main!(benches);
