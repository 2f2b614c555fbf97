//! Bedrock on-demand price table
//!
//! Prices are USD per million tokens. Lookup is by case-insensitive substring
//! of the model identifier; the first matching pattern wins, so more specific
//! patterns come first.

use crate::models::metrics::PathCost;
use crate::models::TokenUsage;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Per-million-token prices for one model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPricing {
    pub input_per_million: f64,
    pub output_per_million: f64,
}

impl ModelPricing {
    pub const fn new(input_per_million: f64, output_per_million: f64) -> Self {
        Self {
            input_per_million,
            output_per_million,
        }
    }

    /// Cost of `usage` under these prices, unrounded
    pub fn cost(&self, usage: &TokenUsage) -> PathCost {
        let input = usage.input as f64 / 1_000_000.0 * self.input_per_million;
        let output = usage.output as f64 / 1_000_000.0 * self.output_per_million;
        PathCost {
            input,
            output,
            total: input + output,
        }
    }
}

/// Price applied to models missing from the table
pub const DEFAULT_PRICING: ModelPricing = ModelPricing::new(3.0, 15.0);

const BEDROCK_ON_DEMAND: &[(&str, ModelPricing)] = &[
    ("claude-3-5-haiku", ModelPricing::new(0.8, 4.0)),
    ("claude-3-haiku", ModelPricing::new(0.25, 1.25)),
    ("claude-3-opus", ModelPricing::new(15.0, 75.0)),
    ("claude-opus", ModelPricing::new(15.0, 75.0)),
    ("claude-3-5-sonnet", ModelPricing::new(3.0, 15.0)),
    ("claude-3-7-sonnet", ModelPricing::new(3.0, 15.0)),
    ("claude-sonnet", ModelPricing::new(3.0, 15.0)),
    ("claude-3-sonnet", ModelPricing::new(3.0, 15.0)),
    ("claude-instant", ModelPricing::new(0.8, 2.4)),
    ("titan-text-lite", ModelPricing::new(0.15, 0.2)),
    ("titan-text-express", ModelPricing::new(0.2, 0.6)),
    ("titan-text-premier", ModelPricing::new(0.5, 1.5)),
    ("nova-micro", ModelPricing::new(0.035, 0.14)),
    ("nova-lite", ModelPricing::new(0.06, 0.24)),
    ("nova-pro", ModelPricing::new(0.8, 3.2)),
    ("llama3-1-405b", ModelPricing::new(2.4, 2.4)),
    ("llama3-1-70b", ModelPricing::new(0.72, 0.72)),
    ("llama3-1-8b", ModelPricing::new(0.22, 0.22)),
    ("llama3-70b", ModelPricing::new(2.65, 3.5)),
    ("llama3-8b", ModelPricing::new(0.3, 0.6)),
    ("mistral-7b", ModelPricing::new(0.15, 0.2)),
    ("mixtral-8x7b", ModelPricing::new(0.45, 0.7)),
    ("mistral-small", ModelPricing::new(1.0, 3.0)),
    ("mistral-large", ModelPricing::new(4.0, 12.0)),
    ("command-r-plus", ModelPricing::new(3.0, 15.0)),
    ("command-r", ModelPricing::new(0.5, 1.5)),
    ("command-light", ModelPricing::new(0.3, 0.6)),
    ("command-text", ModelPricing::new(1.5, 2.0)),
    ("jamba-1-5-large", ModelPricing::new(2.0, 8.0)),
    ("jamba-1-5-mini", ModelPricing::new(0.2, 0.4)),
];

/// Substring-keyed price table
#[derive(Debug, Clone)]
pub struct PriceTable {
    entries: Vec<(String, ModelPricing)>,
    fallback: ModelPricing,
}

impl PriceTable {
    /// Empty table that prices everything at `fallback`
    pub fn new(fallback: ModelPricing) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Table of Bedrock on-demand text model prices
    pub fn bedrock_on_demand() -> Self {
        BEDROCK_ON_DEMAND
            .iter()
            .fold(Self::new(DEFAULT_PRICING), |table, (pattern, pricing)| {
                table.with_entry(pattern, *pricing)
            })
    }

    /// Append a pattern; earlier patterns take precedence
    pub fn with_entry(mut self, pattern: &str, pricing: ModelPricing) -> Self {
        self.entries.push((pattern.to_ascii_lowercase(), pricing));
        self
    }

    /// Price for `model_id`, or the fallback
    pub fn lookup(&self, model_id: &str) -> ModelPricing {
        let id = model_id.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(pattern, _)| id.contains(pattern.as_str()))
            .map(|(_, pricing)| *pricing)
            .unwrap_or(self.fallback)
    }
}

static BEDROCK_PRICES: Lazy<PriceTable> = Lazy::new(PriceTable::bedrock_on_demand);

/// Shared Bedrock price table
pub fn bedrock_prices() -> &'static PriceTable {
    &BEDROCK_PRICES
}
