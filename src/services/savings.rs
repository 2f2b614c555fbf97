//! Savings calculator
//!
//! Compares an English-baseline generation against a target-language
//! generation of the same model. Every ratio substitutes zero for a zero
//! divisor; savings never go negative.

use super::pricing::ModelPricing;
use crate::models::metrics::*;
use crate::models::GenerationResult;

/// Decimal places kept for USD amounts
const COST_DECIMALS: i32 = 8;

/// Everything the calculator needs for one comparison
#[derive(Debug, Clone)]
pub struct SavingsInput<'a> {
    pub baseline: &'a GenerationResult,
    pub optimized: &'a GenerationResult,
    pub pricing: ModelPricing,
    /// Character count of the user prompt
    pub input_chars: usize,
    /// Cost of translating the optimized output back, USD
    pub translation_cost: f64,
    pub translation_latency_ms: f64,
    /// Whole request duration
    pub processing_time_ms: f64,
}

/// Build the full comparison report
pub fn calculate(input: &SavingsInput<'_>) -> SavingsReport {
    let english = input.baseline.token_usage;
    let optimized = input.optimized.token_usage;

    let token_savings = english.total.saturating_sub(optimized.total);
    let token_percentage = round_to(percent(token_savings as f64, english.total as f64), 1);
    let output_savings = english.output.saturating_sub(optimized.output);
    let output_percentage = round_to(percent(output_savings as f64, english.output as f64), 1);

    let english_cost = input.pricing.cost(&english);
    let optimized_model_cost = input.pricing.cost(&optimized).total;
    let optimized_total = optimized_model_cost + input.translation_cost.max(0.0);

    let cost_savings = (english_cost.total - optimized_total).max(0.0);
    let cost_percentage = round_to(percent(cost_savings, english_cost.total), 1);
    let reported_savings = round_to(cost_savings, COST_DECIMALS);

    // Decided on the reported amount so breakEven agrees with savings.absolute
    let break_even = break_even_chars(input.input_chars, reported_savings, token_percentage);

    let latencies = Latencies {
        english: input.baseline.latency_ms,
        optimized: input.optimized.latency_ms,
        translation: input.translation_latency_ms,
    };
    let latency_ratio = round_to(
        ratio(latencies.optimized + latencies.translation, latencies.english),
        1,
    );

    SavingsReport {
        tokens: TokenMetrics {
            english,
            optimized,
            savings: TokenSavings {
                absolute: token_savings,
                percentage: token_percentage,
                output_savings_percent: output_percentage,
            },
        },
        costs: CostMetrics {
            english: PathCost {
                input: round_to(english_cost.input, COST_DECIMALS),
                output: round_to(english_cost.output, COST_DECIMALS),
                total: round_to(english_cost.total, COST_DECIMALS),
            },
            optimized: OptimizedCost {
                model: round_to(optimized_model_cost, COST_DECIMALS),
                translation: round_to(input.translation_cost.max(0.0), COST_DECIMALS),
                total: round_to(optimized_total, COST_DECIMALS),
            },
            savings: CostSavings {
                absolute: reported_savings,
                percentage: cost_percentage,
            },
            break_even,
        },
        performance: PerformanceMetrics {
            processing_time: input.processing_time_ms,
            latencies,
            latency_ratio,
            estimated_latency_increase: format!("{:.1}x", latency_ratio),
            recommended_use_case: recommend_use_case(latency_ratio).to_string(),
        },
    }
}

/// Minimum prompt size, in characters, at which the optimized path pays off
///
/// With cost savings the current prompt already qualifies; otherwise the
/// prompt is scaled by the token savings ratio.
pub fn break_even_chars(input_chars: usize, cost_savings: f64, token_savings_percent: f64) -> u64 {
    let chars = input_chars as u64;
    if cost_savings > 0.0 {
        return chars;
    }

    let divisor = 1.0 - token_savings_percent / 100.0;
    if divisor <= 0.0 {
        return chars;
    }

    (input_chars as f64 / divisor).ceil() as u64
}

/// Qualitative recommendation for a latency ratio
pub fn recommend_use_case(latency_ratio: f64) -> &'static str {
    if latency_ratio <= 0.0 {
        "Not enough latency data"
    } else if latency_ratio <= 1.5 {
        "Suitable for interactive use"
    } else if latency_ratio <= 3.0 {
        "Viable for batch processing"
    } else {
        "Best for offline batch workloads"
    }
}

/// `part / whole * 100`, zero when `whole` is zero
pub fn percent(part: f64, whole: f64) -> f64 {
    ratio(part, whole) * 100.0
}

fn ratio(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole
    } else {
        0.0
    }
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
