//! Comparison metrics returned by the generate endpoints

use super::TokenUsage;
use serde::{Deserialize, Serialize};

/// Full comparison between the English baseline and the optimized path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsReport {
    pub tokens: TokenMetrics,
    pub costs: CostMetrics,
    pub performance: PerformanceMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetrics {
    pub english: TokenUsage,
    pub optimized: TokenUsage,
    pub savings: TokenSavings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSavings {
    pub absolute: u64,
    pub percentage: f64,
    pub output_savings_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostMetrics {
    pub english: PathCost,
    pub optimized: OptimizedCost,
    pub savings: CostSavings,
    /// Minimum input size, in characters
    pub break_even: u64,
}

/// Cost of one generation, USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathCost {
    pub input: f64,
    pub output: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizedCost {
    pub model: f64,
    pub translation: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSavings {
    pub absolute: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Whole request duration, milliseconds
    pub processing_time: f64,
    pub latencies: Latencies,
    pub latency_ratio: f64,
    pub estimated_latency_increase: String,
    pub recommended_use_case: String,
}

/// Per-call latencies, milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Latencies {
    pub english: f64,
    pub optimized: f64,
    pub translation: f64,
}
