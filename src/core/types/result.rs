//! Uniform generation result
//!
//! Every adapter, regardless of vendor, produces this one record. Exactly one
//! of `content` (non-error) or `error` is the meaningful channel; on error all
//! numeric fields are zero.
//!
//! `reasoning_tokens` is always disjoint from `output_tokens` after adapter
//! normalization. Vendors report the split three different ways (OpenAI needs
//! a subtraction, xAI an addition, Google folds thinking into its total), so
//! the adapters do whatever correction their vendor requires before this
//! record is built. Summing the two fields always yields true billable output.

use serde::Serialize;
use serde_json::Value;

/// Normalized outcome of one generation call
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    /// Visible text produced by the model; empty on error
    pub content: String,
    /// Billable prompt tokens
    pub input_tokens: u32,
    /// Billable visible output tokens, never including reasoning tokens
    pub output_tokens: u32,
    /// Hidden deliberation tokens, billed at the output rate
    pub reasoning_tokens: u32,
    /// Wall-clock time of the vendor call, in milliseconds
    pub latency_ms: f64,
    /// Model the call was made against
    pub model_id: String,
    /// Failure description when the call did not succeed
    pub error: Option<String>,
    /// Raw vendor response, for debugging and display only
    #[serde(skip_serializing_if = "Value::is_null")]
    pub raw_response: Value,
}

impl GenerationResult {
    /// Successful call
    pub fn success(
        content: String,
        input_tokens: u32,
        output_tokens: u32,
        reasoning_tokens: u32,
        latency_ms: f64,
        model_id: impl Into<String>,
        raw_response: Value,
    ) -> Self {
        Self {
            content,
            input_tokens,
            output_tokens,
            reasoning_tokens,
            latency_ms,
            model_id: model_id.into(),
            error: None,
            raw_response,
        }
    }

    /// Failed call; zeroes every numeric field
    pub fn failure(model_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            input_tokens: 0,
            output_tokens: 0,
            reasoning_tokens: 0,
            latency_ms: 0.0,
            model_id: model_id.into(),
            error: Some(error.into()),
            raw_response: Value::Null,
        }
    }

    /// Whether the error channel is the meaningful one
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Total billable generated tokens as the vendor counts them
    pub fn total_generated_tokens(&self) -> u32 {
        self.output_tokens + self.reasoning_tokens
    }
}
