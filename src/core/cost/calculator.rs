//! Cost calculator
//!
//! `cost_usd` is linear in token counts with no floor or minimum charge.
//! Reasoning tokens are billed at the output rate — providers charge them as
//! generated output even when they report them separately. This only prices
//! correctly because adapters guarantee `output_tokens` never already
//! includes `reasoning_tokens`; if that invariant slipped, this formula
//! would double-count silently.

use crate::core::catalog::ModelDescriptor;
use crate::core::types::GenerationResult;

/// Fixed display-currency rate. Applied at render time only; everything the
/// core computes stays in USD.
pub const USD_TO_JPY: f64 = 150.0;

/// Cost of one result in USD, given the model's price table entry
pub fn cost_usd(result: &GenerationResult, model: &ModelDescriptor) -> f64 {
    let input_cost =
        (result.input_tokens as f64 / 1_000_000.0) * model.input_price_per_million;
    let billable_output = result.output_tokens as f64 + result.reasoning_tokens as f64;
    let output_cost = (billable_output / 1_000_000.0) * model.output_price_per_million;
    input_cost + output_cost
}

/// Display cost in JPY
pub fn cost_jpy(result: &GenerationResult, model: &ModelDescriptor) -> f64 {
    cost_usd(result, model) * USD_TO_JPY
}
