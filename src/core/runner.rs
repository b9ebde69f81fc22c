//! Comparison runner
//!
//! Orchestration only: one prompt, several models, strictly sequential in
//! selection order. Total wall time is the sum of the individual calls, and
//! one model's failure never blocks the rest — the dispatcher already
//! guarantees per-call errors come back as result records.

use std::time::Instant;

use tracing::info;

use crate::core::catalog::ModelDescriptor;
use crate::core::dispatcher::Dispatcher;
use crate::core::types::{GenerationResult, TuningParams};

/// One model's outcome inside a comparison
#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    pub model: &'static ModelDescriptor,
    pub result: GenerationResult,
}

/// Outcome of a full comparison run
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// One entry per selected model, in selection order
    pub entries: Vec<ComparisonEntry>,
    /// Wall time for the whole sequential run, in milliseconds
    pub total_elapsed_ms: f64,
}

impl ComparisonReport {
    /// Entries whose call succeeded
    pub fn successes(&self) -> impl Iterator<Item = &ComparisonEntry> {
        self.entries.iter().filter(|e| !e.result.is_error())
    }

    /// Entries whose call failed
    pub fn failures(&self) -> impl Iterator<Item = &ComparisonEntry> {
        self.entries.iter().filter(|e| e.result.is_error())
    }
}

/// Run one prompt against each selected model, sequentially
pub async fn run_comparison(
    dispatcher: &Dispatcher,
    models: &[&'static ModelDescriptor],
    prompt: &str,
    tuning: &TuningParams,
) -> ComparisonReport {
    let started = Instant::now();
    let mut entries = Vec::with_capacity(models.len());

    for (index, model) in models.iter().enumerate() {
        info!(
            model = model.id,
            "comparison step {}/{}",
            index + 1,
            models.len()
        );
        let result = dispatcher.dispatch(model, prompt, tuning).await;
        entries.push(ComparisonEntry { model, result });
    }

    ComparisonReport {
        entries,
        total_elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
    }
}
