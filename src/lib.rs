//! # llmbench-rs
//!
//! Side-by-side LLM benchmarking core. One prompt goes to any selection of
//! models across OpenAI, Anthropic, Google and xAI; each vendor's response
//! comes back normalized into one uniform record with comparable latency,
//! token and cost numbers.
//!
//! The interesting part is the normalization: every vendor reports token
//! usage differently (reasoning tokens counted inside output, outside it, or
//! folded into an opaque total; cached safety prompts inflating input), and
//! the per-vendor adapters correct for all of it so that
//! `output_tokens + reasoning_tokens` is always the true billable output.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use llmbench_rs::{Dispatcher, TuningParams, catalog};
//!
//! #[tokio::main]
//! async fn main() {
//!     let dispatcher = Dispatcher::from_env();
//!     let model = catalog::find_model("gpt-5").unwrap();
//!
//!     let result = dispatcher
//!         .dispatch(model, "Explain borrowing in one sentence.", &TuningParams::default())
//!         .await;
//!
//!     match &result.error {
//!         None => println!("{} ({:.0} ms)", result.content, result.latency_ms),
//!         Some(err) => eprintln!("{}: {err}", model.display_name),
//!     }
//! }
//! ```
//!
//! Failures never surface as `Err` or panics: a dead network, a missing API
//! key or a malformed vendor body all come back as a result record with
//! `error` set, so a comparison over N models survives any single failure.

pub mod core;

pub use crate::core::catalog::{self, ModelDescriptor, Provider};
pub use crate::core::cost::{USD_TO_JPY, cost_jpy, cost_usd};
pub use crate::core::dispatcher::Dispatcher;
pub use crate::core::providers::{
    Adapter, AnthropicAdapter, AnthropicConfig, GoogleAdapter, GoogleConfig, OpenAiAdapter,
    OpenAiConfig, ProviderAdapter, XaiAdapter, XaiConfig,
};
pub use crate::core::runner::{ComparisonEntry, ComparisonReport, run_comparison};
pub use crate::core::types::{
    AdapterError, GenerationParams, GenerationResult, ReasoningEffort, ThinkingLevel,
    TuningParams, Verbosity,
};
