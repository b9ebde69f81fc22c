//! Core data types shared across adapters, dispatcher and runner

pub mod errors;
pub mod params;
pub mod result;

pub use errors::AdapterError;
pub use params::{
    AnthropicParams, ClaudeSlot, Gemini3Slot, GeminiSlot, GenerationParams, GoogleParams,
    Gpt5Slot, GrokSlot, OpenAiParams, ReasoningEffort, ThinkingLevel, TuningParams, Verbosity,
    XaiParams,
};
pub use result::GenerationResult;
