//! xAI adapter
//!
//! OpenAI-compatible wire format against the x.ai endpoint, with
//! vendor-specific token corrections.

pub mod adapter;
pub mod config;

pub use adapter::XaiAdapter;
pub use config::XaiConfig;
