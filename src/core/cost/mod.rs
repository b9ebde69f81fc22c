//! Cost calculation
//!
//! One pure cost formula shared by every provider; the per-vendor token
//! corrections happen in the adapters, never here.

pub mod calculator;

pub use calculator::{USD_TO_JPY, cost_jpy, cost_usd};
