//! Adapter error taxonomy
//!
//! Every failure an adapter can hit is one of these three kinds, and all of
//! them are converted into `GenerationResult.error` at the adapter boundary.
//! Nothing propagates past `generate` as an `Err`.

use thiserror::Error;

use crate::core::catalog::Provider;

/// Errors raised inside an adapter before conversion to a result record
#[derive(Debug, Clone, Error)]
pub enum AdapterError {
    /// API key for the resolved provider is not configured.
    /// Detected before any network call; the message names the variable.
    #[error("Missing API key: set {env_var}")]
    Configuration {
        provider: &'static str,
        env_var: &'static str,
    },

    /// Network or HTTP failure from the vendor call.
    /// The message is the underlying error text, unmodified.
    #[error("{message}")]
    Transport {
        provider: &'static str,
        message: String,
    },

    /// The vendor returned a body that could not be read as a response at all.
    /// Individually missing fields are not errors; they degrade to defaults.
    #[error("Malformed response from {provider}: {message}")]
    VendorResponse {
        provider: &'static str,
        message: String,
    },
}

impl AdapterError {
    /// Missing-credential error for a provider
    pub fn configuration(provider: Provider) -> Self {
        Self::Configuration {
            provider: provider.name(),
            env_var: provider.api_key_env(),
        }
    }

    /// Transport-layer error, keeping the underlying message verbatim
    pub fn transport(provider: Provider, message: impl Into<String>) -> Self {
        Self::Transport {
            provider: provider.name(),
            message: message.into(),
        }
    }

    /// Unparseable vendor response
    pub fn vendor_response(provider: Provider, message: impl Into<String>) -> Self {
        Self::VendorResponse {
            provider: provider.name(),
            message: message.into(),
        }
    }

    /// Provider the error originated from
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Configuration { provider, .. }
            | Self::Transport { provider, .. }
            | Self::VendorResponse { provider, .. } => provider,
        }
    }
}
