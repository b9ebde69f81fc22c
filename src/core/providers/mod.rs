//! Provider adapters using an enum-based design
//!
//! One adapter per vendor, all implementing the same `ProviderAdapter`
//! capability interface, collected in a flat `Adapter` enum keyed by
//! provider. Adapters share no state; each call reads the immutable catalog
//! and writes only its own freshly allocated result.

pub mod anthropic;
pub mod google;
pub mod openai;
pub mod xai;

use async_trait::async_trait;
use tracing::warn;

use crate::core::catalog::Provider;
use crate::core::types::{AdapterError, GenerationParams, GenerationResult};

pub use anthropic::{AnthropicAdapter, AnthropicConfig};
pub use google::{GoogleAdapter, GoogleConfig};
pub use openai::{OpenAiAdapter, OpenAiConfig};
pub use xai::{XaiAdapter, XaiConfig};

/// Capability interface every vendor adapter implements.
///
/// `try_generate` is the fallible inner layer; callers outside this module go
/// through [`Adapter::generate`], which never returns an error.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Vendor this adapter talks to
    fn provider(&self) -> Provider;

    /// Translate the request, invoke the vendor, normalize the response
    async fn try_generate(
        &self,
        prompt: &str,
        model_id: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, AdapterError>;
}

/// Unified adapter, one variant per vendor
#[derive(Debug, Clone)]
pub enum Adapter {
    OpenAi(OpenAiAdapter),
    Anthropic(AnthropicAdapter),
    Google(GoogleAdapter),
    Xai(XaiAdapter),
}

impl Adapter {
    /// Vendor behind this adapter
    pub fn provider(&self) -> Provider {
        match self {
            Adapter::OpenAi(a) => a.provider(),
            Adapter::Anthropic(a) => a.provider(),
            Adapter::Google(a) => a.provider(),
            Adapter::Xai(a) => a.provider(),
        }
    }

    /// Fallible generation, dispatched to the vendor implementation
    pub async fn try_generate(
        &self,
        prompt: &str,
        model_id: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, AdapterError> {
        match self {
            Adapter::OpenAi(a) => a.try_generate(prompt, model_id, params).await,
            Adapter::Anthropic(a) => a.try_generate(prompt, model_id, params).await,
            Adapter::Google(a) => a.try_generate(prompt, model_id, params).await,
            Adapter::Xai(a) => a.try_generate(prompt, model_id, params).await,
        }
    }

    /// Non-throwing generation contract.
    ///
    /// Every failure — missing key, network error, malformed response — comes
    /// back as a `GenerationResult` with `error` set and numeric fields
    /// zeroed, so a batch over N models survives any single model failing.
    pub async fn generate(
        &self,
        prompt: &str,
        model_id: &str,
        params: &GenerationParams,
    ) -> GenerationResult {
        match self.try_generate(prompt, model_id, params).await {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    provider = err.provider(),
                    model = model_id,
                    "generation failed: {err}"
                );
                GenerationResult::failure(model_id, err.to_string())
            }
        }
    }
}

/// Build the shared-shape HTTP client used by all adapters
pub(crate) fn build_http_client(
    provider: Provider,
    request_timeout: u64,
) -> Result<reqwest::Client, AdapterError> {
    reqwest::ClientBuilder::new()
        .timeout(std::time::Duration::from_secs(request_timeout))
        .build()
        .map_err(|e| AdapterError::transport(provider, format!("Failed to create HTTP client: {e}")))
}
