//! Generation dispatcher
//!
//! Pure routing: the adapter is selected by the model's provider, and the
//! forwarded parameter slot by a fixed `(provider, model-id pattern)` table.
//! A missing API key for the resolved provider short-circuits to an error
//! result before any adapter is constructed or any network touched.

use tracing::info;

use crate::core::catalog::{ModelDescriptor, Provider};
use crate::core::providers::{
    Adapter, AnthropicAdapter, AnthropicConfig, GoogleAdapter, GoogleConfig, OpenAiAdapter,
    OpenAiConfig, XaiAdapter, XaiConfig,
};
use crate::core::types::{
    AdapterError, AnthropicParams, GenerationParams, GenerationResult, GoogleParams, OpenAiParams,
    TuningParams, XaiParams,
};

/// Routes generation requests to the right adapter with the right parameters
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    openai: OpenAiConfig,
    anthropic: AnthropicConfig,
    google: GoogleConfig,
    xai: XaiConfig,
}

impl Dispatcher {
    /// Build from explicit per-provider configurations
    pub fn new(
        openai: OpenAiConfig,
        anthropic: AnthropicConfig,
        google: GoogleConfig,
        xai: XaiConfig,
    ) -> Self {
        Self {
            openai,
            anthropic,
            google,
            xai,
        }
    }

    /// Build from the environment, one API key variable per provider
    pub fn from_env() -> Self {
        Self::new(
            OpenAiConfig::from_env(),
            AnthropicConfig::from_env(),
            GoogleConfig::from_env(),
            XaiConfig::from_env(),
        )
    }

    /// Whether a key is configured for the provider
    pub fn has_credentials(&self, provider: Provider) -> bool {
        match provider {
            Provider::OpenAi => self.openai.api_key.is_some(),
            Provider::Anthropic => self.anthropic.api_key.is_some(),
            Provider::Google => self.google.api_key.is_some(),
            Provider::Xai => self.xai.api_key.is_some(),
        }
    }

    /// Fixed routing table from caller-facing slots to the provider bag.
    ///
    /// OpenAI's 5.1 and 5 families have separate slots; the adapter itself
    /// then picks the Responses or chat path from the model ID. Google's
    /// Gemini 3 family gets the thinking slot, older families the
    /// temperature slot.
    pub fn select_params(model: &ModelDescriptor, tuning: &TuningParams) -> GenerationParams {
        match model.provider {
            Provider::OpenAi => {
                let slot = if model.id.contains("gpt-5.1") {
                    &tuning.gpt51
                } else {
                    &tuning.gpt5
                };
                GenerationParams::OpenAi(OpenAiParams {
                    reasoning_effort: Some(slot.reasoning_effort),
                    verbosity: Some(slot.verbosity),
                    temperature: None,
                    max_completion_tokens: slot.max_completion_tokens,
                })
            }
            Provider::Anthropic => GenerationParams::Anthropic(AnthropicParams {
                system_prompt: tuning.system_prompt.clone(),
                extended_thinking: tuning.claude.extended_thinking,
                budget_tokens: tuning.claude.budget_tokens,
                temperature: tuning.claude.temperature,
                max_tokens: tuning.claude.max_tokens,
            }),
            Provider::Google => {
                if model.id.contains("gemini-3") {
                    GenerationParams::Google(GoogleParams {
                        system_prompt: tuning.system_prompt.clone(),
                        temperature: None,
                        thinking_level: Some(tuning.gemini3.thinking_level),
                        max_output_tokens: tuning.gemini3.max_output_tokens,
                    })
                } else {
                    GenerationParams::Google(GoogleParams {
                        system_prompt: tuning.system_prompt.clone(),
                        temperature: Some(tuning.gemini.temperature),
                        thinking_level: None,
                        max_output_tokens: tuning.gemini.max_output_tokens,
                    })
                }
            }
            Provider::Xai => GenerationParams::Xai(XaiParams {
                system_prompt: tuning.system_prompt.clone(),
                temperature: tuning.grok.temperature,
                max_tokens: tuning.grok.max_tokens,
            }),
        }
    }

    fn build_adapter(&self, provider: Provider) -> Result<Adapter, AdapterError> {
        Ok(match provider {
            Provider::OpenAi => Adapter::OpenAi(OpenAiAdapter::new(self.openai.clone())?),
            Provider::Anthropic => {
                Adapter::Anthropic(AnthropicAdapter::new(self.anthropic.clone())?)
            }
            Provider::Google => Adapter::Google(GoogleAdapter::new(self.google.clone())?),
            Provider::Xai => Adapter::Xai(XaiAdapter::new(self.xai.clone())?),
        })
    }

    /// Run one generation against one model.
    ///
    /// Never returns an error: every failure comes back inside the result.
    pub async fn dispatch(
        &self,
        model: &ModelDescriptor,
        prompt: &str,
        tuning: &TuningParams,
    ) -> GenerationResult {
        if !self.has_credentials(model.provider) {
            let err = AdapterError::configuration(model.provider);
            return GenerationResult::failure(model.id, err.to_string());
        }

        let params = Self::select_params(model, tuning);
        let adapter = match self.build_adapter(model.provider) {
            Ok(adapter) => adapter,
            Err(err) => return GenerationResult::failure(model.id, err.to_string()),
        };

        info!(model = model.id, provider = model.provider.name(), "dispatching generation");
        adapter.generate(prompt, model.id, &params).await
    }
}
