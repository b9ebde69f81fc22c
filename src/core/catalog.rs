//! Model catalog
//!
//! Static registry of benchmarkable models with per-million-token pricing.
//! Loaded once, never mutated; every request reads from this table.

use serde::{Deserialize, Serialize};

/// Supported vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
    Xai,
}

impl Provider {
    /// Canonical provider name as used in the catalog and logs
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Google => "google",
            Provider::Xai => "xai",
        }
    }

    /// Environment variable holding this provider's API key
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::Google => "GOOGLE_API_KEY",
            Provider::Xai => "XAI_API_KEY",
        }
    }

    /// All providers, in catalog display order
    pub fn all() -> &'static [Provider] {
        &[
            Provider::OpenAi,
            Provider::Anthropic,
            Provider::Google,
            Provider::Xai,
        ]
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "anthropic" => Ok(Provider::Anthropic),
            "google" | "gemini" => Ok(Provider::Google),
            "xai" => Ok(Provider::Xai),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct ModelDescriptor {
    /// Model ID as used in the vendor API
    pub id: &'static str,
    /// Display name
    pub display_name: &'static str,
    /// Owning vendor
    pub provider: Provider,
    /// Input cost per million tokens (in USD)
    pub input_price_per_million: f64,
    /// Output cost per million tokens (in USD)
    pub output_price_per_million: f64,
}

/// Static model catalog, grouped by provider in display order
pub static MODEL_CATALOG: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "gpt-5.1",
        display_name: "GPT-5.1",
        provider: Provider::OpenAi,
        input_price_per_million: 1.25,
        output_price_per_million: 10.00,
    },
    ModelDescriptor {
        id: "gpt-5",
        display_name: "GPT-5",
        provider: Provider::OpenAi,
        input_price_per_million: 1.25,
        output_price_per_million: 10.00,
    },
    ModelDescriptor {
        id: "gpt-5-mini",
        display_name: "GPT-5 mini",
        provider: Provider::OpenAi,
        input_price_per_million: 0.25,
        output_price_per_million: 2.00,
    },
    ModelDescriptor {
        id: "gpt-5-nano",
        display_name: "GPT-5 nano",
        provider: Provider::OpenAi,
        input_price_per_million: 0.05,
        output_price_per_million: 0.40,
    },
    ModelDescriptor {
        id: "claude-sonnet-4-5-20250929",
        display_name: "Claude Sonnet 4.5",
        provider: Provider::Anthropic,
        input_price_per_million: 3.00,
        output_price_per_million: 15.00,
    },
    ModelDescriptor {
        id: "claude-haiku-4-5-20251001",
        display_name: "Claude Haiku 4.5",
        provider: Provider::Anthropic,
        input_price_per_million: 1.00,
        output_price_per_million: 5.00,
    },
    ModelDescriptor {
        id: "gemini-3-pro-preview",
        display_name: "Gemini 3 Pro",
        provider: Provider::Google,
        input_price_per_million: 2.00,
        output_price_per_million: 12.00,
    },
    ModelDescriptor {
        id: "gemini-2.5-pro",
        display_name: "Gemini 2.5 Pro",
        provider: Provider::Google,
        input_price_per_million: 1.25,
        output_price_per_million: 10.00,
    },
    ModelDescriptor {
        id: "gemini-2.5-flash",
        display_name: "Gemini 2.5 Flash",
        provider: Provider::Google,
        input_price_per_million: 0.30,
        output_price_per_million: 2.50,
    },
    ModelDescriptor {
        id: "grok-4",
        display_name: "Grok 4",
        provider: Provider::Xai,
        input_price_per_million: 3.00,
        output_price_per_million: 15.00,
    },
    ModelDescriptor {
        id: "grok-4-1-fast-non-reasoning",
        display_name: "Grok 4.1 Fast (non-reasoning)",
        provider: Provider::Xai,
        input_price_per_million: 0.20,
        output_price_per_million: 0.50,
    },
    ModelDescriptor {
        id: "grok-3-mini",
        display_name: "Grok 3 Mini",
        provider: Provider::Xai,
        input_price_per_million: 0.30,
        output_price_per_million: 0.50,
    },
];

/// Look up a model descriptor by ID
pub fn find_model(model_id: &str) -> Option<&'static ModelDescriptor> {
    MODEL_CATALOG.iter().find(|m| m.id == model_id)
}

/// All models for a given provider, in catalog order
pub fn models_for_provider(provider: Provider) -> Vec<&'static ModelDescriptor> {
    MODEL_CATALOG
        .iter()
        .filter(|m| m.provider == provider)
        .collect()
}
