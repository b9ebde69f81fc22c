//! Generation parameters
//!
//! Each vendor understands a fixed, enumerable set of knobs, so the parameter
//! bag is a closed tagged enum per provider family rather than a free-form
//! map. Fields that do not apply to the resolved model path are silently
//! ignored by the adapter, never an error.
//!
//! `TuningParams` is the caller-facing side: one slot per model family,
//! mirroring how the knobs are actually grouped when configuring a run. The
//! dispatcher copies the right slot into a `GenerationParams` value.

use serde::{Deserialize, Serialize};

/// Depth of the hidden deliberation pass for GPT-5-class models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    None,
    Low,
    Medium,
    High,
}

impl ReasoningEffort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningEffort::None => "none",
            ReasoningEffort::Low => "low",
            ReasoningEffort::Medium => "medium",
            ReasoningEffort::High => "high",
        }
    }
}

impl std::str::FromStr for ReasoningEffort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(ReasoningEffort::None),
            "low" => Ok(ReasoningEffort::Low),
            "medium" => Ok(ReasoningEffort::Medium),
            "high" => Ok(ReasoningEffort::High),
            other => Err(format!("unknown reasoning effort: {other}")),
        }
    }
}

/// Output verbosity for GPT-5-class models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Low,
    Medium,
    High,
}

impl Verbosity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Low => "low",
            Verbosity::Medium => "medium",
            Verbosity::High => "high",
        }
    }
}

impl std::str::FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Verbosity::Low),
            "medium" => Ok(Verbosity::Medium),
            "high" => Ok(Verbosity::High),
            other => Err(format!("unknown verbosity: {other}")),
        }
    }
}

/// Thinking depth for the Gemini 3 family. Serialized upper-case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingLevel {
    Low,
    High,
}

impl ThinkingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThinkingLevel::Low => "low",
            ThinkingLevel::High => "high",
        }
    }

    /// The casing the vendor requires
    pub fn wire_value(&self) -> &'static str {
        match self {
            ThinkingLevel::Low => "LOW",
            ThinkingLevel::High => "HIGH",
        }
    }
}

impl std::str::FromStr for ThinkingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(ThinkingLevel::Low),
            "high" => Ok(ThinkingLevel::High),
            other => Err(format!("unknown thinking level: {other}")),
        }
    }
}

/// Knobs the OpenAI adapter understands.
///
/// The reasoning fields apply only to the Responses path and `temperature`
/// only to the chat path; whichever path the model ID resolves to, the other
/// fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiParams {
    pub reasoning_effort: Option<ReasoningEffort>,
    pub verbosity: Option<Verbosity>,
    pub temperature: Option<f64>,
    pub max_completion_tokens: u32,
}

impl Default for OpenAiParams {
    fn default() -> Self {
        Self {
            reasoning_effort: None,
            verbosity: None,
            temperature: None,
            max_completion_tokens: default_max_tokens(),
        }
    }
}

/// Knobs the Anthropic adapter understands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicParams {
    pub system_prompt: Option<String>,
    pub extended_thinking: bool,
    /// Thinking-token budget; only read when `extended_thinking` is on
    pub budget_tokens: u32,
    /// Ignored when `extended_thinking` is on (incompatible at the vendor)
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for AnthropicParams {
    fn default() -> Self {
        Self {
            system_prompt: None,
            extended_thinking: false,
            budget_tokens: 8000,
            temperature: 0.0,
            max_tokens: default_max_tokens(),
        }
    }
}

/// Knobs the Google adapter understands.
///
/// `thinking_level` applies to the Gemini 3 family, `temperature` to everything
/// else; the adapter attaches whichever the model ID calls for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleParams {
    pub system_prompt: Option<String>,
    pub temperature: Option<f64>,
    pub thinking_level: Option<ThinkingLevel>,
    pub max_output_tokens: u32,
}

impl Default for GoogleParams {
    fn default() -> Self {
        Self {
            system_prompt: None,
            temperature: None,
            thinking_level: None,
            max_output_tokens: default_max_tokens(),
        }
    }
}

/// Knobs the xAI adapter understands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XaiParams {
    pub system_prompt: Option<String>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for XaiParams {
    fn default() -> Self {
        Self {
            system_prompt: None,
            temperature: 0.0,
            max_tokens: default_max_tokens(),
        }
    }
}

/// Provider-specific parameter bag for one generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationParams {
    OpenAi(OpenAiParams),
    Anthropic(AnthropicParams),
    Google(GoogleParams),
    Xai(XaiParams),
}

impl GenerationParams {
    /// OpenAI view of the bag; a mismatched variant degrades to defaults
    pub fn openai(&self) -> OpenAiParams {
        match self {
            GenerationParams::OpenAi(p) => p.clone(),
            _ => OpenAiParams::default(),
        }
    }

    /// Anthropic view of the bag
    pub fn anthropic(&self) -> AnthropicParams {
        match self {
            GenerationParams::Anthropic(p) => p.clone(),
            _ => AnthropicParams::default(),
        }
    }

    /// Google view of the bag
    pub fn google(&self) -> GoogleParams {
        match self {
            GenerationParams::Google(p) => p.clone(),
            _ => GoogleParams::default(),
        }
    }

    /// xAI view of the bag
    pub fn xai(&self) -> XaiParams {
        match self {
            GenerationParams::Xai(p) => p.clone(),
            _ => XaiParams::default(),
        }
    }
}

/// Reasoning-model slot (GPT-5.1 and the GPT-5 family have separate ones)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gpt5Slot {
    pub reasoning_effort: ReasoningEffort,
    pub verbosity: Verbosity,
    pub max_completion_tokens: u32,
}

impl Default for Gpt5Slot {
    fn default() -> Self {
        Self {
            reasoning_effort: ReasoningEffort::Medium,
            verbosity: Verbosity::Medium,
            max_completion_tokens: default_max_tokens(),
        }
    }
}

/// Claude slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeSlot {
    pub extended_thinking: bool,
    pub budget_tokens: u32,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for ClaudeSlot {
    fn default() -> Self {
        Self {
            extended_thinking: false,
            budget_tokens: 8000,
            temperature: 0.0,
            max_tokens: default_max_tokens(),
        }
    }
}

/// Gemini 3 slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gemini3Slot {
    pub thinking_level: ThinkingLevel,
    pub max_output_tokens: u32,
}

impl Default for Gemini3Slot {
    fn default() -> Self {
        Self {
            thinking_level: ThinkingLevel::Low,
            max_output_tokens: default_max_tokens(),
        }
    }
}

/// Gemini 2.5-family slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSlot {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl Default for GeminiSlot {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_output_tokens: default_max_tokens(),
        }
    }
}

/// Grok slot, shared by all xAI models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrokSlot {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for GrokSlot {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: default_max_tokens(),
        }
    }
}

/// Full set of caller-configured knobs, one slot per model family.
///
/// Passed explicitly into `dispatch`; adapters never read ambient state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuningParams {
    pub gpt51: Gpt5Slot,
    pub gpt5: Gpt5Slot,
    pub claude: ClaudeSlot,
    pub gemini3: Gemini3Slot,
    pub gemini: GeminiSlot,
    pub grok: GrokSlot,
    /// Optional system prompt, forwarded to the vendors that accept one
    pub system_prompt: Option<String>,
}

fn default_max_tokens() -> u32 {
    10_000
}
