//! OpenAI adapter implementation
//!
//! Model ID dispatch: GPT-5-class reasoning models (a "gpt-5" ID that is not
//! a "mini" variant) use the Responses API with `reasoning`/`text` directives;
//! other models use plain Chat Completions with `temperature`.
//!
//! This vendor reports reasoning tokens inside `output_tokens`, so the
//! adapter subtracts them back out to keep the two result fields disjoint.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use super::config::OpenAiConfig;
use crate::core::catalog::Provider;
use crate::core::providers::{ProviderAdapter, build_http_client};
use crate::core::types::{AdapterError, GenerationParams, GenerationResult, OpenAiParams};

/// OpenAI adapter
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    config: OpenAiConfig,
    http_client: Client,
}

impl OpenAiAdapter {
    /// Create an adapter from configuration
    pub fn new(config: OpenAiConfig) -> Result<Self, AdapterError> {
        let http_client = build_http_client(Provider::OpenAi, config.request_timeout)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Whether the model ID denotes a GPT-5-class reasoning model.
    /// "mini" variants stay on the chat path even though they match "gpt-5".
    pub fn is_reasoning_model(model_id: &str) -> bool {
        model_id.contains("gpt-5") && !model_id.contains("mini")
    }

    /// Responses API request body
    pub fn build_responses_body(prompt: &str, model_id: &str, params: &OpenAiParams) -> Value {
        let mut body = json!({
            "model": model_id,
            "input": prompt,
            "max_output_tokens": params.max_completion_tokens,
        });

        if let Some(effort) = params.reasoning_effort {
            body["reasoning"] = json!({ "effort": effort.as_str() });
        }
        if let Some(verbosity) = params.verbosity {
            body["text"] = json!({ "verbosity": verbosity.as_str() });
        }

        body
    }

    /// Chat Completions request body
    pub fn build_chat_body(prompt: &str, model_id: &str, params: &OpenAiParams) -> Value {
        let mut body = json!({
            "model": model_id,
            "messages": [{ "role": "user", "content": prompt }],
            "max_completion_tokens": params.max_completion_tokens,
        });

        if let Some(temperature) = params.temperature {
            body["temperature"] = json!(temperature);
        }

        body
    }

    /// Normalize a Responses API body into the uniform record
    pub fn parse_responses_body(model_id: &str, body: &Value, latency_ms: f64) -> GenerationResult {
        // Prefer the consolidated output_text field when the vendor sends one
        let mut content = body
            .get("output_text")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        if content.is_empty() {
            if let Some(items) = body.get("output").and_then(|v| v.as_array()) {
                for item in items {
                    if let Some(fragments) = item.get("content").and_then(|c| c.as_array()) {
                        for fragment in fragments {
                            if let Some(text) = fragment.get("text").and_then(|t| t.as_str()) {
                                content.push_str(text);
                            }
                        }
                    }
                }
            }
        }

        let usage = body.get("usage");
        let input_tokens = usage
            .and_then(|u| u.get("input_tokens"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;
        let output_tokens = usage
            .and_then(|u| u.get("output_tokens"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;
        let reasoning_tokens = usage
            .and_then(|u| u.get("output_tokens_details"))
            .and_then(|d| d.get("reasoning_tokens"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        // The vendor counts reasoning inside output_tokens; keep them disjoint
        let output_tokens = output_tokens.saturating_sub(reasoning_tokens);

        GenerationResult::success(
            content,
            input_tokens,
            output_tokens,
            reasoning_tokens,
            latency_ms,
            model_id,
            body.clone(),
        )
    }

    /// Normalize a Chat Completions body into the uniform record
    pub fn parse_chat_body(model_id: &str, body: &Value, latency_ms: f64) -> GenerationResult {
        let content = body
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let usage = body.get("usage");
        let input_tokens = usage
            .and_then(|u| u.get("prompt_tokens"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;
        let output_tokens = usage
            .and_then(|u| u.get("completion_tokens"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        GenerationResult::success(
            content,
            input_tokens,
            output_tokens,
            0,
            latency_ms,
            model_id,
            body.clone(),
        )
    }

    /// POST a JSON body, timing the call itself, and return (body, latency)
    async fn execute(&self, path: &str, body: &Value) -> Result<(Value, f64), AdapterError> {
        let url = format!("{}{}", self.config.base_url, path);
        let api_key = self.config.api_key.clone().unwrap_or_default();

        if self.config.debug {
            debug!("OpenAI request URL: {url}");
            debug!(
                "OpenAI request body: {}",
                serde_json::to_string_pretty(body).unwrap_or_default()
            );
        }

        let started = Instant::now();
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| AdapterError::transport(Provider::OpenAi, e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AdapterError::transport(Provider::OpenAi, e.to_string()))?;
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        if self.config.debug {
            debug!("OpenAI response status: {status}");
            debug!("OpenAI response body: {text}");
        }

        if !status.is_success() {
            return Err(AdapterError::transport(
                Provider::OpenAi,
                format!("HTTP {}: {}", status.as_u16(), text),
            ));
        }

        let json: Value = serde_json::from_str(&text)
            .map_err(|e| AdapterError::vendor_response(Provider::OpenAi, e.to_string()))?;

        Ok((json, latency_ms))
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    async fn try_generate(
        &self,
        prompt: &str,
        model_id: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, AdapterError> {
        self.config.validate()?;
        let params = params.openai();

        if Self::is_reasoning_model(model_id) {
            let body = Self::build_responses_body(prompt, model_id, &params);
            let (response, latency_ms) = self.execute("/responses", &body).await?;
            Ok(Self::parse_responses_body(model_id, &response, latency_ms))
        } else {
            let body = Self::build_chat_body(prompt, model_id, &params);
            let (response, latency_ms) = self.execute("/chat/completions", &body).await?;
            Ok(Self::parse_chat_body(model_id, &response, latency_ms))
        }
    }
}
