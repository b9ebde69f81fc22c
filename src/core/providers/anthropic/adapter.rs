//! Anthropic adapter implementation
//!
//! When extended thinking is on, the vendor requires `max_tokens` to exceed
//! the thinking budget and rejects `temperature`; the adapter enforces the
//! floor and omits the knob. Thinking tokens stay inside the vendor's
//! reported usage, so `reasoning_tokens` is always 0 for this vendor.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use super::config::AnthropicConfig;
use crate::core::catalog::Provider;
use crate::core::providers::{ProviderAdapter, build_http_client};
use crate::core::types::{AdapterError, AnthropicParams, GenerationParams, GenerationResult};

/// Headroom above the thinking budget the vendor requires of max_tokens
const THINKING_HEADROOM_TOKENS: u32 = 1000;

/// Anthropic adapter
#[derive(Debug, Clone)]
pub struct AnthropicAdapter {
    config: AnthropicConfig,
    http_client: Client,
}

impl AnthropicAdapter {
    /// Create an adapter from configuration
    pub fn new(config: AnthropicConfig) -> Result<Self, AdapterError> {
        let http_client = build_http_client(Provider::Anthropic, config.request_timeout)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Messages API request body
    pub fn build_request_body(prompt: &str, model_id: &str, params: &AnthropicParams) -> Value {
        let mut body = json!({
            "model": model_id,
            "messages": [{ "role": "user", "content": prompt }],
        });

        if let Some(system) = params.system_prompt.as_deref() {
            if !system.is_empty() {
                body["system"] = json!(system);
            }
        }

        if params.extended_thinking {
            // max_tokens must exceed the thinking budget; temperature is
            // incompatible with thinking mode at this vendor
            let adjusted_max_tokens = params
                .max_tokens
                .max(params.budget_tokens + THINKING_HEADROOM_TOKENS);
            body["max_tokens"] = json!(adjusted_max_tokens);
            body["thinking"] = json!({
                "type": "enabled",
                "budget_tokens": params.budget_tokens,
            });
        } else {
            body["max_tokens"] = json!(params.max_tokens);
            body["temperature"] = json!(params.temperature);
        }

        body
    }

    /// Normalize a Messages API body into the uniform record
    pub fn parse_response_body(model_id: &str, body: &Value, latency_ms: f64) -> GenerationResult {
        // Only text blocks carry visible output; thinking blocks are skipped
        let mut content = String::new();
        if let Some(blocks) = body.get("content").and_then(|c| c.as_array()) {
            for block in blocks {
                if block.get("type").and_then(|t| t.as_str()) == Some("text") {
                    if let Some(text) = block.get("text").and_then(|t| t.as_str()) {
                        content.push_str(text);
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
    async fn execute(&self, body: &Value) -> Result<(Value, f64), AdapterError> {
        let url = format!("{}/v1/messages", self.config.base_url);
        let api_key = self.config.api_key.clone().unwrap_or_default();

        if self.config.debug {
            debug!("Anthropic request URL: {url}");
            debug!(
                "Anthropic request body: {}",
                serde_json::to_string_pretty(body).unwrap_or_default()
            );
        }

        let started = Instant::now();
        let response = self
            .http_client
            .post(&url)
            // The Messages API uses x-api-key, not a Bearer token
            .header("x-api-key", api_key)
            .header("anthropic-version", self.config.api_version.as_str())
            .json(body)
            .send()
            .await
            .map_err(|e| AdapterError::transport(Provider::Anthropic, e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AdapterError::transport(Provider::Anthropic, e.to_string()))?;
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        if self.config.debug {
            debug!("Anthropic response status: {status}");
            debug!("Anthropic response body: {text}");
        }

        if !status.is_success() {
            return Err(AdapterError::transport(
                Provider::Anthropic,
                format!("HTTP {}: {}", status.as_u16(), text),
            ));
        }

        let json: Value = serde_json::from_str(&text)
            .map_err(|e| AdapterError::vendor_response(Provider::Anthropic, e.to_string()))?;

        Ok((json, latency_ms))
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    async fn try_generate(
        &self,
        prompt: &str,
        model_id: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, AdapterError> {
        self.config.validate()?;
        let params = params.anthropic();

        let body = Self::build_request_body(prompt, model_id, &params);
        let (response, latency_ms) = self.execute(&body).await?;
        Ok(Self::parse_response_body(model_id, &response, latency_ms))
    }
}
