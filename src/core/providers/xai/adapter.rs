//! xAI adapter implementation
//!
//! Grok speaks the OpenAI chat-completions wire format, but its token
//! accounting needs two corrections before the result is comparable:
//!
//! - the vendor injects a cached safety system prompt that inflates
//!   `prompt_tokens`, so reported cached tokens are subtracted from input;
//! - `completion_tokens` does NOT include reasoning tokens (unlike OpenAI's
//!   own reasoning models), so reported reasoning tokens are added on top of
//!   it — the disjoint-sum invariant is reached by addition here.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use super::config::XaiConfig;
use crate::core::catalog::Provider;
use crate::core::providers::{ProviderAdapter, build_http_client};
use crate::core::types::{AdapterError, GenerationParams, GenerationResult, XaiParams};

/// xAI adapter
#[derive(Debug, Clone)]
pub struct XaiAdapter {
    config: XaiConfig,
    http_client: Client,
}

impl XaiAdapter {
    /// Create an adapter from configuration
    pub fn new(config: XaiConfig) -> Result<Self, AdapterError> {
        let http_client = build_http_client(Provider::Xai, config.request_timeout)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Chat-completions request body (OpenAI-compatible)
    pub fn build_request_body(prompt: &str, model_id: &str, params: &XaiParams) -> Value {
        let mut messages = Vec::new();
        if let Some(system) = params.system_prompt.as_deref() {
            if !system.is_empty() {
                messages.push(json!({ "role": "system", "content": system }));
            }
        }
        messages.push(json!({ "role": "user", "content": prompt }));

        json!({
            "model": model_id,
            "messages": messages,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        })
    }

    /// Normalize a chat-completions body into the uniform record
    pub fn parse_response_body(model_id: &str, body: &Value, latency_ms: f64) -> GenerationResult {
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

        // The injected safety prompt is billed as cached input; take it out
        let cached_tokens = usage
            .and_then(|u| u.get("prompt_tokens_details"))
            .and_then(|d| d.get("cached_tokens"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;
        let input_tokens = input_tokens.saturating_sub(cached_tokens);

        // completion_tokens excludes reasoning here; fold it back in
        let reasoning_tokens = usage
            .and_then(|u| u.get("completion_tokens_details"))
            .and_then(|d| d.get("reasoning_tokens"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;
        let output_tokens = output_tokens + reasoning_tokens;

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
        let url = format!("{}/chat/completions", self.config.base_url);
        let api_key = self.config.api_key.clone().unwrap_or_default();

        if self.config.debug {
            debug!("xAI request URL: {url}");
            debug!(
                "xAI request body: {}",
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
            .map_err(|e| AdapterError::transport(Provider::Xai, e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AdapterError::transport(Provider::Xai, e.to_string()))?;
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        if self.config.debug {
            debug!("xAI response status: {status}");
            debug!("xAI response body: {text}");
        }

        if !status.is_success() {
            return Err(AdapterError::transport(
                Provider::Xai,
                format!("HTTP {}: {}", status.as_u16(), text),
            ));
        }

        let json: Value = serde_json::from_str(&text)
            .map_err(|e| AdapterError::vendor_response(Provider::Xai, e.to_string()))?;

        Ok((json, latency_ms))
    }
}

#[async_trait]
impl ProviderAdapter for XaiAdapter {
    fn provider(&self) -> Provider {
        Provider::Xai
    }

    async fn try_generate(
        &self,
        prompt: &str,
        model_id: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, AdapterError> {
        self.config.validate()?;
        let params = params.xai();

        let body = Self::build_request_body(prompt, model_id, &params);
        let (response, latency_ms) = self.execute(&body).await?;
        Ok(Self::parse_response_body(model_id, &response, latency_ms))
    }
}
