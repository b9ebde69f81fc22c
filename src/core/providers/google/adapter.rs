//! Google adapter implementation
//!
//! Model ID dispatch: the Gemini 3 family takes a thinking-level directive
//! and runs at the vendor's recommended default temperature, so the knob is
//! omitted; older families take `temperature` directly.
//!
//! Token accounting is vendor-specific here: usage metadata reports prompt
//! and total counts, and output is derived as `total - input`. That total
//! includes any internal thinking tokens, so this vendor's `output_tokens`
//! is not directly comparable to OpenAI's or Anthropic's.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use super::config::GoogleConfig;
use crate::core::catalog::Provider;
use crate::core::providers::{ProviderAdapter, build_http_client};
use crate::core::types::{AdapterError, GenerationParams, GenerationResult, GoogleParams};

/// Google adapter
#[derive(Debug, Clone)]
pub struct GoogleAdapter {
    config: GoogleConfig,
    http_client: Client,
}

impl GoogleAdapter {
    /// Create an adapter from configuration
    pub fn new(config: GoogleConfig) -> Result<Self, AdapterError> {
        let http_client = build_http_client(Provider::Google, config.request_timeout)?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Whether the model ID denotes the Gemini 3 family
    pub fn is_gemini3(model_id: &str) -> bool {
        model_id.contains("gemini-3")
    }

    /// generateContent request body
    pub fn build_request_body(prompt: &str, model_id: &str, params: &GoogleParams) -> Value {
        let mut generation_config = json!({
            "maxOutputTokens": params.max_output_tokens,
        });

        if Self::is_gemini3(model_id) {
            if let Some(level) = params.thinking_level {
                generation_config["thinkingConfig"] = json!({
                    "thinkingLevel": level.wire_value(),
                });
            }
        } else if let Some(temperature) = params.temperature {
            generation_config["temperature"] = json!(temperature);
        }

        let mut body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": generation_config,
        });

        if let Some(system) = params.system_prompt.as_deref() {
            if !system.is_empty() {
                body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
            }
        }

        body
    }

    /// Normalize a generateContent body into the uniform record
    pub fn parse_response_body(model_id: &str, body: &Value, latency_ms: f64) -> GenerationResult {
        let mut content = String::new();
        if let Some(parts) = body
            .get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
        {
            for part in parts {
                if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                    content.push_str(text);
                }
            }
        }

        let usage = body.get("usageMetadata");
        let input_tokens = usage
            .and_then(|u| u.get("promptTokenCount"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;
        let total_tokens = usage
            .and_then(|u| u.get("totalTokenCount"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;
        // Total includes internal thinking tokens for this vendor
        let output_tokens = total_tokens.saturating_sub(input_tokens);

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
    async fn execute(&self, model_id: &str, body: &Value) -> Result<(Value, f64), AdapterError> {
        let url = self.config.generate_endpoint(model_id);
        let api_key = self.config.api_key.clone().unwrap_or_default();

        if self.config.debug {
            debug!("Google request URL: {url}");
            debug!(
                "Google request body: {}",
                serde_json::to_string_pretty(body).unwrap_or_default()
            );
        }

        let started = Instant::now();
        let response = self
            .http_client
            .post(&url)
            .query(&[("key", api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| AdapterError::transport(Provider::Google, e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AdapterError::transport(Provider::Google, e.to_string()))?;
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        if self.config.debug {
            debug!("Google response status: {status}");
            debug!("Google response body: {text}");
        }

        if !status.is_success() {
            return Err(AdapterError::transport(
                Provider::Google,
                format!("HTTP {}: {}", status.as_u16(), text),
            ));
        }

        let json: Value = serde_json::from_str(&text)
            .map_err(|e| AdapterError::vendor_response(Provider::Google, e.to_string()))?;

        Ok((json, latency_ms))
    }
}

#[async_trait]
impl ProviderAdapter for GoogleAdapter {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    async fn try_generate(
        &self,
        prompt: &str,
        model_id: &str,
        params: &GenerationParams,
    ) -> Result<GenerationResult, AdapterError> {
        self.config.validate()?;
        let params = params.google();

        let body = Self::build_request_body(prompt, model_id, &params);
        let (response, latency_ms) = self.execute(model_id, &body).await?;
        Ok(Self::parse_response_body(model_id, &response, latency_ms))
    }
}
