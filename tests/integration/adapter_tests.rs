//! Adapter integration tests
//!
//! Each adapter talks to a wiremock server standing in for its vendor. The
//! tests assert both directions of the translation: the exact wire shape of
//! the outgoing request, and the normalization of the vendor's response into
//! the uniform result record.

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use llmbench_rs::core::providers::{
    Adapter, AnthropicAdapter, AnthropicConfig, GoogleAdapter, GoogleConfig, OpenAiAdapter,
    OpenAiConfig, XaiAdapter, XaiConfig,
};
use llmbench_rs::core::types::{
    AnthropicParams, GenerationParams, GoogleParams, OpenAiParams, ReasoningEffort,
    TuningParams, Verbosity, XaiParams,
};
use llmbench_rs::core::dispatcher::Dispatcher;
use llmbench_rs::core::catalog::find_model;

async fn first_request_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one vendor call");
    serde_json::from_slice(&requests[0].body).unwrap()
}

fn openai_adapter(server: &MockServer) -> OpenAiAdapter {
    OpenAiAdapter::new(OpenAiConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap()
}

fn anthropic_adapter(server: &MockServer) -> AnthropicAdapter {
    AnthropicAdapter::new(AnthropicConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap()
}

fn google_adapter(server: &MockServer) -> GoogleAdapter {
    GoogleAdapter::new(GoogleConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap()
}

fn xai_adapter(server: &MockServer) -> XaiAdapter {
    XaiAdapter::new(XaiConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap()
}

// ---------------------------------------------------------------- OpenAI

#[tokio::test]
async fn openai_reasoning_model_uses_responses_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output_text": "hello there",
            "usage": {
                "input_tokens": 100,
                "output_tokens": 70,
                "output_tokens_details": { "reasoning_tokens": 20 }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = Adapter::OpenAi(openai_adapter(&server));
    let params = GenerationParams::OpenAi(OpenAiParams {
        reasoning_effort: Some(ReasoningEffort::Medium),
        verbosity: Some(Verbosity::Low),
        temperature: None,
        max_completion_tokens: 8000,
    });
    let result = adapter.generate("hi", "gpt-5", &params).await;

    assert!(!result.is_error());
    assert_eq!(result.content, "hello there");
    assert_eq!(result.input_tokens, 100);
    // Reasoning tokens subtracted out of the vendor's output count
    assert_eq!(result.output_tokens, 50);
    assert_eq!(result.reasoning_tokens, 20);
    assert_eq!(result.total_generated_tokens(), 70);
    assert!(result.latency_ms > 0.0);

    let body = first_request_body(&server).await;
    assert_eq!(body["input"], "hi");
    assert_eq!(body["max_output_tokens"], 8000);
    assert_eq!(body["reasoning"]["effort"], "medium");
    assert_eq!(body["text"]["verbosity"], "low");
}

#[tokio::test]
async fn openai_mini_model_uses_chat_completions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "mini says hi" } }],
            "usage": { "prompt_tokens": 15, "completion_tokens": 4 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = Adapter::OpenAi(openai_adapter(&server));
    let result = adapter
        .generate(
            "hi",
            "gpt-5-mini",
            &GenerationParams::OpenAi(OpenAiParams::default()),
        )
        .await;

    assert_eq!(result.content, "mini says hi");
    assert_eq!(result.input_tokens, 15);
    assert_eq!(result.output_tokens, 4);
    assert_eq!(result.reasoning_tokens, 0);
}

// ------------------------------------------------------------- Anthropic

#[tokio::test]
async fn anthropic_thinking_mode_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                { "type": "thinking", "thinking": "mulling it over" },
                { "type": "text", "text": "done" }
            ],
            "usage": { "input_tokens": 80, "output_tokens": 40 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = Adapter::Anthropic(anthropic_adapter(&server));
    let params = GenerationParams::Anthropic(AnthropicParams {
        extended_thinking: true,
        budget_tokens: 8000,
        max_tokens: 4000,
        ..Default::default()
    });
    let result = adapter
        .generate("hi", "claude-sonnet-4-5-20250929", &params)
        .await;

    assert_eq!(result.content, "done");
    assert_eq!(result.input_tokens, 80);
    assert_eq!(result.output_tokens, 40);
    assert_eq!(result.reasoning_tokens, 0);

    let body = first_request_body(&server).await;
    // Floor: max_tokens raised above budget + headroom, temperature omitted
    assert_eq!(body["max_tokens"], 9000);
    assert_eq!(body["thinking"]["budget_tokens"], 8000);
    assert!(body.get("temperature").is_none());
}

#[tokio::test]
async fn anthropic_plain_mode_passes_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{ "type": "text", "text": "ok" }],
            "usage": { "input_tokens": 5, "output_tokens": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = Adapter::Anthropic(anthropic_adapter(&server));
    let params = GenerationParams::Anthropic(AnthropicParams {
        temperature: 0.5,
        max_tokens: 2000,
        ..Default::default()
    });
    adapter
        .generate("hi", "claude-haiku-4-5-20251001", &params)
        .await;

    let body = first_request_body(&server).await;
    assert_eq!(body["temperature"], 0.5);
    assert_eq!(body["max_tokens"], 2000);
    assert!(body.get("thinking").is_none());
}

// ---------------------------------------------------------------- Google

#[tokio::test]
async fn gemini3_request_has_thinking_level_and_no_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-3-pro-preview:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "pondered" }] } }],
            "usageMetadata": { "promptTokenCount": 30, "totalTokenCount": 130 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = Adapter::Google(google_adapter(&server));
    let model = find_model("gemini-3-pro-preview").unwrap();
    let params = Dispatcher::select_params(model, &TuningParams::default());
    let result = adapter.generate("hi", model.id, &params).await;

    assert_eq!(result.content, "pondered");
    assert_eq!(result.input_tokens, 30);
    // Output derived as total - input; includes the vendor's thinking tokens
    assert_eq!(result.output_tokens, 100);

    let body = first_request_body(&server).await;
    let config = &body["generationConfig"];
    assert_eq!(config["thinkingConfig"]["thinkingLevel"], "LOW");
    assert!(config.get("temperature").is_none());
}

#[tokio::test]
async fn gemini25_request_has_temperature_and_no_thinking_directive() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "quick" }] } }],
            "usageMetadata": { "promptTokenCount": 10, "totalTokenCount": 25 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = Adapter::Google(google_adapter(&server));
    let model = find_model("gemini-2.5-flash").unwrap();
    let params = Dispatcher::select_params(model, &TuningParams::default());
    adapter.generate("hi", model.id, &params).await;

    let body = first_request_body(&server).await;
    let config = &body["generationConfig"];
    assert_eq!(config["temperature"], 0.0);
    assert!(config.get("thinkingConfig").is_none());
}

// ------------------------------------------------------------------- xAI

#[tokio::test]
async fn xai_applies_both_token_corrections() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "grokked" } }],
            "usage": {
                "prompt_tokens": 250,
                "completion_tokens": 40,
                "prompt_tokens_details": { "cached_tokens": 200 },
                "completion_tokens_details": { "reasoning_tokens": 25 }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = Adapter::Xai(xai_adapter(&server));
    let result = adapter
        .generate("hi", "grok-4", &GenerationParams::Xai(XaiParams::default()))
        .await;

    // Cached safety-prompt tokens subtracted from input
    assert_eq!(result.input_tokens, 50);
    // Reasoning tokens added on top of completion tokens (opposite of OpenAI)
    assert_eq!(result.output_tokens, 65);
    assert_eq!(result.reasoning_tokens, 0);
    assert_eq!(result.total_generated_tokens(), 65);
}

// -------------------------------------------------- Shared failure contract

#[tokio::test]
async fn transport_failure_never_raises_for_any_adapter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let adapters: Vec<(Adapter, &str, GenerationParams)> = vec![
        (
            Adapter::OpenAi(openai_adapter(&server)),
            "gpt-5",
            GenerationParams::OpenAi(OpenAiParams::default()),
        ),
        (
            Adapter::Anthropic(anthropic_adapter(&server)),
            "claude-haiku-4-5-20251001",
            GenerationParams::Anthropic(AnthropicParams::default()),
        ),
        (
            Adapter::Google(google_adapter(&server)),
            "gemini-2.5-flash",
            GenerationParams::Google(GoogleParams::default()),
        ),
        (
            Adapter::Xai(xai_adapter(&server)),
            "grok-4",
            GenerationParams::Xai(XaiParams::default()),
        ),
    ];

    for (adapter, model_id, params) in adapters {
        let result = adapter.generate("hi", model_id, &params).await;
        assert!(result.is_error(), "{model_id} should report the failure");
        assert!(!result.error.as_deref().unwrap().is_empty());
        assert_eq!(result.content, "");
        assert_eq!(result.input_tokens, 0);
        assert_eq!(result.output_tokens, 0);
        assert_eq!(result.reasoning_tokens, 0);
        assert_eq!(result.latency_ms, 0.0);
        assert_eq!(result.model_id, model_id);
    }
}

#[tokio::test]
async fn unparseable_body_degrades_to_error_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let adapter = Adapter::Xai(xai_adapter(&server));
    let result = adapter
        .generate("hi", "grok-4", &GenerationParams::Xai(XaiParams::default()))
        .await;

    assert!(result.is_error());
    assert!(result.error.as_deref().unwrap().contains("xai"));
}
