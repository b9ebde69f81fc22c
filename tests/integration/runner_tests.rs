//! Comparison runner end-to-end test
//!
//! Three models, one prompt: an OpenAI reasoning success, an Anthropic
//! success and a Google transport failure. The failure must stay isolated,
//! order must follow the selection, and the sequential total must cover the
//! sum of the successful calls' latencies.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use llmbench_rs::core::catalog::find_model;
use llmbench_rs::core::cost::cost_usd;
use llmbench_rs::core::dispatcher::Dispatcher;
use llmbench_rs::core::providers::{AnthropicConfig, GoogleConfig, OpenAiConfig, XaiConfig};
use llmbench_rs::core::runner::run_comparison;
use llmbench_rs::core::types::TuningParams;

#[tokio::test]
async fn comparison_collects_mixed_outcomes_sequentially() {
    let openai_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output_text": "from gpt-5",
            "usage": {
                "input_tokens": 100,
                "output_tokens": 70,
                "output_tokens_details": { "reasoning_tokens": 20 }
            }
        })))
        .expect(1)
        .mount(&openai_server)
        .await;

    let anthropic_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{ "type": "text", "text": "from claude" }],
            "usage": { "input_tokens": 80, "output_tokens": 40 }
        })))
        .expect(1)
        .mount(&anthropic_server)
        .await;

    let google_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("temporarily overloaded"))
        .expect(1)
        .mount(&google_server)
        .await;

    let dispatcher = Dispatcher::new(
        OpenAiConfig {
            api_key: Some("test-key".to_string()),
            base_url: openai_server.uri(),
            ..Default::default()
        },
        AnthropicConfig {
            api_key: Some("test-key".to_string()),
            base_url: anthropic_server.uri(),
            ..Default::default()
        },
        GoogleConfig {
            api_key: Some("test-key".to_string()),
            base_url: google_server.uri(),
            ..Default::default()
        },
        XaiConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        },
    );

    let models = [
        find_model("gpt-5").unwrap(),
        find_model("claude-sonnet-4-5-20250929").unwrap(),
        find_model("gemini-2.5-flash").unwrap(),
    ];
    let report = run_comparison(&dispatcher, &models, "compare this", &TuningParams::default())
        .await;

    assert_eq!(report.entries.len(), 3);

    // Selection order survives the mixed outcomes
    let gpt = &report.entries[0];
    let claude = &report.entries[1];
    let gemini = &report.entries[2];
    assert_eq!(gpt.model.id, "gpt-5");
    assert_eq!(claude.model.id, "claude-sonnet-4-5-20250929");
    assert_eq!(gemini.model.id, "gemini-2.5-flash");

    assert!(!gpt.result.is_error());
    assert_eq!(gpt.result.input_tokens, 100);
    assert_eq!(gpt.result.output_tokens, 50);
    assert_eq!(gpt.result.reasoning_tokens, 20);

    assert!(!claude.result.is_error());
    assert_eq!(claude.result.input_tokens, 80);
    assert_eq!(claude.result.output_tokens, 40);

    assert!(gemini.result.is_error());
    assert!(!gemini.result.error.as_deref().unwrap().is_empty());
    assert_eq!(gemini.result.output_tokens, 0);

    // Two populated costs; reasoning billed at the output rate
    let gpt_cost = cost_usd(&gpt.result, gpt.model);
    let claude_cost = cost_usd(&claude.result, claude.model);
    let expected_gpt = (100.0 / 1e6) * 1.25 + (70.0 / 1e6) * 10.0;
    let expected_claude = (80.0 / 1e6) * 3.0 + (40.0 / 1e6) * 15.0;
    assert!((gpt_cost - expected_gpt).abs() < 1e-12);
    assert!((claude_cost - expected_claude).abs() < 1e-12);
    assert_eq!(cost_usd(&gemini.result, gemini.model), 0.0);

    // Sequential execution: total wall time covers the successful calls
    assert!(report.successes().count() == 2);
    let latency_sum: f64 = report.successes().map(|e| e.result.latency_ms).sum();
    assert!(
        report.total_elapsed_ms >= latency_sum,
        "total {} should be at least the sum of per-model latencies {}",
        report.total_elapsed_ms,
        latency_sum
    );
}
