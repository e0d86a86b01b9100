//! End-to-end tool execution against a mock Gemini endpoint: real HTTP
//! client, real file-backed cache, mock upstream.

use serde_json::json;
use tempfile::tempdir;

use textgate::cache::FileStore;
use textgate::provider::{GeminiClient, GenerationConfig};
use textgate::{AiTool, Error, GatewayConfig, ToolExecutor, ToolOptions};

fn candidate_body(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 5 }
    })
    .to_string()
}

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn build_executor(server_url: &str, cache_root: &std::path::Path) -> ToolExecutor {
    let config = GatewayConfig::default().with_api_key("test-key");
    let provider = GeminiClient::new(&config)
        .unwrap()
        .with_base_url(server_url);
    let cache = FileStore::new(cache_root, config.cache_ttl_secs);
    ToolExecutor::new(&config, Box::new(provider), Box::new(cache))
}

#[tokio::test]
async fn miss_then_hit_reaches_upstream_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_body("  A concise summary.  "))
        .expect(1)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let executor = build_executor(&server.url(), dir.path());

    let options = ToolOptions::default();
    let first = executor
        .execute_tool(AiTool::Summarize, "Long input text.", &options)
        .await
        .unwrap();
    let second = executor
        .execute_tool(AiTool::Summarize, "Long input text.", &options)
        .await
        .unwrap();

    // Provider output is trimmed before caching, and the hit is
    // indistinguishable from the miss except in upstream traffic.
    assert_eq!(first, "A concise summary.");
    assert_eq!(second, first);
    mock.assert_async().await;
}

#[tokio::test]
async fn differing_temperature_pays_upstream_twice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_body("rewritten"))
        .expect(2)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let executor = build_executor(&server.url(), dir.path());

    for temperature in [0.2, 0.9] {
        let options = ToolOptions {
            generation_config: Some(GenerationConfig {
                temperature: Some(temperature),
                ..Default::default()
            }),
            ..Default::default()
        };
        executor
            .execute_tool(AiTool::Paraphrase, "same text", &options)
            .await
            .unwrap();
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_error_surfaces_with_detail_and_caches_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": { "code": 429, "message": "Resource exhausted" } }).to_string())
        .expect(2)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let executor = build_executor(&server.url(), dir.path());

    let err = executor
        .execute_tool(AiTool::Grammar, "some text", &ToolOptions::default())
        .await
        .unwrap_err();
    match err {
        Error::Upstream { status, message } => {
            assert_eq!(status, Some(429));
            assert_eq!(message, "Resource exhausted");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }

    // The failure was not cached: a retry goes upstream again.
    executor
        .execute_tool(AiTool::Grammar, "some text", &ToolOptions::default())
        .await
        .unwrap_err();
    mock.assert_async().await;
}

#[tokio::test]
async fn unwritable_cache_root_still_serves_results() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_body("works anyway"))
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let blocked = dir.path().join("blocked");
    std::fs::write(&blocked, b"occupies the cache root path").unwrap();

    let executor = build_executor(&server.url(), &blocked);
    let result = executor
        .execute_tool(AiTool::Shorten, "input", &ToolOptions::default())
        .await
        .unwrap();
    assert_eq!(result, "works anyway");
}
