//! Router assembly.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    ai_tool_handler, health_handler, instant_tool_handler, status_handler, AppState,
};

/// Creates the gateway router.
///
/// # Endpoints
/// - `POST /api/text/ai` - AI-backed tools (cached)
/// - `POST /api/text/instant` - rule-based tools
/// - `GET /health` - health check
/// - `GET /` - status probe
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(status_handler))
        .route("/health", get(health_handler))
        .route("/api/text/ai", post(ai_tool_handler))
        .route("/api/text/instant", post(instant_tool_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::NullStore;
    use crate::config::GatewayConfig;
    use crate::provider::{GenerationConfig, ProviderClient};
    use crate::tools::ToolExecutor;
    use crate::Result;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    struct EchoProvider;

    #[async_trait]
    impl ProviderClient for EchoProvider {
        async fn generate(
            &self,
            _model: &str,
            _prompt: &str,
            _config: &GenerationConfig,
        ) -> Result<String> {
            Ok("echoed result".to_string())
        }
    }

    fn test_app() -> Router {
        let executor = ToolExecutor::new(
            &GatewayConfig::default(),
            Box::new(EchoProvider),
            Box::new(NullStore::new()),
        );
        create_router(AppState::new(executor))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn ai_route_returns_result_with_metadata() {
        let response = test_app()
            .oneshot(post_json(
                "/api/text/ai",
                json!({ "type": "summarize", "text": "Some long input." }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["result"], json!("echoed result"));
        assert_eq!(body["tool"], json!("summarize"));
        assert!(body["processTime"].as_str().unwrap().ends_with("ms"));
    }

    #[tokio::test]
    async fn ai_route_rejects_unknown_tool() {
        let response = test_app()
            .oneshot(post_json(
                "/api/text/ai",
                json!({ "type": "notATool", "text": "input" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("paraphrase"));
    }

    #[tokio::test]
    async fn ai_route_rejects_empty_text() {
        let response = test_app()
            .oneshot(post_json(
                "/api/text/ai",
                json!({ "type": "summarize", "text": "   " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn instant_route_runs_rule_based_tools() {
        let response = test_app()
            .oneshot(post_json(
                "/api/text/instant",
                json!({ "type": "wordCounter", "text": "one two three" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["result"], json!(3));
        assert_eq!(body["tool"], json!("wordCounter"));
    }

    #[tokio::test]
    async fn instant_route_passes_options_through() {
        let response = test_app()
            .oneshot(post_json(
                "/api/text/instant",
                json!({
                    "type": "caseConverter",
                    "text": "hello world",
                    "options": { "case": "uppercase" }
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["result"], json!("HELLO WORLD"));
    }
}
