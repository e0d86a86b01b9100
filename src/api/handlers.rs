//! HTTP request handlers.
//!
//! Handlers translate wire payloads into core calls and core errors into
//! status codes; no tool logic lives here.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::error::Error;
use crate::instant::{InstantOptions, InstantTool};
use crate::tools::{AiTool, ToolExecutor, ToolOptions};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<ToolExecutor>,
}

impl AppState {
    pub fn new(executor: ToolExecutor) -> Self {
        Self {
            executor: Arc::new(executor),
        }
    }
}

/// Error wrapper mapping the core taxonomy onto HTTP statuses.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Upstream { .. } => StatusCode::BAD_GATEWAY,
        };
        if status.is_server_error() {
            warn!(error = %self.0, "request failed");
        }
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct AiToolRequest {
    #[serde(rename = "type")]
    pub tool: String,
    pub text: String,
    #[serde(default)]
    pub options: ToolOptions,
}

#[derive(Debug, Deserialize)]
pub struct InstantToolRequest {
    #[serde(rename = "type")]
    pub tool: String,
    pub text: String,
    #[serde(default)]
    pub options: InstantOptions,
}

/// Handler for POST /api/text/ai
pub async fn ai_tool_handler(
    State(state): State<AppState>,
    Json(req): Json<AiToolRequest>,
) -> Result<Json<Value>, ApiError> {
    let tool = AiTool::from_wire(&req.tool)
        .ok_or_else(|| unknown_tool("AI", &req.tool, AiTool::ALL.map(|t| t.wire_name())))?;

    let started = Instant::now();
    let result = state
        .executor
        .execute_tool(tool, &req.text, &req.options)
        .await?;

    Ok(Json(json!({
        "success": true,
        "result": result,
        "tool": tool.wire_name(),
        "processTime": format!("{}ms", started.elapsed().as_millis()),
    })))
}

/// Handler for POST /api/text/instant
pub async fn instant_tool_handler(
    Json(req): Json<InstantToolRequest>,
) -> Result<Json<Value>, ApiError> {
    let tool = InstantTool::from_wire(&req.tool).ok_or_else(|| {
        unknown_tool("instant", &req.tool, InstantTool::ALL.map(|t| t.wire_name()))
    })?;

    if req.text.is_empty() {
        return Err(Error::invalid_input("text input is required").into());
    }

    let result = tool.run(&req.text, &req.options)?;
    Ok(Json(json!({
        "success": true,
        "result": result,
        "tool": tool.wire_name(),
    })))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Handler for GET /
pub async fn status_handler() -> Json<Value> {
    Json(json!({ "status": "textgate is running" }))
}

fn unknown_tool<const N: usize>(kind: &str, name: &str, available: [&'static str; N]) -> ApiError {
    Error::invalid_input(format!(
        "unknown {} tool type: {}; available: {}",
        kind,
        name,
        available.join(", ")
    ))
    .into()
}
