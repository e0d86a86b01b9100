//! Google Gemini generateContent client.
//!
//! Wire facts that shape this client:
//! - Request body uses `contents` with `parts`, parameters under
//!   `generationConfig` (camelCase, e.g. `maxOutputTokens`).
//! - Response text lives at `candidates[0].content.parts[0].text`; error
//!   detail at `error.message`.
//! - The credential travels in the `x-goog-api-key` header, never in the
//!   URL or the request body.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::GatewayConfig;
use crate::error::Error;
use crate::Result;

use super::{GenerationConfig, ProviderClient};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Fails fast with a configuration error when the credential is absent,
    /// before any network I/O can happen.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::configuration("GEMINI_API_KEY is not set"))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| Error::configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        })
    }

    /// Points the client at a different endpoint. Test servers use this.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn request_body(prompt: &str, config: &GenerationConfig) -> Value {
        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        let generation = serde_json::to_value(config).unwrap_or(Value::Null);
        if generation != json!({}) && generation != Value::Null {
            body["generationConfig"] = generation;
        }
        body
    }

    fn parse_text(body: &Value) -> Result<String> {
        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or_else(|| Error::upstream(None, "response carried no candidate text"))
    }

    fn error_from_body(status: u16, body: &Value) -> Error {
        let message = body
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .unwrap_or("upstream request failed")
            .to_string();
        Error::upstream(Some(status), message)
    }
}

#[async_trait]
impl ProviderClient for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, model
        );
        debug!(model, "calling Gemini generateContent");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(prompt, config))
            .send()
            .await
            .map_err(|e| Error::upstream(None, e.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::upstream(Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_body(status.as_u16(), &body));
        }
        Self::parse_text(&body)
    }
}
