//! Tool execution against the upstream provider, memoized through the
//! cache store.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::cache::{compute_key, CacheStore};
use crate::config::GatewayConfig;
use crate::error::Error;
use crate::provider::{GenerationConfig, ProviderClient};
use crate::Result;

use super::catalog::AiTool;

/// Per-request overrides accepted from callers. Anything unset falls back
/// to the process-wide defaults in [`GatewayConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOptions {
    pub model: Option<String>,
    pub generation_config: Option<GenerationConfig>,
}

/// Executes text-transformation requests, consulting the cache before the
/// provider and persisting fresh results best-effort.
pub struct ToolExecutor {
    provider: Box<dyn ProviderClient>,
    cache: Box<dyn CacheStore>,
    default_model: String,
    default_generation: GenerationConfig,
}

impl ToolExecutor {
    pub fn new(
        config: &GatewayConfig,
        provider: Box<dyn ProviderClient>,
        cache: Box<dyn CacheStore>,
    ) -> Self {
        Self {
            provider,
            cache,
            default_model: config.model.clone(),
            default_generation: config.default_generation(),
        }
    }

    /// Runs one catalog tool over the input text.
    pub async fn execute_tool(
        &self,
        tool: AiTool,
        text: &str,
        options: &ToolOptions,
    ) -> Result<String> {
        self.execute(tool.prompt(), text, options).await
    }

    /// Runs an arbitrary prompt template over the input text.
    ///
    /// The cache key covers the exact rendered request: model, template,
    /// input text, and generation parameters. A hit returns without any
    /// provider call; a miss calls the provider and writes the trimmed
    /// result back best-effort.
    ///
    /// The check-then-act sequence is not coalesced across tasks:
    /// concurrent identical requests may each reach the provider, and the
    /// last completed write wins.
    pub async fn execute(
        &self,
        template: &str,
        text: &str,
        options: &ToolOptions,
    ) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::invalid_input("text input is required"));
        }

        let model = options.model.as_deref().unwrap_or(&self.default_model);
        let generation = options
            .generation_config
            .as_ref()
            .unwrap_or(&self.default_generation);

        // Neither part can truncate the other across the blank-line seam.
        let final_prompt = format!("{}\n\nText:\n{}", template, text);
        let canonical_generation = generation.canonical_json();
        let key = compute_key(&[model, final_prompt.as_str(), canonical_generation.as_str()]);

        if let Some(cached) = self.cache.get(&key).await {
            if let Some(cached) = cached.as_str() {
                debug!(key = %key, "cache hit");
                return Ok(cached.to_string());
            }
        }

        debug!(key = %key, model, "cache miss, calling provider");
        let output = self.provider.generate(model, &final_prompt, generation).await?;
        let output = output.trim().to_string();
        self.cache.set(&key, Value::String(output.clone())).await;
        Ok(output)
    }
}
