//! Gateway configuration.
//!
//! All runtime knobs are read from the environment exactly once at startup
//! and handed down as an explicit [`GatewayConfig`]; no other module reads
//! the process environment. Tests construct configs directly and point the
//! cache at a temporary directory.

use std::env;
use std::path::{Path, PathBuf};

use crate::provider::GenerationConfig;

/// Gateway configuration parameters.
///
/// # Environment Variables
/// - `AI_CACHE_DIR` - cache root directory (default: `cache/ai`)
/// - `AI_CACHE_TTL_SECONDS` - entry TTL in seconds; a value <= 0 disables
///   expiry entirely (default: 86400)
/// - `GEMINI_MODEL` - upstream model identifier (default: `gemini-2.5-flash`)
/// - `GEMINI_API_KEY` - upstream credential, required for provider calls
/// - `AI_HTTP_TIMEOUT_SECS` - provider HTTP timeout (default: 30)
/// - `PORT` - HTTP listen port (default: 5000)
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Root directory for cached provider responses.
    pub cache_dir: PathBuf,
    /// Cache entry TTL in seconds; <= 0 means entries never expire.
    pub cache_ttl_secs: i64,
    /// Default upstream model identifier.
    pub model: String,
    /// Upstream API credential. Checked before any network call.
    pub api_key: Option<String>,
    /// Timeout applied to every provider HTTP call.
    pub http_timeout_secs: u64,
    /// HTTP server port.
    pub server_port: u16,
}

impl GatewayConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_dir: env::var("AI_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_dir),
            cache_ttl_secs: env::var("AI_CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl_secs),
            model: env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            api_key: env::var("GEMINI_API_KEY").ok(),
            http_timeout_secs: env::var("AI_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout_secs),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Generation parameters applied when a request carries none.
    pub fn default_generation(&self) -> GenerationConfig {
        GenerationConfig {
            max_output_tokens: Some(120),
            temperature: Some(0.6),
            top_p: None,
        }
    }

    pub fn with_cache_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cache_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_ttl_secs(mut self, ttl_secs: i64) -> Self {
        self.cache_ttl_secs = ttl_secs;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("cache").join("ai"),
            cache_ttl_secs: 86_400,
            model: "gemini-2.5-flash".to_string(),
            api_key: None,
            http_timeout_secs: 30,
            server_port: 5000,
        }
    }
}
