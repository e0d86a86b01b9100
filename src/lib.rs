//! # textgate
//!
//! AI text-tool gateway with a file-backed response cache.
//!
//! textgate exposes a catalog of text-processing operations over HTTP: AI-backed
//! tools that call an upstream text-generation provider, and rule-based instant
//! tools that run locally. Every AI call goes through a content-addressed cache
//! keyed by a deterministic fingerprint of model, rendered prompt, and
//! generation parameters, so identical requests within the TTL window never pay
//! for a second provider call.
//!
//! ## Core Behavior
//!
//! - **Content-addressed caching**: the cache key covers the exact rendered
//!   request; varying any input that can change the output produces a new key.
//! - **Advisory cache**: storage faults never fail a request — a broken cache
//!   degrades to calling the provider, and a corrupted record heals on the
//!   next write.
//! - **Lazy expiry**: entries are TTL-bound and deleted by the read that finds
//!   them expired; there is no background sweep and no in-memory index.
//! - **Closed catalogs**: both tool sets are exhaustive enums, so adding or
//!   removing a tool is a compile-time-checked change.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use textgate::cache::FileStore;
//! use textgate::provider::GeminiClient;
//! use textgate::{AiTool, GatewayConfig, ToolExecutor, ToolOptions};
//!
//! #[tokio::main]
//! async fn main() -> textgate::Result<()> {
//!     let config = GatewayConfig::from_env();
//!     let provider = GeminiClient::new(&config)?;
//!     let cache = FileStore::new(&config.cache_dir, config.cache_ttl_secs);
//!     let executor = ToolExecutor::new(&config, Box::new(provider), Box::new(cache));
//!
//!     let summary = executor
//!         .execute_tool(AiTool::Summarize, "A long article...", &ToolOptions::default())
//!         .await?;
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Content-addressed, TTL-bound response cache |
//! | [`provider`] | Upstream AI provider clients |
//! | [`tools`] | AI tool catalog and the cache-aware executor |
//! | [`instant`] | Rule-based instant text tools |
//! | [`api`] | HTTP facade (axum router and handlers) |
//! | [`config`] | Gateway configuration |

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod instant;
pub mod provider;
pub mod tools;

// Re-export main types for convenience
pub use config::GatewayConfig;
pub use error::Error;
pub use instant::{InstantOptions, InstantTool};
pub use provider::{GenerationConfig, ProviderClient};
pub use tools::{AiTool, ToolExecutor, ToolOptions};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
