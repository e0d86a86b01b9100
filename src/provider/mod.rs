//! Upstream AI provider clients.
//!
//! The gateway consumes one synchronous request/response contract:
//! `{model, prompt, generation config} -> text`. [`ProviderClient`] keeps
//! that seam object-safe so the executor can be tested with an injected
//! counting mock instead of the network.

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Tunable parameters governing one provider call.
///
/// Part of the cache fingerprint: different settings legitimately produce
/// different valid outputs for the same input. Serialization order is fixed
/// by the struct layout, so semantically identical configs always render to
/// the same canonical JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

impl GenerationConfig {
    /// Canonical JSON rendering used as a cache fingerprint part.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// One synchronous text-generation call against the upstream service.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Bounded by the client's configured timeout; expiry surfaces as
    /// [`crate::Error::Upstream`].
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_json_is_deterministic() {
        let a = GenerationConfig {
            max_output_tokens: Some(120),
            temperature: Some(0.6),
            top_p: None,
        };
        let b = a.clone();
        assert_eq!(a.canonical_json(), b.canonical_json());
        assert_eq!(
            a.canonical_json(),
            r#"{"maxOutputTokens":120,"temperature":0.6}"#
        );
    }

    #[test]
    fn canonical_json_omits_unset_fields() {
        assert_eq!(GenerationConfig::default().canonical_json(), "{}");
    }

    #[test]
    fn differing_temperature_changes_canonical_json() {
        let warm = GenerationConfig {
            temperature: Some(0.9),
            ..Default::default()
        };
        let cold = GenerationConfig {
            temperature: Some(0.1),
            ..Default::default()
        };
        assert_ne!(warm.canonical_json(), cold.canonical_json());
    }
}
