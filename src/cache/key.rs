//! Cache key generation.

use sha2::{Digest, Sha256};

/// Joins fingerprint parts unambiguously; not expected to occur in a model
/// identifier or serialized generation config.
const PART_SEPARATOR: &str = "||";

/// A fixed-length hexadecimal digest addressing one cached response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    hash: String,
}

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}

/// Computes the content-addressed key for a sequence of request parts.
///
/// Pure and deterministic: identical part sequences always produce the same
/// key, and any single differing part produces a different key with
/// overwhelming probability (SHA-256 collision resistance).
pub fn compute_key<S: AsRef<str>>(parts: &[S]) -> CacheKey {
    let joined = parts
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR);
    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    let hash: String = hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect();
    CacheKey { hash }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_parts_identical_key() {
        let a = compute_key(&["gemini-2.5-flash", "Summarize.\n\nText:\nhi", "{}"]);
        let b = compute_key(&["gemini-2.5-flash", "Summarize.\n\nText:\nhi", "{}"]);
        assert_eq!(a, b);
    }

    #[test]
    fn any_differing_part_changes_key() {
        let base = compute_key(&["model-a", "prompt", "{\"temperature\":0.6}"]);
        let model = compute_key(&["model-b", "prompt", "{\"temperature\":0.6}"]);
        let prompt = compute_key(&["model-a", "prompt!", "{\"temperature\":0.6}"]);
        let options = compute_key(&["model-a", "prompt", "{\"temperature\":0.7}"]);
        assert_ne!(base, model);
        assert_ne!(base, prompt);
        assert_ne!(base, options);
    }

    #[test]
    fn part_boundaries_are_unambiguous() {
        let left = compute_key(&["ab", "c"]);
        let right = compute_key(&["a", "bc"]);
        assert_ne!(left, right);
    }

    #[test]
    fn key_is_fixed_length_hex() {
        let key = compute_key(&["anything"]);
        assert_eq!(key.as_str().len(), 64);
        assert!(key.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
