//! Cache store backends.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::key::CacheKey;

/// Internal cache failure. Never crosses the cache boundary: the public
/// [`CacheStore`] operations absorb it, log it, and degrade to a miss or a
/// no-op.
#[derive(Debug, thiserror::Error)]
pub enum CacheFault {
    #[error("cache I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Durable key-value store with lazy TTL expiry.
///
/// Implementations must never fail toward the caller: a missing directory,
/// a missing file, or an unreadable record all behave as "no cached value".
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the cached value, or absent on miss, expiry, or fault.
    /// Reading an expired entry deletes it as a side effect.
    async fn get(&self, key: &CacheKey) -> Option<Value>;

    /// Writes or overwrites the entry, stamped with the current time.
    async fn set(&self, key: &CacheKey, value: Value);

    /// Removes the entry; absence is not an error.
    async fn invalidate(&self, key: &CacheKey);

    fn name(&self) -> &'static str;
}

/// On-disk record layout: one JSON object per key.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    /// Epoch milliseconds at write time. Immutable thereafter.
    created_at: u64,
    value: Value,
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// File-per-key store under a root directory created on demand.
///
/// Every lookup goes to durable storage; a record's presence on disk is the
/// sole source of truth. There is no in-memory index and no background
/// sweep — expired records are dropped by the read that finds them.
pub struct FileStore {
    root: PathBuf,
    ttl_secs: i64,
}

impl FileStore {
    /// A `ttl_secs` of zero or below disables expiry entirely.
    pub fn new(root: impl Into<PathBuf>, ttl_secs: i64) -> Self {
        Self {
            root: root.into(),
            ttl_secs,
        }
    }

    fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }

    fn is_expired(&self, created_at: u64, now: u64) -> bool {
        if self.ttl_secs <= 0 {
            return false;
        }
        now.saturating_sub(created_at) > self.ttl_secs as u64 * 1000
    }

    async fn try_get(&self, key: &CacheKey) -> Result<Option<Value>, CacheFault> {
        let path = self.entry_path(key);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let entry: StoredEntry = serde_json::from_slice(&raw)?;
        if self.is_expired(entry.created_at, now_millis()) {
            if let Err(e) = tokio::fs::remove_file(&path).await {
                debug!(key = %key, error = %e, "could not remove expired cache record");
            }
            return Ok(None);
        }
        Ok(Some(entry.value))
    }

    async fn try_set(&self, key: &CacheKey, value: &Value) -> Result<(), CacheFault> {
        tokio::fs::create_dir_all(&self.root).await?;
        let entry = StoredEntry {
            created_at: now_millis(),
            value: value.clone(),
        };
        let raw = serde_json::to_vec(&entry)?;
        tokio::fs::write(self.entry_path(key), raw).await?;
        Ok(())
    }

    async fn try_invalidate(&self, key: &CacheKey) -> Result<(), CacheFault> {
        match tokio::fs::remove_file(self.entry_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CacheStore for FileStore {
    async fn get(&self, key: &CacheKey) -> Option<Value> {
        match self.try_get(key).await {
            Ok(value) => value,
            Err(fault) => {
                warn!(key = %key, %fault, "cache read degraded to miss");
                None
            }
        }
    }

    async fn set(&self, key: &CacheKey, value: Value) {
        if let Err(fault) = self.try_set(key, &value).await {
            warn!(key = %key, %fault, "cache write dropped");
        }
    }

    async fn invalidate(&self, key: &CacheKey) {
        if let Err(fault) = self.try_invalidate(key).await {
            warn!(key = %key, %fault, "cache invalidation failed");
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// No-op store used when caching is disabled.
pub struct NullStore;

impl NullStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for NullStore {
    async fn get(&self, _: &CacheKey) -> Option<Value> {
        None
    }

    async fn set(&self, _: &CacheKey, _: Value) {}

    async fn invalidate(&self, _: &CacheKey) {}

    fn name(&self) -> &'static str {
        "null"
    }
}
