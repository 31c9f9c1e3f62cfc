//! In-memory result cache for queries.

use std::time::Duration;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const CACHE_CAPACITY: u64 = 512;
const CACHE_TTL: Duration = Duration::from_secs(300);

/// How a query consults the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchPolicy {
    /// Serve from cache when present, otherwise fetch and store.
    #[default]
    CacheFirst,
    /// Always fetch, then store.
    NetworkOnly,
    /// Always fetch, never store.
    NoCache,
}

/// Query results keyed by operation name and serialized variables.
#[derive(Clone)]
pub struct QueryCache {
    entries: Cache<String, Value>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
        }
    }

    pub fn key(operation: &str, variables: &Value) -> String {
        format!("{}:{}", operation, variables)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key)
    }

    pub fn insert(&self, key: String, data: Value) {
        self.entries.insert(key, data);
    }

    /// Drop every entry; mutations call this since any query may be stale.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
