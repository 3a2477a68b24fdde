//! Memoized response bodies keyed by request URL.
//!
//! Entries never expire on their own; they live until [`ResponseCache::clear`].
//! Only successful, parseable bodies are stored.

use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;

/// Response memo shared by all calls of one client.
#[derive(Debug)]
pub struct ResponseCache {
    enabled: bool,
    entries: RwLock<HashMap<String, Value>>,
}

impl ResponseCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        if !self.enabled {
            return None;
        }
        self.entries.read().await.get(key).cloned()
    }

    pub async fn insert(&self, key: &str, body: Value) {
        if self.enabled {
            self.entries.write().await.insert(key.to_string(), body);
        }
    }

    /// Drop every entry, returning how many were removed.
    pub async fn clear(&self) -> usize {
        let mut entries = self.entries.write().await;
        let removed = entries.len();
        entries.clear();
        removed
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
