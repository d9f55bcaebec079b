use std::num::NonZeroUsize;
use chrono::{DateTime, Duration, Utc};
use lru::LruCache;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};

#[derive(Clone, Debug)]
struct CachedResponse {
    text: String,
    stored_at: DateTime<Utc>,
}

/// Bounded LRU of raw generator responses, keyed by (model, system, prompt).
/// Prompts embed the learner's known words, so hits are mostly re-sends.
pub struct ResponseCache {
    entries: Mutex<LruCache<String, CachedResponse>>,
    ttl: Duration,
}

/// SHA-256 over the request parts, hex encoded
pub fn cache_key(model: &str, system: &str, prompt: &str) -> String {
    let mut hasher = Sha256::new();
    for part in [model, system, prompt] {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    format!("{:x}", hasher.finalize())
}

impl ResponseCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        ResponseCache {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<String> {
        let mut entries = self.entries.lock();
        let fresh = match entries.get(key) {
            Some(cached) if now - cached.stored_at <= self.ttl => Some(cached.text.clone()),
            Some(_) => None,
            None => {
                tracing::debug!(key = &key[..key.len().min(12)], "Cache miss");
                return None;
            }
        };
        if fresh.is_none() {
            entries.pop(key);
        } else {
            tracing::debug!(key = &key[..key.len().min(12)], "Cache hit");
        }
        fresh
    }

    pub fn put(&self, key: String, text: String, now: DateTime<Utc>) {
        self.entries.lock().put(key, CachedResponse { text, stored_at: now });
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
