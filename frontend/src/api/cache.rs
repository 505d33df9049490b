use log::debug;
use lru::LruCache;
use std::cell::RefCell;
use std::future::Future;
use std::num::NonZeroUsize;

use crate::config::Config;

/// Milliseconds since the epoch from the browser clock.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

/// Cache entry with expiration
#[derive(Clone, Debug, PartialEq)]
pub struct CacheEntry {
    data: String,
    expires_at: f64,
}

impl CacheEntry {
    fn new(data: String, ttl_ms: f64, now: f64) -> Self {
        Self {
            data,
            expires_at: now + ttl_ms,
        }
    }

    fn is_expired(&self, now: f64) -> bool {
        now > self.expires_at
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Response bodies keyed by request path, bounded and time-limited.
pub struct RequestCache {
    entries: RefCell<LruCache<String, CacheEntry>>,
    ttl_ms: f64,
}

impl RequestCache {
    pub fn new(capacity: usize, ttl_ms: f64) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RefCell::new(LruCache::new(capacity)),
            ttl_ms,
        }
    }

    /// Sized and timed for tournament listings.
    pub fn new_default() -> Self {
        Self::new(Config::listing_cache_capacity(), Config::listing_cache_ttl_ms())
    }

    /// Live entry for `key`; an expired one is evicted on the way.
    pub fn get(&self, key: &str, now: f64) -> Option<String> {
        let mut entries = self.entries.borrow_mut();
        let live = entries
            .get(key)
            .map(|entry| (!entry.is_expired(now)).then(|| entry.data.clone()));
        match live {
            Some(Some(data)) => Some(data),
            Some(None) => {
                entries.pop(key);
                None
            }
            None => None,
        }
    }

    pub fn set(&self, key: String, value: String, now: f64) {
        let entry = CacheEntry::new(value, self.ttl_ms, now);
        self.entries.borrow_mut().put(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

thread_local! {
    static REQUEST_CACHE: RequestCache = RequestCache::new_default();
}

/// Returns the cached body for `key`, or runs `fetcher` and caches a successful result.
pub async fn cached_request<F, Fut, E>(key: &str, fetcher: F) -> Result<String, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, E>>,
{
    if let Some(hit) = REQUEST_CACHE.with(|cache| cache.get(key, now_ms())) {
        debug!("Cache hit for key: {}", key);
        return Ok(hit);
    }
    debug!("Cache miss for key: {}, fetching...", key);
    let body = fetcher().await?;
    REQUEST_CACHE.with(|cache| cache.set(key.to_string(), body.clone(), now_ms()));
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entries_expire_after_ttl() {
        let cache = RequestCache::new(4, 1_000.0);
        cache.set("/api/all-tournaments".into(), "[]".into(), 0.0);
        assert_eq!(cache.get("/api/all-tournaments", 999.0).as_deref(), Some("[]"));
        assert_eq!(cache.get("/api/all-tournaments", 1_001.0), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let cache = RequestCache::new(2, 60_000.0);
        cache.set("a".into(), "1".into(), 0.0);
        cache.set("b".into(), "2".into(), 0.0);
        cache.get("a", 1.0);
        cache.set("c".into(), "3".into(), 2.0);
        assert_eq!(cache.get("b", 3.0), None);
        assert_eq!(cache.get("a", 3.0).as_deref(), Some("1"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn categories_are_cached_independently() {
        let cache = RequestCache::new(8, 60_000.0);
        cache.set("/api/tournaments/soccer".into(), "x".into(), 0.0);
        cache.set("/api/tournaments/tennis".into(), "y".into(), 0.0);
        assert_eq!(cache.get("/api/tournaments/tennis", 1.0).as_deref(), Some("y"));
        assert_eq!(cache.get("/api/tournaments/cricket", 1.0), None);
        assert_eq!(cache.len(), 2);
    }
}
