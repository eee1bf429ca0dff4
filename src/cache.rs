use moka::sync::Cache;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Thread-safe response cache with a fixed time-to-live, shared by the
/// upstream API clients. Values must be cheap to clone; wrap large payloads
/// in `Arc`.
#[derive(Debug, Clone)]
pub struct TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    inner: Cache<String, V>,
}

impl<V> TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder().time_to_live(ttl).build(),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let value = self.inner.get(key);
        if value.is_some() {
            tracing::debug!("Cache hit: {key}");
        } else {
            tracing::debug!("Cache miss: {key}");
        }
        value
    }

    pub fn insert(&self, key: String, value: V) {
        tracing::debug!("Cache set: {key}");
        self.inner.insert(key, value);
    }

    pub fn entry_count(&self) -> u64 {
        // Moka applies invalidations and expirations lazily.
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

/// Builds a cache key from its parts, e.g. `visible_planets_41.9_12.5_today`.
pub fn cache_key(parts: &[&str]) -> String {
    parts.join("_")
}

/// Remembers which celestial objects were recently picked so the scorer can
/// withhold their novelty bonus inside the configured window.
#[derive(Debug)]
pub struct ShownLedger {
    window: Duration,
    shown: Mutex<HashMap<String, Instant>>,
}

impl ShownLedger {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            shown: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_recently_shown(&self, object_name: &str) -> bool {
        let Ok(shown) = self.shown.lock() else {
            return false;
        };
        shown
            .get(object_name)
            .is_some_and(|last| last.elapsed() < self.window)
    }

    pub fn mark_shown(&self, object_name: &str) {
        let Ok(mut shown) = self.shown.lock() else {
            return;
        };
        shown.insert(object_name.to_string(), Instant::now());
    }

    pub fn entry_count(&self) -> usize {
        let Ok(shown) = self.shown.lock() else {
            return 0;
        };
        shown.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{ShownLedger, TtlCache, cache_key};
    use std::time::Duration;

    #[test]
    fn cache_returns_inserted_value() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("planets".to_string(), 42u32);
        assert_eq!(cache.get("planets"), Some(42));
        assert_eq!(cache.get("stars"), None);
    }

    #[test]
    fn cache_expires_after_ttl() {
        let cache = TtlCache::new(Duration::from_millis(30));
        cache.insert("planets".to_string(), 42u32);
        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(cache.get("planets"), None);
    }

    #[test]
    fn cache_counts_and_clears_entries() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("a".to_string(), 1u32);
        cache.insert("b".to_string(), 2u32);
        assert_eq!(cache.entry_count(), 2);

        cache.invalidate_all();
        assert_eq!(cache.entry_count(), 0);
    }

    #[test]
    fn cache_key_joins_parts_with_underscores() {
        assert_eq!(
            cache_key(&["visible_planets", "41.9", "12.5", "today"]),
            "visible_planets_41.9_12.5_today"
        );
    }

    #[test]
    fn ledger_remembers_recent_objects() {
        let ledger = ShownLedger::new(Duration::from_secs(600));
        assert!(!ledger.is_recently_shown("Jupiter"));

        ledger.mark_shown("Jupiter");
        assert!(ledger.is_recently_shown("Jupiter"));
        assert!(!ledger.is_recently_shown("Saturn"));
    }

    #[test]
    fn ledger_forgets_outside_window() {
        let ledger = ShownLedger::new(Duration::ZERO);
        ledger.mark_shown("Jupiter");
        assert!(!ledger.is_recently_shown("Jupiter"));
    }
}
