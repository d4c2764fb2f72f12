use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;

struct Entry {
    stored_at: Instant,
    value: serde_json::Value,
}

/// TTL'd cache for list responses that feed the client-side filtering
/// helpers. Cloning shares the underlying map. Cleared wholesale on logout.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<RwLock<HashMap<String, Entry>>>,
    ttl: Duration,
}

impl QueryCache {
    pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let guard = self.inner.read().expect("rwlock poisoned");
        let entry = guard.get(key)?;
        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn put<T: Serialize>(&self, key: &str, value: &T) {
        let Ok(value) = serde_json::to_value(value) else {
            return;
        };
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.insert(
            key.to_string(),
            Entry {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    pub fn remove(&self, key: &str) {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.remove(key);
    }

    pub fn clear(&self) {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("rwlock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_values() {
        let cache = QueryCache::default();
        cache.put("users", &vec!["alice".to_string(), "bob".to_string()]);
        let users: Vec<String> = cache.get("users").expect("cached");
        assert_eq!(users, vec!["alice", "bob"]);
    }

    #[test]
    fn expired_entries_are_misses() {
        let cache = QueryCache::new(Duration::ZERO);
        cache.put("users", &vec!["alice".to_string()]);
        assert_eq!(cache.get::<Vec<String>>("users"), None);
    }

    #[test]
    fn clear_empties_everything() {
        let cache = QueryCache::default();
        cache.put("users", &1_u32);
        cache.put("lessons", &2_u32);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get::<u32>("users"), None);
    }

    #[test]
    fn remove_drops_single_key() {
        let cache = QueryCache::default();
        cache.put("users", &1_u32);
        cache.put("lessons", &2_u32);

        cache.remove("users");
        assert_eq!(cache.get::<u32>("users"), None);
        assert_eq!(cache.get::<u32>("lessons"), Some(2));
    }
}
