use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};

/// Keeps upstream answers for a bounded time. Entries past their age are misses.
pub struct ContentCache<T> {
    cache: Option<RwLock<CacheMap<T>>>,
}

type CacheMap<T> = HashMap<String, CacheValue<T>>;

struct CacheValue<T> {
    expire_date: DateTime<Utc>,
    value: Arc<T>,
}

impl<T> ContentCache<T> {
    pub fn new() -> Self {
        ContentCache {
            cache: Some(RwLock::new(HashMap::new())),
        }
    }

    /// Cache that stores nothing. Every lookup is a miss.
    pub fn non_caching() -> Self {
        ContentCache {
            cache: None,
        }
    }

    pub fn add(&self, key: &str, content: T, max_age: Duration) -> Arc<T> {
        let value = Arc::new(content);
        let Some(ref cache) = self.cache else {
            return value;
        };

        let expire_date = Utc::now() + max_age;

        // A poisoned lock only costs us the caching
        if let Ok(mut cache) = cache.write() {
            let now = Utc::now();
            cache.retain(|_, item| item.expire_date >= now);
            cache.insert(key.to_string(), CacheValue {
                expire_date,
                value: value.clone(),
            });
        }
        value
    }

    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        let cache = self.cache.as_ref()?.read().ok()?;
        let cache_value = cache.get(key)?;
        if Utc::now() > cache_value.expire_date {
            return None;
        }
        Some(cache_value.value.clone())
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        match self.cache {
            Some(ref cache) => cache.read().map(|c| c.len()).unwrap_or(0),
            None => 0,
        }
    }
}
