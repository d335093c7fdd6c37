// LRU cache for tree-sitter query sources

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Thread-safe LRU cache of query source strings.
///
/// Compiled [`tree_sitter::Query`] values are not cloneable, so the cache
/// stores the source text keyed by language and path and lets the loader
/// recompile from it on demand. Least-recently-used sources are evicted
/// once the capacity is reached.
#[derive(Debug)]
pub struct QuerySourceCache {
    cache: Mutex<LruCache<String, String>>,
}

impl QuerySourceCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).expect("capacity must be > 0"),
            )),
        }
    }

    /// Return the cached source for `key`, or run `loader` and cache what it
    /// produces.
    pub fn get_or_load_source<F>(&self, key: &str, loader: F) -> String
    where
        F: FnOnce() -> String,
    {
        let mut cache = self.cache.lock().unwrap();
        if let Some(source) = cache.get(key) {
            return source.clone();
        }
        let source = loader();
        cache.put(key.to_string(), source.clone());
        source
    }

    pub fn clear(&self) {
        self.cache.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().unwrap().is_empty()
    }
}
