use log::{debug, trace};
use std::fs;
use tree_sitter::Query;

use super::cache::QuerySourceCache;
use crate::error::SupportError;

/// Loads and caches tree-sitter query sources from runtime files using LRU
/// cache, falling back to the embedded query when no file is present.
#[derive(Debug)]
pub struct QueryLoader {
    cache: QuerySourceCache,
}

impl QueryLoader {
    pub fn new() -> Self {
        Self {
            cache: QuerySourceCache::new(100), // Cache up to 100 query sources
        }
    }

    /// Load a query from a file path, with fallback to the embedded query if
    /// the file doesn't exist. Compilation errors surface to the caller so
    /// activation can refuse a query the grammar rejects.
    pub fn load_query(
        &mut self,
        language: tree_sitter::Language,
        path: Option<&str>,
        fallback_query: &'static str,
    ) -> Result<Query, SupportError> {
        let cache_key = format!("{:?}_{}", language, path.unwrap_or("<embedded>"));

        let query_source = self.cache.get_or_load_source(&cache_key, || {
            let source = path.and_then(|p| match fs::read_to_string(p) {
                Ok(content) => {
                    debug!("Loaded query from file: {}", p);
                    Some(content)
                }
                Err(e) => {
                    debug!(
                        "Failed to load query from file {}: {}, using fallback",
                        p, e
                    );
                    None
                }
            });
            let source = source.unwrap_or_else(|| fallback_query.to_string());

            trace!("Query source length: {}", source.len());

            source
        });

        Ok(Query::new(language, &query_source)?)
    }

    /// Clear the query cache (useful for memory management or reloading)
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Get cache size
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for QueryLoader {
    fn default() -> Self {
        Self::new()
    }
}
