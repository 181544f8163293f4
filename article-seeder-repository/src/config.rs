//! Configuration types for the search index connection.

use crate::opensearch::INDEX_NAME;

/// Default search engine URL.
pub const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Where the search engine lives and which index to write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndexConfig {
    /// Search engine base URL (e.g., "http://localhost:9200").
    pub url: String,
    /// Name of the index documents are written to.
    pub index_name: String,
}

impl Default for SearchIndexConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OPENSEARCH_URL.to_string(),
            index_name: INDEX_NAME.to_string(),
        }
    }
}

impl SearchIndexConfig {
    /// Create a config for the given URL and index.
    pub fn new(url: impl Into<String>, index_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            index_name: index_name.into(),
        }
    }

    /// Set the search engine URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the index name.
    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }
}
