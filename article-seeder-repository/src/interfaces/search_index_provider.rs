//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchIndexError;
use crate::types::{DocumentWrite, IndexDocumentRequest};

/// Abstracts the underlying search index implementation (OpenSearch, Elasticsearch, etc.).
///
/// A provider is bound to a single index, named by [`SearchIndexProvider::index_name`].
/// Implementations are shared across indexing tasks behind an `Arc`, so they
/// must be `Send + Sync`.
///
/// Transport failures (the engine could not be reached) are returned as
/// `Err`. An engine that answers with an error status for a single document
/// is not an `Err`: it comes back as [`DocumentWrite::Rejected`].
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// The name of the index this provider targets.
    fn index_name(&self) -> &str;

    /// Check whether the index exists.
    ///
    /// # Returns
    ///
    /// * `Ok(false)` - If the engine answered 404
    /// * `Ok(true)` - For any other status
    /// * `Err(SearchIndexError)` - If the request could not be sent
    async fn index_exists(&self) -> Result<bool, SearchIndexError>;

    /// Create the index with the given settings and mappings document.
    ///
    /// # Arguments
    ///
    /// * `settings` - The request body, carrying `settings` and `mappings`
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the engine accepted the creation
    /// * `Err(SearchIndexError::IndexCreationError)` - If the engine rejected it
    /// * `Err(SearchIndexError)` - If the request could not be sent
    async fn create_index(&self, settings: &Value) -> Result<(), SearchIndexError>;

    /// Write a single document, replacing any document with the same id.
    ///
    /// The write is refreshed immediately so it is visible to the next read.
    ///
    /// # Arguments
    ///
    /// * `request` - The document id and serialized body
    ///
    /// # Returns
    ///
    /// * `Ok(DocumentWrite)` - The engine's answer, success or rejection
    /// * `Err(SearchIndexError)` - If the request could not be sent
    async fn index_document(
        &self,
        request: IndexDocumentRequest,
    ) -> Result<DocumentWrite, SearchIndexError>;
}
