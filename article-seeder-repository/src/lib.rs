//! # Article Seeder Repository
//!
//! This crate provides traits and implementations for interacting with the
//! search engine. It includes definitions for errors, interfaces, and a
//! concrete implementation for OpenSearch.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use config::SearchIndexConfig;
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use opensearch::{get_index_settings, OpenSearchClient};
pub use types::{
    BatchOperationResult, BatchOperationSummary, DocumentWrite, IndexAcknowledgement,
    IndexDocumentRequest,
};
