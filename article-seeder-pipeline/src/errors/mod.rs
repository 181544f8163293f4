//! Error types for the article seeder pipeline.

use article_seeder_repository::SearchIndexError;
use thiserror::Error;

/// Errors that abort a pipeline run.
///
/// Per-document rejections from the engine are not errors; they are reported
/// in the indexing summary.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Error from the search index: provisioning failures and encoding failures.
    #[error("Search error: {0}")]
    SearchError(#[from] SearchIndexError),

    /// The engine could not be reached while indexing a document.
    #[error("Transport error indexing document {doc_id}: {source}")]
    TransportError {
        doc_id: String,
        #[source]
        source: SearchIndexError,
    },

    /// An indexing task panicked or was cancelled.
    #[error("Task error: {0}")]
    TaskError(String),
}

impl PipelineError {
    /// Create a transport error for the given document.
    pub fn transport(doc_id: impl Into<String>, source: SearchIndexError) -> Self {
        Self::TransportError {
            doc_id: doc_id.into(),
            source,
        }
    }

    /// Create a task error.
    pub fn task(msg: impl Into<String>) -> Self {
        Self::TaskError(msg.into())
    }
}
