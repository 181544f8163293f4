//! Request and response types for search index operations.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::SearchIndexError;
use article_seeder_shared::Article;

/// Request to write one document into the search index.
#[derive(Debug, Clone)]
pub struct IndexDocumentRequest {
    /// The document id the engine stores the body under.
    pub doc_id: String,
    /// The serialized document.
    pub body: Value,
}

impl IndexDocumentRequest {
    /// Build a request for an article, keyed by its id.
    pub fn from_article(article: &Article) -> Result<Self, SearchIndexError> {
        let body = serde_json::to_value(article).map_err(|e| {
            SearchIndexError::serialization(format!("article {}: {}", article.id, e))
        })?;

        Ok(Self {
            doc_id: article.doc_id(),
            body,
        })
    }
}

/// The acknowledgement body the engine returns for a successful write.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexAcknowledgement {
    /// Write outcome, e.g. `created` or `updated`.
    pub result: String,
    /// Document version after the write.
    #[serde(rename = "_version")]
    pub version: u64,
}

/// The engine's answer to a single document write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentWrite {
    /// Write accepted and acknowledgement decoded.
    Indexed {
        status: u16,
        result: String,
        version: u64,
    },
    /// Write accepted but the acknowledgement body could not be decoded.
    Unparsed { status: u16, error: String },
    /// Engine answered with an error status.
    Rejected { status: u16, reason: String },
}

impl DocumentWrite {
    /// HTTP status code the engine answered with.
    pub fn status(&self) -> u16 {
        match self {
            Self::Indexed { status, .. }
            | Self::Unparsed { status, .. }
            | Self::Rejected { status, .. } => *status,
        }
    }

    /// Whether the engine accepted the write.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

/// Result of a batch operation for a single document.
#[derive(Debug, Clone)]
pub struct BatchOperationResult {
    /// The document id.
    pub doc_id: String,
    /// The engine's answer, or the error that kept the request from being answered.
    pub outcome: Result<DocumentWrite, SearchIndexError>,
}

impl BatchOperationResult {
    /// Whether the document was written.
    pub fn success(&self) -> bool {
        matches!(&self.outcome, Ok(write) if write.is_success())
    }
}

/// Summary of a batch operation containing aggregate statistics and individual results.
///
/// Partial failures are reported here rather than as an error, so callers can
/// decide what a failed document means for them.
#[derive(Debug, Clone, Default)]
pub struct BatchOperationSummary {
    /// Total number of items in the batch.
    pub total: usize,
    /// Number of successful operations.
    pub succeeded: usize,
    /// Number of failed operations.
    pub failed: usize,
    /// Individual results for each item.
    pub results: Vec<BatchOperationResult>,
}

impl BatchOperationSummary {
    /// Build a summary from individual results, computing the counts.
    pub fn from_results(results: Vec<BatchOperationResult>) -> Self {
        let succeeded = results.iter().filter(|r| r.success()).count();

        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            results,
        }
    }

    /// Number of documents whose request never reached the engine.
    pub fn transport_failures(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(&r.outcome, Err(e) if e.is_transport()))
            .count()
    }
}
