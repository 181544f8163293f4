//! Concurrent indexer.
//!
//! Writes one document per article, each on its own task, and waits for
//! all of them before returning.

use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, instrument, warn};

use crate::errors::PipelineError;
use article_seeder_repository::{
    BatchOperationResult, BatchOperationSummary, DocumentWrite, IndexDocumentRequest,
    SearchIndexProvider,
};
use article_seeder_shared::Article;

/// Default limit on simultaneous in-flight index requests.
pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

/// Largest concurrency limit the indexer can honour.
pub const MAX_CONCURRENCY_LIMIT: usize = Semaphore::MAX_PERMITS;

/// What to do when a document request cannot reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportFailurePolicy {
    /// Cancel the remaining tasks and fail the run.
    #[default]
    Abort,
    /// Record the failure and keep indexing the rest.
    Collect,
}

/// Configuration for the concurrent indexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Maximum number of requests in flight at once. `None` means one per article.
    pub max_concurrency: Option<usize>,
    /// Handling of transport failures.
    pub failure_policy: TransportFailurePolicy,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            max_concurrency: Some(DEFAULT_MAX_CONCURRENCY),
            failure_policy: TransportFailurePolicy::default(),
        }
    }
}

impl IndexerConfig {
    /// Create a config with no concurrency limit.
    pub fn unbounded() -> Self {
        Self {
            max_concurrency: None,
            ..Default::default()
        }
    }

    /// Set the concurrency limit.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = Some(max_concurrency);
        self
    }

    /// Set the transport failure policy.
    pub fn with_failure_policy(mut self, failure_policy: TransportFailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }
}

/// Indexer that writes articles to the search engine concurrently.
pub struct ConcurrentIndexer {
    client: Arc<dyn SearchIndexProvider>,
    config: IndexerConfig,
}

impl ConcurrentIndexer {
    /// Create a new indexer with default configuration.
    pub fn new(client: Arc<dyn SearchIndexProvider>) -> Self {
        Self {
            client,
            config: IndexerConfig::default(),
        }
    }

    /// Create a new indexer with custom configuration.
    pub fn with_config(client: Arc<dyn SearchIndexProvider>, config: IndexerConfig) -> Self {
        Self { client, config }
    }

    /// Index every article and wait for all writes to finish.
    ///
    /// Engine rejections of individual documents are logged and reported in
    /// the summary. A transport failure is either fatal or recorded,
    /// depending on [`TransportFailurePolicy`].
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - Per-article results, ordered by article id
    /// * `Err(PipelineError)` - On serialization failure, or transport failure under `Abort`
    #[instrument(skip(self, articles), fields(article_count = articles.len()))]
    pub async fn index_all(
        &self,
        articles: &[Article],
    ) -> Result<BatchOperationSummary, PipelineError> {
        let limiter = self
            .config
            .max_concurrency
            .map(|limit| Arc::new(Semaphore::new(limit.clamp(1, MAX_CONCURRENCY_LIMIT))));

        let mut tasks = JoinSet::new();
        for article in articles {
            let client = Arc::clone(&self.client);
            let limiter = limiter.clone();
            let article = article.clone();

            tasks.spawn(async move {
                let _permit = match limiter {
                    Some(limiter) => Some(
                        limiter
                            .acquire_owned()
                            .await
                            .map_err(|e| PipelineError::task(e.to_string()))?,
                    ),
                    None => None,
                };
                let result = index_article(client.as_ref(), &article).await?;
                Ok::<_, PipelineError>((article.id, result))
            });
        }

        let mut results = Vec::with_capacity(articles.len());
        while let Some(joined) = tasks.join_next().await {
            // Returning early drops the set, which aborts the remaining tasks.
            let (article_id, result) = joined.map_err(|e| PipelineError::task(e.to_string()))??;

            if self.config.failure_policy == TransportFailurePolicy::Abort {
                if let Err(e) = &result.outcome {
                    if e.is_transport() {
                        tasks.abort_all();
                        return Err(PipelineError::transport(result.doc_id, e.clone()));
                    }
                }
            }

            results.push((article_id, result));
        }

        results.sort_by_key(|(article_id, _)| *article_id);
        Ok(BatchOperationSummary::from_results(
            results.into_iter().map(|(_, result)| result).collect(),
        ))
    }
}

/// Serialize and write a single article, logging the engine's answer.
async fn index_article(
    client: &dyn SearchIndexProvider,
    article: &Article,
) -> Result<BatchOperationResult, PipelineError> {
    let request = IndexDocumentRequest::from_article(article)?;
    let doc_id = request.doc_id.clone();

    let outcome = client.index_document(request).await;
    match &outcome {
        Ok(DocumentWrite::Indexed {
            status,
            result,
            version,
        }) => {
            info!(
                article_id = article.id,
                status = *status,
                result = %result,
                version = *version,
                "Indexed document"
            );
        }
        Ok(DocumentWrite::Unparsed { status, error }) => {
            error!(
                article_id = article.id,
                status = *status,
                error = %error,
                "Error parsing the response body"
            );
        }
        Ok(DocumentWrite::Rejected { status, reason }) => {
            warn!(
                article_id = article.id,
                status = *status,
                reason = %reason,
                "Error indexing document"
            );
        }
        Err(e) => {
            error!(article_id = article.id, error = %e, "Error getting response");
        }
    }

    Ok(BatchOperationResult { doc_id, outcome })
}
