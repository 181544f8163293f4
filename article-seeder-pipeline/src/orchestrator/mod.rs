//! Orchestrator module for the article seeder pipeline.
//!
//! Coordinates the generator, provisioner, and indexer components.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::PipelineError;
use crate::generator::ArticleGenerator;
use crate::indexer::{ConcurrentIndexer, IndexerConfig};
use crate::provisioner::IndexProvisioner;
use article_seeder_repository::{BatchOperationSummary, SearchIndexProvider};

/// Orchestrator that runs one seeding pass.
///
/// Generate the articles, make sure the index exists, then index them all.
pub struct Orchestrator {
    generator: ArticleGenerator,
    provisioner: IndexProvisioner,
    indexer: ConcurrentIndexer,
}

impl Orchestrator {
    /// Create a new orchestrator whose components share one client.
    pub fn new(client: Arc<dyn SearchIndexProvider>, config: IndexerConfig) -> Self {
        Self {
            generator: ArticleGenerator::new(),
            provisioner: IndexProvisioner::new(Arc::clone(&client)),
            indexer: ConcurrentIndexer::with_config(client, config),
        }
    }

    /// Create a new orchestrator from prebuilt components.
    pub fn with_components(
        generator: ArticleGenerator,
        provisioner: IndexProvisioner,
        indexer: ConcurrentIndexer,
    ) -> Self {
        Self {
            generator,
            provisioner,
            indexer,
        }
    }

    /// Run the pipeline once.
    ///
    /// Returns the indexing summary. Per-document rejections do not make this
    /// fail; provisioning errors and fatal indexing errors do.
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<BatchOperationSummary, PipelineError> {
        info!("Starting article seeder");

        let articles = self.generator.generate();

        let outcome = self.provisioner.ensure_index().await?;
        info!(outcome = ?outcome, "Index provisioned");

        let summary = self.indexer.index_all(&articles).await?;

        info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            transport_failures = summary.transport_failures(),
            "Indexing complete"
        );

        Ok(summary)
    }
}
