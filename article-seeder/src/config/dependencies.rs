//! Dependency initialization and wiring for the article seeder.

use std::sync::Arc;
use tracing::info;

use crate::config::SeederConfig;
use crate::SeederError;
use article_seeder_pipeline::Orchestrator;
use article_seeder_repository::OpenSearchClient;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Build the OpenSearch client and the pipeline around it.
    ///
    /// No request is sent to the engine here.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(SeederError::SearchError)` - If the client cannot be configured
    pub fn new(config: &SeederConfig) -> Result<Self, SeederError> {
        info!(
            opensearch_url = %config.search.url,
            index_name = %config.search.index_name,
            max_concurrency = ?config.indexer.max_concurrency,
            failure_policy = ?config.indexer.failure_policy,
            "Initializing dependencies"
        );

        let search_client = OpenSearchClient::new(config.search.clone())?;

        let orchestrator = Orchestrator::new(Arc::new(search_client), config.indexer.clone());

        Ok(Self { orchestrator })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use article_seeder_repository::SearchIndexError;

    #[test]
    fn test_invalid_url_is_rejected() {
        let mut config = SeederConfig::default();
        config.search.url = "::not-a-url".to_string();

        let result = Dependencies::new(&config);

        assert!(matches!(
            result,
            Err(SeederError::SearchError(SearchIndexError::ConnectionError(_)))
        ));
    }

    #[test]
    fn test_default_config_wires_up() {
        assert!(Dependencies::new(&SeederConfig::default()).is_ok());
    }
}
