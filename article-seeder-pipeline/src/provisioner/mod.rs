//! Index provisioner.
//!
//! Makes sure the target index exists before any document is written.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::PipelineError;
use article_seeder_repository::{get_index_settings, SearchIndexProvider};

/// What provisioning did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// The index was missing and has been created.
    Created,
    /// The index was already there; nothing was changed.
    AlreadyExists,
}

/// Creates the article index with its mapping when it does not exist.
///
/// An existing index is left untouched, whatever its mapping.
pub struct IndexProvisioner {
    client: Arc<dyn SearchIndexProvider>,
}

impl IndexProvisioner {
    /// Create a new provisioner with the given client.
    pub fn new(client: Arc<dyn SearchIndexProvider>) -> Self {
        Self { client }
    }

    /// Ensure the index exists.
    ///
    /// # Returns
    ///
    /// * `Ok(ProvisionOutcome)` - Whether the index was created or already present
    /// * `Err(PipelineError)` - If the engine is unreachable or rejects creation
    #[instrument(skip(self), fields(index = %self.client.index_name()))]
    pub async fn ensure_index(&self) -> Result<ProvisionOutcome, PipelineError> {
        if self.client.index_exists().await? {
            info!("Index already exists");
            return Ok(ProvisionOutcome::AlreadyExists);
        }

        let settings = get_index_settings();
        self.client.create_index(&settings).await?;

        info!("Index created");
        Ok(ProvisionOutcome::Created)
    }
}
