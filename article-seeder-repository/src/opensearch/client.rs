//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    params::Refresh,
    IndexParts, OpenSearch,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::SearchIndexConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{DocumentWrite, IndexAcknowledgement, IndexDocumentRequest};

/// OpenSearch client implementation.
///
/// The underlying `OpenSearch` handle is safe to share, so one client serves
/// every concurrent indexing task.
///
/// # Example
///
/// ```ignore
/// use article_seeder_repository::{OpenSearchClient, SearchIndexConfig};
/// let client = OpenSearchClient::new(SearchIndexConfig::default())?;
///
/// if !client.index_exists().await? {
///     client.create_index(&get_index_settings()).await?;
/// }
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
    config: SearchIndexConfig,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client for the configured URL and index.
    ///
    /// No request is made here; an unreachable engine surfaces on the first call.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchIndexError)` - If the URL is invalid or the transport cannot be built
    pub fn new(config: SearchIndexConfig) -> Result<Self, SearchIndexError> {
        let parsed_url = Url::parse(&config.url)
            .map_err(|e| SearchIndexError::connection(format!("{}: {}", config.url, e)))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %config.url,
            index = %config.index_name,
            "Created OpenSearch client"
        );

        Ok(Self { client, config })
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchClient {
    fn index_name(&self) -> &str {
        &self.config.index_name
    }

    async fn index_exists(&self) -> Result<bool, SearchIndexError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[self.config.index_name.as_str()]))
            .send()
            .await
            .map_err(|e| {
                SearchIndexError::transport(format!(
                    "index_exists({}): {}",
                    self.config.index_name, e
                ))
            })?;

        let status = response.status_code();
        match status.as_u16() {
            404 => Ok(false),
            200 => Ok(true),
            code => {
                // Anything but 404 counts as present; creation is never attempted over it.
                warn!(
                    index = %self.config.index_name,
                    status = code,
                    "Unexpected status from index existence check"
                );
                Ok(true)
            }
        }
    }

    async fn create_index(&self, settings: &Value) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&self.config.index_name))
            .body(settings)
            .send()
            .await
            .map_err(|e| {
                SearchIndexError::transport(format!(
                    "index_create({}): {}",
                    self.config.index_name, e
                ))
            })?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Create index request failed");
            return Err(SearchIndexError::index_creation(format!(
                "index_create({}) failed with status {}: {}",
                self.config.index_name, status, error_body
            )));
        }

        info!(index = %self.config.index_name, "Created index");
        Ok(())
    }

    async fn index_document(
        &self,
        request: IndexDocumentRequest,
    ) -> Result<DocumentWrite, SearchIndexError> {
        let response = self
            .client
            .index(IndexParts::IndexId(&self.config.index_name, &request.doc_id))
            .refresh(Refresh::True)
            .body(request.body)
            .send()
            .await
            .map_err(|e| {
                SearchIndexError::transport(format!("index doc {}: {}", request.doc_id, e))
            })?;

        let status = response.status_code();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Ok(DocumentWrite::Rejected {
                status: status.as_u16(),
                reason,
            });
        }

        match response.json::<IndexAcknowledgement>().await {
            Ok(ack) => {
                debug!(doc_id = %request.doc_id, version = ack.version, "Document written");
                Ok(DocumentWrite::Indexed {
                    status: status.as_u16(),
                    result: ack.result,
                    version: ack.version,
                })
            }
            Err(e) => Ok(DocumentWrite::Unparsed {
                status: status.as_u16(),
                error: e.to_string(),
            }),
        }
    }
}
