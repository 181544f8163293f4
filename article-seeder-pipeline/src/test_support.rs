//! Mock search index provider shared by the pipeline tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use article_seeder_repository::{
    DocumentWrite, IndexDocumentRequest, SearchIndexError, SearchIndexProvider,
};

/// In-memory provider that records calls and answers from its configuration.
pub(crate) struct MockProvider {
    index_present: bool,
    reject_create: bool,
    unreachable: bool,
    rejected_ids: HashSet<String>,
    unreachable_ids: HashSet<String>,
    unparsed_ids: HashSet<String>,
    latency: Duration,
    pub exists_checks: AtomicUsize,
    pub created: Mutex<Vec<Value>>,
    pub requests: Mutex<Vec<IndexDocumentRequest>>,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            index_present: false,
            reject_create: false,
            unreachable: false,
            rejected_ids: HashSet::new(),
            unreachable_ids: HashSet::new(),
            unparsed_ids: HashSet::new(),
            latency: Duration::from_millis(10),
            exists_checks: AtomicUsize::new(0),
            created: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_existing_index(mut self) -> Self {
        self.index_present = true;
        self
    }

    pub fn with_rejected_create(mut self) -> Self {
        self.reject_create = true;
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn rejecting(mut self, doc_id: &str) -> Self {
        self.rejected_ids.insert(doc_id.to_string());
        self
    }

    pub fn unreachable_for(mut self, doc_id: &str) -> Self {
        self.unreachable_ids.insert(doc_id.to_string());
        self
    }

    pub fn unparsed_for(mut self, doc_id: &str) -> Self {
        self.unparsed_ids.insert(doc_id.to_string());
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn written(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchIndexProvider for MockProvider {
    fn index_name(&self) -> &str {
        "testindex"
    }

    async fn index_exists(&self) -> Result<bool, SearchIndexError> {
        self.exists_checks.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(SearchIndexError::transport("connection refused"));
        }
        Ok(self.index_present)
    }

    async fn create_index(&self, settings: &Value) -> Result<(), SearchIndexError> {
        if self.reject_create {
            return Err(SearchIndexError::index_creation(
                "status 400: resource_already_exists_exception",
            ));
        }
        self.created.lock().unwrap().push(settings.clone());
        Ok(())
    }

    async fn index_document(
        &self,
        request: IndexDocumentRequest,
    ) -> Result<DocumentWrite, SearchIndexError> {
        if self.unreachable_ids.contains(&request.doc_id) {
            return Err(SearchIndexError::transport("connection reset"));
        }

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let rejected = self.rejected_ids.contains(&request.doc_id);
        let unparsed = self.unparsed_ids.contains(&request.doc_id);
        self.requests.lock().unwrap().push(request);

        if unparsed {
            return Ok(DocumentWrite::Unparsed {
                status: 201,
                error: "missing field `_version`".to_string(),
            });
        }
        if rejected {
            return Ok(DocumentWrite::Rejected {
                status: 400,
                reason: "mapper_parsing_exception".to_string(),
            });
        }

        Ok(DocumentWrite::Indexed {
            status: 201,
            result: "created".to_string(),
            version: 1,
        })
    }
}
