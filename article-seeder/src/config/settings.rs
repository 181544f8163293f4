//! Seeder settings read from the environment.

use std::env;

use crate::SeederError;
use article_seeder_pipeline::{IndexerConfig, TransportFailurePolicy, MAX_CONCURRENCY_LIMIT};
use article_seeder_repository::SearchIndexConfig;

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Everything the seeder needs to run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeederConfig {
    /// Search engine connection and target index.
    pub search: SearchIndexConfig,
    /// Concurrency limit and failure handling for indexing.
    pub indexer: IndexerConfig,
    /// Log output format.
    pub log_format: LogFormat,
}

impl SeederConfig {
    /// Load the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `INDEX_NAME`: Target index (default: testindex)
    /// - `INDEXING_CONCURRENCY`: Max in-flight requests, `unbounded` or `0` for no limit (default: 16)
    /// - `TRANSPORT_FAILURE_POLICY`: `abort` or `collect` (default: abort)
    /// - `LOG_FORMAT`: `text` or `json` (default: text)
    pub fn from_env() -> Result<Self, SeederError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SeederError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("OPENSEARCH_URL") {
            config.search = config.search.with_url(url);
        }
        if let Some(index_name) = lookup("INDEX_NAME") {
            if index_name.trim().is_empty() {
                return Err(SeederError::config("INDEX_NAME must not be empty"));
            }
            config.search = config.search.with_index_name(index_name);
        }
        if let Some(concurrency) = lookup("INDEXING_CONCURRENCY") {
            config.indexer.max_concurrency = parse_concurrency(&concurrency)?;
        }
        if let Some(policy) = lookup("TRANSPORT_FAILURE_POLICY") {
            config.indexer.failure_policy = parse_failure_policy(&policy)?;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            config.log_format = parse_log_format(&format)?;
        }

        Ok(config)
    }
}

fn parse_concurrency(value: &str) -> Result<Option<usize>, SeederError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("unbounded") {
        return Ok(None);
    }

    match value.parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(limit) if limit > MAX_CONCURRENCY_LIMIT => Err(SeederError::config(format!(
            "INDEXING_CONCURRENCY must be at most {}, got {}",
            MAX_CONCURRENCY_LIMIT, limit
        ))),
        Ok(limit) => Ok(Some(limit)),
        Err(e) => Err(SeederError::config(format!(
            "INDEXING_CONCURRENCY must be a number or \"unbounded\", got {:?}: {}",
            value, e
        ))),
    }
}

fn parse_failure_policy(value: &str) -> Result<TransportFailurePolicy, SeederError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "abort" => Ok(TransportFailurePolicy::Abort),
        "collect" => Ok(TransportFailurePolicy::Collect),
        other => Err(SeederError::config(format!(
            "TRANSPORT_FAILURE_POLICY must be \"abort\" or \"collect\", got {:?}",
            other
        ))),
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, SeederError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(SeederError::config(format!(
            "LOG_FORMAT must be \"text\" or \"json\", got {:?}",
            other
        ))),
    }
}
