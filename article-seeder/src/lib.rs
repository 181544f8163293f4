//! # Article Seeder
//!
//! Entry point and configuration for seeding an OpenSearch index with
//! sample articles.

pub mod config;
pub mod logging;

pub use config::{Dependencies, LogFormat, SeederConfig};

use thiserror::Error;

/// Errors that can occur during seeder initialization or execution.
#[derive(Error, Debug)]
pub enum SeederError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] article_seeder_pipeline::PipelineError),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] article_seeder_repository::SearchIndexError),
}

impl SeederError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
