//! # Article Seeder Pipeline
//!
//! This crate provides the pipeline components for generating sample
//! articles and indexing them into OpenSearch.
//!
//! ## Architecture
//!
//! 1. **Generator**: Builds the sample article collection
//! 2. **Provisioner**: Creates the target index with its mapping if missing
//! 3. **Indexer**: Writes one document per article, concurrently
//! 4. **Orchestrator**: Coordinates the pipeline flow

pub mod errors;
pub mod generator;
pub mod indexer;
pub mod orchestrator;
pub mod provisioner;

#[cfg(test)]
mod test_support;

pub use errors::PipelineError;
pub use generator::ArticleGenerator;
pub use indexer::{
    ConcurrentIndexer, IndexerConfig, TransportFailurePolicy, MAX_CONCURRENCY_LIMIT,
};
pub use orchestrator::Orchestrator;
pub use provisioner::{IndexProvisioner, ProvisionOutcome};
