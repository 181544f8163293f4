//! Error types for the article seeder repository.

mod search_index_error;

pub use search_index_error::SearchIndexError;
