//! Search index error types.
//!
//! This module defines the error types that can occur during search index operations.

use thiserror::Error;

/// Errors that can occur during search index operations.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// The client could not be configured (bad URL, transport build failure).
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A request was sent but no HTTP response came back.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The engine rejected the index creation request.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// Failed to parse a response from the search engine.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data for the search engine.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SearchIndexError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Whether the engine was unreachable, as opposed to answering with an error.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::ConnectionError(_) | Self::TransportError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(SearchIndexError::connection("refused").is_transport());
        assert!(SearchIndexError::transport("reset").is_transport());
        assert!(!SearchIndexError::index_creation("400").is_transport());
        assert!(!SearchIndexError::parse("eof").is_transport());
    }

    #[test]
    fn test_display() {
        let err = SearchIndexError::index_creation("status 400");
        assert_eq!(err.to_string(), "Index creation error: status 400");
    }
}
