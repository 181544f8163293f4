//! Article document types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single tag, used both on the article itself and inside its [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name. Mapped as a `keyword` when nested under `items`.
    pub name: String,
}

impl Tag {
    /// Create a tag with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Nested data attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    /// Free-text interaction labels. Stored with the document but not indexed.
    pub interactions: Vec<String>,
    /// Item-level tags, distinct from the article's own tags.
    pub tags: Vec<Tag>,
}

/// An article document as stored in the search index.
///
/// The `id` doubles as the search engine document id, so writing the same
/// article twice replaces the earlier document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Positive identifier, unique within a run.
    pub id: u32,
    /// Article title.
    pub title: String,
    /// Article body text.
    pub body: String,
    /// Publication time in UTC.
    pub published: DateTime<Utc>,
    /// Nested interactions and item tags.
    pub items: Item,
    /// Article-level tags.
    pub tags: Vec<Tag>,
}

impl Article {
    /// The search engine document id for this article.
    pub fn doc_id(&self) -> String {
        self.id.to_string()
    }
}
