//! OpenSearch index configuration and mappings.
//!
//! This module defines the index settings and mappings for the article index.

use serde_json::{json, Value};

/// The default name of the article index.
pub const INDEX_NAME: &str = "testindex";

/// Get the index settings and mappings for the article index.
///
/// Only the fields that need non-default handling are mapped; everything
/// else is left to dynamic mapping.
///
/// - `id` is an integer.
/// - `items.interactions` is nested and disabled: stored in `_source`, never indexed.
/// - `items.tags` is nested with `include_in_root`, so tag names are also
///   searchable as plain fields on the article.
pub fn get_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1
        },
        "mappings": {
            "properties": {
                "id": {
                    "type": "integer"
                },
                "items": {
                    "properties": {
                        "interactions": {
                            "enabled": false,
                            "type": "nested"
                        },
                        "tags": {
                            "type": "nested",
                            "include_in_root": true,
                            "properties": {
                                "name": {
                                    "type": "keyword"
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
