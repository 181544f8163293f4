//! # Article Seeder Shared
//!
//! Data types shared between the search index repository and the seeding
//! pipeline. These are the documents written to the search index, and their
//! serde representation is the exchange format sent to the engine.

mod article;

pub use article::{Article, Item, Tag};
