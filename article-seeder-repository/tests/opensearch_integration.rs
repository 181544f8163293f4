//! Tests against a live OpenSearch node.
//!
//! Run with `cargo test -- --ignored` and `OPENSEARCH_URL` pointing at a node.

use article_seeder_repository::{
    get_index_settings, DocumentWrite, IndexDocumentRequest, OpenSearchClient, SearchIndexConfig,
    SearchIndexProvider,
};
use article_seeder_shared::{Article, Item, Tag};
use chrono::{SubsecRound, Utc};

fn live_client(index_name: &str) -> OpenSearchClient {
    let url = std::env::var("OPENSEARCH_URL").unwrap_or_else(|_| "http://localhost:9200".into());
    OpenSearchClient::new(SearchIndexConfig::new(url, index_name)).unwrap()
}

fn article(id: u32) -> Article {
    Article {
        id,
        title: format!("Title {}", id),
        body: "Lorem ipsum dolor sit amet...".to_string(),
        published: Utc::now().round_subsecs(0),
        items: Item {
            interactions: vec![format!("Interaction A{}", id)],
            tags: vec![Tag::new(format!("TagA-{}", id))],
        },
        tags: vec![Tag::new(format!("TagZ-{}", id))],
    }
}

async fn ensure_index(client: &OpenSearchClient) {
    if !client.index_exists().await.unwrap() {
        client.create_index(&get_index_settings()).await.unwrap();
    }
}

#[tokio::test]
#[ignore]
async fn test_provisioning_is_a_noop_when_index_exists() {
    let client = live_client("article-seeder-it-provision");
    ensure_index(&client).await;

    assert!(client.index_exists().await.unwrap());
    // Second pass takes the existing-index path and must not fail.
    ensure_index(&client).await;
}

#[tokio::test]
#[ignore]
async fn test_reindexing_bumps_version() {
    let client = live_client("article-seeder-it-versions");
    ensure_index(&client).await;

    let doc = article(1);
    let first = client
        .index_document(IndexDocumentRequest::from_article(&doc).unwrap())
        .await
        .unwrap();
    let second = client
        .index_document(IndexDocumentRequest::from_article(&doc).unwrap())
        .await
        .unwrap();

    match (first, second) {
        (
            DocumentWrite::Indexed { version: v1, .. },
            DocumentWrite::Indexed {
                version: v2,
                result,
                ..
            },
        ) => {
            assert_eq!(v2, v1 + 1);
            assert_eq!(result, "updated");
        }
        other => panic!("unexpected writes: {:?}", other),
    }
}
