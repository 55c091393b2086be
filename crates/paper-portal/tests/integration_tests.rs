//! Integration tests against the live Semantic Scholar API.
//!
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use paper_portal::config::Config;
use paper_portal::models::SearchParams;
use paper_portal::search::{ResultSource, SearchService};

fn create_service() -> SearchService {
    let config = Config::from_env().expect("Failed to read config");
    SearchService::from_config(&config).expect("Failed to create service")
}

#[tokio::test]
async fn test_live_query_search() {
    let service = create_service();
    let params = SearchParams::default().with_query("transformer attention").with_limit(5);
    let outcome = service.search_with_source(&params).await.expect("search never fails here");

    assert!(outcome.papers.len() <= 5);
    match outcome.source {
        ResultSource::Provider => {
            assert!(outcome.papers.iter().all(|p| !p.r#abstract.is_empty()));
        }
        // Unauthenticated requests are often rate limited.
        ResultSource::Fallback => println!("Note: provider unavailable, got sample data"),
    }
}

#[tokio::test]
async fn test_live_topic_search() {
    let service = create_service();
    let params = SearchParams::default().with_topic("Computer Science").with_limit(5);

    match service.search_provider(&params).await {
        Ok(papers) => assert!(papers.len() <= 5),
        Err(e) => println!("Note: topic search returned error (likely rate limited): {e:?}"),
    }
}
