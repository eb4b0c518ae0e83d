//! Loader and cache behavior over HTTP

use crate::fixtures::{book_page, subject_url, test_config};
use douban_meta::crawler::{Fetcher, Loader};
use douban_meta::extract::DetailParser;
use douban_meta::{Kind, RecordCache};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn loader(base: &str, cache: Arc<RecordCache>) -> Loader {
    let config = test_config(base);
    Loader::new(
        Fetcher::new(&config.http).expect("fetcher"),
        DetailParser::new(Kind::Book),
        cache,
        Duration::ZERO,
    )
}

#[tokio::test]
async fn test_second_load_is_served_from_cache() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/subject/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(book_page(&base, 7, "活着")))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(RecordCache::new(10));
    let loader = loader(&base, Arc::clone(&cache));
    let url = subject_url(&base, 7);

    let first = loader.load(&url).await.expect("first load");
    let second = loader.load(&url).await.expect("second load");

    assert_eq!(first, second);
    assert_eq!(first.title(), "活着");
    assert!(cache.contains(&url));
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 1);
}

#[tokio::test]
async fn test_failed_load_is_not_cached() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/subject/8/"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/subject/8/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(book_page(&base, 8, "重试")))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(RecordCache::new(10));
    let loader = loader(&base, Arc::clone(&cache));
    let url = subject_url(&base, 8);

    assert!(loader.load(&url).await.is_none());
    assert!(cache.is_empty());

    let record = loader.load(&url).await.expect("retry succeeds");
    assert_eq!(record.title(), "重试");
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn test_cache_evicts_least_recently_used() {
    let server = MockServer::start().await;
    let base = server.uri();

    for id in 1..=3 {
        Mock::given(method("GET"))
            .and(path(format!("/subject/{}/", id)))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(book_page(&base, id, "书")),
            )
            .mount(&server)
            .await;
    }

    let cache = Arc::new(RecordCache::new(2));
    let loader = loader(&base, Arc::clone(&cache));

    for id in 1..=3 {
        loader.load(&subject_url(&base, id)).await.expect("load");
    }

    assert_eq!(cache.len(), 2);
    assert!(!cache.contains(&subject_url(&base, 1)));
    assert!(cache.contains(&subject_url(&base, 3)));
}

#[tokio::test]
async fn test_blank_page_yields_url_only_record() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/subject/9/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let cache = Arc::new(RecordCache::new(10));
    let loader = loader(&base, cache);
    let url = subject_url(&base, 9);

    let record = loader.load(&url).await.expect("record");
    assert_eq!(record.url(), url);
    assert_eq!(record.title(), "");
}
