//! End-to-end search tests against a mock catalog

use crate::fixtures::{
    book_page, movie_page, search_page, subject_url, test_config, TEST_USER_AGENT,
};
use douban_meta::config::ResultOrder;
use douban_meta::{Kind, Provider};
use std::time::Duration;
use wiremock::matchers::{header, header_exists, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_book(server: &MockServer, id: u32, title: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/subject/{}/", id)))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(book_page(&server.uri(), id, title)),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_book_search_end_to_end() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("cat", "1001"))
        .and(query_param("q", "9787536692930"))
        .and(header("user-agent", TEST_USER_AGENT))
        .and(header_exists("accept-encoding"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(&base, &[1, 2])))
        .expect(1)
        .mount(&server)
        .await;
    mount_book(&server, 1, "三体").await;
    mount_book(&server, 2, "三体II").await;

    let provider = Provider::books(&test_config(&base)).expect("provider");
    let records = provider.search("9787536692930").await;

    assert_eq!(records.len(), 2);
    let mut titles: Vec<&str> = records.iter().map(|r| r.title()).collect();
    titles.sort();
    assert_eq!(titles, vec!["三体", "三体II"]);

    let book = records
        .iter()
        .find(|r| r.id() == "1")
        .and_then(|r| r.as_book())
        .expect("book 1");
    assert_eq!(book.url, subject_url(&base, 1));
    assert_eq!(book.authors, vec!["作者1"]);
    assert_eq!(book.publisher.as_deref(), Some("测试出版社"));
    assert_eq!(book.published_date.as_deref(), Some("2020-11-01"));
    assert_eq!(book.isbn(), Some("9780000001"));
    assert_eq!(book.rating, 4.3);
    assert_eq!(book.tags, vec!["suspense", "classic"]);
    assert_eq!(book.cover, "https://img.example.com/1.jpg");
    assert!(book.description.contains("简介 1"));
}

#[tokio::test]
async fn test_movie_search_uses_movie_category() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("cat", "1002"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(&base, &[1292052])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/subject/1292052/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(movie_page(&base, 1292052, "肖申克的救赎")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = Provider::movies(&test_config(&base)).expect("provider");
    let movie = provider.search_one("tt0111161").await.expect("a movie");

    assert_eq!(movie.kind(), Kind::Movie);
    assert_eq!(movie.id(), "1292052");
    let movie = movie.as_movie().expect("movie record");
    assert_eq!(movie.title, "肖申克的救赎");
    assert_eq!(movie.directors, vec!["导演1292052"]);
    assert_eq!(movie.release_date.as_deref(), Some("1994-09-10"));
    assert_eq!(movie.imdb.as_deref(), Some("tt0111161"));
    assert!(movie.actors.is_empty());
    assert!(movie.tags.is_empty());
}

#[tokio::test]
async fn test_only_five_of_twenty_candidates_are_fetched() {
    let server = MockServer::start().await;
    let base = server.uri();
    let ids: Vec<u32> = (1..=20).collect();

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(&base, &ids)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/subject/\d+/$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(book_page(&base, 1, "任意")))
        .expect(5)
        .mount(&server)
        .await;

    let provider = Provider::books(&test_config(&base)).expect("provider");
    let records = provider.search("anything").await;

    assert_eq!(records.len(), 5);
}

#[tokio::test]
async fn test_candidate_cap_follows_config() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(search_page(&base, &[1, 2, 3, 4])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/subject/\d+/$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(book_page(&base, 1, "任意")))
        .expect(2)
        .mount(&server)
        .await;

    let mut config = test_config(&base);
    config.search.max_candidates = 2;
    config.search.workers = 1;
    let provider = Provider::books(&config).expect("provider");

    assert_eq!(provider.search("anything").await.len(), 2);
}

#[tokio::test]
async fn test_failed_search_returns_empty() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/subject/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = Provider::books(&test_config(&base)).expect("provider");

    assert!(provider.search("blocked").await.is_empty());
}

#[tokio::test]
async fn test_search_without_candidates_returns_empty() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(&base, &[])))
        .expect(1)
        .mount(&server)
        .await;

    let provider = Provider::books(&test_config(&base)).expect("provider");

    assert!(provider.search_one("no such book").await.is_none());
}

#[tokio::test]
async fn test_failed_candidates_are_dropped() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(&base, &[1, 2])))
        .mount(&server)
        .await;
    mount_book(&server, 1, "可用").await;
    Mock::given(method("GET"))
        .and(path("/subject/2/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = Provider::books(&test_config(&base)).expect("provider");
    let records = provider.search("partial").await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title(), "可用");
}

#[tokio::test]
async fn test_inactive_provider_sends_no_requests() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = Provider::books(&test_config(&base)).expect("provider");
    provider.set_active(false);

    assert!(provider.search("anything").await.is_empty());
    assert!(provider.search_one("anything").await.is_none());
}

#[tokio::test]
async fn test_repeated_search_reuses_cached_records() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(&base, &[1])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/subject/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(book_page(&base, 1, "缓存")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = Provider::books(&test_config(&base)).expect("provider");
    let first = provider.search("缓存").await;
    let second = provider.search("缓存").await;

    assert_eq!(first, second);
    assert_eq!(provider.cache().len(), 1);
    assert_eq!(provider.cache().hits(), 1);
}

async fn mount_delayed_books(server: &MockServer, delays_ms: &[(u32, u64)]) {
    let base = server.uri();
    for (id, delay) in delays_ms {
        Mock::given(method("GET"))
            .and(path(format!("/subject/{}/", id)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(book_page(&base, *id, &format!("book {}", id)))
                    .set_delay(Duration::from_millis(*delay)),
            )
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn test_completion_order_by_default() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(&base, &[1, 2])))
        .mount(&server)
        .await;
    mount_delayed_books(&server, &[(1, 600), (2, 0)]).await;

    let provider = Provider::books(&test_config(&base)).expect("provider");
    let ids: Vec<String> = provider
        .search("order")
        .await
        .iter()
        .map(|r| r.id().to_string())
        .collect();

    assert_eq!(ids, vec!["2", "1"]);
}

#[tokio::test]
async fn test_rank_order_when_configured() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(&base, &[1, 2])))
        .mount(&server)
        .await;
    mount_delayed_books(&server, &[(1, 600), (2, 0)]).await;

    let mut config = test_config(&base);
    config.search.result_order = ResultOrder::Rank;
    let provider = Provider::books(&config).expect("provider");

    let first = provider.search_one("order").await.expect("a record");
    assert_eq!(first.id(), "1");
}
