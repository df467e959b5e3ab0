//! Integration tests for the crawler and indexer
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch, extract, tokenize and count cycle end-to-end.

use site_indexer::config::{Config, Segmentation, TokenizerConfig};
use site_indexer::crawler::Crawler;
use site_indexer::state::PageState;
use site_indexer::{build_default_indexer, build_indexer, index_site, HttpFetcher, IndexerError};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page that must be requested exactly `times` times
async fn mount_page(server: &MockServer, route: &str, html: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(html),
        )
        .expect(times)
        .mount(server)
        .await;
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(&Config::default()).expect("Failed to build HTTP client")
}

#[tokio::test]
async fn test_index_small_site() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><p>Cats running</p>
           <a href="/a">dogs</a>
           <a href="/missing">cats</a>
           <a href="javascript:void(0)">ignored</a></body></html>"#,
        1,
    )
    .await;
    mount_page(
        &server,
        "/a",
        r#"<html><body><p>Dogs and cats</p><a href="/">home</a></body></html>"#,
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<p>not found page</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let root = format!("{}/", server.uri());
    let mut indexer = build_default_indexer();
    let words = index_site(&fetcher(), &root, &mut indexer, 1)
        .await
        .expect("Indexing failed");

    assert_eq!(words.get("cat"), Some(&3));
    assert_eq!(words.get("dog"), Some(&2));
    assert_eq!(words.get("run"), Some(&1));
    assert_eq!(words.get("home"), Some(&1));
    assert_eq!(words.get("ignor"), Some(&1));
    // the 404 body is never indexed
    assert_eq!(words.get("found"), None);
    assert_eq!(indexer.documents_indexed(), 3);
}

#[tokio::test]
async fn test_link_cycle_fetches_each_page_once() {
    let server = MockServer::start().await;

    mount_page(&server, "/", r#"<p>ping</p><a href="/other">next</a>"#, 1).await;
    mount_page(&server, "/other", r#"<p>pong</p><a href="/">back</a>"#, 1).await;

    let root = format!("{}/", server.uri());
    let mut indexer = build_default_indexer();
    let words = index_site(&fetcher(), &root, &mut indexer, 5)
        .await
        .expect("Indexing failed");

    assert_eq!(words.get("ping"), Some(&1));
    assert_eq!(words.get("pong"), Some(&1));
    assert_eq!(indexer.documents_indexed(), 2);
}

#[tokio::test]
async fn test_depth_zero_fetches_only_root() {
    let server = MockServer::start().await;

    mount_page(&server, "/", r#"<p>root</p><a href="/child">child</a>"#, 1).await;
    mount_page(&server, "/child", "<p>unreached</p>", 0).await;

    let root = format!("{}/", server.uri());
    let mut indexer = build_default_indexer();
    let words = index_site(&fetcher(), &root, &mut indexer, 0)
        .await
        .expect("Indexing failed");

    assert_eq!(words.get("root"), Some(&1));
    assert_eq!(words.get("unreach"), None);
}

#[tokio::test]
async fn test_invalid_root_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let fetcher = fetcher();
    for root in ["not a url", "ftp://example.com/", "/relative/path"] {
        let mut indexer = build_default_indexer();
        let result = index_site(&fetcher, root, &mut indexer, 1).await;
        assert!(
            matches!(result, Err(IndexerError::InvalidUrl(_))),
            "expected InvalidUrl for {:?}",
            root
        );
        assert!(indexer.is_empty());
    }
}

#[tokio::test]
async fn test_root_server_error_gives_empty_index() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<p>oops</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let root = format!("{}/", server.uri());
    let mut indexer = build_default_indexer();
    let words = index_site(&fetcher(), &root, &mut indexer, 1)
        .await
        .expect("Indexing failed");

    assert!(words.is_empty());
    assert_eq!(indexer.documents_indexed(), 1);
}

#[tokio::test]
async fn test_unreachable_link_does_not_stop_siblings() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<a href="http://127.0.0.1:1/down">down</a><a href="/up">up</a>"#,
        1,
    )
    .await;
    mount_page(&server, "/up", "<p>still here</p>", 1).await;

    let root = format!("{}/", server.uri());
    let fetcher = fetcher();
    let mut crawl = Crawler::new(&fetcher)
        .crawl(&root, 1)
        .expect("Root URL should be valid");

    let mut urls = Vec::new();
    while let Some(document) = crawl.next_document().await {
        urls.push(document.url);
    }

    assert_eq!(urls, vec![root.clone(), format!("{}/up", server.uri())]);
    let stats = crawl.into_stats();
    assert_eq!(stats.pages_by_state.get(&PageState::Processed), Some(&2));
    assert_eq!(stats.error_count(), 1);
}

#[tokio::test]
async fn test_page_limit_truncates_crawl() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<a href="/a">a</a><a href="/b">b</a><a href="/c">c</a>"#,
        1,
    )
    .await;
    mount_page(&server, "/a", "<p>first</p>", 1).await;
    mount_page(&server, "/b", "<p>second</p>", 0).await;
    mount_page(&server, "/c", "<p>third</p>", 0).await;

    let root = format!("{}/", server.uri());
    let fetcher = fetcher();
    let mut crawl = Crawler::new(&fetcher)
        .with_page_limit(Some(2))
        .crawl(&root, 1)
        .expect("Root URL should be valid");

    let mut count = 0;
    while crawl.next_document().await.is_some() {
        count += 1;
    }

    assert_eq!(count, 2);
    assert!(crawl.stats().truncated);
}

#[tokio::test]
async fn test_configured_tokenizer() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        "<p>Running, running: 42 times!</p>",
        1,
    )
    .await;

    let config = TokenizerConfig {
        segmentation: Segmentation::Delimiter,
        delimiter: " ".to_string(),
        stem: false,
        strip_punctuation: true,
        remove_numeric: true,
        ..TokenizerConfig::default()
    };

    let root = format!("{}/", server.uri());
    let mut indexer = build_indexer(&config);
    let words = index_site(&fetcher(), &root, &mut indexer, 0)
        .await
        .expect("Indexing failed");

    assert_eq!(words.get("running"), Some(&2));
    assert_eq!(words.get("times"), Some(&1));
    assert_eq!(words.get("42"), None);
    assert_eq!(words.len(), 2);
}
