use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use strainer::config::FetcherConfig;
use strainer::titles::{HttpPageSource, TitleCache, TitleFetcher, TitleStore};

fn fetcher(timeout_secs: u64) -> TitleFetcher {
    let config = FetcherConfig {
        timeout_secs,
        ..FetcherConfig::default()
    };
    TitleFetcher::from_config(&config).unwrap()
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8")
}

#[tokio::test]
async fn title_is_fetched_once_then_served_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mail"))
        .respond_with(html("<html><head><title>Gmail</title></head></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = fetcher(5);
    let urls = vec![format!("{}/mail", server.uri())];

    assert_eq!(fetcher.fetch_titles(&urls).await, vec!["Gmail"]);
    assert_eq!(fetcher.fetch_titles(&urls).await, vec!["Gmail"]);

    let received = server
        .received_requests()
        .await
        .expect("mock server should record received requests");
    assert_eq!(received.len(), 1);
    server.verify().await;
}

#[tokio::test]
async fn page_without_title_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foobar"))
        .respond_with(html("<html><head>simple</head><body>simple</body></html>"))
        .expect(2)
        .mount(&server)
        .await;

    let fetcher = fetcher(5);
    let url = format!("{}/foobar", server.uri());

    assert_eq!(fetcher.fetch_title(&url).await, "");
    assert!(!fetcher.store().has(&url));
    assert_eq!(fetcher.fetch_title(&url).await, "");
    server.verify().await;
}

#[tokio::test]
async fn empty_title_is_cached_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(html("<html><head>simple</head><title></title></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = fetcher(5);
    let url = format!("{}/empty", server.uri());

    assert_eq!(fetcher.fetch_title(&url).await, "");
    assert_eq!(fetcher.store().get(&url).as_deref(), Some(""));
    assert_eq!(fetcher.fetch_title(&url).await, "");
    server.verify().await;
}

#[tokio::test]
async fn non_200_degrades_to_empty_and_is_retried_later() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<title>Not Found</title>"))
        .expect(2)
        .mount(&server)
        .await;

    let fetcher = fetcher(5);
    let urls = vec![format!("{}/gone", server.uri())];

    assert_eq!(fetcher.fetch_titles(&urls).await, vec![""]);
    assert_eq!(fetcher.fetch_titles(&urls).await, vec![""]);
    assert!(fetcher.store().is_empty());
    server.verify().await;
}

#[tokio::test]
async fn slow_page_times_out_without_failing_the_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("<title>Slow</title>").set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(html("<title>Fast</title>"))
        .mount(&server)
        .await;

    let fetcher = fetcher(1);
    let urls = vec![
        format!("{}/slow", server.uri()),
        format!("{}/fast", server.uri()),
    ];

    assert_eq!(fetcher.fetch_titles(&urls).await, vec!["", "Fast"]);
    assert!(!fetcher.store().has(&urls[0]));
}

#[tokio::test]
async fn connection_failure_degrades_to_empty() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = fetcher(2);
    let urls = vec![format!("http://{addr}/nothing")];

    assert_eq!(fetcher.fetch_titles(&urls).await, vec![""]);
    assert!(fetcher.store().is_empty());
}

#[tokio::test]
async fn results_keep_input_order_under_uneven_latency() {
    let server = MockServer::start().await;
    for (route, title, delay_ms) in [("/a", "A", 400), ("/b", "B", 200), ("/c", "C", 0)] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                html(&format!("<title>{title}</title>")).set_delay(Duration::from_millis(delay_ms)),
            )
            .mount(&server)
            .await;
    }

    let fetcher = fetcher(5);
    let urls: Vec<String> = ["/a", "/b", "/c"]
        .iter()
        .map(|p| format!("{}{p}", server.uri()))
        .collect();

    assert_eq!(fetcher.fetch_titles(&urls).await, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn non_utf8_bytes_are_tolerated() {
    let server = MockServer::start().await;
    let mut body = b"<html><head><title>Caf".to_vec();
    body.push(0xE9);
    body.extend_from_slice(b" menu</title></head></html>");
    Mock::given(method("GET"))
        .and(path("/latin1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(&server)
        .await;

    let fetcher = fetcher(5);
    let title = fetcher
        .fetch_title(&format!("{}/latin1", server.uri()))
        .await;

    assert!(title.starts_with("Caf"));
    assert!(title.ends_with(" menu"));
}

#[tokio::test]
async fn shared_store_is_visible_across_fetchers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shared"))
        .respond_with(html("<title>Shared</title>"))
        .expect(1)
        .mount(&server)
        .await;

    let config = FetcherConfig::default();
    let store: Arc<dyn TitleStore> = Arc::new(TitleCache::new());
    let source = Arc::new(HttpPageSource::new(&config).unwrap());
    let first = TitleFetcher::new(
        Arc::clone(&store),
        source.clone(),
        4,
        Duration::from_secs(5),
    );
    let second = TitleFetcher::new(Arc::clone(&store), source, 4, Duration::from_secs(5));

    let url = format!("{}/shared", server.uri());
    assert_eq!(first.fetch_title(&url).await, "Shared");
    assert_eq!(second.fetch_title(&url).await, "Shared");
    server.verify().await;
}
