//! Integration tests for the crawler
//!
//! Each test mounts mock pages on a wiremock server and drives the real
//! fetcher/walker/driver against it. The mock server's `host:port` plays
//! the role of a candidate domain.

use domain_prospector::config::{Config, CrawlerConfig, IdentityConfig, OutputConfig};
use domain_prospector::crawler::{Driver, Fetcher, Walker, LINK_FAILURE, NO_CONTENT_SUMMARY, SUMMARY_FAILURE};
use domain_prospector::model::LinkStatus;
use domain_prospector::output::load_snapshot;
use domain_prospector::summary::{LeadSummarizer, Summarize, SummaryError};
use std::collections::HashSet;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Crawler settings tuned for tests: no pacing, short timeout
fn test_crawler_config() -> CrawlerConfig {
    CrawlerConfig {
        max_depth: 3,
        max_retries: 3,
        timeout_secs: 2,
        sleep_secs: 0,
        max_domains: 1000,
    }
}

fn test_identity() -> IdentityConfig {
    IdentityConfig {
        user_agents: vec!["TestAgent/1.0".to_string()],
    }
}

fn test_fetcher(crawler: &CrawlerConfig) -> Fetcher {
    Fetcher::new(crawler, &test_identity()).expect("Failed to build fetcher")
}

/// The mock server's host:port, used as the candidate domain string
fn server_domain(server: &MockServer) -> String {
    server
        .uri()
        .strip_prefix("http://")
        .expect("Mock server URI should be http")
        .to_string()
}

fn html_page(title: &str, body: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        title, body
    )
}

struct FailingSummarizer;

impl Summarize for FailingSummarizer {
    fn summarize(
        &self,
        _text: &str,
        _max_words: usize,
        _min_words: usize,
    ) -> Result<String, SummaryError> {
        Err(SummaryError::EmptyInput)
    }
}

#[tokio::test]
async fn test_walker_resolves_single_internal_link() {
    let mock_server = MockServer::start().await;
    let domain = server_domain(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(
            "Home",
            r#"<p>Welcome to the test site.</p><a href="/page">Inner page</a>"#,
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(
            "Inner",
            r#"<p>Inner page content.</p>"#,
        )))
        .mount(&mock_server)
        .await;

    let crawler = test_crawler_config();
    let fetcher = test_fetcher(&crawler);
    let walker = Walker::new(&fetcher, &LeadSummarizer, crawler.max_depth);
    let mut visited = HashSet::new();

    let node = walker
        .walk(mock_server.uri(), 0, &mut visited)
        .await
        .expect("Root crawl should succeed");

    assert_eq!(node.domain, domain);
    assert_eq!(node.title, "Home");
    assert_eq!(node.description, "Welcome to the test site.");
    assert_eq!(node.depth, 0);

    assert_eq!(node.links.len(), 1);
    let link_url = format!("http://{}/page", domain);
    let record = node.links.get(&link_url).expect("Link should be keyed by absolute URL");
    assert_eq!(record.url, link_url);
    assert_eq!(record.anchor_text, "Inner page");
    assert_eq!(record.status, LinkStatus::Success);
    assert_eq!(record.description, "Inner page content.");
}

#[tokio::test]
async fn test_walker_link_failure_is_local() {
    let mock_server = MockServer::start().await;
    let domain = server_domain(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(
            "Home",
            r#"<p>Root text.</p><a href="/broken">Broken</a><a href="/fine">Fine</a>"#,
        )))
        .mount(&mock_server)
        .await;

    // Permanently failing link: exactly max_retries attempts expected
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fine"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Fine", r#"<p>Fine page.</p>"#)),
        )
        .mount(&mock_server)
        .await;

    let crawler = test_crawler_config();
    let fetcher = test_fetcher(&crawler);
    let walker = Walker::new(&fetcher, &LeadSummarizer, crawler.max_depth);
    let mut visited = HashSet::new();

    let node = walker
        .walk(mock_server.uri(), 0, &mut visited)
        .await
        .expect("Root should still succeed despite the broken link");

    let broken = &node.links[&format!("http://{}/broken", domain)];
    assert_eq!(broken.status, LinkStatus::Failed);
    assert_eq!(broken.description, LINK_FAILURE);

    let fine = &node.links[&format!("http://{}/fine", domain)];
    assert_eq!(fine.status, LinkStatus::Success);
    assert_eq!(fine.description, "Fine page.");
}

#[tokio::test]
async fn test_walker_unreachable_root_returns_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let crawler = test_crawler_config();
    let fetcher = test_fetcher(&crawler);
    let walker = Walker::new(&fetcher, &LeadSummarizer, crawler.max_depth);
    let mut visited = HashSet::new();

    let result = walker.walk(mock_server.uri(), 0, &mut visited).await;
    assert!(result.is_none());
}

#[tokio::test]
async fn test_walker_depth_short_circuits_before_fetch() {
    let mock_server = MockServer::start().await;

    // Chain: / -> /level1 -> /level2, with max_depth = 1
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(
            "Root",
            r#"<a href="/level1">Level 1</a>"#,
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/level1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(
            "Level 1",
            r#"<a href="/level2">Level 2</a>"#,
        )))
        .mount(&mock_server)
        .await;

    // Beyond the depth bound: must never be fetched
    Mock::given(method("GET"))
        .and(path("/level2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("Level 2", "")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let crawler = test_crawler_config();
    let fetcher = test_fetcher(&crawler);
    let walker = Walker::new(&fetcher, &LeadSummarizer, 1);
    let mut visited = HashSet::new();

    let node = walker
        .walk(mock_server.uri(), 0, &mut visited)
        .await
        .expect("Root crawl should succeed");

    let level1 = node.links.values().next().expect("Root should have one link");
    assert_eq!(level1.status, LinkStatus::Success);

    // The depth-exceeded grandchild surfaced as a plain failure one level up,
    // which is only visible in the child's (discarded) record; what matters
    // here is that /level2 was never requested - wiremock verifies expect(0)
    // when the server drops.
}

#[tokio::test]
async fn test_walker_terminates_on_cyclic_links() {
    let mock_server = MockServer::start().await;
    let domain = server_domain(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(
            "Root",
            r#"<a href="/loop">Loop</a>"#,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Links straight back to the root
    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(
            "Loop",
            r#"<a href="/">Back home</a>"#,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crawler = test_crawler_config();
    let fetcher = test_fetcher(&crawler);
    let walker = Walker::new(&fetcher, &LeadSummarizer, 5);
    let mut visited = HashSet::new();

    let node = walker
        .walk(mock_server.uri(), 0, &mut visited)
        .await
        .expect("Root crawl should succeed");

    let loop_record = &node.links[&format!("http://{}/loop", domain)];
    assert_eq!(loop_record.status, LinkStatus::Success);

    // Each page fetched exactly once despite the cycle (expect(1) above)
    assert_eq!(visited.len(), 2);
}

#[tokio::test]
async fn test_walker_no_paragraphs_sentinel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Bare", "<div>No paragraphs here</div>")),
        )
        .mount(&mock_server)
        .await;

    let crawler = test_crawler_config();
    let fetcher = test_fetcher(&crawler);
    let walker = Walker::new(&fetcher, &LeadSummarizer, 0);
    let mut visited = HashSet::new();

    let node = walker
        .walk(mock_server.uri(), 0, &mut visited)
        .await
        .expect("Root crawl should succeed");

    assert_eq!(node.description, NO_CONTENT_SUMMARY);
}

#[tokio::test]
async fn test_walker_summarizer_failure_sentinel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Texty", "<p>Plenty of text.</p>")),
        )
        .mount(&mock_server)
        .await;

    let crawler = test_crawler_config();
    let fetcher = test_fetcher(&crawler);
    let walker = Walker::new(&fetcher, &FailingSummarizer, 0);
    let mut visited = HashSet::new();

    let node = walker
        .walk(mock_server.uri(), 0, &mut visited)
        .await
        .expect("Summarizer failure must not fail the crawl");

    assert_eq!(node.description, SUMMARY_FAILURE);
}

#[tokio::test]
async fn test_fetcher_exhausts_retry_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&mock_server)
        .await;

    let crawler = test_crawler_config();
    let fetcher = test_fetcher(&crawler);

    let result = fetcher.fetch(&format!("{}/gone", mock_server.uri())).await;
    assert!(result.is_none());
}

#[tokio::test]
async fn test_fetcher_returns_body_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crawler = test_crawler_config();
    let fetcher = test_fetcher(&crawler);

    let body = fetcher.fetch(&mock_server.uri()).await;
    assert_eq!(body.as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_fetcher_presents_pool_identity() {
    let mock_server = MockServer::start().await;

    // Pool of one, so the presented identity is deterministic
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestAgent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crawler = test_crawler_config();
    let fetcher = test_fetcher(&crawler);

    let body = fetcher.fetch(&mock_server.uri()).await;
    assert!(body.is_some());
}

#[tokio::test]
async fn test_driver_collects_and_persists() {
    let mock_server = MockServer::start().await;
    let domain = server_domain(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(
            "Found Site",
            r#"<p>Landing text.</p><a href="/a">A</a><a href="/missing">Missing</a>"#,
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(html_page("A", "<p>Page A text.</p>")),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("report.csv");
    let json_path = dir.path().join("report.json");

    let config = Config {
        crawler: CrawlerConfig {
            max_domains: 1,
            ..test_crawler_config()
        },
        identity: test_identity(),
        output: OutputConfig {
            csv_path: csv_path.to_string_lossy().into_owned(),
            json_path: json_path.to_string_lossy().into_owned(),
        },
        ..Config::default()
    };

    let mut driver = Driver::new(config).expect("Failed to build driver");
    let done = driver
        .run_candidates(vec![domain.clone()])
        .await
        .expect("Crawl should not error");

    // Target count of 1 reached
    assert!(done);
    assert_eq!(driver.results().len(), 1);

    // Tabular report: header plus one row per link
    let csv_content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv_content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("success"));
    assert!(lines[2].contains("failed"));

    // Structured report round-trips with the in-memory results
    let snapshot = load_snapshot(&json_path).unwrap();
    assert_eq!(snapshot.total_domains, 1);
    assert_eq!(&snapshot.domains, driver.results());
    assert_eq!(snapshot.domains.nodes()[0].domain, domain);
    assert_eq!(snapshot.domains.nodes()[0].title, "Found Site");
}

#[tokio::test]
async fn test_driver_skips_unreachable_candidate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("report.csv");
    let json_path = dir.path().join("report.json");

    let config = Config {
        crawler: test_crawler_config(),
        identity: test_identity(),
        output: OutputConfig {
            csv_path: csv_path.to_string_lossy().into_owned(),
            json_path: json_path.to_string_lossy().into_owned(),
        },
        ..Config::default()
    };

    let mut driver = Driver::new(config).expect("Failed to build driver");
    let done = driver
        .run_candidates(vec![server_domain(&mock_server)])
        .await
        .expect("Crawl should not error");

    assert!(!done);
    assert!(driver.results().is_empty());

    // Nothing succeeded, so nothing was flushed
    assert!(!csv_path.exists());
    assert!(!json_path.exists());
}
