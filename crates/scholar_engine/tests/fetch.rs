use std::time::Duration;

use scholar_core::ResourceName;
use scholar_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetcher_reads_json_below_data_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/news.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(server.uri(), FetchSettings::default());
    let output = fetcher.fetch(ResourceName::News).await.expect("fetch ok");

    assert_eq!(output.bytes, b"[]");
    assert_eq!(output.metadata.byte_len, 2);
    assert_eq!(
        output.metadata.location,
        format!("{}/data/news.json", server.uri())
    );
    assert_eq!(
        output.metadata.content_type.as_deref(),
        Some("application/json")
    );
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/profile.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(server.uri(), FetchSettings::default());
    let err = fetcher.fetch(ResourceName::Profile).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert_eq!(
        err.describe(ResourceName::Profile),
        "Failed to load profile.json: http status 404"
    );
}

#[tokio::test]
async fn fetcher_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/contact.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{}", "application/json")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(200),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(server.uri(), settings);
    let err = fetcher.fetch(ResourceName::Contact).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_enforces_max_bytes() {
    let server = MockServer::start().await;
    let body = format!("[{}]", "0,".repeat(64) + "0");
    Mock::given(method("GET"))
        .and(path("/data/publications.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 16,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(server.uri(), settings);
    let err = fetcher.fetch(ResourceName::Publications).await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 16, .. }
    ));
}

#[tokio::test]
async fn fetcher_rejects_html_error_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/teaching.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(server.uri(), FetchSettings::default());
    let err = fetcher.fetch(ResourceName::Teaching).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html; charset=utf-8".to_string()
        }
    );
}
