use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use reportai_client::{
    execute_request, AnalysisRequest, ApiSettings, ClientEvent, FailureKind, HttpReportApi,
    ReportApi,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn api_for(server: &MockServer) -> HttpReportApi {
    init_logging();
    HttpReportApi::new(ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    })
}

fn request(url: &str, analysis_type: Option<&str>) -> AnalysisRequest {
    AnalysisRequest {
        url: url.to_string(),
        analysis_type: analysis_type.map(ToOwned::to_owned),
    }
}

fn failure_kind(event: ClientEvent) -> FailureKind {
    match event {
        ClientEvent::Failed { error } => error.kind,
        other => panic!("expected a failed cycle, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_fields_serialize_with_null_analysis_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({ "url": "", "analysis_type": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "OK" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let event = execute_request(&api, &request("", None)).await;

    assert_eq!(event, ClientEvent::ReportUnavailable);
}

#[tokio::test]
async fn category_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(json!({
            "url": "https://example.com/repo",
            "analysis_type": "  security audit ",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "OK" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let event = execute_request(
        &api,
        &request("https://example.com/repo", Some("  security audit ")),
    )
    .await;

    assert_eq!(event, ClientEvent::ReportUnavailable);
}

#[tokio::test]
async fn http_500_fails_without_fetching_the_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/report"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(0)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let event = execute_request(&api, &request("https://example.com", None)).await;

    assert_eq!(failure_kind(event), FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn ok_with_report_path_fetches_and_sanitizes_the_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "report_path": "report.html",
        })))
        .mount(&server)
        .await;
    let report_body =
        "<html><body><h1>Summary</h1><script>alert('x')</script><p>All good.</p></body></html>";
    Mock::given(method("GET"))
        .and(path("/report"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(report_body, "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let event = execute_request(&api, &request("https://example.com", None)).await;

    match event {
        ClientEvent::ReportReady { html, preview } => {
            assert_eq!(html, report_body);
            assert_eq!(preview, "Summary\n\nAll good.");
        }
        other => panic!("expected a fetched report, got {other:?}"),
    }
}

#[tokio::test]
async fn ok_without_report_path_skips_the_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "OK" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/report"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(0)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let event = execute_request(&api, &request("https://example.com", None)).await;

    assert_eq!(event, ClientEvent::ReportUnavailable);
}

#[tokio::test]
async fn empty_report_path_counts_as_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "report_path": "",
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let event = execute_request(&api, &request("https://example.com", None)).await;

    assert_eq!(event, ClientEvent::ReportUnavailable);
}

#[tokio::test]
async fn failed_status_is_an_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "FAILED" })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let event = execute_request(&api, &request("https://example.com", None)).await;

    assert_eq!(
        failure_kind(event),
        FailureKind::UnexpectedStatus {
            status: "FAILED".to_string()
        }
    );
}

#[tokio::test]
async fn non_json_body_is_an_invalid_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let event = execute_request(&api, &request("https://example.com", None)).await;

    assert_eq!(failure_kind(event), FailureKind::InvalidPayload);
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "status": "OK" })),
        )
        .mount(&server)
        .await;

    init_logging();
    let api = HttpReportApi::new(ApiSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ApiSettings::default()
    });
    let event = execute_request(&api, &request("https://example.com", None)).await;

    assert_eq!(failure_kind(event), FailureKind::Timeout);
}

#[tokio::test]
async fn failed_report_fetch_fails_the_cycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "report_path": "report.html",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/report"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let event = execute_request(&api, &request("https://example.com", None)).await;

    assert_eq!(failure_kind(event), FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetch_report_returns_the_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/report"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>raw</p>", "text/html"))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let body = api.fetch_report().await.expect("fetch report");

    assert_eq!(body, "<p>raw</p>");
}
