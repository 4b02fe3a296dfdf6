use axum::http::StatusCode;
use std::sync::Arc;

use crate::common::{get_anonymous, test_app, FakeCaseApi};

#[tokio::test]
async fn health_reports_ok() {
    let (app, _state) = test_app(Arc::new(FakeCaseApi::default()));

    let response = get_anonymous(&app, "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["case_api"], "connected");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn health_reports_an_unreachable_case_api() {
    let api = Arc::new(FakeCaseApi::default());
    api.go_offline();
    let (app, _state) = test_app(api);

    let response = get_anonymous(&app, "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let case_api = response.body["case_api"].as_str().unwrap();
    assert!(case_api.starts_with("error:"), "{case_api}");
    assert!(case_api.contains("connection refused"));
}

#[tokio::test]
async fn health_does_not_open_a_session() {
    let (app, state) = test_app(Arc::new(FakeCaseApi::default()));

    let response = get_anonymous(&app, "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.get("set-cookie").is_none());
    assert!(state.sessions.is_empty());
}
