use super::FakeHolidaySource;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use feiertage_wrapper::bootstrap::build_app_state_with_source;
use feiertage_wrapper::config::Config;
use feiertage_wrapper::infrastructure::http::router::build_router;
use icalendar::parser::unfold;
use std::sync::Arc;
use tower::ServiceExt;

pub const NEUJAHR_ARRAY: &str = r#"[{"name":"Neujahr","date":"2025-01-01"}]"#;

pub fn test_app(source: Arc<FakeHolidaySource>) -> Router {
    let state = build_app_state_with_source(source, &Config::default());
    build_router(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Unfolded content lines of an iCalendar document.
pub fn ical_lines(doc: &str) -> Vec<String> {
    unfold(doc)
        .split("\r\n")
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

pub fn ical_values<'a>(lines: &'a [String], name: &str) -> Vec<&'a str> {
    let prefix = format!("{}:", name);
    lines
        .iter()
        .filter_map(|l| l.strip_prefix(prefix.as_str()))
        .collect()
}
