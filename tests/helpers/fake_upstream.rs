use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub struct UpstreamBehaviour {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl UpstreamBehaviour {
    pub fn ok(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Clone)]
struct UpstreamState {
    behaviour: UpstreamBehaviour,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// A local stand-in for feiertage-api.de.
pub struct FakeUpstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeUpstream {
    pub async fn start(behaviour: UpstreamBehaviour) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            behaviour,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/api/", get(handle))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api/", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle(
    State(state): State<UpstreamState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    state.requests.lock().unwrap().push(params);
    if let Some(delay) = state.behaviour.delay {
        tokio::time::sleep(delay).await;
    }
    (
        state.behaviour.status,
        [("content-type", "application/json")],
        state.behaviour.body.clone(),
    )
}

/// An address nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/", addr)
}
