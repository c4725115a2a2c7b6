use async_trait::async_trait;
use feiertage_wrapper::domain::entities::{HolidayQuery, UpstreamPayload};
use feiertage_wrapper::domain::errors::{GatewayError, GatewayResult};
use feiertage_wrapper::domain::ports::HolidaySource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

type FailureFactory = Box<dyn Fn() -> GatewayError + Send + Sync>;

enum FakeResponse {
    Body(String),
    Failure(FailureFactory),
}

/// In-memory holiday source that records every query it receives.
pub struct FakeHolidaySource {
    response: FakeResponse,
    calls: AtomicUsize,
    last_query: Mutex<Option<HolidayQuery>>,
}

impl FakeHolidaySource {
    pub fn with_body(body: &str) -> Self {
        Self::new(FakeResponse::Body(body.to_string()))
    }

    pub fn failing<F>(failure: F) -> Self
    where
        F: Fn() -> GatewayError + Send + Sync + 'static,
    {
        Self::new(FakeResponse::Failure(Box::new(failure)))
    }

    fn new(response: FakeResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<HolidayQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl HolidaySource for FakeHolidaySource {
    async fn fetch(&self, query: &HolidayQuery) -> GatewayResult<UpstreamPayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());

        match &self.response {
            FakeResponse::Body(body) => {
                let json = serde_json::from_str(body).map_err(|e| GatewayError::UpstreamError {
                    status: Some(200),
                    message: format!("Invalid JSON from upstream: {}", e),
                })?;
                Ok(UpstreamPayload::new(body.clone(), json))
            }
            FakeResponse::Failure(make) => Err(make()),
        }
    }
}
