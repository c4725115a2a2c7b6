use crate::domain::entities::{HolidayQuery, UpstreamPayload};
use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::ports::HolidaySource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

/// Longest upstream error body relayed to our own clients
const MAX_RELAYED_BODY_CHARS: usize = 500;

/// HTTP client for feiertage-api.de
pub struct FeiertageClient {
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl FeiertageClient {
    /// Create a client with a fixed per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("feiertage-wrapper/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            timeout,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, e: reqwest::Error) -> GatewayError {
        let err = if e.is_timeout() {
            GatewayError::UpstreamTimeout(self.timeout.as_secs())
        } else if e.is_connect() {
            GatewayError::UpstreamUnavailable(format!("Connection failed: {}", e))
        } else {
            GatewayError::UpstreamUnavailable(format!("Network error: {}", e))
        };

        warn!("Holiday lookup at {} failed: {}", self.base_url, err);
        err
    }
}

#[async_trait]
impl HolidaySource for FeiertageClient {
    async fn fetch(&self, query: &HolidayQuery) -> GatewayResult<UpstreamPayload> {
        let params = query.upstream_params();
        info!("Fetching holidays from {} with {:?}", self.base_url, params);

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        info!("Upstream returned status {} ({} bytes)", status, body.len());

        if !(200..300).contains(&status) {
            warn!("Upstream rejected holiday lookup with status {}", status);
            return Err(GatewayError::UpstreamError {
                status: Some(status),
                message: format!("HTTP {}: {}", status, truncate(&body)),
            });
        }

        let json = serde_json::from_str(&body).map_err(|e| {
            warn!("Upstream returned invalid JSON: {}", e);
            GatewayError::UpstreamError {
                status: Some(status),
                message: format!("Invalid JSON from upstream: {}", e),
            }
        })?;

        Ok(UpstreamPayload::new(body, json))
    }
}

fn truncate(body: &str) -> String {
    if body.chars().count() > MAX_RELAYED_BODY_CHARS {
        let mut cut: String = body.chars().take(MAX_RELAYED_BODY_CHARS).collect();
        cut.push('…');
        cut
    } else {
        body.to_string()
    }
}
