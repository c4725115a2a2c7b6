use crate::domain::entities::{HolidayQuery, UpstreamPayload};
use crate::domain::errors::GatewayResult;
use async_trait::async_trait;

/// Capability to look up the holidays of one year.
///
/// Implementations must not retry or cache; every call maps to exactly one
/// upstream request.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch(&self, query: &HolidayQuery) -> GatewayResult<UpstreamPayload>;
}
