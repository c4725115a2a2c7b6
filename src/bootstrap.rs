use crate::application::services::HolidayService;
use crate::config::Config;
use crate::domain::ports::HolidaySource;
use crate::domain::services::IcalEncoder;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::providers::FeiertageClient;
use std::sync::Arc;

pub fn build_app_state(config: &Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let client = FeiertageClient::new(config.upstream_base_url.clone(), config.upstream_timeout)?;
    tracing::info!(
        "Upstream client initialized for {} (timeout {:?})",
        client.base_url(),
        config.upstream_timeout
    );

    Ok(build_app_state_with_source(Arc::new(client), config))
}

/// Wire the application around any holiday source.
pub fn build_app_state_with_source(source: Arc<dyn HolidaySource>, config: &Config) -> AppState {
    let encoder = IcalEncoder::new(
        config.calendar_product_id.clone(),
        config.calendar_uid_domain.clone(),
    );
    AppState::new(HolidayService::new(source, encoder))
}
