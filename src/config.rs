use std::env;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://feiertage-api.de/api/";
pub const DEFAULT_PRODUCT_ID: &str = "-//feiertage-wrapper//DE";
pub const DEFAULT_UID_DOMAIN: &str = "feiertage-wrapper";

#[derive(Clone, Debug)]
pub struct Config {
    pub upstream_base_url: String,
    pub upstream_timeout: Duration,
    pub server_host: String,
    pub server_port: u16,
    pub calendar_product_id: String,
    pub calendar_uid_domain: String,
    pub metrics_port: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            upstream_timeout: Duration::from_secs(5),
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            calendar_product_id: DEFAULT_PRODUCT_ID.to_string(),
            calendar_uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            metrics_port: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let upstream_base_url = lookup("UPSTREAM_BASE_URL").unwrap_or(defaults.upstream_base_url);

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => defaults.upstream_timeout,
        };

        let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.server_port,
        };

        let calendar_product_id =
            lookup("CALENDAR_PRODUCT_ID").unwrap_or(defaults.calendar_product_id);

        let calendar_uid_domain =
            lookup("CALENDAR_UID_DOMAIN").unwrap_or(defaults.calendar_uid_domain);

        let metrics_port = match lookup("METRICS_PORT") {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort(raw))?,
            ),
            None => None,
        };

        Ok(Config {
            upstream_base_url,
            upstream_timeout,
            server_host,
            server_port,
            calendar_product_id,
            calendar_uid_domain,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("Invalid upstream timeout (seconds, > 0): {0}")]
    InvalidTimeout(String),
}
