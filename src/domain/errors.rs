use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("Upstream timed out after {0} seconds")]
    UpstreamTimeout(u64),
    #[error("Upstream error: {message}")]
    UpstreamError {
        status: Option<u16>,
        message: String,
    },
    #[error("Encoding error: {0}")]
    EncodingError(String),
}

impl GatewayError {
    /// Machine-readable kind relayed to API clients.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) => "invalid_request",
            GatewayError::UpstreamUnavailable(_) | GatewayError::UpstreamTimeout(_) => {
                "upstream_unavailable"
            }
            GatewayError::UpstreamError { .. } => "upstream_error",
            GatewayError::EncodingError(_) => "encoding_error",
        }
    }

    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GatewayError::UpstreamError { status, .. } => *status,
            _ => None,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
