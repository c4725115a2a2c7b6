use crate::domain::errors::GatewayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    InvalidRequest(String),
    UpstreamUnavailable(String),
    UpstreamTimeout(String),
    UpstreamError {
        status: Option<u16>,
        message: String,
    },
    Encoding(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::UpstreamUnavailable(_) | ApiError::UpstreamTimeout(_) => {
                "upstream_unavailable"
            }
            ApiError::UpstreamError { .. } => "upstream_error",
            ApiError::Encoding(_) => "encoding_error",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::UpstreamUnavailable(msg) => write!(f, "Upstream unavailable: {}", msg),
            ApiError::UpstreamTimeout(msg) => write!(f, "Upstream timeout: {}", msg),
            ApiError::UpstreamError { message, .. } => write!(f, "Upstream error: {}", message),
            ApiError::Encoding(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = self.kind();
        let (message, upstream_status) = match self {
            ApiError::UpstreamError { status, message } => (message, status),
            ApiError::InvalidRequest(msg)
            | ApiError::UpstreamUnavailable(msg)
            | ApiError::UpstreamTimeout(msg)
            | ApiError::Encoding(msg) => (msg, None),
        };

        if status.is_server_error() {
            tracing::error!("{} ({}): {}", status, kind, message);
        } else {
            tracing::debug!("{} ({}): {}", status, kind, message);
        }

        let body = Json(json!({
            "error": {
                "kind": kind,
                "message": message,
                "upstream_status": upstream_status,
            }
        }));

        (status, body).into_response()
    }
}

// Convert from domain errors
impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::InvalidRequest(msg) => ApiError::InvalidRequest(msg),
            GatewayError::UpstreamUnavailable(msg) => ApiError::UpstreamUnavailable(msg),
            err @ GatewayError::UpstreamTimeout(_) => ApiError::UpstreamTimeout(err.to_string()),
            GatewayError::UpstreamError { status, message } => {
                ApiError::UpstreamError { status, message }
            }
            GatewayError::EncodingError(msg) => ApiError::Encoding(msg),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
