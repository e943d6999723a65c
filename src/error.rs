use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::api::ErrorBody;

/// Failures talking to another HTTP service (Ollama, or the server from the dashboard).
///
/// Callers never surface these to a person; they switch to canned advice or
/// placeholder readings instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    Upstream(reqwest::StatusCode),

    #[error("upstream returned an empty reply")]
    EmptyReply,

    #[error("could not decode upstream reply: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Upstream(status),
            None if err.is_decode() => FetchError::Decode(err),
            None => FetchError::Network(err),
        }
    }
}

/// Errors returned to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid sensor data: {0}")]
    InvalidSensorData(String),

    #[error("Invalid chat request: {0}")]
    InvalidChatRequest(String),
}

impl ApiError {
    fn body(&self) -> ErrorBody {
        let (message, detail) = match self {
            ApiError::InvalidSensorData(detail) => ("Invalid sensor data", detail),
            ApiError::InvalidChatRequest(detail) => ("Invalid chat request", detail),
        };
        ErrorBody {
            status: "error".to_string(),
            message: message.to_string(),
            detail: Some(detail.clone()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_bad_request() {
        let err = ApiError::InvalidSensorData("expected a number".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = err.body();
        assert_eq!(body.status, "error");
        assert_eq!(body.message, "Invalid sensor data");
        assert_eq!(body.detail.as_deref(), Some("expected a number"));
    }
}
