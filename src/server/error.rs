//! API error types and their HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::mx::{BulkError, Error as MxError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Resolution(#[from] MxError),
    #[error(transparent)]
    Validation(#[from] BulkError),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code
    #[schema(example = "RESOLUTION_FAILED")]
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Resolution(MxError::EmptyDomain) | ApiError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            ApiError::Resolution(_) => (StatusCode::BAD_GATEWAY, "RESOLUTION_FAILED"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorResponse {
            error: code.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        let err = ApiError::from(BulkError::NoDomains);
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_FAILED");
        assert_eq!(err.to_string(), "no domains provided");
    }

    #[test]
    fn empty_domain_is_a_client_error() {
        let (status, code) = ApiError::from(MxError::EmptyDomain).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_FAILED");
    }

    #[test]
    fn resolution_errors_map_to_bad_gateway() {
        let source = trust_dns_resolver::error::ResolveError::from("request timed out");
        let err = ApiError::from(MxError::lookup("bad.example", source));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
