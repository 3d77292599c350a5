//! Application error handling
//!
//! Every handler returns [`ApiResult`]; errors render as
//! `{"error": {"code", "message", "field"?}}` with a matching status.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitness_platform_shared::{PlanError, ALL_FIELDS_REQUIRED};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// Input rejected; `fields` names the offending request fields
    #[error("Validation error: {message}")]
    Validation { message: String, fields: Vec<String> },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }
}

impl From<PlanError> for ApiError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::MissingFields(fields) => ApiError::Validation {
                message: ALL_FIELDS_REQUIRED.to_string(),
                fields,
            },
            PlanError::Validation(message) => ApiError::validation(message),
            PlanError::Computation(message) => {
                ApiError::Internal(anyhow::anyhow!("plan computation failed: {}", message))
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            ApiError::Validation { message, fields } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, fields)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, Vec::new()),
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg, Vec::new())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, Vec::new()),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    Vec::new(),
                )
            }
        };

        let field = match fields.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
                fields,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::validation("Invalid input"), StatusCode::BAD_REQUEST)]
    #[case(ApiError::NotFound("Plan not found".into()), StatusCode::NOT_FOUND)]
    #[case(ApiError::Unauthorized("Invalid token".into()), StatusCode::UNAUTHORIZED)]
    #[case(ApiError::BadRequest("Bad".into()), StatusCode::BAD_REQUEST)]
    #[case(
        ApiError::Internal(anyhow::anyhow!("connection reset")),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn test_error_status(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.into_response().status(), expected);
    }

    #[test]
    fn test_missing_fields_become_aggregate_validation_error() {
        let error: ApiError = PlanError::MissingFields(vec!["age".to_string()]).into();
        match &error {
            ApiError::Validation { message, fields } => {
                assert_eq!(message, "All fields are required");
                assert_eq!(fields, &vec!["age".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_computation_error_is_internal() {
        let error: ApiError = PlanError::Computation("bmi is not a finite number".into()).into();
        assert!(matches!(error, ApiError::Internal(_)));
        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
