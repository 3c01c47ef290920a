//! Application error handling
//!
//! `ApiError` is the single error type of the server. JSON routes return it
//! directly; HTML routes wrap it in `PageError` so the same failure is shown
//! as an error document instead.

use crate::render;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use calorie_planner_shared::types::{ErrorDetail, ErrorResponse};
use calorie_planner_shared::validation::ValidationError;
use calorie_planner_shared::MetricsError;
use thiserror::Error;
use tracing::{error, warn};

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] MetricsError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Calculation(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Calculation(_) => "CALCULATION_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the caller
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Validation(err) => err.user_message(),
            ApiError::BadRequest(_) => {
                "Invalid input data. Please check your entries and try again.".to_string()
            }
            ApiError::Calculation(_) | ApiError::Internal(_) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }

    /// Record the failure once, as the response is built
    fn log(&self) {
        match self {
            ApiError::Validation(err) => {
                warn!(field = %err.field, kind = ?err.kind, "Rejected calculator input");
            }
            ApiError::BadRequest(msg) => warn!("Malformed calculator request: {}", msg),
            ApiError::Calculation(err) => error!("Calculation error: {:?}", err),
            ApiError::Internal(err) => error!("Internal error: {:?}", err),
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            ApiError::Validation(err) => Some(err.field.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.public_message(),
                field: self.field(),
            },
        });

        (self.status(), body).into_response()
    }
}

/// HTML flavour of `ApiError` for the form endpoints
#[derive(Debug)]
pub struct PageError(pub ApiError);

impl From<ApiError> for PageError {
    fn from(err: ApiError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.0.log();
        let message = self.0.public_message();
        (self.0.status(), Html(render::error_page(&message))).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_planner_shared::validation::HEIGHT_RANGE;

    #[test]
    fn test_validation_error_status() {
        let err = HEIGHT_RANGE.check(99.0).unwrap_err();
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_calculation_error_is_generic() {
        let error = ApiError::from(MetricsError::InvalidInput { field: "height", value: f64::NAN });
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.public_message().contains("height"));
    }

    #[test]
    fn test_validation_error_keeps_field() {
        let error = ApiError::from(HEIGHT_RANGE.check(300.0).unwrap_err());
        assert_eq!(error.field().as_deref(), Some("height"));
        assert_eq!(error.public_message(), "Height must be between 100 and 250 cm");
    }

    #[test]
    fn test_public_message_is_stable() {
        let error = ApiError::BadRequest("missing field `height`".to_string());
        let first = error.public_message();
        assert_eq!(first, error.public_message());
        assert!(!first.contains("height"));

        let error = ApiError::Internal(anyhow::anyhow!("disk on fire"));
        assert_eq!(error.public_message(), "An unexpected error occurred. Please try again.");
    }

    #[test]
    fn test_page_error_status() {
        let response = PageError(ApiError::BadRequest("bad form".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = PageError(ApiError::Internal(anyhow::anyhow!("boom"))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
