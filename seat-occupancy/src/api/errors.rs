use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use metrics::counter;
use serde::Serialize;
use thiserror::Error;

use crate::errors::OccupancyError;
use crate::metrics::consts::OCCUPANCY_VALIDATION_ERRORS_COUNTER;

/// Error body, shaped like the booking API's validation errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub code: String,
    pub detail: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] OccupancyError),
    #[error("failed to parse request: {0}")]
    RequestParsing(String),
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(err) => err.error_code(),
            ApiError::RequestParsing(_) => "request_parsing_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.error_code();
        tracing::warn!(code, "rejected occupancy request: {}", self);
        counter!(OCCUPANCY_VALIDATION_ERRORS_COUNTER, "code" => code).increment(1);

        let body = ErrorResponse {
            error_type: "validation_error".to_string(),
            code: code.to_string(),
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
