//! API error handling.
//!
//! Every failure leaves the service as the same envelope,
//! `{"status": "error", "error": "<message>"}`, so callers can tell "no
//! matches" (success, empty list) apart from "service failure".

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use taskhint_core::error::SuggestError;

use super::dto::ErrorBody;

/// Message returned for internal failures; details are only logged
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred while computing suggestions";

/// API error response containing status code and message.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub message: String,
}

impl ApiErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found response.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 405 Method Not Allowed response.
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    /// Creates a 500 response with the generic message.
    pub fn internal_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

impl From<SuggestError> for ApiErrorResponse {
    fn from(error: SuggestError) -> Self {
        if error.is_client_error() {
            tracing::debug!(%error, "rejected request");
            return Self::bad_request(error.to_string());
        }
        // Internal details stay in the log
        tracing::error!(%error, error_type = error.error_type(), "request failed");
        Self::internal_error()
    }
}

impl From<BytesRejection> for ApiErrorResponse {
    fn from(rejection: BytesRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}
