//! API error types with JSON responses.
//!
//! The error surface deliberately folds access denial and absence into one
//! "not available" shape for callers outside a document's visibility, so
//! private documents never leak their existence. AuthenticationRequired is
//! always distinct: it means "retry after signing in", not "never yours".

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Not found (404). Also the uniform "not available" outcome for
    /// documents the caller may not see.
    #[error("not found: {0}")]
    NotFound(String),

    /// No resolved actor identity (401).
    #[error("authentication required: {0}")]
    AuthenticationRequired(String),

    /// Resolved actor lacks an owner-only capability on a document they
    /// can already read (403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] quill_store::StoreError),
}

impl ApiError {
    /// The uniform outcome for a document the caller may not see, whether
    /// it is missing or merely private to someone else.
    pub fn unavailable(id: Uuid) -> Self {
        Self::NotFound(format!("document {} is not available", id))
    }

    /// Get the error code string for this error.
    ///
    /// Store-level absence keeps the uniform NOT_FOUND code so the race
    /// between an access check and the mutation it guards stays
    /// indistinguishable from plain unavailability on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AuthenticationRequired(_) => "AUTHENTICATION_REQUIRED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Store(e) => match e {
                quill_store::StoreError::DocumentNotFound(_)
                | quill_store::StoreError::UserNotFound(_) => "NOT_FOUND",
                quill_store::StoreError::OwnerInSharingSet(_) => "BAD_REQUEST",
                _ => "STORAGE_ERROR",
            },
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AuthenticationRequired(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                quill_store::StoreError::DocumentNotFound(_) => StatusCode::NOT_FOUND,
                quill_store::StoreError::UserNotFound(_) => StatusCode::NOT_FOUND,
                quill_store::StoreError::OwnerInSharingSet(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "AUTHENTICATION_REQUIRED").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::AuthenticationRequired("no token".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("not the owner".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::unavailable(Uuid::nil()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unavailable_matches_plain_not_found_shape() {
        // Denial and absence must be indistinguishable on the wire.
        let denied = ApiError::unavailable(Uuid::nil());
        let missing = ApiError::NotFound(format!("document {} is not available", Uuid::nil()));
        assert_eq!(denied.code(), missing.code());
        assert_eq!(denied.status_code(), missing.status_code());
        assert_eq!(denied.to_string(), missing.to_string());
    }

    #[test]
    fn test_store_error_mapping() {
        let err = ApiError::Store(quill_store::StoreError::DocumentNotFound(Uuid::nil()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = ApiError::Store(quill_store::StoreError::OwnerInSharingSet(Uuid::nil()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "BAD_REQUEST");
    }

    #[test]
    fn test_store_absence_keeps_uniform_not_found_code() {
        // A row vanishing between the access check and the mutation must
        // produce the same code/status pair as plain unavailability.
        let raced = ApiError::Store(quill_store::StoreError::DocumentNotFound(Uuid::nil()));
        let unavailable = ApiError::unavailable(Uuid::nil());
        assert_eq!(raced.code(), unavailable.code());
        assert_eq!(raced.status_code(), unavailable.status_code());
    }
}
