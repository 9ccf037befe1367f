//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Bodies look like `{"error": "not_found", "detail": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload failed validation (422)
    Validation(ValidationError),

    /// No row for the given id, or an empty page (404)
    NotFound { message: String },

    /// Missing reference or duplicate value the client can fix (400)
    BadRequest { message: String },

    /// Integrity failure reported with its message (500)
    Integrity { message: String },

    /// Any other database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn integrity(message: impl Into<String>) -> Self {
        Self::Integrity {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Integrity { .. } | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => json!({
                "error": "validation_error",
                "detail": e.to_string()
            }),
            Self::NotFound { message } => json!({
                "error": "not_found",
                "detail": message
            }),
            Self::BadRequest { message } => json!({
                "error": "bad_request",
                "detail": message
            }),
            Self::Integrity { message } => {
                tracing::error!("Integrity error: {}", message);
                json!({
                    "error": "integrity_error",
                    "detail": message
                })
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                json!({
                    "error": "internal_error",
                    "detail": "an internal error occurred"
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// Default mapping used by reads and updates.
///
/// Only a missing row becomes a client error; constraint failures outside a
/// create are server errors.
impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => {
                Self::not_found(format!("{} not found with id={}", resource, id))
            }
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_422() {
        let err = ApiError::Validation(ValidationError::Empty { field: "title" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn not_found_from_db_names_the_id() {
        let err = ApiError::from(DbError::NotFound {
            resource: "Todo",
            id: "7".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Todo not found with id=7");
    }

    #[tokio::test]
    async fn duplicate_outside_create_is_generic_500() {
        let err = ApiError::from(DbError::Duplicate {
            resource: "Person",
            value: "a@b.io".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "an internal error occurred");
    }

    #[tokio::test]
    async fn integrity_keeps_message() {
        let response = ApiError::integrity("Department already exists.").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "integrity_error");
        assert_eq!(body["detail"], "Department already exists.");
    }

    #[tokio::test]
    async fn bad_request_is_400() {
        let response = ApiError::bad_request("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
