use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::auth::AuthError;
use crate::types::dto::common::ErrorResponse;

/// Error types shared by the guarded data-access endpoints
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Bearer token missing, invalid or expired
    #[oai(status = 401)]
    Unauthorized(
        Json<ErrorResponse>,
        #[oai(header = "WWW-Authenticate")] String,
    ),

    /// No matching record
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ApiError {
    /// Create an Unauthorized error carrying the Bearer challenge header
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized(
            Json(ErrorResponse {
                error: "invalid_token".to_string(),
                message: "Invalid or expired bearer token".to_string(),
                status_code: 401,
            }),
            "Bearer".to_string(),
        )
    }

    /// Create a NotFound error with the given message
    pub fn not_found(message: &str) -> Self {
        ApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: message.to_string(),
            status_code: 404,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        ApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InternalError(body) => ApiError::InternalError(body),
            _ => ApiError::unauthorized(),
        }
    }
}
