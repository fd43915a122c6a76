use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;

/// Authentication error types
///
/// Expired, forged and malformed tokens all collapse into `InvalidToken`;
/// the client cannot tell them apart.
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Invalid username or password
    #[oai(status = 400)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Invalid, malformed or expired bearer token
    #[oai(status = 401)]
    InvalidToken(
        Json<ErrorResponse>,
        #[oai(header = "WWW-Authenticate")] String,
    ),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AuthError {
    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid username or password".to_string(),
            status_code: 400,
        }))
    }

    /// Create an InvalidToken error carrying the Bearer challenge header
    pub fn invalid_token() -> Self {
        AuthError::InvalidToken(
            Json(ErrorResponse {
                error: "invalid_token".to_string(),
                message: "Invalid or expired bearer token".to_string(),
                status_code: 401,
            }),
            "Bearer".to_string(),
        )
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        AuthError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::InvalidToken(json, _) => json.0.message.clone(),
            AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
