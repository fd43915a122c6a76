use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::services::TokenService;
use crate::stores::CredentialStore;
use crate::types::dto::auth::{LoginRequest, TokenResponse};

/// Token issuance API
///
/// The only unauthenticated REST operation; it is how a client obtains a
/// token in the first place.
pub struct AuthApi {
    credential_store: Arc<CredentialStore>,
    token_service: Arc<TokenService>,
}

impl AuthApi {
    /// Create a new AuthApi with the given CredentialStore and TokenService
    pub fn new(credential_store: Arc<CredentialStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            credential_store,
            token_service,
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi]
impl AuthApi {
    /// Exchange username and password for a bearer token
    #[oai(path = "/token", method = "post", tag = "AuthTags::Authentication")]
    async fn token(&self, body: Json<LoginRequest>) -> Result<Json<TokenResponse>, AuthError> {
        let username = self
            .credential_store
            .verify_credentials(&body.username, &body.password)?;

        let access_token = self.token_service.issue(&username)?;

        Ok(Json(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
        }))
    }
}
