use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::services::TokenService;
use crate::types::internal::auth::AuthenticatedUser;

/// Gate in front of every protected endpoint
///
/// Resolves a bearer token into an authenticated identity or rejects the
/// request. The token endpoint itself is the only operation exempt from it.
pub struct AccessGuard {
    token_service: Arc<TokenService>,
}

impl AccessGuard {
    /// Create a new AccessGuard delegating to the given TokenService
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }

    /// Verify the bearer token and resolve the authenticated user
    ///
    /// # Returns
    /// * `Ok(AuthenticatedUser)` - Token is valid and carries a subject
    /// * `Err(AuthError::InvalidToken)` - Any verification failure
    pub fn authorize(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.token_service.verify(token)?;

        if claims.sub.is_empty() {
            return Err(AuthError::invalid_token());
        }

        Ok(AuthenticatedUser {
            username: claims.sub,
        })
    }
}
