use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::errors::auth::AuthError;
use crate::types::internal::auth::Claims;

/// Manages JWT token generation and validation
///
/// Tokens are stateless: validity is computed from the signature and the
/// embedded expiry at verification time, never tracked server-side.
pub struct TokenService {
    jwt_secret: String,
    token_ttl_minutes: i64,
}

impl TokenService {
    /// Create a new TokenService with the given signing secret
    ///
    /// Tokens expire 30 minutes after issuance.
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            token_ttl_minutes: 30,
        }
    }

    /// Issue a signed token for the given username
    ///
    /// # Arguments
    /// * `username` - The authenticated subject
    ///
    /// # Returns
    /// * `Result<String, AuthError>` - The encoded JWT or an error
    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: username.to_string(),
            exp: now + self.token_ttl_minutes * 60,
            iat: now,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::internal_error(format!("Failed to sign token: {}", e)))
    }

    /// Verify a token and return its claims
    ///
    /// Signature and expiry are checked in one decode step. Every failure
    /// (bad signature, expired, truncated, unparsable payload) surfaces as
    /// `AuthError::InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // The expiry instant is a hard boundary; no clock leeway
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|_| AuthError::invalid_token())?;

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-minimum-32-characters-long";

    fn service() -> TokenService {
        TokenService::new(TEST_SECRET.to_string())
    }

    fn encode_claims(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_creates_verifiable_token() {
        let token_service = service();

        let token = token_service.issue("admin").unwrap();
        let claims = token_service.verify(&token).unwrap();

        assert_eq!(claims.sub, "admin");
    }

    #[test]
    fn test_token_expiration_is_30_minutes() {
        let token_service = service();

        let token = token_service.issue("admin").unwrap();
        let claims = token_service.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 1800);
    }

    #[test]
    fn test_iat_is_current_time() {
        let token_service = service();

        let before = Utc::now().timestamp();
        let token = token_service.issue("admin").unwrap();
        let after = Utc::now().timestamp();

        let claims = token_service.verify(&token).unwrap();

        assert!(claims.iat >= before);
        assert!(claims.iat <= after);
    }

    #[test]
    fn test_verify_fails_with_wrong_secret() {
        let token_service = service();
        let other_service = TokenService::new("wrong-secret-key-minimum-32-characters".to_string());

        let token = token_service.issue("admin").unwrap();
        let result = other_service.verify(&token);

        assert!(result.is_err());
        match result {
            Err(AuthError::InvalidToken(_, _)) => {}
            _ => panic!("Expected InvalidToken error"),
        }
    }

    #[test]
    fn test_verify_fails_with_expired_token() {
        let token_service = service();

        let now = Utc::now().timestamp();
        let expired_claims = Claims {
            sub: "admin".to_string(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let expired_token = encode_claims(&expired_claims, TEST_SECRET);

        let result = token_service.verify(&expired_token);

        // Expiry is indistinguishable from a bad signature
        assert!(result.is_err());
        match result {
            Err(AuthError::InvalidToken(_, _)) => {}
            _ => panic!("Expected InvalidToken error"),
        }
    }

    #[test]
    fn test_verify_fails_immediately_after_expiry() {
        let token_service = service();

        // Expired by a single second; no grace window may apply
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "admin".to_string(),
            exp: now - 1,
            iat: now - 1801,
        };
        let token = encode_claims(&claims, TEST_SECRET);

        let result = token_service.verify(&token);

        assert!(result.is_err());
        match result {
            Err(AuthError::InvalidToken(_, _)) => {}
            _ => panic!("Expected InvalidToken error"),
        }
    }

    #[test]
    fn test_verify_fails_with_garbage_input() {
        let token_service = service();

        for bad in ["", "not-a-token", "a.b.c"] {
            let result = token_service.verify(bad);
            assert!(result.is_err(), "expected failure for input {:?}", bad);
        }
    }

    #[test]
    fn test_verify_fails_with_truncated_token() {
        let token_service = service();

        let token = token_service.issue("admin").unwrap();
        let truncated = &token[..token.len() - 5];

        assert!(token_service.verify(truncated).is_err());
    }

    #[test]
    fn test_debug_trait_does_not_expose_jwt_secret() {
        let token_service = service();

        let debug_output = format!("{:?}", token_service);

        assert!(!debug_output.contains(TEST_SECRET));
        assert!(debug_output.contains("<redacted>"));
        assert!(debug_output.contains("TokenService"));
    }
}
