use serde::{Deserialize, Serialize};

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Identity resolved from a verified bearer token
///
/// Derived transiently per request; never persisted.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}
