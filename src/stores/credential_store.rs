use argon2::{
    password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::errors::auth::AuthError;

/// Holds the single static credential the service authenticates against
///
/// Built once at startup from injected configuration and immutable for the
/// process lifetime. Only the Argon2id hash of the password is retained.
pub struct CredentialStore {
    username: String,
    password_hash: String,
}

impl CredentialStore {
    /// Create the store from the configured username and plaintext password
    ///
    /// # Returns
    /// * `Ok(CredentialStore)` - Password hashed and stored
    /// * `Err(AuthError::InternalError)` - Hashing failed
    pub fn new(username: String, password: String) -> Result<Self, AuthError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);

        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::internal_error(format!("Password hashing error: {}", e)))?
            .to_string();

        Ok(Self {
            username,
            password_hash,
        })
    }

    /// Verify credentials and return the username on success
    ///
    /// # Returns
    /// * `Ok(String)` - The username, if both username and password match
    /// * `Err(AuthError::InvalidCredentials)` - Any mismatch
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username != self.username {
            return Err(AuthError::invalid_credentials());
        }

        let parsed_hash = PasswordHash::new(&self.password_hash)
            .map_err(|_| AuthError::invalid_credentials())?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::invalid_credentials())?;

        Ok(self.username.clone())
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CredentialStore {
        CredentialStore::new("admin".to_string(), "password123".to_string()).unwrap()
    }

    #[test]
    fn test_verify_credentials_succeeds_with_correct_password() {
        let credential_store = store();

        let result = credential_store.verify_credentials("admin", "password123");

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "admin");
    }

    #[test]
    fn test_verify_credentials_fails_with_incorrect_password() {
        let credential_store = store();

        let result = credential_store.verify_credentials("admin", "wrong");

        assert!(result.is_err());
        match result {
            Err(AuthError::InvalidCredentials(_)) => {}
            _ => panic!("Expected InvalidCredentials error"),
        }
    }

    #[test]
    fn test_verify_credentials_fails_with_unknown_username() {
        let credential_store = store();

        let result = credential_store.verify_credentials("root", "password123");

        assert!(result.is_err());
        match result {
            Err(AuthError::InvalidCredentials(_)) => {}
            _ => panic!("Expected InvalidCredentials error"),
        }
    }

    #[test]
    fn test_password_is_not_stored_in_plaintext() {
        let credential_store = store();

        assert_ne!(credential_store.password_hash, "password123");
        assert!(credential_store.password_hash.starts_with("$argon2"));
    }

    #[test]
    fn test_debug_trait_does_not_expose_password_hash() {
        let credential_store = store();

        let debug_output = format!("{:?}", credential_store);

        assert!(debug_output.contains("<redacted>"));
        assert!(!debug_output.contains(&credential_store.password_hash));
    }
}
