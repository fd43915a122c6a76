use std::env;

/// Immutable process-wide settings, read once at startup
///
/// The signing secret and the service credential are injected here rather
/// than embedded in source; they have no compiled-in defaults.
#[derive(Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub database_url: String,
    pub mongo_url: String,
    pub mongo_database: String,
    pub jwt_secret: String,
    pub admin_username: String,
    pub admin_password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(String),
}

impl Settings {
    /// Load settings from environment variables
    ///
    /// # Returns
    /// * `Ok(Settings)` - All required variables present
    /// * `Err(ConfigError::MissingVar)` - `JWT_SECRET` or `ADMIN_PASSWORD` missing
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://patients.db?mode=rwc".to_string()),
            mongo_url: env::var("MONGO_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_database: env::var("MONGO_DATABASE")
                .unwrap_or_else(|_| "patients_db".to_string()),
            jwt_secret: required("JWT_SECRET")?,
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: required("ADMIN_PASSWORD")?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &self.database_url)
            .field("mongo_url", &self.mongo_url)
            .field("mongo_database", &self.mongo_database)
            .field("jwt_secret", &"<redacted>")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"<redacted>")
            .finish()
    }
}
