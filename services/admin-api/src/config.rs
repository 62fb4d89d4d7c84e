//! Configuration for the Admin API service.

use ambassador_auth_core::AuthConfig;
use chrono::Utc;
use std::time::Duration;

/// Admin API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Database URL
    pub database_url: String,

    /// Auth core configuration
    pub auth: AuthConfig,

    /// Request timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        // Database
        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        // Server port
        let http_port = var("HTTP_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // Token signing secret (minimum 32 bytes, checked by AuthConfig)
        let jwt_secret = var("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // Session duration (default 24 hours)
        let session_duration_hours: u64 = var("SESSION_DURATION_HOURS")
            .unwrap_or_else(|| "24".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("SESSION_DURATION_HOURS"))?;

        // Must be positive and yield a representable token expiry
        let session_duration = Some(session_duration_hours)
            .filter(|hours| *hours > 0)
            .and_then(|hours| hours.checked_mul(3600))
            .map(Duration::from_secs)
            .filter(|ttl| {
                chrono::Duration::from_std(*ttl)
                    .ok()
                    .and_then(|ttl| Utc::now().checked_add_signed(ttl))
                    .is_some()
            })
            .ok_or(ConfigError::Invalid("SESSION_DURATION_HOURS"))?;

        // Request timeout (default 30 seconds)
        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECS"))?;

        // Account defaults
        let default_role_id: i64 = var("DEFAULT_ROLE_ID")
            .unwrap_or_else(|| "3".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("DEFAULT_ROLE_ID"))?;

        let default_user_password =
            var("DEFAULT_USER_PASSWORD").unwrap_or_else(|| "1234".to_string());

        // Build auth config
        let auth = AuthConfig::try_new(jwt_secret)
            .map_err(|e| ConfigError::AuthConfig(e.to_string()))?
            .with_session_duration(session_duration)
            .with_default_role_id(default_role_id)
            .with_default_user_password(default_user_password);

        Ok(Self {
            http_port,
            database_url,
            auth,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Auth config error: {0}")]
    AuthConfig(String),
}
