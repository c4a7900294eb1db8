//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PLANTNET_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   the generic `DATABASE_URL`)
//! - `PLANTNET_JWT_SECRET` - Session token signing secret (min 32 chars)
//!
//! ## Optional
//! - `PLANTNET_HOST` - Bind address (default: 127.0.0.1)
//! - `PLANTNET_PORT` - Listen port (default: 9000)
//! - `PLANTNET_ENV` - `development` (default) or `production`; toggles the
//!   session cookie's `Secure`/`SameSite` flags
//! - `PLANTNET_CORS_ORIGINS` - Comma-separated allowed origins
//!   (default: the local Vite dev servers)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Common placeholder fragments that must never appear in a real secret.
const PLACEHOLDER_FRAGMENTS: &[&str] = &[
    "changeme",
    "example",
    "insert",
    "password",
    "placeholder",
    "replace",
    "secret",
    "your-",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Deployment environment, driving cookie security flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development: cookie is `SameSite=Strict`, not `Secure`.
    #[default]
    Development,
    /// Deployed behind TLS with a cross-site frontend: cookie is
    /// `SameSite=None; Secure`.
    Production,
}

impl Environment {
    /// Whether this is a production deployment.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` connection URL (contains password).
    pub database_url: SecretString,
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Session token signing secret.
    pub jwt_secret: SecretString,
    /// Deployment environment.
    pub environment: Environment,
    /// Origins allowed to make credentialed cross-site requests.
    pub cors_origins: Vec<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the JWT secret fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("PLANTNET_DATABASE_URL")?;
        let host = get_env_or_default("PLANTNET_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PLANTNET_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("PLANTNET_PORT", "9000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PLANTNET_PORT".to_owned(), e.to_string()))?;
        let jwt_secret = get_validated_secret("PLANTNET_JWT_SECRET")?;
        let environment = get_env_or_default("PLANTNET_ENV", "development")
            .parse::<Environment>()
            .map_err(|e| ConfigError::InvalidEnvVar("PLANTNET_ENV".to_owned(), e))?;
        let cors_origins = get_env_or_default(
            "PLANTNET_CORS_ORIGINS",
            "http://localhost:5173,http://localhost:5174",
        )
        .split(',')
        .map(|origin| origin.trim().to_owned())
        .filter(|origin| !origin.is_empty())
        .collect();

        Ok(Self {
            database_url,
            host,
            port,
            jwt_secret,
            environment,
            cors_origins,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get the database URL, falling back to the generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_owned()))
}

/// Validate that a secret is long enough and not an obvious placeholder.
fn validate_secret(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_JWT_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_owned(),
            format!(
                "must be at least {MIN_JWT_SECRET_LENGTH} characters (got {})",
                secret.len()
            ),
        ));
    }

    let lower = secret.to_lowercase();
    for fragment in PLACEHOLDER_FRAGMENTS {
        if lower.contains(fragment) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_owned(),
                format!("appears to be a placeholder (contains '{fragment}')"),
            ));
        }
    }

    Ok(())
}

/// Load and validate a secret from the environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret(&value, key)?;
    Ok(SecretString::from(value))
}
