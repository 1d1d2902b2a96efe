//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONTACTING` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use contacting::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod redis;
mod server;
mod session;

pub use error::{ConfigError, ValidationError};
pub use redis::RedisConfig;
pub use server::{Environment, ServerConfig};
pub use session::{SessionBackend, SessionConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Session configuration (cookie, backend, CSRF key)
    #[serde(default)]
    pub session: SessionConfig,

    /// Redis configuration, required when the session backend is redis
    pub redis: Option<RedisConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `CONTACTING__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONTACTING__SESSION__BACKEND=redis` -> `session.backend = redis`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONTACTING")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.session.validate()?;
        if self.session.backend == SessionBackend::Redis {
            match &self.redis {
                Some(redis) => redis.validate()?,
                None => {
                    return Err(ValidationError::MissingRequired("CONTACTING__REDIS__URL"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn valid_config() -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            session: SessionConfig {
                csrf_key: SecretString::new("0123456789abcdef0123456789abcdef".to_string()),
                ..Default::default()
            },
            redis: None,
        }
    }

    #[test]
    fn memory_backend_needs_no_redis_section() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn redis_backend_requires_redis_section() {
        let mut config = valid_config();
        config.session.backend = SessionBackend::Redis;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));

        config.redis = Some(RedisConfig {
            url: "redis://localhost:6379".to_string(),
        });
        assert!(config.validate().is_ok());
    }
}
