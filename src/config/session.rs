//! Session configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Which backend holds session values
    #[serde(default)]
    pub backend: SessionBackend,

    /// Idle session lifetime in seconds (redis backend only)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Secret key for signing CSRF tokens
    #[serde(default = "default_csrf_key")]
    pub csrf_key: SecretString,
}

/// Session storage backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    #[default]
    Memory,
    Redis,
}

impl SessionConfig {
    /// Idle session lifetime as a Duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cookie_name.is_empty() {
            return Err(ValidationError::EmptyCookieName);
        }
        if self.ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if self.csrf_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired(
                "CONTACTING__SESSION__CSRF_KEY",
            ));
        }
        if self.csrf_key.expose_secret().len() < 32 {
            return Err(ValidationError::CsrfKeyTooShort);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            backend: SessionBackend::default(),
            ttl_secs: default_ttl_secs(),
            csrf_key: default_csrf_key(),
        }
    }
}

fn default_cookie_name() -> String {
    "contacting_session".to_string()
}

// Matches the 20 minute idle timeout of framework-managed sessions.
fn default_ttl_secs() -> u64 {
    1200
}

fn default_csrf_key() -> SecretString {
    SecretString::new(String::new())
}
