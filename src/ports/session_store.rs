//! Session store port.
//!
//! The store is an explicit dependency handed to every handler rather than
//! ambient global state. The contract is deliberately small: string values
//! keyed by `(session token, key)`, matching what a framework session
//! offers.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::SessionToken;

/// Errors raised by a session store backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionStoreError {
    #[error("session backend unavailable: {0}")]
    Backend(String),
}

/// Key/value string storage scoped to one browser session.
///
/// Implementations must be safe for concurrent use, but provide no ordering
/// guarantees between requests of the same session: two simultaneous writes
/// race and the later one wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a string value; `None` when the key has never been written
    /// (or the session has expired).
    async fn get_string(
        &self,
        token: &SessionToken,
        key: &str,
    ) -> Result<Option<String>, SessionStoreError>;

    /// Overwrite a string value for the session.
    async fn set_string(
        &self,
        token: &SessionToken,
        key: &str,
        value: String,
    ) -> Result<(), SessionStoreError>;
}
