//! Redis-backed session store for production deployments.
//!
//! Values are written with a TTL so idle sessions expire server-side, the
//! way framework-managed session state does. Every read and write is a
//! single round-trip; there is no cross-request locking, so concurrent
//! writes to the same session race and the later write wins.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::time::Duration;

use crate::config::RedisConfig;
use crate::domain::foundation::SessionToken;
use crate::ports::{SessionStore, SessionStoreError};

/// Redis-backed session store.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: MultiplexedConnection,
    ttl: Duration,
}

impl RedisSessionStore {
    /// Create a store over an existing connection.
    pub fn new(conn: MultiplexedConnection, ttl: Duration) -> Self {
        Self { conn, ttl }
    }

    /// Connect to redis using the configured URL.
    pub async fn connect(config: &RedisConfig, ttl: Duration) -> Result<Self, SessionStoreError> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| SessionStoreError::Backend(e.to_string()))?;
        let conn = client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))?;
        Ok(Self::new(conn, ttl))
    }

    fn redis_key(token: &SessionToken, key: &str) -> String {
        format!("contacting:session:{}:{}", token, key)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get_string(
        &self,
        token: &SessionToken,
        key: &str,
    ) -> Result<Option<String>, SessionStoreError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn
            .get(Self::redis_key(token, key))
            .await
            .map_err(|e: redis::RedisError| SessionStoreError::Backend(e.to_string()))?;
        Ok(value)
    }

    async fn set_string(
        &self,
        token: &SessionToken,
        key: &str,
        value: String,
    ) -> Result<(), SessionStoreError> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(Self::redis_key(token, key), value, self.ttl.as_secs())
        .await
        .map_err(|e: redis::RedisError| SessionStoreError::Backend(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Debug for RedisSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionStore")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
