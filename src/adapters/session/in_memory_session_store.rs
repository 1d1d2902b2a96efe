//! In-Memory Session Store Adapter
//!
//! Stores session values in process memory. Useful for testing and
//! single-server development; values vanish on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionToken;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage of per-session string values.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, HashMap<String, String>>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored sessions (useful for tests).
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Number of sessions holding at least one value.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_string(
        &self,
        token: &SessionToken,
        key: &str,
    ) -> Result<Option<String>, SessionStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token).and_then(|s| s.get(key)).cloned())
    }

    async fn set_string(
        &self,
        token: &SessionToken,
        key: &str,
        value: String,
    ) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(*token)
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }
}
