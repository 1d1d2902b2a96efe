//! Contact-specific error types.

use super::ContactId;
use crate::ports::SessionStoreError;

/// Contact-specific errors.
///
/// Every failure path is an explicit variant, so each call site can choose
/// to surface, log, or ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// No contact in the session list matches the id.
    NotFound(ContactId),
    /// Submitted Age text could not be converted to an integer.
    InvalidAge { value: String },
    /// The session store could not be read or written.
    SessionStore(String),
    /// The contact list could not be serialized for the session store.
    Serialization(String),
}

impl ContactError {
    pub fn not_found(id: ContactId) -> Self {
        ContactError::NotFound(id)
    }

    pub fn invalid_age(value: impl Into<String>) -> Self {
        ContactError::InvalidAge { value: value.into() }
    }

    pub fn session_store(message: impl Into<String>) -> Self {
        ContactError::SessionStore(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        ContactError::Serialization(message.into())
    }

    pub fn message(&self) -> String {
        match self {
            ContactError::NotFound(id) => format!("Contact not found: {}", id),
            ContactError::InvalidAge { value } => {
                format!("Age must be a whole number, got '{}'", value)
            }
            ContactError::SessionStore(msg) => format!("Session store error: {}", msg),
            ContactError::Serialization(msg) => format!("Serialization error: {}", msg),
        }
    }
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ContactError {}

impl From<SessionStoreError> for ContactError {
    fn from(err: SessionStoreError) -> Self {
        ContactError::SessionStore(err.to_string())
    }
}
