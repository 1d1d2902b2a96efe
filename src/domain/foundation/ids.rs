//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier for one browser visitor's server-side session.
///
/// Carried in a cookie and minted by the session middleware when no valid
/// cookie is present. All session store reads and writes are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(Uuid);

impl SessionToken {
    /// Creates a new random SessionToken.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a SessionToken from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        assert_ne!(SessionToken::new(), SessionToken::new());
    }

    #[test]
    fn token_round_trips_through_display() {
        let token = SessionToken::new();
        let parsed: SessionToken = token.to_string().parse().unwrap();
        assert_eq!(token, parsed);
    }

    #[test]
    fn garbage_does_not_parse() {
        assert!("not-a-token".parse::<SessionToken>().is_err());
    }
}
