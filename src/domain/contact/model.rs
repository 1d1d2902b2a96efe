//! Contact entity and its identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a contact within one session's list.
///
/// Uniqueness holds only by construction: creation assigns `max + 1`, but
/// nothing re-validates lists deserialized from the session store. Lookups
/// always take the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i32);

impl ContactId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A single contact record.
///
/// Field names on the wire are fixed: the session value is a JSON array of
/// `{"ContactID": int, "FirstName": string, "LastName": string, "Age": int}`
/// stored under the session key `"Contacts"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "ContactID")]
    pub contact_id: ContactId,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Age")]
    pub age: i32,
}

impl Contact {
    pub fn new(
        contact_id: ContactId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i32,
    ) -> Self {
        Self {
            contact_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }
}
